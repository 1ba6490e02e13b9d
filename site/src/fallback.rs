use actix_files::NamedFile;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use std::path::PathBuf;
use storefront_ui::routes::is_routed;

/// Status for a path the bundle has no file for. The SPA renders every path,
/// but the ones its router cannot place are reported as missing.
pub fn fallback_status(path: &str) -> StatusCode {
    if is_routed(path) {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

/// Answers with the SPA entry point so client-side routing can take over.
pub async fn serve_index(
    index: PathBuf,
    req: ServiceRequest,
) -> Result<ServiceResponse, actix_web::Error> {
    let (req, _) = req.into_parts();
    let status = fallback_status(req.path());
    log::debug!("spa fallback for {} -> {}", req.path(), status);

    let mut res = NamedFile::open_async(&index).await?.into_response(&req);
    *res.status_mut() = status;
    Ok(ServiceResponse::new(req, res))
}
