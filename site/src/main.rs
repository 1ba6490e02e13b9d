use actix_files::Files;
use actix_web::{App, HttpServer, dev::fn_service, middleware::Logger};
use anyhow::Context;

mod config;
mod fallback;

use crate::config::Config;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // a missing .env is fine; real environment variables still apply
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let index = config.index_file();
    if !index.is_file() {
        log::warn!("{} not found; run `trunk build` before serving", index.display());
    }
    log::info!(
        "serving {} (assets: {}) on http://{}:{}",
        config.dist_dir.display(),
        config.assets_dir.display(),
        config.host,
        config.port,
    );

    let Config { host, port, dist_dir, assets_dir } = config;
    HttpServer::new(move || {
        let index = index.clone();
        App::new()
            .wrap(Logger::default())
            // top-level static assets
            .service(Files::new("/assets", &assets_dir))
            // the bundle built by Trunk; anything it has no file for gets index.html
            .service(
                Files::new("/", &dist_dir)
                    .index_file("index.html")
                    .default_handler(fn_service(move |req| fallback::serve_index(index.clone(), req))),
            )
    })
    .bind((host.as_str(), port))
    .with_context(|| format!("binding {host}:{port}"))?
    .run()
    .await
    .context("http server stopped")
}
