#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

pub mod app;
pub mod components;
pub mod icons;
pub mod links;
pub mod pages;
pub mod routes;

pub use crate::app::App;
