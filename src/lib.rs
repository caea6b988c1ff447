pub mod app;
pub mod backend;
pub mod components;
pub mod config;
pub mod contact;
pub mod dashboard;
pub mod editor;
pub mod error;
pub mod listing;
pub mod models;
pub mod pages;
pub mod placeholders;
pub mod session;
pub mod slug;
pub mod utils;

/// Browser entry point. Refuses to mount when the bundle was built without
/// the backend settings.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use crate::config::AppConfig;
    use leptos::*;

    utils::panic_hook::init();

    let config = match AppConfig::from_build_env() {
        Ok(config) => config,
        Err(err) => {
            config::report(&err);
            return;
        }
    };
    mount_to_body(move || view! { <App config=config.clone()/> });
}
