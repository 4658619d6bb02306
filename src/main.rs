//! Sortable Cards Frontend Entry Point

mod models;
mod list;
mod config;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, errors) = AppConfig::from_location();
    init_logging(config.log_level);
    for err in &errors {
        tracing::warn!(%err, "ignoring config value");
    }
    tracing::info!(
        cards = config.card_count,
        dragging_opacity = config.dragging_opacity,
        "mounting sortable cards"
    );

    mount_to_body(move || view! { <App config=config.clone() /> });
}

/// Route tracing output to the browser console
#[cfg(target_arch = "wasm32")]
fn init_logging(level: tracing::Level) {
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .build(),
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging(_level: tracing::Level) {}
