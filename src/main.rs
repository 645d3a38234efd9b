//! Storefront Widgets Entry Point
//!
//! Mounts the auth and review islands into the host elements of the
//! marketing page.

mod api;
mod components;
mod config;
mod context;
mod islands;

use config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();
    init_tracing();

    let config = AppConfig::from_env();
    tracing::debug!(variant = %config.reviews.variant, endpoint = %config.reviews.endpoint, "starting storefront widgets");
    islands::mount_all(&config);
}

/// Route `tracing` events to the browser console
fn init_tracing() {
    use tracing::subscriber::set_global_default;
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::Registry;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    let _ = set_global_default(Registry::default().with(wasm_layer));
}
