pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod test_support;
pub mod utils;

/// Browser entry point: installs panic/log hooks, loads runtime config, then mounts the app.
pub fn run() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("Starting salon frontend");
    if let Some(role) = state::session::SessionStore::browser().current_role() {
        log::info!("restored {} session", role.as_str());
    }

    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        router::mount_app();
    });
}
