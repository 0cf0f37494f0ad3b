// ============================================================================
// QUICKRENT WEB CLIENT
// ============================================================================
// Front-end of the QuickRent rental platform. Business logic stays on the
// server; this crate is screens plus thin HTTP wrappers:
// - services: one parametrized request/normalize path over gloo-net
// - session: role-scoped tokens and OTP countdowns in localStorage
// - hooks/components: Yew state + screens
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod session;
pub mod utils;

pub use components::App;

/// Initialize logging/panic reporting and mount the app.
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("QuickRent client starting (backend: {})", config::BACKEND_URL);

    yew::Renderer::<App>::new().render();
}
