//! campusweb crate entrypoint.
//!
//! Starts the Tokio runtime and launches the lab server defined in the
//! `server` module. Keep this file minimal; the application logic lives
//! in `server`, `config`, `html`, and the per-exercise `labs` modules.
//!
/// HTTP server assembly and request tracking
mod server;
/// Configuration management and settings
mod config;
/// HTML rendering helpers and static pages
mod html;
/// Handler-boundary error type
mod error;
/// One module per lab exercise
mod labs;

/// Entry point for the async Tokio runtime
#[tokio::main]
async fn main() {
    server::run().await;
}
