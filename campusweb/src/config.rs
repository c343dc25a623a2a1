//! Configuration loader and defaults for the campusweb server.
//!
//! Exposes a lazily-initialized `CONFIG` which reads values from
//! environment variables (with sensible defaults). Fields cover the HTTP
//! listening port (`web_port`) and the document store address (`db_addr`)
//! every lab connects to.
//!
use std::env;

use once_cell::sync::Lazy;

/// Default HTTP port for the lab server
const DEFAULT_WEB_PORT: u16 = 5000;

/// Default document store address; the labs all talk to one local store
const DEFAULT_DB_ADDR: &str = "127.0.0.1:27017";

/// Application configuration
pub struct Config {
    /// HTTP listening port
    pub web_port: u16,
    /// Document store address
    pub db_addr: String,
}

/// Global application configuration instance, lazily initialized
pub static CONFIG: Lazy<Config> = Lazy::new(|| Config {
    web_port: env::var("CAMPUS_WEB_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_WEB_PORT),
    db_addr: env::var("CAMPUS_DB_ADDR").unwrap_or_else(|_| DEFAULT_DB_ADDR.into()),
});
