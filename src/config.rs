//! Runtime configuration for the alliance manager server.

use once_cell::sync::Lazy;
use std::env;

#[derive(Debug)]
pub struct Settings {
    /// Listen address for the HTTP server.
    pub bind_addr: String,
    /// Postgres pool size.
    pub pool_size: u32,
}

impl Settings {
    fn from_env() -> Self {
        let bind_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".into());

        let pool_size = env::var("PG_POOL_SIZE")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(5);

        Settings {
            bind_addr,
            pool_size,
        }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
