// src/config.rs
use std::net::{IpAddr, Ipv4Addr};

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Server settings read from the environment (and `.env`, once loaded).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Origin of the pricing form UI.
    pub cors_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("HOST")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(defaults.host),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            cors_origin: std::env::var("CORS_ORIGIN").unwrap_or(defaults.cors_origin),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
        }
    }
}
