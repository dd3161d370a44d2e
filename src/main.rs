// src/main.rs
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::fmt::init as tracing_init;

use pricing_backend::config::Config;
use pricing_backend::{build_app, AppState};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();
    let config = Config::from_env();

    // Seeded catalog, empty profile store; nothing survives a restart
    let app_state = AppState::seeded();
    let app = build_app(app_state, &config.cors_origin);

    // Try port..port+20 to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=20 {
            let port = config.port.saturating_add(offset);
            let addr = SocketAddr::from((config.host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => {
                    bound = Some((l, addr));
                    break;
                }
                Err(e) => {
                    if offset == 0 {
                        tracing::warn!(%addr, error=%e, "Port in use, trying next");
                    }
                }
            }
        }
        match bound {
            Some((l, addr)) => {
                tracing::info!("Server running on http://{}", addr);
                tracing::info!("  Products:         http://{}/api/products", addr);
                tracing::info!("  Pricing profiles: http://{}/api/pricing-profiles", addr);
                tracing::info!("  Reference data:   http://{}/api/reference/categories", addr);
                tracing::info!("  API docs:         http://{}/docs", addr);
                l
            }
            None => {
                tracing::error!(
                    "Failed to bind to any port starting at {} on {}",
                    config.port,
                    config.host
                );
                return;
            }
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error=%e, "Server error");
    }
}
