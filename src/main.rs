use std::env;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};

use activity_signup::config::{log_filter, AppConfig};
use activity_signup::database::ActivityRegistry;
use activity_signup::web::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok().as_deref()))
        .init();

    let config = AppConfig::from_env();
    let registry = ActivityRegistry::seeded();
    let app = build_router(registry);

    let addr = config.socket_addr()?;
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            TcpListener::bind(fallback)
                .await
                .with_context(|| format!("cannot bind {} or fallback {}", addr, fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Server listening on http://{}", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
