use anyhow::Context;
use std::sync::Arc;

use apptverify::api::build_router;
use apptverify::utils::init_logging;
use apptverify::{AppConfig, AppState, HttpAppointmentApi};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real environment variables win
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().context("invalid configuration")?;
    init_logging(config.log4rs_config.as_deref())?;

    let api = HttpAppointmentApi::new(config.api_base.clone(), config.request_timeout)
        .context("failed to build backend client")?;
    log::info!("verifying appointments against {}", config.api_base);

    let bind_addr = config.bind_addr.clone();
    let app = build_router(AppState::new(config, Arc::new(api)));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    log::info!("🚀 Server running on http://{}", bind_addr);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
