use luma_admin::aggregation::AggregationEngine;
use luma_admin::config::AppConfig;
use luma_admin::lifecycle::{setup_tracing, AdminSystem};
use luma_admin::view::Dashboard;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads .env too, so RUST_LOG from there applies to the subscriber.
    let config = AppConfig::from_env()?;
    setup_tracing();

    info!(api_url = %config.api_url, interval_secs = config.refresh_interval.as_secs(), "Starting Luma admin");

    let system = AdminSystem::start(&config)?;
    let engine = Arc::new(AggregationEngine::new(system.clients.clone()));

    let mut dashboard = Dashboard::new(engine, config.refresh_interval);
    dashboard.mount();

    tokio::signal::ctrl_c().await?;
    info!("Interrupted, unmounting dashboard");

    dashboard.unmount().await;
    let last = dashboard.state().await;
    info!(
        users = last.snapshot.users,
        api_status = %last.snapshot.api_status,
        refreshed_at = ?last.last_refreshed_at,
        "Last snapshot"
    );

    // The engine inside the dashboard holds client clones; release them first.
    drop(dashboard);
    system.shutdown().await?;
    Ok(())
}
