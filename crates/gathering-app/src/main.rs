use gathering_core::config::load_config;
use gathering_db::db::DbProvider;
use gathering_db::db::connection::create_pool;
use gathering_db::db::migrate::run_pending_migrations;
use gathering_service::directory;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting gathering directory");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    run_pending_migrations(&config.database.url).await?;

    let pool = create_pool(
        &config.database.url,
        u32::from(config.database.max_connections),
    )
    .await?;

    let mut conn = pool.get_connection().await?;
    let now = chrono::Utc::now();
    let active = directory::active_groups(&mut conn, now).await?;

    tracing::info!(count = active.len(), "Active groups");
    for group in &active {
        tracing::info!(
            group_id = %group.id,
            slug = %group.slug,
            name = %group.name,
            "Active group"
        );
    }

    Ok(())
}
