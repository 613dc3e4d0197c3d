use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use watchlist_api::{
    api::{create_router, AppState},
    config::Config,
    services::load_catalog,
    store::create_store,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("watchlist_api={},tower_http=info", config.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Catalog and progress are loaded once; handlers share them through AppState
    let catalog = load_catalog(&config.catalog_path).await?;
    let store = create_store(&config)?;
    let state = AppState::initialize(catalog, store).await?;

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %config.bind_addr(), "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
