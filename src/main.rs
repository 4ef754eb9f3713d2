use sales_vat::api::create_router;
use sales_vat::config::ConfigLoader;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // An explicit config file replaces environment loading.
    let loader = match std::env::args().nth(1) {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::from_env()?,
    };
    let config = loader.into_config();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Sales VAT service listening on {}", bind_address);

    axum::serve(listener, create_router()).await?;
    Ok(())
}
