// src/main.rs
use anyhow::Result as AnyhowResult;
use dotenvy::dotenv;
use ethers::providers::{Http, Provider};
use pop_supply::chains::WalletConfig;
use pop_supply::config::{self, AppConfig};
use pop_supply::server::{self, AppState};
use pop_supply::supply::SupplySource;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> AnyhowResult<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pop_supply=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app_config = AppConfig::from_env()?;

    tracing::info!(
        bind_address = %app_config.bind_addr,
        target_chain_id = app_config.target_chain_id,
        read_timeout_secs = app_config.read_timeout.as_secs(),
        "Configuration loaded"
    );

    let mut sources = Vec::with_capacity(app_config.deployments.len());
    for deployment in &app_config.deployments {
        let provider = Arc::new(Provider::<Http>::try_from(deployment.rpc_url.as_str())?);
        tracing::info!(
            chain_id = deployment.chain.id,
            token = ?deployment.address,
            "Reading {}",
            deployment.label
        );
        sources.push(SupplySource::new(
            deployment.chain,
            deployment.label.clone(),
            deployment.address,
            provider,
        ));
    }

    let state = Arc::new(AppState {
        title: config::APP_TITLE.to_string(),
        decimals: config::TOKEN_DECIMALS,
        sources,
        wallet: WalletConfig::new(config::APP_TITLE, app_config.target_chain_id),
        read_timeout: app_config.read_timeout,
    });

    let app = server::router(state);

    let listener = TcpListener::bind(app_config.bind_addr).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");
    axum::serve(listener, app).await?;

    Ok(())
}
