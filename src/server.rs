// src/server.rs
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::State,
    response::{Html, Json},
    routing::get,
};
use ethers::providers::Middleware;
use tower_http::trace::TraceLayer;

use crate::chains::WalletConfig;
use crate::page::{self, PageView};
use crate::supply::{self, ChainSupply, ReadState, SupplySource};

pub struct AppState<M: Middleware> {
    pub title: String,
    pub decimals: u8,
    pub sources: Vec<SupplySource<M>>,
    pub wallet: WalletConfig,
    pub read_timeout: Duration,
}

pub fn router<M: Middleware + 'static>(state: Arc<AppState<M>>) -> Router {
    Router::new()
        .route("/", get(index::<M>))
        .route("/api/supply", get(supply_json::<M>))
        .route("/api/chains", get(chains_json::<M>))
        .route("/healthz", get(|| async { "ok" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Server-rendered shell: nothing is mounted yet, so every value is a placeholder.
async fn index<M: Middleware + 'static>(State(state): State<Arc<AppState<M>>>) -> Html<String> {
    let supplies: Vec<ChainSupply> = state
        .sources
        .iter()
        .map(|source| ChainSupply::new(source, &ReadState::Loading, state.decimals, false))
        .collect();

    Html(page::render_page(&PageView {
        title: &state.title,
        supplies: &supplies,
        offered_chains: &state.wallet.chains,
    }))
}

async fn supply_json<M: Middleware + 'static>(
    State(state): State<Arc<AppState<M>>>,
) -> Json<Vec<ChainSupply>> {
    let states = supply::read_all(&state.sources, state.read_timeout).await;
    let supplies = state
        .sources
        .iter()
        .zip(states.iter())
        .map(|(source, read)| ChainSupply::new(source, read, state.decimals, true))
        .collect();
    Json(supplies)
}

async fn chains_json<M: Middleware + 'static>(
    State(state): State<Arc<AppState<M>>>,
) -> Json<WalletConfig> {
    Json(state.wallet.clone())
}
