//! HTTP surface: router, shared state, and the serve loop.

pub mod error;
pub mod extract;
pub mod handlers;

use std::{io, net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use tokio::{net::TcpListener, sync::Mutex};
use tracing::info;

use crate::{
    config::ServerConfig,
    core::services::{MovementService, ProfileService, PurchaseService},
    storage::JsonStore,
};

/// Shared handler state. Each collection service sits behind its own async
/// mutex, held for the whole load/modify/save round trip, so writers to the
/// same collection are serialized while different collections never contend.
#[derive(Clone)]
pub struct AppState {
    pub purchases: Arc<Mutex<PurchaseService>>,
    pub movements: Arc<Mutex<MovementService>>,
    pub profile: Arc<Mutex<ProfileService>>,
}

impl AppState {
    pub fn new(store: JsonStore) -> Self {
        Self {
            purchases: Arc::new(Mutex::new(PurchaseService::new(store.clone()))),
            movements: Arc::new(Mutex::new(MovementService::new(store.clone()))),
            profile: Arc::new(Mutex::new(ProfileService::new(store))),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route(
            "/purchases",
            get(handlers::list_purchases).post(handlers::create_purchase),
        )
        .route(
            "/purchases/:id",
            get(handlers::get_purchase)
                .put(handlers::update_purchase)
                .delete(handlers::delete_purchase),
        )
        .route(
            "/movements",
            get(handlers::list_movements).post(handlers::create_movement),
        )
        .route(
            "/movements/:index",
            get(handlers::get_movement)
                .put(handlers::update_movement)
                .delete(handlers::delete_movement),
        )
        .route(
            "/profile",
            get(handlers::get_profile)
                .post(handlers::create_profile)
                .put(handlers::upsert_profile)
                .delete(handlers::delete_profile),
        )
        .with_state(state)
}

/// Binds the configured address and serves until SIGINT/SIGTERM.
pub async fn serve(config: ServerConfig) -> io::Result<()> {
    let addr: SocketAddr = config.bind_addr.parse().map_err(|err| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid bind address `{}`: {err}", config.bind_addr),
        )
    })?;
    let state = AppState::new(JsonStore::new(config.data_dir));
    let app = build_router(state);

    let listener = TcpListener::bind(addr).await?;
    info!("portal-core listening on {addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
