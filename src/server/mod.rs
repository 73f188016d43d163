//! HTTP front of the record store.
//!
//! | Method | Path          | Success                |
//! |--------|---------------|------------------------|
//! | POST   | `/events`     | 201 created record     |
//! | GET    | `/events`     | 200 every record       |
//! | PUT    | `/events/:id` | 200 record as written  |
//! | DELETE | `/events/:id` | 200 `{message, id}`    |
//!
//! Storage failures answer 400 (500 for the list) with `{message, error}`.

pub mod handlers;
pub mod response;

use crate::errors::AppResult;
use crate::store::RecordStore;
use axum::Router;
use axum::routing::{get, put};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
}

pub fn build_router(store: Arc<dyn RecordStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/events",
            get(handlers::list_events).post(handlers::create_event),
        )
        .route(
            "/events/:id",
            put(handlers::update_event).delete(handlers::delete_event),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(AppState { store })
}

/// Serve on an already bound listener until Ctrl-C.
pub async fn serve_on(listener: TcpListener, store: Arc<dyn RecordStore>) -> AppResult<()> {
    let addr = listener.local_addr()?;
    info!(store = %store.describe(), "server is running on http://{addr}");

    axum::serve(listener, build_router(store))
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

pub async fn serve(addr: SocketAddr, store: Arc<dyn RecordStore>) -> AppResult<()> {
    let listener = TcpListener::bind(addr).await?;
    serve_on(listener, store).await
}

async fn wait_for_shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
