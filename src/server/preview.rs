//! HTTP preview of the rendered bills page

use crate::app::{PageState, ROUTES_PATH, Router};
use crate::core::BilledError;
use anyhow::Result;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

/// Shared state of the preview server
///
/// The router renders into a single document, so requests take turns.
pub struct PreviewState {
    router: Router,
    turn: Mutex<()>,
}

impl PreviewState {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            turn: Mutex::new(()),
        }
    }
}

/// Build the preview routes
///
/// - GET /employee/bills - navigate to the bills page and return its HTML
/// - GET /health - liveness probe
pub fn preview_router(router: Router) -> axum::Router {
    axum::Router::new()
        .route("/employee/bills", get(bills_page))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(PreviewState::new(router)))
}

async fn bills_page(State(state): State<Arc<PreviewState>>) -> Result<Response, BilledError> {
    let _turn = state.turn.lock().await;

    let page = state.router.on_navigate(ROUTES_PATH.bills)?.settled().await?;
    let status = match &page {
        PageState::Errored(e) => BilledError::from(e.clone()).status_code(),
        _ => StatusCode::OK,
    };
    let html = state.router.document().to_html();

    Ok((status, Html(html)).into_response())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Serve the preview with graceful shutdown
pub async fn serve(router: Router, addr: &str) -> Result<()> {
    let app = preview_router(router);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Preview server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Preview server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
