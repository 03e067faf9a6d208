pub mod core;
pub mod error_handler;
pub mod routes;

use std::{any::Any, sync::Arc};

use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::post,
};
use tokio::signal;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

pub use crate::core::{app_state::AppState, server_config::ServerConfig};
pub use crate::error_handler::{AppError, AppResult};

use crate::routes::chat::chat_route::chat_route;

/// Builds the router: `POST /api/chat` behind CORS, request tracing and
/// panic recovery.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    Router::new()
        .route("/api/chat", post(chat_route))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Binds `config.bind_addr()` and serves until Ctrl+C.
pub async fn start(config: ServerConfig) -> Result<(), AppError> {
    let addr = config.bind_addr();
    let state = Arc::new(AppState::new(config.llm)?);
    let app = router(state.clone());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(AppError::Bind)?;

    info!(
        %addr,
        model = %state.llm.config().model,
        local_entries = state.matcher.len(),
        "backend listening"
    );

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("backend stopped");
    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

/// Turns a handler panic into the generic `{error: "Server error", details}` body.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    AppError::Internal(details).into_response()
}
