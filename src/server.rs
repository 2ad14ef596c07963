//! Axum router and server setup.
//! Used by: main.

use axum::handler::HandlerWithoutStateExt;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::console;
use crate::error::Result;
use crate::handlers;
use crate::state::AppState;

/// Explicit routes win; anything else is looked up under the public
/// directory (directories serve their `index.html`), then answered with a
/// JSON 404.
pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.public_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(handlers::not_found::not_found.into_service());

    Router::new()
        .route("/", get(handlers::root::liveness))
        .route("/api/health", get(handlers::health::readiness))
        .route("/api/health/report", get(handlers::health::report))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(state: AppState, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);
    console::print_startup(&state.config);

    let router = build_router(state);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
