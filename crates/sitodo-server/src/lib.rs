pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use sitodo_core::TodoListService;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(service: Arc<TodoListService>) -> Router {
    let app_state = state::AppState::new(service);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::home::home))
        // Lists
        .route("/api/list", post(routes::lists::create_list))
        .route(
            "/api/list/{id}",
            get(routes::lists::get_list).post(routes::lists::append_item),
        )
        .route(
            "/api/list/{id}/update/{item_id}",
            post(routes::lists::update_item),
        )
        // Motivation
        .route("/api/message", get(routes::message::get_message))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Start the sitodo HTTP server on `port`.
pub async fn serve(
    service: Arc<TodoListService>,
    port: u16,
    open_browser: bool,
) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve_on(service, listener, open_browser).await
}

/// Start the sitodo HTTP server on a pre-bound listener.
///
/// Unlike `serve`, this accepts a `TcpListener` that was already bound so the
/// caller can read the actual port before starting (useful when `port = 0` and
/// the OS picks a free port).
pub async fn serve_on(
    service: Arc<TodoListService>,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(service);

    tracing::info!("sitodo server listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}");
        if let Err(e) = open::that(&url) {
            tracing::warn!("could not open browser: {e}");
        }
    }

    axum::serve(listener, app).await?;
    Ok(())
}
