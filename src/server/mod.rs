mod handlers;
mod state;
mod static_files;

use axum::routing::{get, post};
use axum::Router;
use state::AppState;
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;

use crate::history::History;
use crate::resolve::NumberResolver;

pub fn build_router(offline: bool) -> Router {
    let mut resolver = NumberResolver::new();
    resolver.set_offline(offline);

    let state = Arc::new(AppState {
        resolver: Mutex::new(resolver),
        history: Mutex::new(History::new()),
    });

    Router::new()
        .route("/", get(handlers::index))
        .route("/style.css", get(handlers::style))
        .route("/app.js", get(handlers::script))
        .route("/api/lookup", get(handlers::lookup))
        .route("/api/history", get(handlers::history_list))
        .route("/api/history/clear", post(handlers::history_clear))
        .route("/api/history/export", get(handlers::history_export))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start(host: &str, port: u16, offline: bool) {
    let app = build_router(offline);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error: Cannot bind to {}: {}", addr, e);
            std::process::exit(1);
        });

    eprintln!("  Dialscope server listening on http://{}", addr);
    eprintln!("  Press Ctrl+C to stop.");

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    });
}
