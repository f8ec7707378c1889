// src/routes/mod.rs
pub mod chat;
pub mod health;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use chat::chat_handler;
use health::status_handler;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;

pub fn create_router(config: &Config) -> Router {
    let router = Router::new()
        .route("/", get(status_handler))
        .route("/api/chat", post(chat_handler))
        // Oversized bodies still get a JSON reply, never a 413.
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http());

    if config.allow_all_origins {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
