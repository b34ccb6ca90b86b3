use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::CustomerStore;

pub mod customers;

/// Shared handler state. The store is behind a trait object so any backend can be plugged in.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CustomerStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }
}

pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health { status: "ok", customers: state.store.len().await })
}

/// Build the full application router: health probe plus the customer CRUD routes.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/customer", get(customers::get_all).post(customers::add))
        .route(
            "/api/customer/:id",
            get(customers::get).put(customers::update).delete(customers::delete),
        );

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
