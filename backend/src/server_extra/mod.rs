//! HTTP surface: router assembly and handlers.

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

pub mod search_routes;

use search_routes::{count_handler, facets_handler, search_handler, search_state_handler};

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/search", get(search_handler))
        .route("/search/count", get(count_handler))
        .route("/search/{state}", get(search_state_handler))
        .route("/facets", get(facets_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
