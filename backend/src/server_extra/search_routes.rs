//! HTTP handlers for the discovery pages.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use common::{
    search_query::FilterSelection,
    search_result::{Facet, SearchResultListings},
    url_param::UrlParam,
};
use tracing::info;

use crate::{
    api::search::{SearchForResultsHitCountResponse, search_facets, search_for_results, search_for_results_hit_count},
    error::AppError,
    state::AppState,
};

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResultListings>, AppError> {
    let selection = FilterSelection::from_query_pairs(pairs);
    run_search(&state, selection).await
}

/// Same as [`search_handler`], with the whole selection packed in one path segment.
pub async fn search_state_handler(
    State(state): State<Arc<AppState>>,
    Path(encoded): Path<String>,
) -> Result<Json<SearchResultListings>, AppError> {
    let selection = encoded.parse::<UrlParam<FilterSelection>>()?.into_inner();
    run_search(&state, selection).await
}

pub async fn count_handler(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SearchForResultsHitCountResponse>, AppError> {
    let selection = FilterSelection::from_query_pairs(pairs);
    let listings = state.active_listings().await?;
    let total_count = search_for_results_hit_count(&listings, &selection);
    Ok(Json(SearchForResultsHitCountResponse { total_count }))
}

pub async fn facets_handler(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Facet>>, AppError> {
    let listings = state.active_listings().await?;
    Ok(Json(search_facets(&listings)))
}

async fn run_search(state: &AppState, selection: FilterSelection) -> Result<Json<SearchResultListings>, AppError> {
    let listings = state.active_listings().await?;
    let result = search_for_results(&listings, selection);
    info!(
        "search: sort={} results={}/{}",
        result.query.sort_by.as_str(),
        result.total_count,
        listings.len(),
    );
    Ok(Json(result))
}
