use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State, http::HeaderMap};
use tracing::info;

use crate::{
    classify::classify,
    error::AppError,
    models::{HealthStatus, SearchResult},
    state::AppState,
    utils::parse_query,
};

/// Page routes and the template each one serves.
pub const PAGES: [(&str, &str); 5] = [
    ("/", "index.html"),
    ("/horizons", "horizons.html"),
    ("/faq", "faq.html"),
    ("/features", "features.html"),
    ("/benefits", "benefits.html"),
];

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SearchResult>, AppError> {
    let query = parse_query(&headers, &body)?;
    let query_type = classify(&query);

    let credentials = state.generate(&query, query_type);
    info!(%query_type, matches = credentials.len(), "Search served");

    Ok(Json(SearchResult::new(query, query_type, credentials)))
}

pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}
