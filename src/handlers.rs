use crate::errors::AppError;
use crate::filter::filter_businesses;
use crate::models::*;
use crate::scoring::rescore;
use crate::store::BusinessStore;
use crate::validation::ValidatedJson;
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state injected into handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// The single business store. Every operation holds the lock for its
    /// whole read-modify-score cycle.
    pub store: Arc<RwLock<BusinessStore>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Resolves the `:id` path segment.
///
/// Any well-formed integer is accepted; one that cannot name a stored business
/// (negative, or beyond the id range) is simply not found.
fn parse_business_id(Path(raw): Path<String>) -> Result<u64, AppError> {
    let digits = raw.strip_prefix(['-', '+']).unwrap_or(&raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::BadRequest(format!(
            "Invalid business id: {:?} is not an integer",
            raw
        )));
    }
    if raw.starts_with('-') {
        return Err(AppError::business_not_found());
    }
    digits.parse().map_err(|_| AppError::business_not_found())
}

/// Health check endpoint.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// GET /businesses
///
/// Lists businesses in insertion order, narrowed by the optional
/// `neighborhood`, `category` and `min_lead_score` query parameters.
pub async fn list_businesses(
    State(state): State<Arc<AppState>>,
    query: Result<Query<BusinessQueryParams>, QueryRejection>,
) -> Result<Json<Vec<Business>>, AppError> {
    let Query(params) = query?;
    tracing::debug!("GET /businesses - params: {:?}", params);

    let store = state.store.read().await;
    Ok(Json(filter_businesses(store.list(), &params)))
}

/// POST /businesses
///
/// Creates a business and stores its freshly computed lead score.
pub async fn create_business(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<BusinessCreate>,
) -> Result<Json<Business>, AppError> {
    let mut store = state.store.write().await;
    let business = store.create(payload);
    rescore(business);

    tracing::info!(
        "Created business {} ({}) with lead score {:.1}",
        business.id,
        business.name,
        business.lead_score
    );

    Ok(Json(business.clone()))
}

/// GET /businesses/:id
pub async fn get_business(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Business>, AppError> {
    let id = parse_business_id(path?)?;

    let store = state.store.read().await;
    store
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(AppError::business_not_found)
}

/// PUT /businesses/:id
///
/// Applies a partial update and recomputes the lead score from the merged record.
pub async fn update_business(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    ValidatedJson(payload): ValidatedJson<BusinessUpdate>,
) -> Result<Json<Business>, AppError> {
    let id = parse_business_id(path?)?;

    let mut store = state.store.write().await;
    let business = store
        .update(id, payload)
        .ok_or_else(AppError::business_not_found)?;
    rescore(business);

    tracing::info!(
        "Updated business {} with lead score {:.1}",
        business.id,
        business.lead_score
    );

    Ok(Json(business.clone()))
}

/// DELETE /businesses/:id
pub async fn delete_business(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = parse_business_id(path?)?;

    let mut store = state.store.write().await;
    if !store.delete(id) {
        return Err(AppError::business_not_found());
    }

    tracing::info!("Deleted business {}", id);
    Ok(Json(json!({ "deleted": true })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<u64, AppError> {
        parse_business_id(Path(raw.to_string()))
    }

    #[test]
    fn test_parse_business_id() {
        assert_eq!(parse("42"), Ok(42));
        assert_eq!(parse("+7"), Ok(7));
    }

    #[test]
    fn test_unreachable_ids_are_not_found() {
        assert_eq!(parse("-1"), Err(AppError::business_not_found()));
        assert_eq!(parse("-0"), Err(AppError::business_not_found()));
        assert_eq!(
            parse("99999999999999999999999"),
            Err(AppError::business_not_found())
        );
    }

    #[test]
    fn test_non_integer_ids_are_bad_requests() {
        for raw in ["abc", "", "-", "1.5", "12a"] {
            assert!(matches!(parse(raw), Err(AppError::BadRequest(_))), "{}", raw);
        }
    }
}
