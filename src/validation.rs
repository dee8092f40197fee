//! Request validation at the HTTP boundary.
//!
//! Payloads are checked here before a handler touches the store, so a
//! rejected request never leaves a partial mutation behind.

use crate::errors::AppError;
use crate::models::{BusinessCreate, BusinessUpdate};
use axum::{
    async_trait,
    body::Bytes,
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, Request,
    },
    Json,
};
use serde::de::DeserializeOwned;
use url::Url;

/// Constraint checks a request payload carries for itself.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

/// Checks that `name` has visible content.
pub fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }
    Ok(())
}

/// Checks that `value` is an absolute http or https URL.
pub fn validate_http_url(field: &str, value: &str) -> Result<(), AppError> {
    let parsed = Url::parse(value)
        .map_err(|e| AppError::Validation(format!("{} is not a valid URL: {}", field, e)))?;

    match parsed.scheme() {
        "http" | "https" if parsed.has_host() => Ok(()),
        "http" | "https" => Err(AppError::Validation(format!(
            "{} must include a host",
            field
        ))),
        other => Err(AppError::Validation(format!(
            "{} must use http or https, got {}",
            field, other
        ))),
    }
}

fn validate_optional_url(field: &str, value: Option<&str>) -> Result<(), AppError> {
    match value {
        Some(url) => validate_http_url(field, url),
        None => Ok(()),
    }
}

impl Validate for BusinessCreate {
    fn validate(&self) -> Result<(), AppError> {
        validate_name(&self.name)?;
        validate_optional_url("website", self.website.as_deref())?;
        validate_optional_url("google_maps_url", self.google_maps_url.as_deref())?;
        Ok(())
    }
}

impl Validate for BusinessUpdate {
    fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        validate_optional_url("website", self.website.as_ref().and_then(|w| w.as_deref()))?;
        validate_optional_url(
            "google_maps_url",
            self.google_maps_url.as_ref().and_then(|u| u.as_deref()),
        )?;
        Ok(())
    }
}

/// JSON body extractor that deserializes and then validates the payload.
///
/// Both failure kinds surface as `AppError`, so clients always receive the
/// `{"error": ...}` shape.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // The body is parsed as JSON whatever the Content-Type says
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        value.validate()?;
        Ok(Self(value))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => AppError::Validation(e.body_text()),
            JsonRejection::JsonSyntaxError(e) => AppError::Validation(e.body_text()),
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
