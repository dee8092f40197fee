use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Server-side error types returned by the HTTP handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Resource not found error.
    NotFound(String),
    /// Bad request error (unparsable path or query).
    BadRequest(String),
    /// Payload failed boundary validation. Never reaches the store.
    Validation(String),
}

impl AppError {
    /// The canonical not-found error for a business id.
    pub fn business_not_found() -> Self {
        AppError::NotFound("Business not found".to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Maps each error variant to an appropriate HTTP status code and a
    /// `{"error": ...}` JSON body.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match self {
            AppError::NotFound(msg) => msg,
            AppError::BadRequest(msg) => {
                tracing::debug!("Rejected request: {}", msg);
                msg
            }
            AppError::Validation(msg) => {
                tracing::debug!("Rejected payload: {}", msg);
                msg
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Errors raised by the HTTP clients (CLI, exporter, seeder).
#[derive(Debug)]
pub enum ClientError {
    /// The request never produced a response (connection refused, timeout, ...).
    Network(reqwest::Error),
    /// The server answered with a non-success status.
    Http {
        status: u16,
        /// Reason string from the `{"error": ...}` body, or the raw body.
        message: String,
    },
    /// The response body was not the JSON we expected.
    Decode(String),
    /// Local payload could not be read or parsed.
    InvalidPayload(String),
    /// Local file I/O failed.
    Io(std::io::Error),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Http { status: 404, .. })
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Network(e) => write!(f, "Network error: {}", e),
            ClientError::Http { status, message } => {
                write!(f, "HTTP error {}: {}", status, message)
            }
            ClientError::Decode(msg) => write!(f, "Malformed response: {}", msg),
            ClientError::InvalidPayload(msg) => write!(f, "Invalid payload: {}", msg),
            ClientError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Network(e) => Some(e),
            ClientError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err)
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Io(err)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::InvalidPayload(err.to_string())
    }
}
