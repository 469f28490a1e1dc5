//! Structured error responses for the HTTP handlers.
//!
//! Every failure becomes a JSON body of the form
//!
//! ```text
//! {"error": {"kind": "invalid_token", "message": "The access token expired"}}
//! ```
//!
//! with a matching status code. Success payloads never carry an `error` key,
//! so a caller can tell the two apart without looking at the status.

use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{spotify::SpotifyError, warning};

#[derive(Debug)]
pub enum ApiError {
    /// A required query parameter or body field is absent or empty.
    MissingParameter(&'static str),
    /// The query string cannot be decoded into the endpoint's parameters.
    InvalidQuery(String),
    /// The request body is not the JSON object the endpoint expects.
    InvalidBody(String),
    /// The provider redirected back with `error=...` instead of a code.
    AuthorizationDenied(String),
    /// A call to Spotify failed.
    Upstream(SpotifyError),
    /// A static asset could not be read from disk.
    Asset(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_)
            | Self::InvalidQuery(_)
            | Self::InvalidBody(_)
            | Self::AuthorizationDenied(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(err) => match err.status() {
                Some(400) => StatusCode::BAD_REQUEST,
                Some(401) => StatusCode::UNAUTHORIZED,
                Some(403) => StatusCode::FORBIDDEN,
                Some(404) => StatusCode::NOT_FOUND,
                Some(429) => StatusCode::TOO_MANY_REQUESTS,
                _ => StatusCode::BAD_GATEWAY,
            },
            Self::Asset(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingParameter(_) => "missing_parameter",
            Self::InvalidQuery(_) => "invalid_query",
            Self::InvalidBody(_) => "invalid_body",
            Self::AuthorizationDenied(_) => "authorization_denied",
            Self::Upstream(err) => match err.status() {
                Some(400) => "upstream_rejected",
                Some(401) => "invalid_token",
                Some(403) => "forbidden",
                Some(404) => "not_found",
                Some(429) => "rate_limited",
                _ => "upstream_error",
            },
            Self::Asset(_) => "asset_unavailable",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingParameter(name) => write!(f, "Missing required parameter: {}", name),
            Self::InvalidQuery(e) => write!(f, "Invalid query string: {}", e),
            Self::InvalidBody(e) => write!(f, "Invalid request body: {}", e),
            Self::AuthorizationDenied(reason) => write!(f, "Authorization was denied: {}", reason),
            Self::Upstream(err) => write!(f, "{}", err),
            Self::Asset(name) => write!(f, "Static asset unavailable: {}", name),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<SpotifyError> for ApiError {
    fn from(err: SpotifyError) -> Self {
        ApiError::Upstream(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.kind();
        warning!("{} {}: {}", status.as_u16(), kind, self);

        let body = json!({
            "error": {
                "kind": kind,
                "message": self.to_string(),
            }
        });

        (status, Json(body)).into_response()
    }
}
