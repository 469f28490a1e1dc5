//! # API Module
//!
//! HTTP handlers for the gateway, grouped by concern:
//!
//! - [`assets`] - `/`, `/styles.css`, `/script.js` served from the static directory
//! - [`auth`] - `/login` and `/callback`, the OAuth authorization-code handoff
//! - [`library`] - `/saved-tracks`, the full saved library in one response
//! - [`search`] - `/search`, a ten-result track search
//! - [`player`] - `/play` and `/transfer-playback`
//! - [`lyrics`] - `/lyrics`, a placeholder
//! - [`health`] - `/health`, liveness and version
//!
//! Authenticated endpoints take the listener's bearer token from the `token`
//! query parameter and hand it to the [`crate::spotify::SpotifyApi`] in the
//! application state. Failures are returned as [`crate::error::ApiError`].
//!
//! ```rust,ignore
//! use spotgate::server::{AppState, router};
//!
//! let app = router(AppState::new(config, spotify));
//! ```

use axum::{
    extract::{Query, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

mod assets;
mod auth;
mod health;
mod library;
mod lyrics;
mod player;
mod search;

pub use assets::{index, script, stylesheet};
pub use auth::{callback, login};
pub use health::health;
pub use library::saved_tracks;
pub use lyrics::lyrics;
pub use player::{play, transfer_playback};
pub use search::search;

/// Unwraps the query extractor, turning axum's plain-text rejection (e.g. a
/// repeated `token`) into an `invalid_query` error.
fn query<T>(params: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    params
        .map(|Query(params)| params)
        .map_err(|e| ApiError::InvalidQuery(e.body_text()))
}

/// Unwraps a caller-supplied value, treating an empty string as absent.
fn required(value: Option<String>, name: &'static str) -> Result<String, ApiError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ApiError::MissingParameter(name))
}

/// A `302 Found` redirect. axum's `Redirect` only offers 303, 307 and 308.
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
