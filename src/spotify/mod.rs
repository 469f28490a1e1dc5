//! # Spotify Integration Module
//!
//! Everything the gateway knows about the upstream service lives here. The
//! handlers in [`crate::api`] never build HTTP requests themselves; they call
//! a [`SpotifyApi`] held in the application state. Production wires in the
//! reqwest-backed [`SpotifyClient`], tests wire in a fake.
//!
//! ```text
//! HTTP handlers (crate::api)
//!          ↓
//! Spotify operations
//!     ├── auth     authorize URL, fixed scope list
//!     ├── library  saved-track pagination stream
//!     ├── search   track search, 10 results
//!     └── player   start / transfer playback
//!          ↓
//! SpotifyApi (trait)  ←  SpotifyClient (reqwest) | fakes in tests
//!          ↓
//! Spotify accounts service and Web API
//! ```
//!
//! The bearer token is opaque to the gateway. It is taken from the caller's
//! query string and passed to every [`SpotifyApi`] call unchanged; nothing is
//! stored, refreshed or validated locally.

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::types::{SavedTracksPage, Token};

pub mod auth;
pub mod client;
pub mod library;
pub mod player;
pub mod search;

pub use client::SpotifyClient;

/// The upstream operations the gateway depends on.
///
/// Each method maps onto exactly one outbound request, so call counts seen
/// by an implementation equal the number of requests Spotify would receive.
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    /// Exchanges an authorization code for an access token.
    async fn exchange_code(&self, code: &str) -> Result<Token, SpotifyError>;

    /// Fetches one page of the listener's saved tracks.
    async fn saved_tracks(
        &self,
        token: &str,
        limit: u32,
        offset: u32,
    ) -> Result<SavedTracksPage, SpotifyError>;

    /// Searches the catalog and returns the raw response.
    async fn search(
        &self,
        token: &str,
        query: &str,
        kind: &str,
        limit: u32,
    ) -> Result<Value, SpotifyError>;

    /// Starts playback of the given item URIs on the active device.
    async fn start_playback(&self, token: &str, uris: &[String]) -> Result<(), SpotifyError>;

    /// Moves playback to `device_id`, resuming it when `play` is set.
    async fn transfer_playback(
        &self,
        token: &str,
        device_id: &str,
        play: bool,
    ) -> Result<(), SpotifyError>;
}

/// Failure of a single upstream call.
#[derive(Debug, Clone)]
pub enum SpotifyError {
    /// The request never produced a response (DNS, TLS, timeout, connection reset).
    Transport(String),
    /// Spotify answered with a non-success status.
    Status { status: u16, message: String },
    /// A success response whose body did not have the expected shape.
    Decode(String),
}

impl SpotifyError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for SpotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Spotify request failed: {}", e),
            Self::Status { status, message } => {
                write!(f, "Spotify responded with {}: {}", status, message)
            }
            Self::Decode(e) => write!(f, "Unexpected Spotify response: {}", e),
        }
    }
}

impl std::error::Error for SpotifyError {}

impl From<reqwest::Error> for SpotifyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return SpotifyError::Decode(err.to_string());
        }
        match err.status() {
            Some(status) => SpotifyError::Status {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => SpotifyError::Transport(err.to_string()),
        }
    }
}
