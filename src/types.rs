use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Token endpoint response for the authorization-code grant.
///
/// Only `access_token` is used: `/callback` hands it to the browser. The
/// other fields mirror the rest of the payload and are optional on the wire;
/// the gateway never refreshes or expires tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// One page of `GET /me/tracks`.
///
/// Items stay raw JSON so `/saved-tracks` returns them exactly as Spotify
/// sent them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTracksPage {
    pub items: Vec<Value>,
}

/// Error body returned by the Web API, e.g. `{"error": {"status": 401, "message": "..."}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub message: String,
}

/// Error body returned by the accounts service, e.g. `{"error": "invalid_grant", ...}`.
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthErrorBody {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StartPlaybackRequest<'a> {
    pub uris: &'a [String],
}

#[derive(Debug, Clone, Serialize)]
pub struct TransferPlaybackRequest<'a> {
    pub device_ids: [&'a str; 1],
    pub play: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenParams {
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    pub token: Option<String>,
    pub query: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayBody {
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferBody {
    pub device_id: Option<String>,
}

/// Fixed acknowledgment for playback commands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn success() -> Self {
        StatusResponse {
            status: "success".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LyricsResponse {
    pub lyrics: String,
}
