use axum::Json;

use crate::types::LyricsResponse;

pub const LYRICS_PLACEHOLDER: &str = "Lyrics API integration required";

/// Placeholder until a lyrics provider is wired in.
pub async fn lyrics() -> Json<LyricsResponse> {
    Json(LyricsResponse {
        lyrics: LYRICS_PLACEHOLDER.to_string(),
    })
}
