use serde_json::Value;

use crate::spotify::{SpotifyApi, SpotifyError};

/// Result type requested from the search endpoint.
pub const SEARCH_KIND: &str = "track";

/// Maximum number of tracks returned by a search.
pub const SEARCH_LIMIT: u32 = 10;

/// Runs a single track search and returns Spotify's response untouched.
pub async fn search_tracks(
    api: &dyn SpotifyApi,
    token: &str,
    query: &str,
) -> Result<Value, SpotifyError> {
    api.search(token, query, SEARCH_KIND, SEARCH_LIMIT).await
}
