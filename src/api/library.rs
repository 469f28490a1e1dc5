use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde_json::Value;

use crate::{
    api::{query, required},
    error::ApiError,
    server::AppState,
    spotify::library,
    types::TokenParams,
};

/// Returns every saved track of the listener as one JSON array, in the order
/// Spotify lists them. Either the complete list or an error, never a prefix.
pub async fn saved_tracks(
    State(state): State<AppState>,
    params: Result<Query<TokenParams>, QueryRejection>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let params = query(params)?;
    let token = required(params.token, "token")?;
    let tracks = library::all_saved_tracks(state.spotify.as_ref(), &token).await?;
    Ok(Json(tracks))
}
