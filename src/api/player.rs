use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};

use crate::{
    api::{query, required},
    error::ApiError,
    server::AppState,
    spotify::player,
    types::{PlayBody, StatusResponse, TokenParams, TransferBody},
};

/// Starts playback of the track in the body's `uri`.
pub async fn play(
    State(state): State<AppState>,
    params: Result<Query<TokenParams>, QueryRejection>,
    body: Result<Json<PlayBody>, JsonRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let params = query(params)?;
    let token = required(params.token, "token")?;
    let Json(body) = body.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let uri = required(body.uri, "uri")?;

    player::play_track(state.spotify.as_ref(), &token, &uri).await?;
    Ok(Json(StatusResponse::success()))
}

/// Moves playback to the body's `device_id` and starts it there.
pub async fn transfer_playback(
    State(state): State<AppState>,
    params: Result<Query<TokenParams>, QueryRejection>,
    body: Result<Json<TransferBody>, JsonRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let params = query(params)?;
    let token = required(params.token, "token")?;
    let Json(body) = body.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let device_id = required(body.device_id, "device_id")?;

    player::transfer_to_device(state.spotify.as_ref(), &token, &device_id).await?;
    Ok(Json(StatusResponse::success()))
}
