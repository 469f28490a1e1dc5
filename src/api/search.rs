use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde_json::Value;

use crate::{
    api::{query, required},
    error::ApiError,
    server::AppState,
    spotify::search::search_tracks,
    types::SearchParams,
};

pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let params = query(params)?;
    let token = required(params.token, "token")?;
    let text = required(params.query, "query")?;
    let results = search_tracks(state.spotify.as_ref(), &token, &text).await?;
    Ok(Json(results))
}
