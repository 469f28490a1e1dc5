use std::path::Path;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{error::ApiError, server::AppState};

pub async fn index(State(state): State<AppState>) -> Result<Response, ApiError> {
    serve(&state.config.static_dir, "index.html", "text/html; charset=utf-8").await
}

pub async fn stylesheet(State(state): State<AppState>) -> Result<Response, ApiError> {
    serve(&state.config.static_dir, "styles.css", "text/css; charset=utf-8").await
}

pub async fn script(State(state): State<AppState>) -> Result<Response, ApiError> {
    serve(
        &state.config.static_dir,
        "script.js",
        "application/javascript; charset=utf-8",
    )
    .await
}

/// Reads `name` from the static directory on every request. A missing file
/// is a deployment problem and surfaces as a 500.
async fn serve(dir: &Path, name: &str, content_type: &'static str) -> Result<Response, ApiError> {
    let path = dir.join(name);
    let bytes = async_fs::read(&path)
        .await
        .map_err(|e| ApiError::Asset(format!("{} ({})", path.display(), e)))?;

    Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response())
}
