use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Response,
};

use crate::{
    api::{found, query, required},
    error::ApiError,
    server::AppState,
    spotify::auth,
    success,
    types::CallbackParams,
};

/// Sends the browser to Spotify's consent page.
pub async fn login(State(state): State<AppState>) -> Response {
    found(auth::authorize_url(&state.config).as_str())
}

/// Completes the authorization-code flow.
///
/// Spotify redirects here with either `code` or `error`. The code is
/// exchanged for an access token and the browser is sent back to the root
/// document with the token in the `token` query parameter, where the client
/// script picks it up.
pub async fn callback(
    State(state): State<AppState>,
    params: Result<Query<CallbackParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let params = query(params)?;
    if let Some(reason) = params.error {
        return Err(ApiError::AuthorizationDenied(reason));
    }

    let code = required(params.code, "code")?;
    let access_token = auth::access_token(state.spotify.as_ref(), &code).await?;
    success!("Authorization code exchanged for an access token");

    Ok(found(&token_redirect(&access_token)))
}

/// Location of the root document carrying `token`.
pub(crate) fn token_redirect(token: &str) -> String {
    format!("/?token={}", urlencoding::encode(token))
}
