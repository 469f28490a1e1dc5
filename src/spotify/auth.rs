use reqwest::Url;

use crate::{
    config::Config,
    spotify::{SpotifyApi, SpotifyError},
};

/// Permissions requested from the listener: profile and email, Web Playback
/// streaming, reading and changing playback state, and reading the saved
/// library.
pub const SCOPES: [&str; 6] = [
    "user-read-private",
    "user-read-email",
    "streaming",
    "user-read-playback-state",
    "user-modify-playback-state",
    "user-library-read",
];

/// The scope list in the space-separated form the authorization endpoint expects.
pub fn scope() -> String {
    SCOPES.join(" ")
}

/// Builds the authorization URL `/login` redirects the browser to.
///
/// Any query already present on the configured endpoint is kept and the
/// OAuth parameters are appended after it.
///
/// # Query Parameters
///
/// - `client_id` - From `SPOTIFY_CLIENT_ID`
/// - `response_type` - Always `code`
/// - `redirect_uri` - From `SPOTIFY_REDIRECT_URI`, must match the dashboard entry
/// - `scope` - The fixed [`SCOPES`] list, space separated
///
/// No `state` parameter is sent: the gateway keeps no session to check it against.
///
/// # Example
///
/// ```
/// let url = authorize_url(&config);
/// // https://accounts.spotify.com/authorize?client_id=...&response_type=code&...
/// ```
pub fn authorize_url(config: &Config) -> Url {
    let mut url = config.auth_url.clone();
    url.query_pairs_mut()
        .append_pair("client_id", &config.client_id)
        .append_pair("response_type", "code")
        .append_pair("redirect_uri", &config.redirect_uri)
        .append_pair("scope", &scope());
    url
}

/// Exchanges `code` for an access token and returns only the access token.
pub async fn access_token(api: &dyn SpotifyApi, code: &str) -> Result<String, SpotifyError> {
    let token = api.exchange_code(code).await?;
    Ok(token.access_token)
}
