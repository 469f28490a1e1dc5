use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    Res, api,
    config::Config,
    info,
    spotify::{SpotifyApi, SpotifyClient},
    warning,
};

/// Shared, read-only state handed to every handler.
///
/// Holds no per-listener data: the bearer token travels with each request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub spotify: Arc<dyn SpotifyApi>,
}

impl AppState {
    pub fn new(config: Config, spotify: Arc<dyn SpotifyApi>) -> Self {
        AppState {
            config: Arc::new(config),
            spotify,
        }
    }
}

/// Builds the full route table.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/styles.css", get(api::stylesheet))
        .route("/script.js", get(api::script))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/saved-tracks", get(api::saved_tracks))
        .route("/search", get(api::search))
        .route("/lyrics", get(api::lyrics))
        .route("/play", post(api::play))
        .route("/transfer-playback", post(api::transfer_playback))
        .route("/health", get(api::health))
        .with_state(state)
}

/// Binds `config.server_addr` and serves until the process is stopped.
///
/// # Arguments
///
/// * `config` - Loaded configuration; moved into the shared [`AppState`]
/// * `open_browser` - Open the root page in the default browser once the
///   listener is bound. Failure to open it is only a warning.
///
/// # Errors
///
/// Returns an error if the address does not parse, the HTTP client cannot be
/// built, the port cannot be bound, or the server loop fails.
///
/// # Example
///
/// ```
/// let config = Config::from_env()?;
/// start_api_server(config, true).await?;
/// ```
pub async fn start_api_server(config: Config, open_browser: bool) -> Res<()> {
    let addr = SocketAddr::from_str(&config.server_addr)
        .map_err(|e| format!("Failed to parse server address {}: {}", config.server_addr, e))?;

    let spotify = SpotifyClient::new(&config)?;
    let app = router(AppState::new(config, Arc::new(spotify)));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let url = format!("http://{}/", listener.local_addr()?);
    info!("Listening on {}", url);

    if open_browser && webbrowser::open(&url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            url
        )
    }

    axum::serve(listener, app).await?;
    Ok(())
}
