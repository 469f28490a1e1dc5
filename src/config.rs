//! Configuration management for the gateway.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. They are read once at startup into a [`Config`] value which is then
//! passed explicitly to the server and the Spotify client. Nothing in the
//! crate reads the environment after that point.
//!
//! Lookup order for the `.env` file:
//! 1. `.env` in the current working directory
//! 2. `.env` in the local data directory under `spotgate/.env`
//!
//! Variables already present in the process environment always win over the
//! file.

use std::{env, path::PathBuf, time::Duration};

use reqwest::Url;

pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Loads environment variables from a `.env` file.
///
/// Tries the working directory first, then the platform-specific local data
/// directory:
/// - Linux: `~/.local/share/spotgate/.env`
/// - macOS: `~/Library/Application Support/spotgate/.env`
/// - Windows: `%LOCALAPPDATA%/spotgate/.env`
///
/// # Returns
///
/// The path of the file that was loaded, or an error string if neither file
/// could be read. Callers treat the error as a warning since every variable
/// may also come from the real environment.
pub fn load_env() -> Result<PathBuf, String> {
    if let Ok(path) = dotenv::dotenv() {
        return Ok(path);
    }

    let path = data_env_path();
    dotenv::from_path(&path)
        .map(|_| path.clone())
        .map_err(|e| format!("no .env in working directory or {}: {}", path.display(), e))
}

fn data_env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotgate/.env");
    path
}

/// Runtime configuration for the gateway and its Spotify client.
///
/// Built once at startup. Tests construct it directly or through
/// [`Config::from_lookup`] with mock credentials.
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth client identifier issued by the Spotify developer dashboard.
    pub client_id: String,
    /// OAuth client secret, sent only to the token endpoint.
    pub client_secret: String,
    /// Callback URL registered for the application, e.g. `http://127.0.0.1:5000/callback`.
    pub redirect_uri: String,
    /// Authorization endpoint the browser is redirected to by `/login`.
    pub auth_url: Url,
    /// Token endpoint used to exchange authorization codes.
    pub token_url: String,
    /// Base URL of the Web API, without a trailing slash.
    pub api_url: String,
    /// Address the HTTP server binds to.
    pub server_addr: String,
    /// Directory holding `index.html`, `styles.css` and `script.js`.
    pub static_dir: PathBuf,
    /// Upper bound for each outbound call to Spotify.
    pub upstream_timeout: Duration,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Fails when `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET` or
    /// `SPOTIFY_REDIRECT_URI` is missing, when an optional value cannot be
    /// parsed, or when `UPSTREAM_TIMEOUT_SECS` is zero.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String, String> {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| format!("{} must be set", key))
        };
        let optional = |key: &str, default: &str| -> String {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let auth_url = optional("SPOTIFY_AUTH_URL", DEFAULT_AUTH_URL);
        let auth_url = Url::parse(&auth_url)
            .map_err(|e| format!("SPOTIFY_AUTH_URL is not a valid URL ({}): {}", auth_url, e))?;

        let timeout = optional(
            "UPSTREAM_TIMEOUT_SECS",
            &DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string(),
        );
        let timeout = timeout
            .parse::<u64>()
            .map_err(|e| format!("UPSTREAM_TIMEOUT_SECS must be a number of seconds: {}", e))?;
        if timeout == 0 {
            return Err("UPSTREAM_TIMEOUT_SECS must be at least 1 second".to_string());
        }

        Ok(Config {
            client_id: required("SPOTIFY_CLIENT_ID")?,
            client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            redirect_uri: required("SPOTIFY_REDIRECT_URI")?,
            auth_url,
            token_url: optional("SPOTIFY_TOKEN_URL", DEFAULT_TOKEN_URL),
            api_url: optional("SPOTIFY_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            server_addr: optional("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            static_dir: PathBuf::from(optional("STATIC_DIR", DEFAULT_STATIC_DIR)),
            upstream_timeout: Duration::from_secs(timeout),
        })
    }
}
