//! Spotify Gateway Library
//!
//! A stateless HTTP gateway between a browser-based player and the Spotify
//! Web API. It completes the OAuth authorization-code handoff for the browser,
//! then forwards the caller's bearer token to Spotify to list saved tracks,
//! search the catalog and control playback.
//!
//! # Modules
//!
//! - `api` - HTTP handlers, one file per endpoint group
//! - `config` - Environment loading and the explicit [`config::Config`] value
//! - `error` - Structured error responses returned by the handlers
//! - `server` - Router construction and the listening loop
//! - `spotify` - The upstream capability ([`spotify::SpotifyApi`]) and its reqwest client
//! - `types` - Request and response payloads
//!
//! # Example
//!
//! ```
//! use spotgate::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> spotgate::Res<()> {
//!     let config = config::Config::from_env()?;
//!     server::start_api_server(config, false).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod spotify;
pub mod types;

/// Result alias used at the process edge (startup, configuration, serving).
///
/// Handlers never return this; they return [`error::ApiError`] so every
/// failure maps onto an HTTP status.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`.
///
/// ```
/// info!("Listening on http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// ```
/// success!("Authorization code exchanged");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark to stderr and exits
/// the process with code 1.
///
/// Only used during startup, where there is nothing to recover into. Request
/// handlers report failures through [`error::ApiError`] instead.
///
/// ```
/// error!("Invalid configuration: {}", e);
/// // not reached
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning with a yellow exclamation mark to stderr.
///
/// Used for failed requests and recoverable startup issues such as a missing
/// `.env` file.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
