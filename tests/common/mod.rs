#![allow(dead_code)]

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use reqwest::Url;
use serde_json::{Value, json};
use spotgate::{
    config::Config,
    server::{AppState, router},
    spotify::{SpotifyApi, SpotifyError},
    types::{SavedTracksPage, Token},
};

pub const ACCESS_TOKEN: &str = "BQD-test-access-token";

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Exchange(String),
    SavedTracks {
        token: String,
        limit: u32,
        offset: u32,
    },
    Search {
        token: String,
        query: String,
        kind: String,
        limit: u32,
    },
    StartPlayback {
        token: String,
        uris: Vec<String>,
    },
    Transfer {
        token: String,
        device_id: String,
        play: bool,
    },
}

/// In-memory stand-in for Spotify that records every call.
pub struct FakeSpotify {
    pub library: Vec<Value>,
    pub search_response: Value,
    /// Returned from every call when set.
    pub failure: Option<SpotifyError>,
    /// Returned only from the saved-tracks page at this offset.
    pub fail_at_offset: Option<u32>,
    calls: Mutex<Vec<Call>>,
}

impl FakeSpotify {
    pub fn new() -> Self {
        FakeSpotify {
            library: Vec::new(),
            search_response: json!({ "tracks": { "items": [], "total": 0 } }),
            failure: None,
            fail_at_offset: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_library(size: usize) -> Self {
        FakeSpotify {
            library: (0..size).map(saved_item).collect(),
            ..Self::new()
        }
    }

    pub fn failing(status: u16) -> Self {
        FakeSpotify {
            failure: Some(SpotifyError::Status {
                status,
                message: format!("upstream said {}", status),
            }),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn offsets(&self) -> Vec<u32> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::SavedTracks { offset, .. } => Some(offset),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) -> Result<(), SpotifyError> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

pub fn saved_item(n: usize) -> Value {
    json!({
        "added_at": "2024-01-01T00:00:00Z",
        "track": { "uri": format!("spotify:track:{}", n), "name": format!("Track {}", n) }
    })
}

#[async_trait]
impl SpotifyApi for FakeSpotify {
    async fn exchange_code(&self, code: &str) -> Result<Token, SpotifyError> {
        self.record(Call::Exchange(code.to_string()))?;
        Ok(Token {
            access_token: ACCESS_TOKEN.to_string(),
            token_type: "Bearer".to_string(),
            scope: "user-library-read".to_string(),
            expires_in: 3600,
            refresh_token: Some("refresh".to_string()),
        })
    }

    async fn saved_tracks(
        &self,
        token: &str,
        limit: u32,
        offset: u32,
    ) -> Result<SavedTracksPage, SpotifyError> {
        self.record(Call::SavedTracks {
            token: token.to_string(),
            limit,
            offset,
        })?;
        if self.fail_at_offset == Some(offset) {
            return Err(SpotifyError::Status {
                status: 500,
                message: "server error".to_string(),
            });
        }

        let start = (offset as usize).min(self.library.len());
        let end = (start + limit as usize).min(self.library.len());
        Ok(SavedTracksPage {
            items: self.library[start..end].to_vec(),
        })
    }

    async fn search(
        &self,
        token: &str,
        query: &str,
        kind: &str,
        limit: u32,
    ) -> Result<Value, SpotifyError> {
        self.record(Call::Search {
            token: token.to_string(),
            query: query.to_string(),
            kind: kind.to_string(),
            limit,
        })?;
        Ok(self.search_response.clone())
    }

    async fn start_playback(&self, token: &str, uris: &[String]) -> Result<(), SpotifyError> {
        self.record(Call::StartPlayback {
            token: token.to_string(),
            uris: uris.to_vec(),
        })
    }

    async fn transfer_playback(
        &self,
        token: &str,
        device_id: &str,
        play: bool,
    ) -> Result<(), SpotifyError> {
        self.record(Call::Transfer {
            token: token.to_string(),
            device_id: device_id.to_string(),
            play,
        })
    }
}

pub fn test_config(static_dir: PathBuf) -> Config {
    Config {
        client_id: "test-client".to_string(),
        client_secret: "test-secret".to_string(),
        redirect_uri: "http://127.0.0.1:5000/callback".to_string(),
        auth_url: Url::parse("https://accounts.example.test/authorize").unwrap(),
        token_url: "https://accounts.example.test/api/token".to_string(),
        api_url: "https://api.example.test/v1".to_string(),
        server_addr: "127.0.0.1:0".to_string(),
        static_dir,
        upstream_timeout: Duration::from_secs(5),
    }
}

/// Serves the router on an ephemeral port and returns its base URL.
pub async fn spawn_app(fake: Arc<FakeSpotify>) -> String {
    spawn_app_with_config(fake, test_config(PathBuf::from("does-not-exist"))).await
}

pub async fn spawn_app_with_config(fake: Arc<FakeSpotify>, config: Config) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let state = AppState::new(config, fake as Arc<dyn SpotifyApi>);
    tokio::spawn(async move {
        axum::serve(listener, router(state))
            .await
            .expect("gateway server error");
    });

    format!("http://{}", addr)
}

/// HTTP client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
