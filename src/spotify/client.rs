use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

use crate::{
    config::Config,
    spotify::{SpotifyApi, SpotifyError},
    types::{
        ApiErrorBody, OAuthErrorBody, SavedTracksPage, StartPlaybackRequest, Token,
        TransferPlaybackRequest,
    },
};

/// [`SpotifyApi`] backed by a shared reqwest [`Client`].
///
/// Created once at startup and shared by every request. The client carries
/// the configured timeout; connection pooling is whatever reqwest does by
/// default.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    token_url: String,
    api_url: String,
}

impl SpotifyClient {
    /// Builds a client for the endpoints and credentials in `config`.
    ///
    /// # Arguments
    ///
    /// * `config` - Source of the client credentials, redirect URI, token and
    ///   API endpoints, and the per-request timeout
    ///
    /// # Errors
    ///
    /// Returns the reqwest error if the TLS backend cannot be initialised.
    ///
    /// # Example
    ///
    /// ```
    /// let spotify = SpotifyClient::new(&config)?;
    /// let state = AppState::new(config, Arc::new(spotify));
    /// ```
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;

        Ok(SpotifyClient {
            http,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
            token_url: config.token_url.clone(),
            api_url: config.api_url.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

/// Passes success responses through and turns everything else into
/// [`SpotifyError::Status`], keeping Spotify's own message when the body has
/// one.
async fn check(response: Response) -> Result<Response, SpotifyError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = if let Ok(api) = serde_json::from_str::<ApiErrorBody>(&body) {
        api.error.message
    } else if let Ok(oauth) = serde_json::from_str::<OAuthErrorBody>(&body) {
        match oauth.error_description {
            Some(description) => format!("{}: {}", oauth.error, description),
            None => oauth.error,
        }
    } else if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        body
    };

    Err(SpotifyError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl SpotifyApi for SpotifyClient {
    async fn exchange_code(&self, code: &str) -> Result<Token, SpotifyError> {
        let response = self
            .http
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.redirect_uri.as_str()),
            ])
            .send()
            .await?;

        let token = check(response).await?.json::<Token>().await?;
        Ok(token)
    }

    async fn saved_tracks(
        &self,
        token: &str,
        limit: u32,
        offset: u32,
    ) -> Result<SavedTracksPage, SpotifyError> {
        let response = self
            .http
            .get(self.endpoint("/me/tracks"))
            .bearer_auth(token)
            .query(&[("limit", limit), ("offset", offset)])
            .send()
            .await?;

        let page = check(response).await?.json::<SavedTracksPage>().await?;
        Ok(page)
    }

    async fn search(
        &self,
        token: &str,
        query: &str,
        kind: &str,
        limit: u32,
    ) -> Result<Value, SpotifyError> {
        let limit = limit.to_string();
        let response = self
            .http
            .get(self.endpoint("/search"))
            .bearer_auth(token)
            .query(&[("q", query), ("type", kind), ("limit", limit.as_str())])
            .send()
            .await?;

        let results = check(response).await?.json::<Value>().await?;
        Ok(results)
    }

    async fn start_playback(&self, token: &str, uris: &[String]) -> Result<(), SpotifyError> {
        let response = self
            .http
            .put(self.endpoint("/me/player/play"))
            .bearer_auth(token)
            .json(&StartPlaybackRequest { uris })
            .send()
            .await?;

        check(response).await?;
        Ok(())
    }

    async fn transfer_playback(
        &self,
        token: &str,
        device_id: &str,
        play: bool,
    ) -> Result<(), SpotifyError> {
        let response = self
            .http
            .put(self.endpoint("/me/player"))
            .bearer_auth(token)
            .json(&TransferPlaybackRequest {
                device_ids: [device_id],
                play,
            })
            .send()
            .await?;

        check(response).await?;
        Ok(())
    }
}
