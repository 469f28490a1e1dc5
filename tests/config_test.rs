use std::{collections::HashMap, path::PathBuf, time::Duration};

use spotgate::config::{
    Config, DEFAULT_API_URL, DEFAULT_AUTH_URL, DEFAULT_SERVER_ADDRESS, DEFAULT_TOKEN_URL,
};
use spotgate::spotify::auth::{SCOPES, authorize_url, scope};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

const CREDENTIALS: [(&str, &str); 3] = [
    ("SPOTIFY_CLIENT_ID", "client"),
    ("SPOTIFY_CLIENT_SECRET", "secret"),
    ("SPOTIFY_REDIRECT_URI", "http://127.0.0.1:5000/callback"),
];

#[test]
fn test_defaults_apply() {
    let config = Config::from_lookup(lookup(&CREDENTIALS)).unwrap();

    assert_eq!(config.client_id, "client");
    assert_eq!(config.client_secret, "secret");
    assert_eq!(config.redirect_uri, "http://127.0.0.1:5000/callback");
    assert_eq!(config.auth_url.as_str(), DEFAULT_AUTH_URL);
    assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.server_addr, DEFAULT_SERVER_ADDRESS);
    assert_eq!(config.static_dir, PathBuf::from("static"));
    assert_eq!(config.upstream_timeout, Duration::from_secs(10));
}

#[test]
fn test_overrides_apply() {
    let mut pairs = CREDENTIALS.to_vec();
    pairs.extend([
        ("SPOTIFY_API_URL", "http://localhost:9000/v1/"),
        ("SERVER_ADDRESS", "0.0.0.0:8080"),
        ("STATIC_DIR", "/srv/player"),
        ("UPSTREAM_TIMEOUT_SECS", "3"),
    ]);

    let config = Config::from_lookup(lookup(&pairs)).unwrap();

    assert_eq!(config.api_url, "http://localhost:9000/v1");
    assert_eq!(config.server_addr, "0.0.0.0:8080");
    assert_eq!(config.static_dir, PathBuf::from("/srv/player"));
    assert_eq!(config.upstream_timeout, Duration::from_secs(3));
}

#[test]
fn test_missing_credentials_are_reported() {
    for missing in ["SPOTIFY_CLIENT_ID", "SPOTIFY_CLIENT_SECRET", "SPOTIFY_REDIRECT_URI"] {
        let pairs: Vec<_> = CREDENTIALS
            .iter()
            .copied()
            .filter(|(k, _)| *k != missing)
            .collect();

        let err = Config::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(err.contains(missing), "{}", err);
    }
}

#[test]
fn test_empty_credential_counts_as_missing() {
    let mut pairs = CREDENTIALS.to_vec();
    pairs[0] = ("SPOTIFY_CLIENT_ID", "  ");

    assert!(Config::from_lookup(lookup(&pairs)).is_err());
}

#[test]
fn test_invalid_values_are_rejected() {
    let mut pairs = CREDENTIALS.to_vec();
    pairs.push(("UPSTREAM_TIMEOUT_SECS", "soon"));
    assert!(Config::from_lookup(lookup(&pairs)).is_err());

    let mut pairs = CREDENTIALS.to_vec();
    pairs.push(("SPOTIFY_AUTH_URL", "not a url"));
    assert!(Config::from_lookup(lookup(&pairs)).is_err());

    let mut pairs = CREDENTIALS.to_vec();
    pairs.push(("UPSTREAM_TIMEOUT_SECS", "0"));
    let err = Config::from_lookup(lookup(&pairs)).unwrap_err();
    assert!(err.contains("UPSTREAM_TIMEOUT_SECS"), "{}", err);
}

#[test]
fn test_scope_lists_required_permissions() {
    let scope = scope();

    assert_eq!(SCOPES.len(), 6);
    for permission in [
        "user-read-private",
        "user-read-email",
        "streaming",
        "user-read-playback-state",
        "user-modify-playback-state",
        "user-library-read",
    ] {
        assert!(scope.split(' ').any(|s| s == permission), "{}", permission);
    }
}

#[test]
fn test_authorize_url_encodes_parameters() {
    let config = Config::from_lookup(lookup(&CREDENTIALS)).unwrap();

    let url = authorize_url(&config);

    assert!(url.as_str().starts_with(DEFAULT_AUTH_URL));
    let query = url.query().unwrap();
    assert!(query.contains("client_id=client"));
    assert!(query.contains("response_type=code"));
    assert!(query.contains("redirect_uri=http%3A%2F%2F127.0.0.1%3A5000%2Fcallback"));
    assert!(query.contains("scope=user-read-private+user-read-email+streaming"));
}
