use toptracks::config::*;

#[test]
fn test_config_defaults() {
    let config = Config::new("id", "secret");

    assert_eq!(config.client_id(), "id");
    assert_eq!(config.client_secret(), "secret");
    assert_eq!(config.token_url(), "https://accounts.spotify.com/api/token");
    assert_eq!(config.api_url(), "https://api.spotify.com/v1");
    assert_eq!(config.market(), "US");
}

#[test]
fn test_config_overrides() {
    let config = Config::new("id", "secret")
        .with_token_url("http://127.0.0.1:1234/api/token")
        .with_api_url("http://127.0.0.1:1234/v1/")
        .with_market("DE");

    assert_eq!(config.token_url(), "http://127.0.0.1:1234/api/token");
    // Trailing slash is dropped so paths can be appended
    assert_eq!(config.api_url(), "http://127.0.0.1:1234/v1");
    assert_eq!(config.market(), "DE");
    // Credentials are untouched by the setters
    assert_eq!(config.client_id(), "id");
}

#[test]
fn test_config_debug_redacts_secret() {
    let config = Config::new("visible-id", "very-secret-value");
    let debug = format!("{:?}", config);

    assert!(debug.contains("visible-id"));
    assert!(!debug.contains("very-secret-value"));
    assert!(debug.contains("<redacted>"));
}

// Everything that touches the process environment lives in this one test so
// nothing runs concurrently against the same variables.
#[test]
fn test_config_from_env() {
    unsafe {
        std::env::set_var(CLIENT_ID_VAR, "env-id");
        std::env::set_var(CLIENT_SECRET_VAR, "env-secret");
        std::env::set_var(TOKEN_URL_VAR, "http://127.0.0.1:4321/api/token");
        std::env::set_var(API_URL_VAR, "http://127.0.0.1:4321/v1/");
        std::env::set_var(MARKET_VAR, "SE");
    }

    let config = Config::from_env();
    assert_eq!(config.client_id(), "env-id");
    assert_eq!(config.client_secret(), "env-secret");
    assert_eq!(config.token_url(), "http://127.0.0.1:4321/api/token");
    assert_eq!(config.api_url(), "http://127.0.0.1:4321/v1");
    assert_eq!(config.market(), "SE");

    unsafe {
        for var in [CLIENT_ID_VAR, CLIENT_SECRET_VAR, TOKEN_URL_VAR, API_URL_VAR, MARKET_VAR] {
            std::env::remove_var(var);
        }
    }

    // Missing credentials are left empty rather than rejected
    let config = Config::from_env();
    assert_eq!(config.client_id(), "");
    assert_eq!(config.client_secret(), "");
    assert_eq!(config, Config::new("", ""));
    assert_eq!(config.token_url(), DEFAULT_TOKEN_URL);
    assert_eq!(config.api_url(), DEFAULT_API_URL);
    assert_eq!(config.market(), DEFAULT_MARKET);
}
