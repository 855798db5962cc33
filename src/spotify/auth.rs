use log::debug;
use reqwest::{
    blocking::Client,
    header::{AUTHORIZATION, HeaderValue},
};
use serde_json::Value;

use crate::{
    config::Config,
    error::{Result, SpotifyError},
    types::Token,
    utils,
};

/// Exchanges the application credentials for an access token.
///
/// Performs the OAuth 2.0 client-credentials grant: a form-encoded POST with
/// `grant_type=client_credentials` and an `Authorization: Basic` header built
/// from `client_id:client_secret`.
///
/// The response status is not checked up front. Spotify answers rejected
/// credentials with a JSON body such as `{"error":"invalid_client"}`, which
/// surfaces here as [`SpotifyError::MissingAccessToken`] carrying that body.
///
/// # Errors
///
/// - [`SpotifyError::Http`] on network failure
/// - [`SpotifyError::Json`] when the body is not valid JSON
/// - [`SpotifyError::MissingAccessToken`] when the body has no usable
///   `access_token`
pub fn request_token(http: &Client, config: &Config) -> Result<Token> {
    debug!("request_token() called, endpoint {}", config.token_url());

    let auth = utils::basic_auth_value(config.client_id(), config.client_secret());
    let response = http
        .post(config.token_url())
        .header(AUTHORIZATION, HeaderValue::from_str(&auth)?)
        .form(&[("grant_type", "client_credentials")])
        .send()?;

    let status = response.status();
    let body = response.text()?;
    let json: Value = serde_json::from_str(&body)?;

    match json.get("access_token").and_then(Value::as_str) {
        Some(token) if !token.is_empty() => {}
        _ => return Err(SpotifyError::MissingAccessToken { status, body }),
    }

    let token: Token = serde_json::from_value(json)?;
    debug!(
        "request_token() returned a {} token, expires in {}s",
        token.token_type, token.expires_in
    );
    Ok(token)
}
