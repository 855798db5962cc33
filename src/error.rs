use reqwest::{StatusCode, header::InvalidHeaderValue};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to parse response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),

    #[error("token response ({status}) has no access_token: {body}")]
    MissingAccessToken { status: StatusCode, body: String },
}

pub type Result<T> = std::result::Result<T, SpotifyError>;
