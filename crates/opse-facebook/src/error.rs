use thiserror::Error;

#[derive(Debug, Error)]
pub enum FacebookError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("{field} must not be empty")]
    EmptyName { field: &'static str },
}
