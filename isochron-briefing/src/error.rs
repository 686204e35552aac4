use thiserror::Error;

#[derive(Debug, Error)]
pub enum BriefingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("malformed briefing response: {0}")]
    MalformedResponse(String),
}
