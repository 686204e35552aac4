use thiserror::Error;

#[derive(Debug, Error)]
pub enum IsnError {
    #[error("API key not found. Set OPENROUTER_API_KEY or configure ~/.config/isochron/config.toml")]
    ApiKeyNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Time error: {0}")]
    Convert(#[from] isochron_core::ConvertError),
}
