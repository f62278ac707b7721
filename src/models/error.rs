#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("Fetch error: {0}")]
    FetchError(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Not found: {0}")]
    NotFound(String),
}
