use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Upstream envelope carried a non-success code.
    #[error("SERVER_RESPONSE_CODE_{0}")]
    Status(i32),

    /// Category listing echoes the request query instead of the code.
    #[error("SERVER_RESPONSE_CODE_{0}")]
    StatusEcho(String),

    #[error("NO_SEASON_ID_GOT")]
    NoSeasonId,

    #[error("INVALID_SEASON_ID")]
    InvalidSeasonId,

    #[error("NO_EPISODE_ID_GOT")]
    NoEpisodeId,

    #[error("INVALID_EPISODE_ID")]
    InvalidEpisodeId,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl SourceError {
    pub fn status(code: i32) -> Self {
        Self::Status(code)
    }

    pub fn status_echo(query: impl Into<String>) -> Self {
        Self::StatusEcho(query.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SourceError>;
