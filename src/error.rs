use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("empty bid")]
    Empty,

    #[error("unrecognized bid: {0}")]
    InvalidCall(String),
}

#[derive(Error, Debug)]
pub enum ApiError {
    /// Server refused the request; the body text is shown to the user unchanged.
    #[error("{0}")]
    Rejected(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("invalid request URL: {0}")]
    BadUrl(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid server URL: {0}")]
    InvalidServerUrl(String),

    #[error("invalid seat: {0}")]
    InvalidSeat(String),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}
