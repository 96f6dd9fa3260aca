use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Label prepended to every failed submission shown in the output box.
pub const FAILURE_PREFIX: &str = "Failed to fetch: ";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to fetch: {0}")]
    Fetch(#[from] FetchError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Invalid state transition: {current} -> {requested}")]
    InvalidTransition { current: String, requested: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// The single "request failed" kind. Its `Display` is the bare underlying
/// message so the panel can render `FAILURE_PREFIX` + message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("{0}")]
    Transport(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("{0}")]
    Decode(String),

    #[error("unexpected response shape: {0}")]
    Shape(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        let message = error_chain(&e);
        if e.is_decode() {
            Self::Decode(message)
        } else {
            Self::Transport(message)
        }
    }
}

/// Joins an error with its `source()` chain, outermost first.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

impl FetchError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    /// Text shown in the output box for this failure.
    pub fn display_text(&self) -> String {
        format!("{FAILURE_PREFIX}{self}")
    }
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn invalid_transition(current: impl Into<String>, requested: impl Into<String>) -> Self {
        Self::InvalidTransition {
            current: current.into(),
            requested: requested.into(),
        }
    }
}
