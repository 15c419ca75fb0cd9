use serde::Serialize;
use thiserror::Error;

/// Coarse classification of bridge failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Rejected before any network call
    Input,
    /// The endpoint answered with an HTTP error status
    Remote,
    /// Timeout, connection failure or other transport problem
    Transport,
    /// The endpoint answered but the body was not usable
    ResponseShape,
}

/// Every way an LLM call can fail.
///
/// The `Display` text is what ends up on the page, so each message is
/// written for a human reading the translation or evaluation field.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Error: invalid parameter type for messages (expected a string or a list of strings)")]
    InvalidParameterType,

    #[error("Error: empty prompt")]
    EmptyPrompt,

    #[error("Error: text too long ({length} characters, limit is {limit})")]
    PromptTooLong { length: usize, limit: usize },

    #[error("Error: {variable} is not set. Configure the {variable} environment variable.")]
    MissingCredential { variable: String },

    #[error("Error: Unauthorized (401) from the LLM endpoint. Check the value of {variable}.")]
    Unauthorized { variable: String },

    #[error("Error: HTTP {status} from LLM: {body}")]
    Http { status: u16, body: String },

    #[error("Error: invalid JSON from LLM")]
    InvalidJson,

    #[error("Error: field '{field}' is missing from the LLM response, received: {payload}")]
    MissingField { field: String, payload: String },

    #[error("Error: LLM request timed out (timeout={seconds}s)")]
    Timeout { seconds: u64 },

    #[error("Error: connection to LLM failed: {0}")]
    Connection(String),

    #[error("Error: LLM request failed: {0}")]
    Request(String),
}

impl BridgeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BridgeError::InvalidParameterType
            | BridgeError::EmptyPrompt
            | BridgeError::PromptTooLong { .. }
            | BridgeError::MissingCredential { .. } => ErrorKind::Input,
            BridgeError::Unauthorized { .. } | BridgeError::Http { .. } => ErrorKind::Remote,
            BridgeError::Timeout { .. } | BridgeError::Connection(_) | BridgeError::Request(_) => {
                ErrorKind::Transport
            }
            BridgeError::InvalidJson | BridgeError::MissingField { .. } => {
                ErrorKind::ResponseShape
            }
        }
    }

    /// Map a reqwest transport error onto the bridge taxonomy
    pub fn from_transport(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            BridgeError::Timeout {
                seconds: timeout_secs,
            }
        } else if err.is_connect() {
            BridgeError::Connection(err.to_string())
        } else {
            BridgeError::Request(err.to_string())
        }
    }
}

/// Flatten a bridge result into the text shown to the user
pub fn display_result(result: Result<String, BridgeError>) -> String {
    match result {
        Ok(text) => text,
        Err(err) => err.to_string(),
    }
}
