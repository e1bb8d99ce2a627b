use thiserror::Error;

/// Failures surfaced by a workflow
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Required user input missing; raised before any request
    #[error("{0}")]
    Validation(String),

    /// No response was received
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-success status
    #[error("{message}")]
    Application { status: u16, message: String },

    /// A success response whose body is not the expected JSON
    #[error("Invalid response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    Application,
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Validation(_) => ErrorKind::Validation,
            ClientError::Transport(_) | ClientError::Decode(_) => ErrorKind::Transport,
            ClientError::Application { .. } => ErrorKind::Application,
        }
    }

    /// HTTP status, when the backend answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Application { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}
