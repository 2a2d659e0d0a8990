use crate::protocol::ProtocolError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A constructor received an argument it cannot accept, e.g. an empty
    /// error code. This is a caller bug, not a runtime condition.
    #[error("Invalid argument: {name}")]
    InvalidArgument { name: &'static str },

    /// A failed token endpoint exchange.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The body is not a valid token endpoint error document
    /// (RFC 6749 Section 5.2).
    #[error("Unparseable error response body")]
    UnexpectedErrorBody { body: String },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The protocol error carried by this value, if any.
    pub fn as_protocol(&self) -> Option<&ProtocolError> {
        match self {
            Self::Protocol(err) => Some(err),
            _ => None,
        }
    }
}
