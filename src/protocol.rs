use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::code::TokenErrorCode;
use crate::error::{Error, Result};

type Cause = Arc<dyn std::error::Error + Send + Sync>;

/// An error reported by an authorization server's token endpoint.
///
/// Immutable once built. Cloning is cheap enough to hand the same failure to
/// a logger and to the response writer; clones share the wrapped cause.
#[derive(Debug, Clone)]
pub struct ProtocolError {
    code: TokenErrorCode,
    description: Option<String>,
    more_info: Option<Url>,
    message: String,
    cause: Option<Cause>,
}

impl ProtocolError {
    /// Build a protocol error from its RFC 6749 fields.
    ///
    /// Fails with [`Error::InvalidArgument`] when `code` is empty.
    pub fn new(
        code: impl Into<TokenErrorCode>,
        description: Option<String>,
        more_info: Option<Url>,
    ) -> Result<Self> {
        let code = code.into();
        if code.as_str().is_empty() {
            return Err(Error::InvalidArgument { name: "code" });
        }

        Ok(Self {
            message: format_message(&code, description.as_deref()),
            code,
            description,
            more_info,
            cause: None,
        })
    }

    /// Wrap a lower-layer failure (transport, parsing, ...) as an
    /// `invalid_request` error. The failure stays reachable through
    /// [`ProtocolError::cause`] and [`std::error::Error::source`].
    pub fn from_cause(cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        let cause: Cause = Arc::from(cause.into());
        tracing::debug!(error = %cause, "wrapping failure as invalid_request");

        let code = TokenErrorCode::InvalidRequest;
        Self {
            message: format_message(&code, None),
            code,
            description: None,
            more_info: None,
            cause: Some(cause),
        }
    }

    pub fn code(&self) -> &TokenErrorCode {
        &self.code
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn more_info(&self) -> Option<&Url> {
        self.more_info.as_ref()
    }

    /// The human-readable message, fixed at construction.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying failure this error was built from, if any.
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

fn format_message(code: &TokenErrorCode, description: Option<&str>) -> String {
    match description {
        Some(description) => format!("Token endpoint error: {code} - {description}"),
        None => format!("Token endpoint error: {code}"),
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ProtocolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}
