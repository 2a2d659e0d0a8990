use std::fmt;

use serde::{Deserialize, Serialize};

/// Token endpoint error code (RFC 6749 Section 5.2).
///
/// The standard codes get their own variants so callers can match on them
/// exhaustively. Any other value a server sends is kept verbatim in
/// [`TokenErrorCode::Extension`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TokenErrorCode {
    /// The request is missing a parameter, repeats one, or is otherwise
    /// malformed.
    InvalidRequest,
    /// Client authentication failed.
    InvalidClient,
    /// The grant or refresh token is invalid, expired, or revoked.
    InvalidGrant,
    /// The client may not use this grant type.
    UnauthorizedClient,
    /// The authorization server does not support this grant type.
    UnsupportedGrantType,
    /// The requested scope is invalid, unknown, or exceeds the grant.
    InvalidScope,
    /// Any code outside the standard set.
    Extension(String),
}

impl TokenErrorCode {
    /// The identifier as it appears in the `error` field.
    pub fn as_str(&self) -> &str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::InvalidClient => "invalid_client",
            Self::InvalidGrant => "invalid_grant",
            Self::UnauthorizedClient => "unauthorized_client",
            Self::UnsupportedGrantType => "unsupported_grant_type",
            Self::InvalidScope => "invalid_scope",
            Self::Extension(code) => code,
        }
    }

    pub fn is_standard(&self) -> bool {
        !matches!(self, Self::Extension(_))
    }

    fn from_standard(code: &str) -> Option<Self> {
        match code {
            "invalid_request" => Some(Self::InvalidRequest),
            "invalid_client" => Some(Self::InvalidClient),
            "invalid_grant" => Some(Self::InvalidGrant),
            "unauthorized_client" => Some(Self::UnauthorizedClient),
            "unsupported_grant_type" => Some(Self::UnsupportedGrantType),
            "invalid_scope" => Some(Self::InvalidScope),
            _ => None,
        }
    }
}

impl From<&str> for TokenErrorCode {
    fn from(code: &str) -> Self {
        Self::from_standard(code).unwrap_or_else(|| Self::Extension(code.to_string()))
    }
}

impl From<String> for TokenErrorCode {
    fn from(code: String) -> Self {
        Self::from_standard(&code).unwrap_or(Self::Extension(code))
    }
}

impl From<TokenErrorCode> for String {
    fn from(code: TokenErrorCode) -> Self {
        match code {
            TokenErrorCode::Extension(code) => code,
            standard => standard.as_str().to_string(),
        }
    }
}

impl fmt::Display for TokenErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
