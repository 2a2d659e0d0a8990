//! Structured OAuth2 token endpoint errors (RFC 6749 Section 5.2).
//!
//! A [`ProtocolError`] is the failure value of a token endpoint exchange. It
//! carries the error code, an optional description, an optional link to
//! further documentation, and, when it wraps a lower-layer failure, that
//! failure as its source. [`ErrorResponse`] is its wire form.

mod code;
mod error;
mod protocol;
mod response;

// Core
pub use code::TokenErrorCode;
pub use error::{Error, Result};
pub use protocol::ProtocolError;

// Wire format
pub use response::{ErrorResponse, parse_error_body, parse_form_error_body};

pub use url::Url;
