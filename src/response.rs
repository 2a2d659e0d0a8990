use serde::{Deserialize, Serialize};
use url::Url;

use crate::code::TokenErrorCode;
use crate::error::{Error, Result};
use crate::protocol::ProtocolError;

/// The token endpoint error document of RFC 6749 Section 5.2.
///
/// Optional members are left out of the serialized output when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: TokenErrorCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_uri: Option<String>,
}

impl ErrorResponse {
    /// Render as an `application/x-www-form-urlencoded` body.
    pub fn to_form(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        serializer.append_pair("error", self.error.as_str());

        if let Some(ref description) = self.error_description {
            serializer.append_pair("error_description", description);
        }

        if let Some(ref uri) = self.error_uri {
            serializer.append_pair("error_uri", uri);
        }

        serializer.finish()
    }
}

impl From<&ProtocolError> for ErrorResponse {
    fn from(err: &ProtocolError) -> Self {
        Self {
            error: err.code().clone(),
            error_description: err.description().map(String::from),
            error_uri: err.more_info().map(|uri| uri.to_string()),
        }
    }
}

impl TryFrom<ErrorResponse> for ProtocolError {
    type Error = Error;

    /// An `error_uri` that is not an absolute URL is dropped; the code and
    /// description are still worth surfacing.
    fn try_from(response: ErrorResponse) -> Result<Self> {
        let more_info = response.error_uri.and_then(|uri| match Url::parse(&uri) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!(error = %e, %uri, "discarding invalid error_uri");
                None
            }
        });

        ProtocolError::new(response.error, response.error_description, more_info)
    }
}

impl ProtocolError {
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse::from(self)
    }

    /// Serialize as the JSON body of a token endpoint error response.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.to_response())?)
    }
}

/// Parse a JSON token endpoint error body.
///
/// The body must be a JSON object with a non-empty string `error` member.
/// `error_description` and `error_uri` are picked up when they are strings
/// and ignored otherwise. Anything else yields
/// [`Error::UnexpectedErrorBody`].
pub fn parse_error_body(body: &[u8]) -> Result<ProtocolError> {
    let json: serde_json::Value =
        serde_json::from_slice(body).map_err(|_| unexpected_error_body(body))?;

    let code = json
        .get("error")
        .and_then(|v| v.as_str())
        .filter(|code| !code.is_empty())
        .ok_or_else(|| unexpected_error_body(body))?;

    ErrorResponse {
        error: code.into(),
        error_description: json
            .get("error_description")
            .and_then(|v| v.as_str())
            .map(String::from),
        error_uri: json
            .get("error_uri")
            .and_then(|v| v.as_str())
            .map(String::from),
    }
    .try_into()
}

/// Parse a form-encoded token endpoint error body. Repeated members keep
/// their first value.
pub fn parse_form_error_body(body: &[u8]) -> Result<ProtocolError> {
    let mut error = None;
    let mut error_description = None;
    let mut error_uri = None;

    for (key, value) in url::form_urlencoded::parse(body) {
        let slot = match &*key {
            "error" => &mut error,
            "error_description" => &mut error_description,
            "error_uri" => &mut error_uri,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }

    let code = error
        .filter(|code| !code.is_empty())
        .ok_or_else(|| unexpected_error_body(body))?;

    ErrorResponse {
        error: code.into(),
        error_description,
        error_uri,
    }
    .try_into()
}

fn unexpected_error_body(body: &[u8]) -> Error {
    tracing::debug!(len = body.len(), "unparseable token endpoint error body");
    Error::UnexpectedErrorBody {
        body: String::from_utf8_lossy(body).into_owned(),
    }
}
