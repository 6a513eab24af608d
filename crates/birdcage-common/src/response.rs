//! The `(errors, data)` envelope returned by every operation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use smol_str::SmolStr;
use std::fmt::Display;

use crate::error::ClientError;

/// Error code reserved for failures that happened on this side of the wire:
/// transport errors, undecodable bodies and parser failures.
pub const CLIENT_ERROR_CODE: i64 = -1;

/// One entry of an upstream `errors` array, or a client-side failure.
///
/// Client-side failures carry only [`code`](Self::code) `-1` and a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// Upstream error code, or [`CLIENT_ERROR_CODE`]
    #[serde(default)]
    pub code: i64,
    /// Human readable description
    pub message: String,
    /// GraphQL source locations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<ErrorLocation>>,
    /// GraphQL response path the error applies to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,
    /// Upstream error kind, e.g. `Permissions`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SmolStr>,
    /// Upstream error name, e.g. `AuthorizationError`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<SmolStr>,
    /// Upstream error source, e.g. `Client`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SmolStr>,
    /// Upstream trace information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracing: Option<ErrorTracing>,
}

/// Line/column pair inside a GraphQL document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorLocation {
    /// 1-based line
    pub line: u32,
    /// 1-based column
    pub column: u32,
}

/// Trace identifier attached to upstream errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorTracing {
    /// Opaque trace id
    pub trace_id: SmolStr,
}

impl ApiError {
    /// A client-side failure: code `-1`, no other fields.
    pub fn client(message: impl Display) -> Self {
        Self {
            code: CLIENT_ERROR_CODE,
            message: message.to_string(),
            locations: None,
            path: None,
            kind: None,
            name: None,
            source: None,
            tracing: None,
        }
    }

    /// Whether this error originated on the client side.
    pub fn is_client_error(&self) -> bool {
        self.code == CLIENT_ERROR_CODE
    }
}

impl From<ClientError> for ApiError {
    fn from(error: ClientError) -> Self {
        Self::client(error)
    }
}

/// Result envelope of every operation.
///
/// Four states are meaningful and distinct:
/// - no errors, data present: success (data may still be a degraded variant
///   such as a tombstoned tweet)
/// - errors, data present: partial success, the data is usable
/// - errors, no data: nothing usable came back
/// - no errors, no data: only produced by [`ApiResponse::empty`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    /// Upstream or client-side errors, in the order reported
    pub errors: Vec<ApiError>,
    /// Parsed payload if anything usable came back
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// A successful response with no errors.
    pub fn ok(data: T) -> Self {
        Self {
            errors: Vec::new(),
            data: Some(data),
        }
    }

    /// Data accompanied by (possibly empty) upstream errors.
    pub fn partial(errors: Vec<ApiError>, data: T) -> Self {
        Self {
            errors,
            data: Some(data),
        }
    }

    /// Errors and no data.
    pub fn failed(errors: Vec<ApiError>) -> Self {
        Self { errors, data: None }
    }

    /// A single client-side `-1` failure.
    pub fn client_error(message: impl Display) -> Self {
        Self::failed(vec![ApiError::client(message)])
    }

    /// Neither errors nor data.
    pub fn empty() -> Self {
        Self {
            errors: Vec::new(),
            data: None,
        }
    }

    /// True when data is present and no errors were reported.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty() && self.data.is_some()
    }

    /// True when errors were reported but data is still present.
    pub fn is_partial(&self) -> bool {
        !self.errors.is_empty() && self.data.is_some()
    }

    /// Borrow the payload.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Transform the payload, keeping the errors.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            errors: self.errors,
            data: self.data.map(f),
        }
    }

    /// Collapse into a `Result`, discarding errors that accompany data.
    pub fn into_result(self) -> Result<T, ClientError> {
        match self.data {
            Some(data) => Ok(data),
            None => Err(ClientError::Api(self.errors)),
        }
    }
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<ClientError> for ApiResponse<T> {
    fn from(error: ClientError) -> Self {
        Self::failed(vec![error.into()])
    }
}
