//! Error types shared by the birdcage crates
//!
//! None of these reach callers of the high-level client directly: they are
//! folded into a single [`ApiError`](crate::ApiError) with code `-1`. They
//! exist so that the plumbing in between can use `?`.

use bytes::Bytes;
use smol_str::SmolStr;

use crate::response::ApiError;

/// Everything that can go wrong between building a request and holding a
/// parsed value.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ClientError {
    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(
        #[from]
        #[diagnostic_source]
        TransportError,
    ),

    /// The body is not JSON
    #[error(transparent)]
    Decode(
        #[from]
        #[diagnostic_source]
        DecodeError,
    ),

    /// The body is JSON of an unexpected shape
    #[error(transparent)]
    Parse(
        #[from]
        #[diagnostic_source]
        ParseError,
    ),

    /// Non-success status without upstream errors
    #[error(transparent)]
    Http(
        #[from]
        #[diagnostic_source]
        HttpError,
    ),

    /// Upstream reported errors and returned nothing usable
    #[error("upstream error: {}", describe(.0))]
    #[diagnostic(code(birdcage::api))]
    Api(Vec<ApiError>),
}

fn describe(errors: &[ApiError]) -> String {
    let described: Vec<String> = errors
        .iter()
        .map(|e| format!("[{}] {}", e.code, e.message))
        .collect();
    described.join(", ")
}

/// The transport could not complete a round trip.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TransportError {
    /// DNS, TCP, TLS or proxy failure
    #[error("could not connect: {0}")]
    #[diagnostic(code(birdcage::transport::connect), help("check the network and the proxy url"))]
    Connect(String),

    /// No response in time
    #[error("timed out")]
    #[diagnostic(code(birdcage::transport::timeout))]
    Timeout,

    /// The transport refused the request before sending it
    #[error("request rejected by the transport: {0}")]
    #[diagnostic(code(birdcage::transport::request))]
    Rejected(String),

    /// Anything a custom [`HttpClient`](crate::HttpClient) reports
    #[error("{0}")]
    #[diagnostic(code(birdcage::transport::other))]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Wrap an error from any transport.
    pub fn other(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Other(Box::new(error))
    }
}

#[cfg(feature = "reqwest-client")]
impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        match () {
            _ if e.is_timeout() => Self::Timeout,
            _ if e.is_connect() => Self::Connect(e.to_string()),
            _ if e.is_builder() || e.is_request() => Self::Rejected(e.to_string()),
            _ => Self::other(e),
        }
    }
}

/// A body that should have been JSON was not.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum DecodeError {
    /// The body failed to parse as JSON
    #[error("response is not JSON: {0}")]
    #[diagnostic(code(birdcage::decode::json))]
    Json(
        #[from]
        #[source]
        serde_json::Error,
    ),
}

/// A non-success status that came without an `errors` payload.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[diagnostic(code(birdcage::http))]
pub struct HttpError {
    /// Response status
    pub status: http::StatusCode,
    /// Raw body, kept for diagnosis
    pub body: Option<Bytes>,
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "upstream answered {}", self.status)?;
        match self.body.as_deref().map(String::from_utf8_lossy) {
            Some(text) if !text.trim().is_empty() => write!(f, ": {}", text.trim()),
            _ => Ok(()),
        }
    }
}

/// A response fragment did not have the shape a parser expected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ParseError {
    /// A required path was absent or null
    #[error("missing field `{0}`")]
    #[diagnostic(code(birdcage::parse::missing))]
    Missing(SmolStr),

    /// A value was present but of the wrong JSON type
    #[error("expected {expected} at `{path}`")]
    #[diagnostic(code(birdcage::parse::type_mismatch))]
    Type {
        /// Dotted path of the offending value
        path: SmolStr,
        /// What the parser wanted to find there
        expected: &'static str,
    },

    /// A union fragment carried a typename outside the known set
    #[error("unrecognized {family} typename `{typename}`")]
    #[diagnostic(
        code(birdcage::parse::typename),
        help("the upstream response shape has probably changed")
    )]
    UnexpectedTypename {
        /// Union family being parsed (tweet, user, list, community)
        family: &'static str,
        /// The typename that was found
        typename: SmolStr,
    },
}
