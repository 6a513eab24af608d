//! The `x-client-transaction-id` seam.
//!
//! Some endpoints reject requests without a per-request signature derived
//! from the current web document. Producing it is out of scope for this
//! crate; plug in an implementation of [`TransactionIdGenerator`] when
//! building the client.

use std::error::Error as StdError;

use async_trait::async_trait;

/// Signature generation failed.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("failed to generate a transaction id: {message}")]
#[diagnostic(code(birdcage::transaction))]
pub struct TransactionError {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl TransactionError {
    /// An error with a description only.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// An error caused by another error.
    pub fn with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Produces `x-client-transaction-id` values.
///
/// Called exactly once for every request whose endpoint requires it, with
/// the request's method and URL path. Values must not be cached across
/// requests: the signing state rotates with the web document.
#[async_trait]
pub trait TransactionIdGenerator: Send + Sync {
    /// Sign one request.
    async fn generate(&self, method: &http::Method, path: &str) -> Result<String, TransactionError>;
}

#[async_trait]
impl<F> TransactionIdGenerator for F
where
    F: Fn(&http::Method, &str) -> Result<String, TransactionError> + Send + Sync,
{
    async fn generate(&self, method: &http::Method, path: &str) -> Result<String, TransactionError> {
        self(method, path)
    }
}
