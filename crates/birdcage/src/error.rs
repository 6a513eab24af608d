//! Errors raised while building requests and managing accounts.
//!
//! Like the errors in `birdcage-common`, request errors never reach callers
//! of an operation directly: they become a `-1` entry of the response
//! envelope.

use smol_str::SmolStr;

use crate::transaction::TransactionError;

/// A request could not be built or signed.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum RequestError {
    /// The endpoint needs an `x-client-transaction-id` and none can be made
    #[error("{endpoint} requires a transaction id but no generator is configured")]
    #[diagnostic(
        code(birdcage::request::no_transaction_generator),
        help("attach a TransactionIdGenerator when building the client")
    )]
    NoTransactionGenerator {
        /// Operation name
        endpoint: &'static str,
    },

    /// The transaction id generator failed
    #[error(transparent)]
    #[diagnostic(transparent)]
    Transaction(#[from] TransactionError),

    /// The endpoint URL does not parse after domain substitution
    #[error("invalid endpoint url `{url}`")]
    #[diagnostic(code(birdcage::request::url))]
    Url {
        /// The offending URL
        url: String,
        /// Underlying parse failure
        #[source]
        source: url::ParseError,
    },

    /// Default or caller variables are not a JSON object
    #[error("variables of {endpoint} must be a JSON object")]
    #[diagnostic(code(birdcage::request::variables))]
    Variables {
        /// Operation name
        endpoint: &'static str,
    },

    /// The default variables literal is malformed
    #[error("default variables of {endpoint} are not valid JSON")]
    #[diagnostic(code(birdcage::request::variables))]
    DefaultVariables {
        /// Operation name
        endpoint: &'static str,
        /// Underlying JSON failure
        #[source]
        source: serde_json::Error,
    },

    /// A parameter could not be form encoded
    #[error("failed to encode parameters: {0}")]
    #[diagnostic(code(birdcage::request::encode))]
    Encode(#[from] serde_html_form::ser::Error),

    /// The request body could not be serialized
    #[error("failed to serialize request body: {0}")]
    #[diagnostic(code(birdcage::request::body))]
    Body(#[source] serde_json::Error),

    /// A header value contains characters HTTP does not allow
    #[error("invalid value for header `{0}`")]
    #[diagnostic(code(birdcage::request::header))]
    Header(SmolStr),

    /// The request builder rejected the request
    #[error("invalid request: {0}")]
    #[diagnostic(code(birdcage::request::http))]
    Http(#[from] http::Error),
}

/// Account pool misuse.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum PoolError {
    /// A pool needs at least one account
    #[error("an account pool needs at least one client")]
    #[diagnostic(code(birdcage::pool::empty))]
    Empty,
}
