//! Common types for the birdcage Twitter/X client
//!
//! This crate holds everything that does not need to know about concrete
//! endpoints: the [`ApiResponse`] envelope every operation returns, the stable
//! domain model, the parsers that turn upstream JSON into that model, the
//! timeline assembler and the cursor pagination stream.

#![warn(missing_docs)]
pub use chrono;
pub use serde_json;
pub use smol_str;
pub use smol_str::SmolStr;

pub mod error;
/// HTTP client abstraction used by birdcage crates.
pub mod http_client;
pub mod lookup;
pub mod pagination;
pub mod parse;
pub mod response;
pub mod timeline;
/// Stable domain types produced by the parsers.
pub mod types;

pub use error::{ClientError, DecodeError, HttpError, ParseError, TransportError};
pub use http_client::HttpClient;
pub use pagination::{MAX_TIMELINE_ITERATIONS, Paginated, paginate};
pub use response::{ApiError, ApiResponse, CLIENT_ERROR_CODE};
