//! # birdcage
//!
//! A client for the undocumented Twitter/X web API, speaking the same
//! GraphQL and v1.1 endpoints the web app does, authenticated with the
//! session cookies of a logged-in browser.
//!
//! Every operation returns an [`ApiResponse`]: parsed data, upstream errors,
//! or both. Nothing raises; transport failures, parser failures and local
//! refusals all arrive as entries of `errors`, the local ones with code `-1`.
//!
//! ## Example
//!
//! Print the first page of a user's tweets.
//!
//! ```no_run
//! use birdcage::{ClientOptions, Credentials, TwitterClient, UserRef, UserTweetsArgs};
//! use birdcage::types::TweetKind;
//!
//! #[tokio::main]
//! async fn main() -> miette::Result<()> {
//!     let client = TwitterClient::connect(
//!         Credentials::new("auth_token cookie", "ct0 cookie"),
//!         ClientOptions::new().domain("x.com").build(),
//!     )
//!     .await?;
//!
//!     let user = client.user(UserRef::username("jack")).await.into_result()?;
//!     let Some(user) = user.as_user() else {
//!         return Ok(());
//!     };
//!
//!     let page = client
//!         .user_tweets_slice(&user.id, UserTweetsArgs::default())
//!         .await
//!         .into_result()?;
//!     for tweet in page.items().filter_map(TweetKind::as_tweet) {
//!         println!("{}: {}", tweet.id, tweet.text);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Layout
//!
//! - [`endpoints`] is the table of upstream operations, each an [`Endpoint`]
//!   naming its URL, method, encoding, token and parser
//! - [`dispatch`] turns an endpoint and parameters into an HTTP request and
//!   reads the response back into the envelope
//! - [`TwitterClient`] exposes one method per operation, with `*_slice` and
//!   stream variants for timelines
//! - [`ClientPool`] spreads calls over several accounts
//!
//! The domain model, parsers and timeline assembly live in
//! [`birdcage_common`] and are re-exported here.

#![warn(missing_docs)]

pub mod endpoint;

pub mod client;
pub mod dispatch;
pub mod endpoints;
pub mod error;
pub mod flags;
pub mod options;
pub mod pool;
pub mod transaction;

pub use birdcage_common::*;

pub use client::*;
pub use endpoint::{Endpoint, Family, Verb};
pub use endpoints::Endpoints;
pub use error::{PoolError, RequestError};
pub use options::{ClientOptions, Credentials, LongTweetBehavior};
pub use pool::{AccountUsage, ClientPool};
pub use transaction::{TransactionError, TransactionIdGenerator};
