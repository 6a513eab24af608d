//! The caller-facing client.
//!
//! [`TwitterClient`] owns the credentials, options, endpoint table and HTTP
//! transport, and exposes one method per upstream operation. Operations are
//! grouped by area in the submodules; they all funnel through
//! [`TwitterClient::fetch`], which signs, sends and reads a single request.
//!
//! Paginated operations come in two flavors: `*_slice` fetches one page, and
//! the unsuffixed method returns a [`Stream`](futures::Stream) of pages built
//! with [`paginate`](birdcage_common::paginate).

use std::fmt;
use std::sync::Arc;

use birdcage_common::types::{User, UserKind};
use birdcage_common::{ApiError, ApiResponse, ClientError, HttpClient, SmolStr, TransportError};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::dispatch::{Session, build_request, endpoint_url, read_response};
use crate::endpoint::Endpoint;
use crate::endpoints::Endpoints;
use crate::error::RequestError;
use crate::options::{ClientOptions, Credentials};
use crate::transaction::TransactionIdGenerator;

mod account;
pub mod args;
mod bookmarks;
mod communities;
mod discover;
mod lists;
mod media;
mod notifications;
mod search;
mod timeline;
mod tweets;
mod users;

pub use args::*;
pub use media::Progress;

struct Inner<C> {
    http: C,
    credentials: Credentials,
    options: ClientOptions,
    endpoints: Arc<Endpoints>,
    transaction: Option<Arc<dyn TransactionIdGenerator>>,
    self_user: RwLock<Option<User>>,
    twid: RwLock<Option<SmolStr>>,
}

/// An authenticated client for one account.
///
/// Cloning is cheap and clones share the self-identity cache.
pub struct TwitterClient<C = reqwest::Client> {
    inner: Arc<Inner<C>>,
}

impl<C> Clone for TwitterClient<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<C> fmt::Debug for TwitterClient<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwitterClient")
            .field("credentials", &self.inner.credentials)
            .field("options", &self.inner.options)
            .field("transaction", &self.inner.transaction.is_some())
            .finish_non_exhaustive()
    }
}

#[bon::bon]
impl<C: HttpClient> TwitterClient<C> {
    /// Assemble a client around an existing transport.
    ///
    /// Unlike [`TwitterClient::connect`] this does not touch the network; call
    /// [`refresh_self`](Self::refresh_self) to populate the self identity.
    #[builder]
    pub fn new(
        http: C,
        credentials: Credentials,
        #[builder(default)] options: ClientOptions,
        #[builder(default = Arc::new(Endpoints::DEFAULT))] endpoints: Arc<Endpoints>,
        transaction: Option<Arc<dyn TransactionIdGenerator>>,
    ) -> Self {
        let twid = options.twid.clone();
        Self {
            inner: Arc::new(Inner {
                http,
                credentials,
                options,
                endpoints,
                transaction,
                self_user: RwLock::new(None),
                twid: RwLock::new(twid),
            }),
        }
    }
}

impl TwitterClient<reqwest::Client> {
    /// Build a `reqwest` backed client and, if `auto_fetch_self` is set,
    /// look up the authenticated account.
    ///
    /// Failing to look up the account is logged and otherwise ignored.
    pub async fn connect(credentials: Credentials, options: ClientOptions) -> Result<Self, ClientError> {
        let http = options.http_client().map_err(TransportError::from)?;
        let auto_fetch_self = options.auto_fetch_self;
        let client = Self::builder()
            .http(http)
            .credentials(credentials)
            .options(options)
            .build();

        if auto_fetch_self {
            let _ = client.refresh_self().await;
        }
        Ok(client)
    }
}

impl<C: HttpClient> TwitterClient<C> {
    /// Client configuration.
    pub fn options(&self) -> &ClientOptions {
        &self.inner.options
    }

    /// The endpoint table in use.
    pub fn endpoints(&self) -> &Endpoints {
        &self.inner.endpoints
    }

    /// The authenticated account, once it has been looked up.
    pub async fn self_user(&self) -> Option<User> {
        self.inner.self_user.read().await.clone()
    }

    /// Id of the authenticated account, if known.
    pub async fn twid(&self) -> Option<SmolStr> {
        self.inner.twid.read().await.clone()
    }

    async fn remember_self(&self, user: &User) {
        *self.inner.twid.write().await = Some(user.id.clone());
        *self.inner.self_user.write().await = Some(user.clone());
    }

    /// Whether `user` is the authenticated account.
    async fn is_self(&self, user: &User) -> bool {
        if self.inner.twid.read().await.as_deref() == Some(user.id.as_str()) {
            return true;
        }
        self.inner
            .self_user
            .read()
            .await
            .as_ref()
            .is_some_and(|me| me.username == user.username)
    }

    /// Look up the authenticated account and cache it.
    ///
    /// With a known account id the profile is fetched directly; otherwise the
    /// handle is read from the account settings first. Only a full profile is
    /// cached. Failures are logged and returned, never raised.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn refresh_self(&self) -> ApiResponse<UserKind> {
        let target = match self.twid().await {
            Some(id) => UserRef::Id(id),
            None => {
                let settings = self.settings().await;
                match settings.data.as_ref().and_then(|s| s.username.clone()) {
                    Some(username) => UserRef::Username(username),
                    None => {
                        #[cfg(feature = "tracing")]
                        tracing::error!(errors = ?settings.errors, "could not read the account handle");
                        let errors = if settings.errors.is_empty() {
                            vec![ApiError::client("account settings carry no username")]
                        } else {
                            settings.errors
                        };
                        return ApiResponse::failed(errors);
                    }
                }
            }
        };

        let response = self.user(target).await;
        match &response.data {
            Some(UserKind::User(user)) => self.remember_self(user).await,
            _ => {
                #[cfg(feature = "tracing")]
                tracing::warn!(errors = ?response.errors, "authenticated account is not available");
            }
        }
        response
    }

    /// Send one call of `endpoint` and parse the result.
    ///
    /// Every failure, from a missing transaction id generator to a parser
    /// error, comes back inside the envelope.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip_all, fields(endpoint = endpoint.name()))
    )]
    pub async fn fetch<T>(&self, endpoint: &Endpoint<T>, params: Value) -> ApiResponse<T> {
        match self.send(endpoint, params).await {
            Ok(response) => read_response(endpoint, response),
            Err(error) => ApiResponse::failed(vec![error]),
        }
    }

    async fn send<T>(
        &self,
        endpoint: &Endpoint<T>,
        params: Value,
    ) -> Result<http::Response<Vec<u8>>, ApiError> {
        let inner = &*self.inner;

        let transaction_id = match (endpoint.requires_transaction_id, &inner.transaction) {
            (false, _) => None,
            (true, None) => {
                return Err(ApiError::client(RequestError::NoTransactionGenerator {
                    endpoint: endpoint.name(),
                }));
            }
            (true, Some(generator)) => {
                let url = endpoint_url(endpoint, &inner.options.domain).map_err(ApiError::client)?;
                let id = generator
                    .generate(&endpoint.verb.method(), url.path())
                    .await
                    .map_err(|e| ApiError::client(RequestError::from(e)))?;
                Some(id)
            }
        };

        let twid = self.twid().await;
        let request = build_request(
            endpoint,
            params,
            &self.session(twid.as_deref()),
            transaction_id.as_deref(),
        )
        .map_err(ApiError::client)?;
        self.transmit(request).await
    }

    fn session<'a>(&'a self, twid: Option<&'a str>) -> Session<'a> {
        Session {
            options: &self.inner.options,
            credentials: &self.inner.credentials,
            twid,
        }
    }

    /// Hand a built request to the transport, logging it when verbose.
    async fn transmit(&self, request: http::Request<Vec<u8>>) -> Result<http::Response<Vec<u8>>, ApiError> {
        let verbose = self.inner.options.verbose;

        #[cfg(feature = "tracing")]
        let (method, uri, started) = (
            request.method().clone(),
            request.uri().clone(),
            std::time::Instant::now(),
        );
        #[cfg(feature = "tracing")]
        if verbose {
            tracing::info!("{method} {uri}");
        }

        let response = self
            .inner
            .http
            .send_http(request)
            .await
            .map_err(|e| ApiError::from(ClientError::from(TransportError::other(e))));

        #[cfg(feature = "tracing")]
        if verbose {
            log_timing(&method, &uri, &response, started.elapsed().as_millis());
        }
        #[cfg(not(feature = "tracing"))]
        let _ = verbose;

        response
    }
}

#[cfg(feature = "tracing")]
fn log_timing(
    method: &http::Method,
    uri: &http::Uri,
    response: &Result<http::Response<Vec<u8>>, ApiError>,
    elapsed: u128,
) {
    use crate::options::MAX_ACCEPTABLE_REQUEST_TIME;

    match response {
        Ok(r) if r.status().is_success() && elapsed > MAX_ACCEPTABLE_REQUEST_TIME => {
            tracing::warn!("{method} {uri}: {} in {elapsed}ms", r.status());
        }
        Ok(r) if r.status().is_success() => {
            tracing::info!("{method} {uri}: {} in {elapsed}ms", r.status());
        }
        Ok(r) => tracing::error!("{method} {uri}: {} in {elapsed}ms", r.status()),
        Err(e) => tracing::error!("{method} {uri}: {} after {elapsed}ms", e.message),
    }
}
