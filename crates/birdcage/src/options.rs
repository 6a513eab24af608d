//! Client configuration and credentials.

use bon::Builder;
use smol_str::SmolStr;

/// Bearer token used when an endpoint does not ask for another one.
pub const PUBLIC_TOKEN: &str = "Bearer AAAAAAAAAAAAAAAAAAAAANRILgAAAAAAnNwIzUejRCOuH5E6I8xnZz4puTs%3D1Zv7ttfk8LF81IUq16cHjhLTvJu4FA33AGWWjCpTnA";
/// Bearer token required by search, some follower lists and friendship writes.
pub const ALT_TOKEN: &str = "Bearer AAAAAAAAAAAAAAAAAAAAAFXzAwAAAAAAMHCxpeSDG1gLNLghVe8d74hl6k4%3DRUMF4xAQLsbeBhTSRrCiQpJtxoGWeyHrDb5te2jpGskWDFW82F";
/// Bearer token required by tweet creation, bookmarks and conversation mutes.
pub const OAUTH_KEY: &str = "Bearer AAAAAAAAAAAAAAAAAAAAAG5LOQEAAAAAbEKsIYYIhrfOQqm4H8u7xcahRkU%3Dz98HKmzbeXdKqBfUDmElcqYl0cmmKY9KdS2UoNIz3Phapgsowi";

/// Requests slower than this many milliseconds are logged as warnings.
pub const MAX_ACCEPTABLE_REQUEST_TIME: u128 = 999;

/// Longest tweet text accepted without a note tweet.
pub const TWEET_CHARACTER_LIMIT: usize = 280;

/// Default size of one `APPEND` chunk, in bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 1_084_576;

/// Desktop browser user agent sent unless overridden.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/142.0.0.0 Safari/537.36";

/// Session cookies of a logged-in browser.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// The `auth_token` cookie
    pub auth_token: SmolStr,
    /// The `ct0` cookie, echoed as `x-csrf-token`
    pub csrf: SmolStr,
}

impl Credentials {
    /// Pair an `auth_token` with its `ct0` cookie.
    pub fn new(auth_token: impl Into<SmolStr>, csrf: impl Into<SmolStr>) -> Self {
        Self {
            auth_token: auth_token.into(),
            csrf: csrf.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("auth_token", &"<redacted>")
            .field("csrf", &"<redacted>")
            .finish()
    }
}

/// What to do with tweet text longer than [`TWEET_CHARACTER_LIMIT`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LongTweetBehavior {
    /// Send it as a regular tweet and let upstream decide
    #[default]
    Force,
    /// Refuse locally without sending anything
    Fail,
    /// Send it as a note tweet
    NoteTweet,
    /// Send it as a note tweet without checking the account can post them
    NoteTweetUnchecked,
}

/// Client configuration, read-only once the client is built.
#[derive(Debug, Clone, Builder)]
#[builder(start_fn = new)]
pub struct ClientOptions {
    /// Site domain, `twitter.com` or `x.com`
    #[builder(into, default = SmolStr::new_static("twitter.com"))]
    pub domain: SmolStr,
    /// Interface language
    #[builder(with = |lang: &str| normalize_language(lang), default = SmolStr::new_static("en"))]
    pub language: SmolStr,
    /// Handling of tweets over the character limit
    #[builder(default)]
    pub long_tweet_behavior: LongTweetBehavior,
    /// HTTP(S) proxy every request goes through
    #[builder(into)]
    pub proxy_url: Option<String>,
    /// `User-Agent` header
    #[builder(into, default = SmolStr::new_static(DEFAULT_USER_AGENT))]
    pub user_agent: SmolStr,
    /// Log every request with its status and timing
    #[builder(default)]
    pub verbose: bool,
    /// Look up the authenticated account when the client is connected
    #[builder(default = true)]
    pub auto_fetch_self: bool,
    /// Numeric id of the authenticated account, sent as the `twid` cookie
    #[builder(into)]
    pub twid: Option<SmolStr>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self::new().build()
    }
}

impl ClientOptions {
    /// Build a `reqwest` client honoring the proxy and user agent.
    pub fn http_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.as_str());
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(proxy) = &self.proxy_url {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }
        builder.build()
    }

    /// Value of the `Accept-Language` header.
    pub fn accept_language(&self) -> String {
        if self.language == "en" {
            "en-US,en;q=0.5".to_owned()
        } else {
            format!("{};q=0.5", self.language)
        }
    }
}

/// Regional English variants share the `en` interface.
pub fn normalize_language(lang: &str) -> SmolStr {
    match lang {
        "en-US" | "en-GB" => SmolStr::new_static("en"),
        other => SmolStr::new(other),
    }
}
