//! Endpoint descriptors.
//!
//! An [`Endpoint`] is plain data: where a request goes, how its parameters are
//! encoded, which bearer token it needs and how its response is parsed. The
//! dispatcher is the only thing that interprets it.

use birdcage_common::ParseError;
use serde_json::Value;

/// Full URL of a structured (GraphQL) operation, from `<queryId>/<Operation>`.
#[macro_export]
macro_rules! gql {
    ($route:literal) => {
        concat!("https://twitter.com/i/api/graphql/", $route)
    };
}

/// Full URL of a legacy v1.1 REST route.
#[macro_export]
macro_rules! v11 {
    ($route:literal) => {
        concat!("https://api.twitter.com/1.1/", $route)
    };
}

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Parameters travel in the query string
    Get,
    /// Parameters travel in the body
    Post,
}

impl Verb {
    /// The matching [`http::Method`].
    pub fn method(self) -> http::Method {
        match self {
            Verb::Get => http::Method::GET,
            Verb::Post => http::Method::POST,
        }
    }
}

/// Wire family, which decides how parameters and bodies are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// `variables` and `features` as query parameters or a JSON body
    Structured,
    /// One flat form-encoded object
    Legacy,
    /// Like [`Family::Legacy`], but sent without a `Content-Type`
    Media,
}

/// Signature of a response parser. It receives the whole decoded body.
pub type Parser<T> = fn(&Value) -> Result<T, ParseError>;

/// Describes one upstream operation.
pub struct Endpoint<T> {
    /// Full URL on `twitter.com`; the configured domain is substituted at dispatch
    pub url: &'static str,
    /// HTTP method
    pub verb: Verb,
    /// Encoding family
    pub family: Family,
    /// Default variables as a JSON object literal, or `""` for none
    pub variables: &'static str,
    /// Feature flags sent alongside structured requests
    pub features: Option<&'static [(&'static str, bool)]>,
    /// Bearer token override
    pub token: Option<&'static str>,
    /// A fresh `x-client-transaction-id` must be attached
    pub requires_transaction_id: bool,
    /// Turns the decoded body into the domain value
    pub parser: Parser<T>,
}

impl<T> Clone for Endpoint<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Endpoint<T> {}

impl<T> std::fmt::Debug for Endpoint<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint")
            .field("url", &self.url)
            .field("verb", &self.verb)
            .field("family", &self.family)
            .field("variables", &self.variables)
            .field("token", &self.token.is_some())
            .field("requires_transaction_id", &self.requires_transaction_id)
            .finish_non_exhaustive()
    }
}

impl<T> Endpoint<T> {
    const fn base(url: &'static str, verb: Verb, family: Family, parser: Parser<T>) -> Self {
        Self {
            url,
            verb,
            family,
            variables: "",
            features: None,
            token: None,
            requires_transaction_id: false,
            parser,
        }
    }

    /// A structured GET.
    pub const fn query(url: &'static str, parser: Parser<T>) -> Self {
        Self::base(url, Verb::Get, Family::Structured, parser)
    }

    /// A structured POST.
    pub const fn mutation(url: &'static str, parser: Parser<T>) -> Self {
        Self::base(url, Verb::Post, Family::Structured, parser)
    }

    /// A legacy GET.
    pub const fn get(url: &'static str, parser: Parser<T>) -> Self {
        Self::base(url, Verb::Get, Family::Legacy, parser)
    }

    /// A legacy POST.
    pub const fn post(url: &'static str, parser: Parser<T>) -> Self {
        Self::base(url, Verb::Post, Family::Legacy, parser)
    }

    /// A media upload command, sent as GET.
    pub const fn media(url: &'static str, parser: Parser<T>) -> Self {
        Self::base(url, Verb::Get, Family::Media, parser)
    }

    /// Set the default variables.
    pub const fn with_variables(mut self, variables: &'static str) -> Self {
        self.variables = variables;
        self
    }

    /// Set the feature flags.
    pub const fn with_features(mut self, features: &'static [(&'static str, bool)]) -> Self {
        self.features = Some(features);
        self
    }

    /// Override the bearer token.
    pub const fn with_token(mut self, token: &'static str) -> Self {
        self.token = Some(token);
        self
    }

    /// Require an `x-client-transaction-id` header.
    pub const fn with_transaction_id(mut self) -> Self {
        self.requires_transaction_id = true;
        self
    }

    /// Operation name: the last path segment, without any extension.
    pub fn name(&self) -> &'static str {
        let last = self.path_segments().last().copied().unwrap_or_default();
        last.split_once('.').map_or(last, |(name, _)| name)
    }

    /// Query id of a structured operation: the path segment before its name.
    pub fn query_id(&self) -> Option<&'static str> {
        match self.path_segments().as_slice() {
            [.., query_id, _] => Some(*query_id),
            _ => None,
        }
    }

    fn path_segments(&self) -> Vec<&'static str> {
        let url: &'static str = self.url;
        let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
        let path = rest.split_once('?').map_or(rest, |(path, _)| path);
        path.split('/').filter(|s| !s.is_empty()).skip(1).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(_: &Value) -> Result<(), ParseError> {
        Ok(())
    }

    #[test]
    fn macros_build_twitter_urls() {
        assert_eq!(
            gql!("abc/UserByRestId"),
            "https://twitter.com/i/api/graphql/abc/UserByRestId"
        );
        assert_eq!(v11!("account/settings.json"), "https://api.twitter.com/1.1/account/settings.json");
    }

    #[test]
    fn names_and_query_ids() {
        let endpoint = Endpoint::query(gql!("V7xdnRnvW6a8vIsMr9xK7A/HomeTimeline"), unit);
        assert_eq!(endpoint.name(), "HomeTimeline");
        assert_eq!(endpoint.query_id(), Some("V7xdnRnvW6a8vIsMr9xK7A"));

        let endpoint = Endpoint::get(v11!("account/settings.json"), unit);
        assert_eq!(endpoint.name(), "settings");
    }

    #[test]
    fn builder_methods_compose() {
        const ENDPOINT: Endpoint<()> = Endpoint::post(v11!("blocks/create.json"), unit)
            .with_variables(r#"{"skip_status":1}"#)
            .with_token("Bearer x")
            .with_transaction_id();
        assert_eq!(ENDPOINT.verb, Verb::Post);
        assert_eq!(ENDPOINT.family, Family::Legacy);
        assert_eq!(ENDPOINT.token, Some("Bearer x"));
        assert!(ENDPOINT.requires_transaction_id);
        assert!(ENDPOINT.features.is_none());
        assert_eq!(ENDPOINT.verb.method(), http::Method::POST);
    }
}
