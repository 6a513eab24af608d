//! Request building and response reading.
//!
//! Turning an [`Endpoint`] plus caller parameters into an HTTP request, and
//! an HTTP response back into an [`ApiResponse`], are both pure. The client
//! only adds the network round trip, transaction signing and logging in
//! between.

use birdcage_common::{ApiError, ApiResponse, ClientError, DecodeError, HttpError};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::{Map, Value, json};
use url::Url;

use crate::endpoint::{Endpoint, Family, Verb};
use crate::error::RequestError;
use crate::flags;
use crate::options::{ClientOptions, Credentials, PUBLIC_TOKEN};

/// Host every endpoint URL is written against.
pub const CANONICAL_DOMAIN: &str = "twitter.com";

/// Bytes left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a query component.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Strings verbatim, everything else as JSON text.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Point a canonical URL at the configured domain, keeping any subdomain.
pub fn rewrite_url(url: &str, domain: &str) -> Result<Url, RequestError> {
    let invalid = |source| RequestError::Url {
        url: url.to_owned(),
        source,
    };
    let mut parsed = Url::parse(url).map_err(invalid)?;
    if domain == CANONICAL_DOMAIN {
        return Ok(parsed);
    }

    let swapped = match parsed.host_str() {
        Some(CANONICAL_DOMAIN) => Some(domain.to_owned()),
        Some(host) => host
            .strip_suffix(".twitter.com")
            .map(|sub| format!("{sub}.{domain}")),
        None => None,
    };
    if let Some(host) = swapped {
        parsed.set_host(Some(&host)).map_err(invalid)?;
    }
    Ok(parsed)
}

/// Endpoint default variables overlaid with the caller's parameters.
///
/// Caller values that are `null` mean "unset" and are dropped; nulls in the
/// defaults are sent as they are.
pub fn merge_variables<T>(endpoint: &Endpoint<T>, params: Value) -> Result<Map<String, Value>, RequestError> {
    let mut merged = if endpoint.variables.is_empty() {
        Map::new()
    } else {
        match serde_json::from_str(endpoint.variables) {
            Ok(Value::Object(defaults)) => defaults,
            Ok(_) => {
                return Err(RequestError::Variables {
                    endpoint: endpoint.name(),
                });
            }
            Err(source) => {
                return Err(RequestError::DefaultVariables {
                    endpoint: endpoint.name(),
                    source,
                });
            }
        }
    };

    match params {
        Value::Null => {}
        Value::Object(params) => {
            merged.extend(params.into_iter().filter(|(_, v)| !v.is_null()));
        }
        _ => {
            return Err(RequestError::Variables {
                endpoint: endpoint.name(),
            });
        }
    }
    Ok(merged)
}

/// `variables=...&features=...` for a structured GET.
fn structured_query(variables: &Map<String, Value>, features: Option<flags::Features>) -> String {
    let mut query = format!(
        "variables={}",
        encode_component(&Value::Object(variables.clone()).to_string())
    );
    if let Some(features) = features {
        query.push_str("&features=");
        query.push_str(&encode_component(&flags::to_json(features).to_string()));
    }
    query
}

/// One flat form-encoded object for the legacy and media families.
pub fn legacy_form(params: &Map<String, Value>) -> Result<String, RequestError> {
    let pairs: Vec<(&str, String)> = params
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| (k.as_str(), stringify(v)))
        .collect();
    Ok(serde_html_form::to_string(&pairs)?)
}

/// Read-only request context: who is calling and how.
#[derive(Debug, Clone, Copy)]
pub struct Session<'a> {
    /// Client configuration
    pub options: &'a ClientOptions,
    /// Session cookies
    pub credentials: &'a Credentials,
    /// Authenticated account id, when known
    pub twid: Option<&'a str>,
}

impl Session<'_> {
    fn cookie(&self) -> String {
        let Credentials { auth_token, csrf } = self.credentials;
        let lang = &self.options.language;
        match self.twid {
            Some(twid) => format!("auth_token={auth_token}; ct0={csrf}; twid=u%3D{twid}; lang={lang}"),
            None => format!("auth_token={auth_token}; ct0={csrf}; lang={lang}"),
        }
    }

    /// A request builder carrying every header upstream expects.
    pub fn request(
        &self,
        method: http::Method,
        url: &str,
        host: &str,
        token: Option<&str>,
        family: Family,
        transaction_id: Option<&str>,
    ) -> http::request::Builder {
        let domain = &self.options.domain;
        let mut builder = http::Request::builder()
            .method(method)
            .uri(url)
            .header(http::header::ACCEPT, "*/*")
            .header(http::header::CONNECTION, "keep-alive")
            .header(http::header::USER_AGENT, self.options.user_agent.as_str())
            .header("x-twitter-active-user", "yes")
            .header("x-twitter-auth-type", "OAuth2Session")
            .header(http::header::ACCEPT_LANGUAGE, self.options.accept_language())
            .header(http::header::HOST, host)
            .header(http::header::ORIGIN, format!("https://{domain}"))
            .header(http::header::REFERER, format!("https://{domain}/"))
            .header(http::header::AUTHORIZATION, token.unwrap_or(PUBLIC_TOKEN))
            .header("x-csrf-token", self.credentials.csrf.as_str())
            .header(http::header::COOKIE, self.cookie());

        if let Some(id) = transaction_id {
            builder = builder.header("x-client-transaction-id", id);
        }
        match family {
            Family::Structured => builder.header(http::header::CONTENT_TYPE, "application/json"),
            Family::Legacy => {
                builder.header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            }
            Family::Media => builder,
        }
    }
}

/// The URL an endpoint is sent to under the configured domain.
pub fn endpoint_url<T>(endpoint: &Endpoint<T>, domain: &str) -> Result<Url, RequestError> {
    rewrite_url(endpoint.url, domain)
}

/// Build the HTTP request for one call of `endpoint`.
pub fn build_request<T>(
    endpoint: &Endpoint<T>,
    params: Value,
    session: &Session<'_>,
    transaction_id: Option<&str>,
) -> Result<http::Request<Vec<u8>>, RequestError> {
    let url = endpoint_url(endpoint, &session.options.domain)?;
    let host = url.host_str().unwrap_or(CANONICAL_DOMAIN).to_owned();
    let variables = merge_variables(endpoint, params)?;

    let (uri, body) = match (endpoint.family, endpoint.verb) {
        (Family::Structured, Verb::Get) => (
            format!("{url}?{}", structured_query(&variables, endpoint.features)),
            Vec::new(),
        ),
        (Family::Structured, Verb::Post) => {
            let mut body = json!({ "variables": variables });
            if let Some(features) = endpoint.features {
                body["features"] = flags::to_json(features);
            }
            if let Some(query_id) = endpoint.query_id() {
                body["queryId"] = Value::from(query_id);
            }
            (url.to_string(), serde_json::to_vec(&body).map_err(RequestError::Body)?)
        }
        (_, Verb::Get) => {
            let form = legacy_form(&variables)?;
            if form.is_empty() {
                (url.to_string(), Vec::new())
            } else {
                (format!("{url}?{form}"), Vec::new())
            }
        }
        (_, Verb::Post) => (url.to_string(), legacy_form(&variables)?.into_bytes()),
    };

    Ok(session
        .request(
            endpoint.verb.method(),
            &uri,
            &host,
            endpoint.token,
            endpoint.family,
            transaction_id,
        )
        .body(body)?)
}

/// Upstream `errors`, tolerating entries that do not have the usual shape.
pub(crate) fn upstream_errors(body: &Value) -> Vec<ApiError> {
    match body.get("errors") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(errors)) => errors
            .iter()
            .map(|e| {
                serde_json::from_value(e.clone()).unwrap_or_else(|_| ApiError::client(stringify(e)))
            })
            .collect(),
        Some(other) => vec![ApiError::client(stringify(other))],
    }
}

/// Decode and parse a response into the envelope.
///
/// - an empty body is handed to the parser as `null`
/// - a body that is not JSON is a `-1` error
/// - upstream errors without a `data` value are returned as they are
/// - any other non-success status is a `-1` error carrying the body
/// - a parser failure replaces everything with a single `-1` error
pub fn read_response<T>(endpoint: &Endpoint<T>, response: http::Response<Vec<u8>>) -> ApiResponse<T> {
    let (parts, bytes) = response.into_parts();

    let body: Value = if bytes.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        match serde_json::from_slice(&bytes) {
            Ok(body) => body,
            Err(e) => return ClientError::from(DecodeError::from(e)).into(),
        }
    };

    let errors = upstream_errors(&body);
    if !errors.is_empty() && body.get("data").is_none_or(Value::is_null) {
        return ApiResponse::failed(errors);
    }
    if !parts.status.is_success() && errors.is_empty() {
        return ClientError::from(HttpError {
            status: parts.status,
            body: Some(bytes.into()),
        })
        .into();
    }

    match (endpoint.parser)(&body) {
        Ok(data) => ApiResponse::partial(errors, data),
        Err(e) => ClientError::from(e).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use birdcage_common::ParseError;

    fn id_str(body: &Value) -> Result<String, ParseError> {
        birdcage_common::parse::string(body.get("id_str"))
            .map(|s| s.to_string())
            .ok_or(ParseError::Missing("id_str".into()))
    }

    fn response(status: u16, body: &str) -> http::Response<Vec<u8>> {
        http::Response::builder()
            .status(status)
            .body(body.as_bytes().to_vec())
            .unwrap()
    }

    #[test]
    fn components_match_uri_encoding() {
        assert_eq!(encode_component(r#"{"a":1}"#), "%7B%22a%22%3A1%7D");
        assert_eq!(encode_component("it's (ok)!*~._-"), "it's%20(ok)!*~._-");
        assert_eq!(encode_component("ü"), "%C3%BC");
    }

    #[test]
    fn urls_follow_the_configured_domain() {
        let url = rewrite_url("https://twitter.com/i/api/graphql/x/Op", "x.com").unwrap();
        assert_eq!(url.as_str(), "https://x.com/i/api/graphql/x/Op");

        let url = rewrite_url("https://api.twitter.com/1.1/a.json", "x.com").unwrap();
        assert_eq!(url.host_str(), Some("api.x.com"));

        let url = rewrite_url("https://upload.twitter.com/1.1/media/upload.json", "twitter.com").unwrap();
        assert_eq!(url.host_str(), Some("upload.twitter.com"));
    }

    #[test]
    fn caller_nulls_are_unset() {
        let endpoint = Endpoint::post("https://twitter.com/x.json", id_str)
            .with_variables(r#"{"keep":null,"count":20}"#);
        let merged = merge_variables(&endpoint, json!({"count": 5, "cursor": null})).unwrap();
        assert_eq!(merged.get("count"), Some(&json!(5)));
        assert_eq!(merged.get("keep"), Some(&Value::Null));
        assert!(!merged.contains_key("cursor"));
    }

    #[test]
    fn non_object_params_are_rejected() {
        let endpoint = Endpoint::post("https://twitter.com/x.json", id_str);
        assert!(matches!(
            merge_variables(&endpoint, json!([1, 2])),
            Err(RequestError::Variables { .. })
        ));
    }

    #[test]
    fn legacy_values_are_strings_or_json() {
        let mut params = Map::new();
        params.insert("q".into(), json!("a b&c"));
        params.insert("n".into(), json!(1));
        params.insert("flag".into(), json!(true));
        params.insert("skip".into(), Value::Null);
        params.insert("obj".into(), json!({"text": "hi"}));
        let form = legacy_form(&params).unwrap();
        assert_eq!(form, "flag=true&n=1&obj=%7B%22text%22%3A%22hi%22%7D&q=a+b%26c");
    }

    #[test]
    fn envelope_rules() {
        let endpoint = Endpoint::get("https://api.twitter.com/1.1/x.json", id_str);

        let ok = read_response(&endpoint, response(200, r#"{"id_str":"7"}"#));
        assert_eq!(ok.data.as_deref(), Some("7"));
        assert!(ok.errors.is_empty());

        let upstream = read_response(
            &endpoint,
            response(200, r#"{"errors":[{"code":34,"message":"Sorry"}]}"#),
        );
        assert!(upstream.data.is_none());
        assert_eq!(upstream.errors[0].code, 34);

        let garbage = read_response(&endpoint, response(200, "<html>"));
        assert!(garbage.data.is_none());
        assert!(garbage.errors[0].is_client_error());

        let shape = read_response(&endpoint, response(200, "{}"));
        assert!(shape.data.is_none());
        assert_eq!(shape.errors.len(), 1);
        assert!(shape.errors[0].message.contains("id_str"));

        let status = read_response(&endpoint, response(503, "{}"));
        assert!(status.errors[0].message.contains("503"));
    }

    #[test]
    fn partial_data_keeps_upstream_errors() {
        let endpoint = Endpoint::query("https://twitter.com/i/api/graphql/q/Op", |body: &Value| {
            Ok(body.pointer("/data/value").cloned())
        });
        let partial = read_response(
            &endpoint,
            response(200, r#"{"data":{"value":1},"errors":[{"code":0,"message":"partial"}]}"#),
        );
        assert!(partial.is_partial());
        assert_eq!(partial.data, Some(Some(json!(1))));
    }

    #[test]
    fn body_failures_are_request_errors() {
        let source = serde_json::from_str::<Value>("{").unwrap_err();
        let error = RequestError::Body(source);
        assert!(error.to_string().starts_with("failed to serialize request body"));
        let code = miette::Diagnostic::code(&error).map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("birdcage::request::body"));
    }

    #[test]
    fn empty_body_is_null() {
        let endpoint = Endpoint::post("https://twitter.com/x.json", |body: &Value| Ok(body.is_null()));
        let response = read_response(&endpoint, response(200, ""));
        assert_eq!(response.data, Some(true));
    }
}
