#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use birdcage::{ClientOptions, Credentials, HttpClient, TwitterClient};
use http::Response as HttpResponse;
use serde_json::{Value, json};
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct MockClient {
    // Queue of HTTP responses to pop for each send_http call
    queue: Arc<Mutex<VecDeque<HttpResponse<Vec<u8>>>>>,
    // Capture requests for assertions
    log: Arc<Mutex<Vec<http::Request<Vec<u8>>>>>,
}

impl MockClient {
    pub async fn push(&self, resp: HttpResponse<Vec<u8>>) {
        self.queue.lock().await.push_back(resp);
    }

    pub async fn push_json(&self, status: u16, body: Value) {
        self.push(response(status, serde_json::to_vec(&body).unwrap()))
            .await;
    }

    pub async fn push_raw(&self, status: u16, body: &str) {
        self.push(response(status, body.as_bytes().to_vec())).await;
    }

    pub async fn sent(&self) -> usize {
        self.log.lock().await.len()
    }

    pub async fn take_log(&self) -> Vec<http::Request<Vec<u8>>> {
        std::mem::take(&mut *self.log.lock().await)
    }
}

impl HttpClient for MockClient {
    type Error = std::convert::Infallible;

    fn send_http(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> impl core::future::Future<
        Output = core::result::Result<http::Response<Vec<u8>>, Self::Error>,
    > + Send {
        let log = self.log.clone();
        let queue = self.queue.clone();
        async move {
            log.lock().await.push(request);
            Ok(queue.lock().await.pop_front().expect("no queued response"))
        }
    }
}

/// A transport that never reaches the network.
#[derive(Clone, Default)]
pub struct OfflineClient;

impl HttpClient for OfflineClient {
    type Error = std::io::Error;

    fn send_http(
        &self,
        _request: http::Request<Vec<u8>>,
    ) -> impl core::future::Future<
        Output = core::result::Result<http::Response<Vec<u8>>, Self::Error>,
    > + Send {
        async move {
            Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))
        }
    }
}

pub fn response(status: u16, body: Vec<u8>) -> HttpResponse<Vec<u8>> {
    HttpResponse::builder().status(status).body(body).unwrap()
}

pub fn credentials() -> Credentials {
    Credentials::new("token", "csrf")
}

pub fn client_with<C: HttpClient>(http: C, options: ClientOptions) -> TwitterClient<C> {
    TwitterClient::builder()
        .http(http)
        .credentials(credentials())
        .options(options)
        .build()
}

pub fn client(http: &MockClient) -> TwitterClient<MockClient> {
    client_with(http.clone(), ClientOptions::new().auto_fetch_self(false).build())
}

pub fn header<'a>(request: &'a http::Request<Vec<u8>>, name: &str) -> Option<&'a str> {
    request.headers().get(name).and_then(|v| v.to_str().ok())
}

pub fn body_json(request: &http::Request<Vec<u8>>) -> Value {
    serde_json::from_slice(request.body()).unwrap()
}

/// The `variables` query parameter of a structured GET, decoded.
pub fn query_variables(request: &http::Request<Vec<u8>>) -> Value {
    let url = url::Url::parse(&request.uri().to_string()).unwrap();
    let (_, variables) = url
        .query_pairs()
        .find(|(k, _)| k == "variables")
        .expect("variables parameter");
    serde_json::from_str(&variables).unwrap()
}

pub fn user_result(id: &str, screen_name: &str) -> Value {
    json!({
        "__typename": "User",
        "rest_id": id,
        "core": {
            "created_at": "Tue Jun 02 20:12:29 +0000 2009",
            "name": "Some Bird",
            "screen_name": screen_name
        },
        "legacy": {
            "description": "",
            "followers_count": 10,
            "friends_count": 20
        }
    })
}

pub fn user_body(id: &str, screen_name: &str) -> Value {
    json!({ "data": { "user": { "result": user_result(id, screen_name) } } })
}

pub fn tweet_result(id: &str) -> Value {
    json!({
        "__typename": "Tweet",
        "rest_id": id,
        "legacy": {
            "created_at": "Fri Sep 08 12:00:00 +0000 2023",
            "full_text": format!("tweet {id}")
        }
    })
}

pub fn tweet_entry(id: &str) -> Value {
    json!({
        "entryId": format!("tweet-{id}"),
        "content": {
            "entryType": "TimelineTimelineItem",
            "itemContent": {
                "itemType": "TimelineTweet",
                "__typename": "TimelineTweet",
                "tweet_results": { "result": tweet_result(id) }
            }
        }
    })
}

pub fn cursor_entry(kind: &str, value: &str) -> Value {
    json!({
        "entryId": format!("cursor-{}-{value}", kind.to_lowercase()),
        "content": {
            "entryType": "TimelineTimelineCursor",
            "__typename": "TimelineTimelineCursor",
            "value": value,
            "cursorType": kind
        }
    })
}

/// A `UserTweets` page holding the given tweets and a bottom cursor.
pub fn user_tweets_page(ids: &[&str], next: &str) -> Value {
    let mut entries: Vec<Value> = ids.iter().map(|id| tweet_entry(id)).collect();
    entries.push(cursor_entry("Bottom", next));
    json!({
        "data": { "user": { "result": { "timeline": { "timeline": {
            "instructions": [{ "type": "TimelineAddEntries", "entries": entries }]
        } } } } }
    })
}
