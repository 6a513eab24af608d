//! The transport seam
//!
//! Every request birdcage makes goes through [`HttpClient::send_http`]. The
//! default transport is `reqwest`; tests swap in a queue of canned responses.

use std::future::Future;

/// Sends one fully-built request and returns the fully-read response.
///
/// Bodies are in memory on both sides: requests are small, and responses are
/// parsed as a whole anyway.
#[trait_variant::make(Send)]
pub trait HttpClient {
    /// Whatever the transport fails with. Surfaced through
    /// [`TransportError::Other`](crate::TransportError::Other) unless a
    /// dedicated conversion exists.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Perform the round trip.
    fn send_http(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> impl Future<Output = Result<http::Response<Vec<u8>>, Self::Error>>;
}

#[cfg(feature = "reqwest-client")]
impl HttpClient for reqwest::Client {
    type Error = reqwest::Error;

    async fn send_http(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> Result<http::Response<Vec<u8>>, Self::Error> {
        let (parts, body) = request.into_parts();
        let sent = self
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers)
            .body(body)
            .send()
            .await?;

        let status = sent.status();
        let headers = sent.headers().clone();
        let body = sent.bytes().await?;

        let mut response = http::Response::new(body.to_vec());
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}

impl<T: HttpClient + Send + Sync> HttpClient for std::sync::Arc<T> {
    type Error = T::Error;

    async fn send_http(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> Result<http::Response<Vec<u8>>, Self::Error> {
        (**self).send_http(request).await
    }
}
