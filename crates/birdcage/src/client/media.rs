//! Chunked media upload.
//!
//! An upload runs `INIT`, then one `APPEND` per chunk in order, then
//! `FINALIZE`. The first failure ends the upload and is returned; nothing
//! is retried. Alt text, when given, is attached by a detached request after
//! a successful `FINALIZE` and cannot fail the upload.

use birdcage_common::types::MediaUpload;
use birdcage_common::{ApiError, ApiResponse, HttpClient};
use serde_json::{Value, json};

use super::{MediaUploadArgs, TwitterClient};
use crate::dispatch::{CANONICAL_DOMAIN, rewrite_url, upstream_errors};
use crate::endpoint::Family;
use crate::error::RequestError;
use crate::options::PUBLIC_TOKEN;

/// Progress of an upload, reported after each stored chunk.
pub type Progress<'a> = dyn FnMut(&[u8], usize, usize) + Send + 'a;

/// A `multipart/form-data` body holding one binary field named `media`.
fn multipart(boundary: &str, chunk: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(chunk.len() + 192);
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(b"Content-Disposition: form-data; name=\"media\"; filename=\"blob\"\r\n");
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(chunk);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}

impl<C> TwitterClient<C>
where
    C: HttpClient + Send + Sync + 'static,
{
    /// Upload `media` and return the finalized media, whose id can be
    /// attached to tweets or used as an avatar.
    pub async fn upload(&self, media: &[u8], args: &MediaUploadArgs) -> ApiResponse<MediaUpload> {
        self.upload_with_progress(media, args, &mut |_, _, _| {}).await
    }

    /// [`upload`](Self::upload), calling `progress` with each chunk, its
    /// index and the number of chunks once the chunk is stored.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip_all, fields(bytes = media.len(), content_type = %args.content_type))
    )]
    pub async fn upload_with_progress(
        &self,
        media: &[u8],
        args: &MediaUploadArgs,
        progress: &mut Progress<'_>,
    ) -> ApiResponse<MediaUpload> {
        let endpoints = &self.inner.endpoints;

        let initialized = self
            .fetch(
                &endpoints.media_init,
                json!({
                    "total_bytes": media.len().to_string(),
                    "media_type": args.content_type,
                    "media_category": args.category(),
                }),
            )
            .await;
        let Some(init) = initialized.data else {
            if initialized.errors.is_empty() {
                return ApiResponse::client_error("media upload was not initialized");
            }
            return ApiResponse::failed(initialized.errors);
        };

        let chunk_size = args.chunk_size.max(1);
        let total = media.len().div_ceil(chunk_size);
        for (index, chunk) in media.chunks(chunk_size).enumerate() {
            if let Err(errors) = self.append(&init.media_id, index, chunk).await {
                return ApiResponse::failed(errors);
            }
            progress(chunk, index, total);
        }

        let finalized = self
            .fetch(&endpoints.media_finalize, json!({ "media_id": init.media_id }))
            .await;

        if let (Some(done), Some(text)) = (&finalized.data, &args.alt_text) {
            let client = self.clone();
            let media_id = done.media_id.clone();
            let text = text.clone();
            tokio::spawn(async move {
                let attached = client.add_alt_text(&media_id, &text).await;
                if attached.data.is_none() {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(%media_id, errors = ?attached.errors, "failed to attach alt text");
                }
            });
        }
        finalized
    }

    /// Store one chunk.
    async fn append(&self, media_id: &str, index: usize, chunk: &[u8]) -> Result<(), Vec<ApiError>> {
        let client_error = |e: RequestError| vec![ApiError::client(e)];

        let mut url =
            rewrite_url(self.inner.endpoints.media_init.url, &self.inner.options.domain).map_err(client_error)?;
        url.query_pairs_mut()
            .clear()
            .append_pair("command", "APPEND")
            .append_pair("media_id", media_id)
            .append_pair("segment_index", &index.to_string());
        let host = url.host_str().unwrap_or(CANONICAL_DOMAIN).to_owned();

        let boundary = format!("----birdcage{:016x}", rand::random::<u64>());
        let twid = self.twid().await;
        let request = self
            .session(twid.as_deref())
            .request(
                http::Method::POST,
                url.as_str(),
                &host,
                Some(PUBLIC_TOKEN),
                Family::Media,
                None,
            )
            .header(
                http::header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(multipart(&boundary, chunk))
            .map_err(|e| client_error(RequestError::from(e)))?;

        let response = self.transmit(request).await.map_err(|e| vec![e])?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let errors = serde_json::from_slice::<Value>(response.body())
            .map(|body| upstream_errors(&body))
            .unwrap_or_default();
        if errors.is_empty() {
            Err(vec![ApiError::client(format!("media upload failed: {status}"))])
        } else {
            Err(errors)
        }
    }
}

impl<C: HttpClient> TwitterClient<C> {
    /// Processing state of uploaded media, for polling video transcoding.
    pub async fn media_status(&self, media_id: &str) -> ApiResponse<MediaUpload> {
        self.fetch(&self.inner.endpoints.media_status, json!({ "media_id": media_id }))
            .await
    }

    /// Attach alt text to uploaded media.
    pub async fn add_alt_text(&self, media_id: &str, text: &str) -> ApiResponse<bool> {
        self.fetch(
            &self.inner.endpoints.media_metadata,
            json!({
                "allow_download_status": { "allow_download": "true" },
                "alt_text": { "text": text },
                "media_id": media_id,
            }),
        )
        .await
    }
}
