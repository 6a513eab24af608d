use serde_json::Value;

use super::{at, count, string, text};
use crate::error::ParseError;
use crate::types::{MediaUpload, MediaUploadInit, ProcessingInfo};

fn media_id(value: &Value) -> Result<smol_str::SmolStr, ParseError> {
    string(Some(at(value, &["media_id_string"])?)).ok_or_else(|| ParseError::Type {
        path: "media_id_string".into(),
        expected: "string",
    })
}

fn optional_count(value: Option<&Value>) -> Option<u64> {
    value.filter(|v| !v.is_null()).map(|v| count(Some(v)))
}

/// Parse the `INIT` response.
pub fn media_upload_init(value: &Value) -> Result<MediaUploadInit, ParseError> {
    Ok(MediaUploadInit {
        media_id: media_id(value)?,
        expires_after_secs: optional_count(value.get("expires_after_secs")),
    })
}

/// Parse a `FINALIZE` or `STATUS` response.
pub fn media_upload(value: &Value) -> Result<MediaUpload, ParseError> {
    Ok(MediaUpload {
        media_id: media_id(value)?,
        size: optional_count(value.get("size")),
        expires_after_secs: optional_count(value.get("expires_after_secs")),
        processing: value.get("processing_info").filter(|p| p.is_object()).map(|p| {
            ProcessingInfo {
                state: string(p.get("state")).unwrap_or_default(),
                check_after_secs: optional_count(p.get("check_after_secs")),
                progress_percent: optional_count(p.get("progress_percent")),
                error: text(p.pointer("/error/message")),
            }
        }),
    })
}
