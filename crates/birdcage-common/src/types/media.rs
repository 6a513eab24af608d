//! Media upload responses.

use serde::Serialize;
use smol_str::SmolStr;

/// Response to the upload `INIT` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaUploadInit {
    /// Server-assigned media id used by all later commands
    pub media_id: SmolStr,
    /// Seconds until the id expires
    pub expires_after_secs: Option<u64>,
}

/// Response to `FINALIZE` and `STATUS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaUpload {
    /// Media id
    pub media_id: SmolStr,
    /// Bytes received
    pub size: Option<u64>,
    /// Seconds until the id expires
    pub expires_after_secs: Option<u64>,
    /// Present while the server transcodes video or gifs
    pub processing: Option<ProcessingInfo>,
}

impl MediaUpload {
    /// Whether the media can be attached to a tweet right away.
    pub fn is_ready(&self) -> bool {
        self.processing
            .as_ref()
            .is_none_or(|p| p.state == "succeeded")
    }
}

/// Server-side processing progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessingInfo {
    /// `pending`, `in_progress`, `failed` or `succeeded`
    pub state: SmolStr,
    /// Suggested delay before polling again
    pub check_after_secs: Option<u64>,
    /// Percentage done
    pub progress_percent: Option<u64>,
    /// Failure description
    pub error: Option<String>,
}
