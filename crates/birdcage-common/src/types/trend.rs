//! Trending topics.

use serde::Serialize;
use smol_str::SmolStr;

/// A trending topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trend {
    /// Topic or hashtag
    pub name: SmolStr,
    /// Category line, e.g. "Trending in Sports"
    pub context: Option<String>,
    /// Related topics grouped under this one
    pub grouped_trends: Vec<SmolStr>,
}
