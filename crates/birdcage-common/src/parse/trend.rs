use serde_json::Value;

use super::{at, items, string, text};
use crate::error::ParseError;
use crate::types::Trend;

/// Parse a `TimelineTrend` item.
pub fn trend(value: &Value) -> Result<Trend, ParseError> {
    let name = at(value, &["name"])?;
    Ok(Trend {
        name: string(Some(name)).unwrap_or_default(),
        context: text(value.pointer("/trend_metadata/domain_context")),
        grouped_trends: items(value.get("grouped_trends"))
            .iter()
            .filter_map(|t| string(t.get("name")))
            .collect(),
    })
}
