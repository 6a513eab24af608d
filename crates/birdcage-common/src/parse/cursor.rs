use serde_json::Value;

use super::{at, string};
use crate::error::ParseError;
use crate::lookup::{Lookup, Pattern};
use crate::types::{Cursor, CursorDirection};

/// Upstream `cursorType` to [`CursorDirection`].
///
/// Anything unrecognized, including `Bottom` and `Gap`, continues forward.
pub const CURSOR_DIRECTIONS: Lookup<CursorDirection> = Lookup::new(
    &[
        (Pattern::Exact("Top"), CursorDirection::Previous),
        (Pattern::Exact("ShowMore"), CursorDirection::ShowMore),
        (Pattern::Exact("ShowMoreThreads"), CursorDirection::ShowSpam),
    ],
    CursorDirection::Next,
);

/// Parse a `TimelineTimelineCursor` content object.
pub fn cursor(value: &Value) -> Result<Cursor, ParseError> {
    let token = at(value, &["value"])?;
    Ok(Cursor {
        direction: CURSOR_DIRECTIONS.resolve(value.get("cursorType").and_then(Value::as_str)),
        value: string(Some(token)).ok_or_else(|| ParseError::Type {
            path: "value".into(),
            expected: "string",
        })?,
    })
}
