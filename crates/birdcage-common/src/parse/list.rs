use serde_json::Value;

use super::{count, flag, object, string, text, timestamp, typename, unexpected, user};
use crate::error::ParseError;
use crate::types::{List, ListKind, UnavailableList};

/// Parse a `list` fragment.
pub fn list(value: Option<&Value>) -> Result<ListKind, ParseError> {
    let Some(value) = object(value) else {
        return Ok(ListKind::UnavailableList(UnavailableList::default()));
    };
    let id = string(value.get("id_str"));

    match typename(value) {
        None | Some("List") => {}
        Some("ListUnavailable") => return Ok(ListKind::UnavailableList(UnavailableList { id })),
        Some(other) => return Err(unexpected("list", other)),
    }

    let (Some(id), Some(created_at)) = (id.clone(), timestamp(value.get("created_at"))) else {
        return Ok(ListKind::UnavailableList(UnavailableList { id }));
    };

    Ok(ListKind::List(Box::new(List {
        id,
        banner_url: text(value.pointer("/custom_banner_media/media_info/original_img_url"))
            .or_else(|| text(value.pointer("/default_banner_media/media_info/original_img_url"))),
        created_at,
        creator: user(value.pointer("/user_results/result"))?,
        description: text(value.get("description")).unwrap_or_default(),
        listed: flag(value, "is_member"),
        members_count: count(value.get("member_count")),
        muted: flag(value, "muting"),
        name: text(value.get("name")).unwrap_or_default(),
        pinned: flag(value, "pinning"),
        public: value.get("mode").and_then(Value::as_str) == Some("Public"),
        subscribed: flag(value, "following"),
        subscribers_count: count(value.get("subscriber_count")),
    })))
}
