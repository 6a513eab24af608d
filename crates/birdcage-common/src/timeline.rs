//! Timeline assembly
//!
//! Timeline responses carry an `instructions` array rather than a list of
//! items. The assembler takes the pinned entry (if any) followed by the
//! entries of the first `TimelineAddEntries` instruction, classifies each as
//! a cursor or an item of the expected family, and extracts the page's
//! continuation cursors.
//!
//! A missing `instructions` path is an error and is left for the caller to
//! propagate; the dispatcher turns it into a `-1` response error.

use serde_json::Value;
use smol_str::SmolStr;

use crate::error::ParseError;
use crate::parse::{at, cursor, items, list, notification, object, string, trend, tweet, typename, user};
use crate::types::{
    Cursors, CursorDirection, DiscoverItem, Entry, ListKind, Notification, SearchItem, Segment, Slice,
    Trend, TweetKind, UserKind,
};


const PIN_ENTRY: &str = "TimelinePinEntry";
const ADD_ENTRIES: &str = "TimelineAddEntries";
const ADD_TO_MODULE: &str = "TimelineAddToModule";
const CURSOR: &str = "TimelineTimelineCursor";

fn instruction_type(instruction: &Value) -> Option<&str> {
    instruction.get("type").and_then(Value::as_str)
}

fn as_instructions(instructions: &Value) -> Result<&[Value], ParseError> {
    instructions
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ParseError::Type {
            path: "instructions".into(),
            expected: "array",
        })
}

/// Raw entries of a timeline: the pinned entry first, then the entries of the
/// first add-entries instruction in their original order.
pub fn instruction_entries(instructions: &Value) -> Result<Vec<&Value>, ParseError> {
    let instructions = as_instructions(instructions)?;
    let pinned = instructions
        .iter()
        .find(|i| instruction_type(i) == Some(PIN_ENTRY))
        .and_then(|i| object(i.get("entry")));
    let added = instructions
        .iter()
        .find(|i| instruction_type(i) == Some(ADD_ENTRIES))
        .map(|i| items(i.get("entries")))
        .unwrap_or(&[]);

    Ok(pinned.into_iter().chain(added.iter()).collect())
}

/// The first `Previous` cursor and the last `Next` cursor among `entries`.
pub fn cursors_of<T>(entries: &[Entry<T>]) -> Cursors {
    let mut cursors = Cursors::default();
    for cursor in entries.iter().filter_map(Entry::as_cursor) {
        match cursor.direction {
            CursorDirection::Previous if cursors.previous.is_none() => {
                cursors.previous = Some(cursor.value.clone());
            }
            CursorDirection::Next => cursors.next = Some(cursor.value.clone()),
            _ => {}
        }
    }
    cursors
}

fn entry_id(entry: &Value) -> SmolStr {
    string(entry.get("entryId")).unwrap_or_default()
}

fn item_type(content: &Value) -> Option<&str> {
    typename(content).or_else(|| content.get("itemType").and_then(Value::as_str))
}

fn is_cursor(content: &Value) -> bool {
    item_type(content) == Some(CURSOR) || content.get("entryType").and_then(Value::as_str) == Some(CURSOR)
}

/// Cursor payload of an entry's content, whether it sits on the content
/// itself or inside `itemContent` (conversation threads do the latter).
fn cursor_content(content: &Value) -> Option<&Value> {
    if is_cursor(content) {
        return Some(content);
    }
    object(content.get("itemContent")).filter(|ic| is_cursor(ic))
}

type ItemParser<'f, T> = dyn FnMut(&Value) -> Result<Option<T>, ParseError> + 'f;

fn push_item<T>(
    out: &mut Vec<Entry<T>>,
    id: SmolStr,
    item_content: &Value,
    parse: &mut ItemParser<'_, T>,
) -> Result<(), ParseError> {
    if is_cursor(item_content) {
        out.push(Entry::cursor(id, cursor(item_content)?));
    } else if let Some(item) = parse(item_content)? {
        out.push(Entry::item(id, item));
    }
    Ok(())
}

/// Classify every raw entry, flattening modules (conversation threads, media
/// grids, carousels) into one entry per module item. Items `parse` does not
/// recognize are skipped.
fn collect<T>(raw: &[&Value], parse: &mut ItemParser<'_, T>) -> Result<Vec<Entry<T>>, ParseError> {
    let mut out = Vec::with_capacity(raw.len());
    for entry in raw {
        let id = entry_id(entry);
        let content = at(entry, &["content"])?;

        if let Some(c) = cursor_content(content) {
            out.push(Entry::cursor(id, cursor(c)?));
        } else if let Some(item_content) = object(content.get("itemContent")) {
            push_item(&mut out, id, item_content, parse)?;
        } else {
            for module_item in items(content.get("items")) {
                if let Some(item_content) = object(module_item.pointer("/item/itemContent")) {
                    push_item(&mut out, entry_id(module_item), item_content, parse)?;
                }
            }
        }
    }
    Ok(out)
}

fn tweet_item(content: &Value) -> Result<Option<TweetKind>, ParseError> {
    match item_type(content) {
        Some("TimelineTweet") => tweet(content.pointer("/tweet_results/result")).map(Some),
        _ => Ok(None),
    }
}

fn user_item(content: &Value) -> Result<Option<UserKind>, ParseError> {
    match item_type(content) {
        Some("TimelineUser") => user(content.pointer("/user_results/result")).map(Some),
        _ => Ok(None),
    }
}

fn list_item(content: &Value) -> Result<Option<ListKind>, ParseError> {
    match item_type(content) {
        Some("TimelineTwitterList") => list(content.get("list")).map(Some),
        _ => Ok(None),
    }
}

fn trend_item(content: &Value) -> Result<Option<Trend>, ParseError> {
    match item_type(content) {
        Some("TimelineTrend") => trend(content).map(Some),
        _ => Ok(None),
    }
}

/// A page of tweets.
pub fn entries(instructions: &Value) -> Result<Slice<TweetKind>, ParseError> {
    let raw = instruction_entries(instructions)?;
    Ok(Slice::new(collect(&raw, &mut tweet_item)?))
}

/// A page of accounts.
pub fn user_entries(instructions: &Value) -> Result<Slice<UserKind>, ParseError> {
    let raw = instruction_entries(instructions)?;
    Ok(Slice::new(collect(&raw, &mut user_item)?))
}

/// A page of lists.
pub fn list_entries(instructions: &Value) -> Result<Slice<ListKind>, ParseError> {
    let raw = instruction_entries(instructions)?;
    Ok(Slice::new(collect(&raw, &mut list_item)?))
}

/// A page of trends.
pub fn trend_entries(instructions: &Value) -> Result<Slice<Trend>, ParseError> {
    let raw = instruction_entries(instructions)?;
    Ok(Slice::new(collect(&raw, &mut trend_item)?))
}

/// A page of a media grid. Later pages deliver their items through a
/// `TimelineAddToModule` instruction instead of new entries.
pub fn media_entries(instructions: &Value) -> Result<Slice<TweetKind>, ParseError> {
    let raw = instruction_entries(instructions)?;
    let mut out = collect(&raw, &mut tweet_item)?;

    let module = as_instructions(instructions)?
        .iter()
        .find(|i| instruction_type(i) == Some(ADD_TO_MODULE));
    for module_item in items(module.and_then(|m| m.get("moduleItems"))) {
        if let Some(item_content) = object(module_item.pointer("/item/itemContent")) {
            push_item(&mut out, entry_id(module_item), item_content, &mut tweet_item)?;
        }
    }
    Ok(Slice::new(out))
}

/// A page of search results: tweets, accounts or lists depending on the
/// requested product.
pub fn search_entries(instructions: &Value) -> Result<Slice<SearchItem>, ParseError> {
    let raw = instruction_entries(instructions)?;
    let mut parse = |content: &Value| -> Result<Option<SearchItem>, ParseError> {
        Ok(match item_type(content) {
            Some("TimelineTweet") => tweet_item(content)?.map(SearchItem::Tweet),
            Some("TimelineUser") => user_item(content)?.map(SearchItem::User),
            Some("TimelineTwitterList") => list_item(content)?.map(SearchItem::List),
            _ => None,
        })
    };
    Ok(Slice::new(collect(&raw, &mut parse)?))
}

/// A page of notifications.
pub fn notification_entries(instructions: &Value) -> Result<Slice<Notification>, ParseError> {
    let raw = instruction_entries(instructions)?;
    let mut out = Vec::with_capacity(raw.len());
    for entry in raw {
        let id = entry_id(entry);
        let content = at(entry, &["content"])?;
        if is_cursor(content) {
            out.push(Entry::cursor(id, cursor(content)?));
        } else {
            let element = content.pointer("/clientEventInfo/element").and_then(Value::as_str);
            out.push(Entry::item(id, notification(at(content, &["itemContent"])?, element)?));
        }
    }
    Ok(Slice::new(out))
}

/// The explore page: trends and featured tweets, plus its tabs as segments.
pub fn discover_entries(body: &Value) -> Result<Slice<DiscoverItem>, ParseError> {
    let initial = at(body, &["initialTimeline"])?;
    let raw = instruction_entries(at(initial, &["timeline", "timeline", "instructions"])?)?;

    let mut out = Vec::with_capacity(raw.len());
    for entry in raw {
        let id = entry_id(entry);
        let content = at(entry, &["content"])?;
        if id.starts_with("trend-") {
            out.push(Entry::item(id, DiscoverItem::Trend(trend(at(content, &["itemContent"])?)?)));
        } else if id.starts_with("tweet-") {
            if let Some(t) = tweet_item(at(content, &["itemContent"])?)? {
                out.push(Entry::item(id, DiscoverItem::Tweet(t)));
            }
        } else if id.starts_with("cursor-") {
            out.push(Entry::cursor(id, cursor(content)?));
        }
    }

    let segments = items(body.get("timelines"))
        .iter()
        .filter_map(|t| {
            Some(Segment {
                id: string(t.pointer("/timeline/id"))?,
                name: string(t.get("id"))?,
            })
        })
        .collect();

    let mut slice = Slice::new(out);
    slice.name = string(initial.get("id"));
    slice.segments = Some(segments);
    Ok(slice)
}
