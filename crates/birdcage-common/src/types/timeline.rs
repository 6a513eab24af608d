//! Paginated collections: entries, cursors and slices.

use serde::Serialize;
use smol_str::SmolStr;

use super::{ListKind, Trend, TweetKind, UserKind};

/// Which end of a collection a cursor continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CursorDirection {
    /// Newer items (upstream `Top`)
    Previous,
    /// Older items (upstream `Bottom`, and anything unrecognized)
    Next,
    /// Collapsed replies in a conversation
    ShowMore,
    /// Replies hidden as low quality
    ShowSpam,
}

/// An opaque continuation token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cursor {
    /// Direction the token continues in
    pub direction: CursorDirection,
    /// Token value, only meaningful to the endpoint that produced it
    pub value: SmolStr,
}

/// The content of one timeline entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntryContent<T> {
    /// A parsed domain value
    Item(T),
    /// A pagination marker interleaved with the items
    Cursor(Cursor),
}

/// One item of a [`Slice`], tagged with the upstream entry id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry<T> {
    /// Opaque upstream id, e.g. `tweet-1234`
    pub id: SmolStr,
    /// Parsed item or cursor
    pub content: EntryContent<T>,
}

impl<T> Entry<T> {
    /// An entry holding a domain value.
    pub fn item(id: impl Into<SmolStr>, item: T) -> Self {
        Self {
            id: id.into(),
            content: EntryContent::Item(item),
        }
    }

    /// An entry holding a cursor.
    pub fn cursor(id: impl Into<SmolStr>, cursor: Cursor) -> Self {
        Self {
            id: id.into(),
            content: EntryContent::Cursor(cursor),
        }
    }

    /// The domain value, if this is not a cursor entry.
    pub fn as_item(&self) -> Option<&T> {
        match &self.content {
            EntryContent::Item(item) => Some(item),
            EntryContent::Cursor(_) => None,
        }
    }

    /// The cursor, if this is a cursor entry.
    pub fn as_cursor(&self) -> Option<&Cursor> {
        match &self.content {
            EntryContent::Cursor(cursor) => Some(cursor),
            EntryContent::Item(_) => None,
        }
    }
}

/// Continuation tokens extracted from a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cursors {
    /// First `Previous` cursor of the page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<SmolStr>,
    /// Last `Next` cursor of the page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<SmolStr>,
}

/// A named sub-timeline, e.g. a tab on the explore page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Timeline id to request the segment with
    pub id: SmolStr,
    /// Display name
    pub name: SmolStr,
}

/// One page of a paginated collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice<T> {
    /// Name of the timeline, when upstream provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<SmolStr>,
    /// Sibling timelines, when upstream provides them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<Segment>>,
    /// Items and cursors in upstream order
    pub entries: Vec<Entry<T>>,
    /// Continuation tokens found among `entries`
    pub cursors: Cursors,
}

impl<T> Slice<T> {
    /// Build a slice from entries, extracting its cursors.
    pub fn new(entries: Vec<Entry<T>>) -> Self {
        let cursors = crate::timeline::cursors_of(&entries);
        Self {
            name: None,
            segments: None,
            entries,
            cursors,
        }
    }

    /// The sentinel returned once pagination is exhausted.
    pub fn empty() -> Self {
        Self {
            name: None,
            segments: None,
            entries: Vec::new(),
            cursors: Cursors::default(),
        }
    }

    /// Iterate over the domain values, skipping cursor entries.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().filter_map(Entry::as_item)
    }

    /// Consume the slice, keeping only the domain values.
    pub fn into_items(self) -> Vec<T> {
        self.entries
            .into_iter()
            .filter_map(|e| match e.content {
                EntryContent::Item(item) => Some(item),
                EntryContent::Cursor(_) => None,
            })
            .collect()
    }

    /// Number of entries, cursors included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the page holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Slice<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// An item of a search timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchItem {
    /// Matching tweet
    Tweet(TweetKind),
    /// Matching account
    User(UserKind),
    /// Matching list
    List(ListKind),
}

/// An item of the explore page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DiscoverItem {
    /// Featured tweet
    Tweet(TweetKind),
    /// Trending topic
    Trend(Trend),
}
