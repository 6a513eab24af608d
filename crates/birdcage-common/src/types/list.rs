//! Lists.

use chrono::{DateTime, Utc};
use serde::Serialize;
use smol_str::SmolStr;

use super::UserKind;

/// A list fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__typename")]
pub enum ListKind {
    /// Full list
    List(Box<List>),
    /// Deleted or private list
    UnavailableList(UnavailableList),
}

impl ListKind {
    /// The full list, if available.
    pub fn as_list(&self) -> Option<&List> {
        match self {
            ListKind::List(list) => Some(list),
            ListKind::UnavailableList(_) => None,
        }
    }
}

/// A curated list of accounts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List {
    /// List id
    pub id: SmolStr,
    /// Header image
    pub banner_url: Option<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Owner
    pub creator: UserKind,
    /// Description, empty when unset
    pub description: String,
    /// The viewer is a member of this list
    pub listed: bool,
    /// Number of members
    pub members_count: u64,
    /// The viewer muted this list
    pub muted: bool,
    /// Display name
    pub name: String,
    /// The viewer pinned this list
    pub pinned: bool,
    /// Visible to everyone
    pub public: bool,
    /// The viewer follows this list
    pub subscribed: bool,
    /// Number of followers
    pub subscribers_count: u64,
}

/// A list that could not be returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnavailableList {
    /// List id, if upstream included it
    pub id: Option<SmolStr>,
}
