//! Communities.

use chrono::{DateTime, Utc};
use serde::Serialize;
use smol_str::SmolStr;

use super::UserKind;

/// A community fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__typename")]
pub enum CommunityKind {
    /// Full community
    Community(Box<Community>),
    /// Removed or inaccessible community
    UnavailableCommunity(UnavailableCommunity),
}

impl CommunityKind {
    /// The full community, if available.
    pub fn as_community(&self) -> Option<&Community> {
        match self {
            CommunityKind::Community(community) => Some(community),
            CommunityKind::UnavailableCommunity(_) => None,
        }
    }
}

/// The viewer's relationship to a community.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommunityRole {
    /// Not a member
    Guest,
    /// Member
    Member,
    /// Moderator
    Moderator,
    /// Admin or creator
    Owner,
}

/// A community rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommunityRule {
    /// Rule id
    pub id: SmolStr,
    /// Short title
    pub name: String,
    /// Longer explanation
    pub description: Option<String>,
}

/// A topic-centred group with its own timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Community {
    /// Community id
    pub id: SmolStr,
    /// Header image
    pub banner_url: Option<String>,
    /// Anyone can join without an invite
    pub can_join: bool,
    /// Members may invite others
    pub can_invite: bool,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Founder
    pub creator: UserKind,
    /// Description, empty when unset
    pub description: String,
    /// The viewer is a member
    pub member: bool,
    /// Number of members
    pub members_count: u64,
    /// Number of moderators
    pub moderators_count: u64,
    /// Display name
    pub name: String,
    /// Marked as adult content
    pub nsfw: bool,
    /// The viewer pinned this community
    pub pinned: bool,
    /// The viewer's role
    pub role: CommunityRole,
    /// Rules, in display order
    pub rules: Vec<CommunityRule>,
    /// Primary topic
    pub topic: Option<String>,
}

/// A community that could not be returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnavailableCommunity {
    /// Community id, if upstream included it
    pub id: Option<SmolStr>,
    /// Upstream reason string, if any
    pub reason: Option<SmolStr>,
}
