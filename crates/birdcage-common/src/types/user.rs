//! Accounts.

use chrono::{DateTime, Utc};
use serde::Serialize;
use smol_str::SmolStr;

/// A user fragment: a full profile, or one of the degraded variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__typename")]
pub enum UserKind {
    /// Full profile
    User(Box<User>),
    /// Account suspended by upstream
    SuspendedUser(SuspendedUser),
    /// Account deactivated, withheld, or otherwise not returned
    UnavailableUser(UnavailableUser),
}

impl UserKind {
    /// The full profile, if available.
    pub fn as_user(&self) -> Option<&User> {
        match self {
            UserKind::User(user) => Some(user),
            _ => None,
        }
    }

    /// Consume into the full profile, if available.
    pub fn into_user(self) -> Option<User> {
        match self {
            UserKind::User(user) => Some(*user),
            _ => None,
        }
    }

    /// The account id, when it could be recovered.
    pub fn id(&self) -> Option<&SmolStr> {
        match self {
            UserKind::User(user) => Some(&user.id),
            UserKind::SuspendedUser(user) => user.id.as_ref(),
            UserKind::UnavailableUser(user) => user.id.as_ref(),
        }
    }
}

/// A full account profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    /// Numeric account id as a string
    pub id: SmolStr,
    /// Handle without the leading `@`
    pub username: SmolStr,
    /// Display name
    pub name: String,
    /// Bio
    pub description: String,
    /// Account creation time
    pub created_at: DateTime<Utc>,
    /// Free-form location
    pub location: Option<String>,
    /// Expanded profile link
    pub url: Option<String>,
    /// Profile picture
    pub avatar_url: Option<String>,
    /// Header image
    pub banner_url: Option<String>,
    /// Followers
    pub followers_count: u64,
    /// Accounts followed
    pub following_count: u64,
    /// Tweets, retweets and replies posted
    pub tweets_count: u64,
    /// Tweets liked
    pub likes_count: u64,
    /// Media tweets posted
    pub media_count: u64,
    /// Lists the account is a member of
    pub listed_count: u64,
    /// Tweets are only visible to followers
    pub protected: bool,
    /// Legacy verification badge
    pub verified: bool,
    /// Paid verification badge
    pub blue_verified: bool,
    /// The viewer follows this account
    pub following: bool,
    /// This account follows the viewer
    pub followed_by: bool,
    /// The viewer blocks this account
    pub blocking: bool,
    /// This account blocks the viewer
    pub blocked_by: bool,
    /// The viewer mutes this account
    pub muting: bool,
    /// The viewer can send this account direct messages
    pub can_dm: bool,
    /// Pinned tweet ids, newest first
    pub pinned_tweet_ids: Vec<SmolStr>,
}

/// A suspended account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuspendedUser {
    /// Account id, if upstream included it
    pub id: Option<SmolStr>,
}

/// An account that could not be returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnavailableUser {
    /// Account id, if upstream included it
    pub id: Option<SmolStr>,
    /// Upstream reason string, if any
    pub reason: Option<SmolStr>,
}
