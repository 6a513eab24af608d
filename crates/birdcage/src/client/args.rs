//! Argument types for client operations.
//!
//! Every paginated operation takes an argument struct implementing
//! [`Paginated`], so the stream variant can swap the cursor between pages.

use birdcage_common::{Paginated, SmolStr};
use chrono::{Datelike, NaiveDate};
use serde_json::{Value, json};

use crate::options::DEFAULT_CHUNK_SIZE;

macro_rules! paginated {
    ($($name:ident),+ $(,)?) => {
        $(
            impl Paginated for $name {
                fn cursor(&self) -> Option<&str> {
                    self.cursor.as_deref()
                }

                fn set_cursor(&mut self, cursor: Option<SmolStr>) {
                    self.cursor = cursor;
                }
            }
        )+
    };
}

/// A bare cursor, for timelines without other knobs.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct Page {
    /// Continue from this cursor
    #[builder(into)]
    pub cursor: Option<SmolStr>,
}

impl Page {
    /// Start at the given cursor.
    pub fn at(cursor: impl Into<SmolStr>) -> Self {
        Self {
            cursor: Some(cursor.into()),
        }
    }
}

/// Blocked accounts listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct BlockedAccountsArgs {
    /// Only accounts blocked through an imported list
    #[builder(default)]
    pub imported: bool,
    /// Continue from this cursor
    #[builder(into)]
    pub cursor: Option<SmolStr>,
}

/// Community timeline ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommunitySort {
    /// Most engaging first
    #[default]
    Relevance,
    /// Newest first
    Recency,
}

impl CommunitySort {
    pub(crate) fn ranking_mode(self) -> &'static str {
        match self {
            CommunitySort::Relevance => "Relevance",
            CommunitySort::Recency => "Recency",
        }
    }
}

/// Community tweets listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct CommunityTimelineArgs {
    /// Ordering
    #[builder(default)]
    pub sort: CommunitySort,
    /// Continue from this cursor
    #[builder(into)]
    pub cursor: Option<SmolStr>,
}

/// Which notifications tab to read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationTimeline {
    /// Everything
    #[default]
    All,
    /// Only activity from verified accounts
    Verified,
    /// Only mentions and replies
    Mentions,
}

impl NotificationTimeline {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            NotificationTimeline::All => "All",
            NotificationTimeline::Verified => "Verified",
            NotificationTimeline::Mentions => "Mentions",
        }
    }
}

/// Notification timeline listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct NotificationArgs {
    /// Tab to read
    #[builder(default)]
    pub timeline: NotificationTimeline,
    /// Continue from this cursor
    #[builder(into)]
    pub cursor: Option<SmolStr>,
}

/// Search tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchProduct {
    /// Ranked tweets
    #[default]
    Top,
    /// Newest tweets first
    Latest,
    /// Accounts
    People,
    /// Tweets with media
    Media,
    /// Lists
    Lists,
}

impl SearchProduct {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            SearchProduct::Top => "Top",
            SearchProduct::Latest => "Latest",
            SearchProduct::People => "People",
            SearchProduct::Media => "Media",
            SearchProduct::Lists => "Lists",
        }
    }
}

/// Search timeline listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct SearchArgs {
    /// Tab to search in
    #[builder(default)]
    pub product: SearchProduct,
    /// Continue from this cursor
    #[builder(into)]
    pub cursor: Option<SmolStr>,
}

/// Home timeline flavor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimelineKind {
    /// The "For you" tab
    #[default]
    Algorithmic,
    /// The "Following" tab, newest first
    Chronological,
}

/// Home timeline listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct TimelineArgs {
    /// Which tab
    #[builder(default)]
    pub kind: TimelineKind,
    /// Tweets the reader has already seen
    #[builder(default)]
    pub seen_tweet_ids: Vec<SmolStr>,
    /// Continue from this cursor
    #[builder(into)]
    pub cursor: Option<SmolStr>,
}

/// Reply ordering inside a conversation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TweetSort {
    /// Upstream ranking
    #[default]
    Relevance,
    /// Newest first
    Recency,
    /// Most liked first
    Likes,
}

impl TweetSort {
    pub(crate) fn ranking_mode(self) -> &'static str {
        match self {
            TweetSort::Relevance => "Relevance",
            TweetSort::Recency => "Recency",
            TweetSort::Likes => "Likes",
        }
    }
}

/// Conversation listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct TweetArgs {
    /// Reply ordering
    #[builder(default)]
    pub sort: TweetSort,
    /// Continue from this cursor
    #[builder(into)]
    pub cursor: Option<SmolStr>,
}

/// A user's tweets listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct UserTweetsArgs {
    /// Include the user's replies
    #[builder(default)]
    pub replies: bool,
    /// Continue from this cursor
    #[builder(into)]
    pub cursor: Option<SmolStr>,
}

paginated!(
    Page,
    BlockedAccountsArgs,
    CommunityTimelineArgs,
    NotificationArgs,
    SearchArgs,
    TimelineArgs,
    TweetArgs,
    UserTweetsArgs,
);

/// An account addressed by id or by handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRef {
    /// Numeric account id
    Id(SmolStr),
    /// Handle without the leading `@`
    Username(SmolStr),
}

impl UserRef {
    /// Address an account by numeric id.
    pub fn id(id: impl Into<SmolStr>) -> Self {
        UserRef::Id(id.into())
    }

    /// Address an account by handle.
    pub fn username(username: impl Into<SmolStr>) -> Self {
        UserRef::Username(username.into())
    }

    /// Parameters for the v1.1 relationship endpoints.
    pub(crate) fn legacy_params(&self) -> Value {
        match self {
            UserRef::Id(id) => json!({ "user_id": id }),
            UserRef::Username(username) => json!({ "screen_name": username }),
        }
    }
}

/// Who may see a part of the birth date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Everyone
    #[default]
    Public,
    /// Only the account itself
    Private,
    /// Accounts that follow each other with it
    Mutuals,
    /// Its followers
    Followers,
    /// Accounts it follows
    Following,
}

impl Visibility {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Visibility::Private => "self",
            Visibility::Mutuals => "mutualfollow",
            Visibility::Followers => "followers",
            Visibility::Following => "following",
            Visibility::Public => "public",
        }
    }
}

/// A complete profile. Every field is sent, so all must be set.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(on(String, into))]
pub struct UpdateProfile {
    /// Display name
    pub name: String,
    /// Bio
    pub description: String,
    /// Free-form location
    pub location: String,
    /// Website
    pub url: String,
    /// Date of birth
    pub birthday: NaiveDate,
    /// Who sees the birth year
    #[builder(default)]
    pub birth_year_visibility: Visibility,
    /// Who sees the day and month
    #[builder(default)]
    pub birthday_visibility: Visibility,
}

impl UpdateProfile {
    pub(crate) fn params(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "location": self.location,
            "url": self.url,
            "birthdate_year": self.birthday.year(),
            "birthdate_month": self.birthday.month(),
            "birthdate_day": self.birthday.day(),
            "birthdate_year_visibility": self.birth_year_visibility.as_str(),
            "birthdate_visibility": self.birthday_visibility.as_str(),
        })
    }
}

/// Name, description and privacy of a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
#[builder(on(String, into))]
pub struct ListDetails {
    /// List name
    pub name: String,
    /// List description
    #[builder(default)]
    pub description: String,
    /// Only visible to the owner
    #[builder(default)]
    pub private: bool,
}

/// Who may reply to a tweet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyPermission {
    /// Accounts the author follows
    Following,
    /// Verified accounts
    Verified,
    /// Accounts mentioned in the tweet
    Mentioned,
}

impl ReplyPermission {
    pub(crate) fn mode(self) -> &'static str {
        match self {
            ReplyPermission::Following => "Community",
            ReplyPermission::Verified => "Verified",
            ReplyPermission::Mentioned => "ByInvitation",
        }
    }
}

/// A tweet to post.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct NewTweet {
    /// Tweet text
    #[builder(into, default)]
    pub text: String,
    /// Post as a reply to this tweet
    #[builder(into)]
    pub reply_to: Option<SmolStr>,
    /// Ids of previously uploaded media
    #[builder(default)]
    pub media_ids: Vec<SmolStr>,
    /// Mark attached media as sensitive
    #[builder(default)]
    pub sensitive: bool,
    /// Restrict who may reply
    pub reply_permission: Option<ReplyPermission>,
}

/// A follow-up tweet in a thread.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct ThreadTweet {
    /// Tweet text
    #[builder(into, default)]
    pub text: String,
    /// Ids of previously uploaded media
    #[builder(default)]
    pub media_ids: Vec<SmolStr>,
}

/// What is being uploaded and how.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct MediaUploadArgs {
    /// MIME type, e.g. `image/png` or `video/mp4`
    #[builder(into)]
    pub content_type: String,
    /// Alt text attached once the upload is finalized
    #[builder(into)]
    pub alt_text: Option<String>,
    /// Bytes per APPEND request
    #[builder(default = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,
}

impl MediaUploadArgs {
    /// Upload category upstream derives processing from.
    pub(crate) fn category(&self) -> &'static str {
        if self.content_type.starts_with("video/") {
            "tweet_video"
        } else if self.content_type.ends_with("gif") {
            "tweet_gif"
        } else {
            "tweet_image"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_is_replaceable() {
        let mut args = SearchArgs::builder().product(SearchProduct::Latest).build();
        assert_eq!(args.cursor(), None);
        args.set_cursor(Some("next".into()));
        assert_eq!(args.cursor(), Some("next"));
        assert_eq!(args.product, SearchProduct::Latest);
    }

    #[test]
    fn profile_params() {
        let profile = UpdateProfile::builder()
            .name("bird")
            .description("tweets")
            .location("nest")
            .url("https://example.com")
            .birthday(NaiveDate::from_ymd_opt(1999, 3, 7).unwrap())
            .birth_year_visibility(Visibility::Private)
            .birthday_visibility(Visibility::Mutuals)
            .build();
        let params = profile.params();
        assert_eq!(params["birthdate_year"], 1999);
        assert_eq!(params["birthdate_month"], 3);
        assert_eq!(params["birthdate_day"], 7);
        assert_eq!(params["birthdate_year_visibility"], "self");
        assert_eq!(params["birthdate_visibility"], "mutualfollow");
    }

    #[test]
    fn media_categories() {
        let category = |ty: &str| MediaUploadArgs::builder().content_type(ty).build().category();
        assert_eq!(category("video/mp4"), "tweet_video");
        assert_eq!(category("image/gif"), "tweet_gif");
        assert_eq!(category("image/png"), "tweet_image");
        assert_eq!(
            MediaUploadArgs::builder().content_type("image/png").build().chunk_size,
            DEFAULT_CHUNK_SIZE
        );
    }

    #[test]
    fn relationship_params() {
        assert_eq!(UserRef::id("12").legacy_params(), json!({"user_id": "12"}));
        assert_eq!(
            UserRef::username("jack").legacy_params(),
            json!({"screen_name": "jack"})
        );
    }
}
