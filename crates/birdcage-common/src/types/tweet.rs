//! Tweets and their attachments.

use chrono::{DateTime, Utc};
use serde::Serialize;
use smol_str::SmolStr;

use super::UserKind;

/// A tweet fragment: full content, or a tombstone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__typename")]
pub enum TweetKind {
    /// Full tweet
    Tweet(Box<Tweet>),
    /// Deleted, withheld or otherwise unavailable tweet
    TweetTombstone(TweetTombstone),
}

impl TweetKind {
    /// The full tweet, if available.
    pub fn as_tweet(&self) -> Option<&Tweet> {
        match self {
            TweetKind::Tweet(tweet) => Some(tweet),
            TweetKind::TweetTombstone(_) => None,
        }
    }

    /// Consume into the full tweet, if available.
    pub fn into_tweet(self) -> Option<Tweet> {
        match self {
            TweetKind::Tweet(tweet) => Some(*tweet),
            TweetKind::TweetTombstone(_) => None,
        }
    }

    /// The tweet id, when it could be recovered.
    pub fn id(&self) -> Option<&SmolStr> {
        match self {
            TweetKind::Tweet(tweet) => Some(&tweet.id),
            TweetKind::TweetTombstone(tombstone) => tombstone.id.as_ref(),
        }
    }
}

/// A tweet with content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tweet {
    /// Numeric tweet id as a string
    pub id: SmolStr,
    /// Author profile
    pub author: UserKind,
    /// Full text; long-form note text when present
    pub text: String,
    /// Posting time
    pub created_at: DateTime<Utc>,
    /// Detected language
    pub lang: Option<SmolStr>,
    /// Id of the first tweet of the conversation
    pub conversation_id: Option<SmolStr>,
    /// Tweet this one replies to
    pub reply_to: Option<ReplyTo>,
    /// Client the tweet was posted from
    pub source: Option<String>,
    /// Likes
    pub likes_count: u64,
    /// Retweets
    pub retweets_count: u64,
    /// Replies
    pub replies_count: u64,
    /// Quote tweets
    pub quotes_count: u64,
    /// Bookmarks
    pub bookmarks_count: u64,
    /// Impressions
    pub views_count: u64,
    /// The viewer liked this tweet
    pub liked: bool,
    /// The viewer retweeted this tweet
    pub retweeted: bool,
    /// The viewer bookmarked this tweet
    pub bookmarked: bool,
    /// Marked as possibly sensitive
    pub sensitive: bool,
    /// Hashtags without the leading `#`
    pub hashtags: Vec<SmolStr>,
    /// Mentioned accounts
    pub mentions: Vec<Mention>,
    /// Links in the text
    pub urls: Vec<Link>,
    /// Attached photos, videos and gifs
    pub media: Vec<Media>,
    /// Quoted tweet
    pub quoted: Option<Box<TweetKind>>,
    /// Retweeted tweet, when this is a retweet
    pub retweet_of: Option<Box<TweetKind>>,
}

/// A tweet that cannot be shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TweetTombstone {
    /// Tweet id, if upstream included it
    pub id: Option<SmolStr>,
    /// Upstream explanation, e.g. "This Post was deleted by the Post author."
    pub reason: Option<String>,
}

/// Reply metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyTo {
    /// Parent tweet id
    pub tweet_id: SmolStr,
    /// Parent author id
    pub user_id: Option<SmolStr>,
    /// Parent author handle
    pub username: Option<SmolStr>,
}

/// A mentioned account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mention {
    /// Account id
    pub id: SmolStr,
    /// Handle
    pub username: SmolStr,
    /// Display name
    pub name: String,
}

/// A shortened link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// `t.co` link as it appears in the text
    pub url: String,
    /// Destination
    pub expanded_url: String,
    /// Truncated destination shown in clients
    pub display_url: String,
}

/// Kind of attached media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MediaKind {
    /// Still image
    Photo,
    /// Video
    Video,
    /// Animated gif, delivered as a looping video
    Gif,
}

/// An attached media item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Media {
    /// Media id
    pub id: SmolStr,
    /// Photo, video or gif
    pub kind: MediaKind,
    /// Image url, or the video thumbnail
    pub url: String,
    /// Alt text
    pub alt_text: Option<String>,
    /// Original width in pixels
    pub width: u64,
    /// Original height in pixels
    pub height: u64,
    /// Playable renditions, for videos and gifs
    pub variants: Vec<VideoVariant>,
}

/// One rendition of a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoVariant {
    /// Bits per second, zero for playlists
    pub bitrate: u64,
    /// MIME type
    pub content_type: SmolStr,
    /// Download url
    pub url: String,
}
