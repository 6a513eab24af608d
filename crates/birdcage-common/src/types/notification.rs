//! Notifications.

use chrono::{DateTime, Utc};
use serde::Serialize;
use smol_str::SmolStr;

use super::{TweetKind, UserKind};

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NotificationKind {
    /// New tweets from accounts the viewer gets notifications for
    NewTweets,
    /// Recommended tweets
    RecommendedTweets,
    /// Someone mentioned the viewer
    Mentioned,
    /// Someone followed the viewer
    NewFollowers,
    /// Someone liked the viewer's tweet
    TweetLiked,
    /// Someone retweeted the viewer's tweet
    TweetRetweeted,
    /// Someone liked a tweet the viewer retweeted
    RetweetLiked,
    /// Someone retweeted a tweet the viewer retweeted
    RetweetRetweeted,
    /// Someone added the viewer to a list; the list name is in `text`
    AddedToList,
    /// Someone followed the viewer's list; the list name is in `text`
    ListSubscribedTo,
    /// A poll the viewer created has ended
    PollFinished,
    /// A community note needs ratings; a preview is in `text`
    BirdwatchNoteNeedsHelp,
    /// A note the viewer rated helpful is shown; a preview is in `text`
    BirdwatchNoteRatedHelpful,
    /// A note the viewer rated not helpful is shown; a preview is in `text`
    BirdwatchNoteRatedNotHelpful,
    /// A tweet with a note the viewer rated was deleted
    BirdwatchNoteRatedDeleted,
    /// New login to the account
    LoggedIn,
    /// A report was received
    ReportReceived,
    /// A report was resolved; the outcome is in `text`
    ReportUpdate,
    /// Subscription promotion
    Advertisement,
    /// Anything not recognized
    Unknown,
}

/// A notification timeline item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    /// Notification id, or the mentioning tweet's id
    pub id: Option<SmolStr>,
    /// Kind derived from the upstream template name
    pub kind: NotificationKind,
    /// When the notification was generated
    pub created_at: Option<DateTime<Utc>>,
    /// Id of the main object: tweet, list or note
    pub object_id: Option<SmolStr>,
    /// Extra text, see [`NotificationKind`]
    pub text: Option<String>,
    /// Tweets the notification refers to
    pub tweets: Vec<TweetKind>,
    /// Accounts that triggered the notification
    pub users: Vec<UserKind>,
}
