use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use smol_str::SmolStr;

use super::{items, string, text, timestamp, tweet, typename, user};
use crate::error::ParseError;
use crate::lookup::{Lookup, Pattern};
use crate::types::{Notification, NotificationKind, TweetKind};

/// `clientEventInfo.element` to [`NotificationKind`].
pub const NOTIFICATION_KINDS: Lookup<NotificationKind> = Lookup::new(
    &[
        (Pattern::Exact("device_follow_tweet_notification_entry"), NotificationKind::NewTweets),
        (Pattern::Exact("generic_magic_rec_pyle_recommended"), NotificationKind::RecommendedTweets),
        (Pattern::Exact("users_mentioned_you"), NotificationKind::Mentioned),
        (Pattern::Exact("users_followed_you"), NotificationKind::NewFollowers),
        (Pattern::Exact("users_liked_your_tweet"), NotificationKind::TweetLiked),
        (Pattern::Exact("users_retweeted_your_tweet"), NotificationKind::TweetRetweeted),
        (Pattern::Exact("users_liked_your_retweet"), NotificationKind::RetweetLiked),
        (Pattern::Exact("users_retweeted_your_retweet"), NotificationKind::RetweetRetweeted),
        (Pattern::Exact("users_added_you_to_lists"), NotificationKind::AddedToList),
        (Pattern::Exact("users_subscribed_to_your_list"), NotificationKind::ListSubscribedTo),
        (Pattern::Exact("generic_poll_voter_summary"), NotificationKind::PollFinished),
        (Pattern::Exact("generic_birdwatch_needs_your_help"), NotificationKind::BirdwatchNoteNeedsHelp),
        (Pattern::Exact("generic_birdwatch_helpful_valid_rater"), NotificationKind::BirdwatchNoteRatedHelpful),
        (Pattern::Exact("generic_birdwatch_not_helpful_valid_rater"), NotificationKind::BirdwatchNoteRatedNotHelpful),
        (Pattern::Exact("generic_birdwatch_delete_post_rater"), NotificationKind::BirdwatchNoteRatedDeleted),
        (Pattern::Exact("generic_login_notification"), NotificationKind::LoggedIn),
        (Pattern::Exact("generic_report_received"), NotificationKind::ReportReceived),
        (Pattern::Exact("generic_report_update"), NotificationKind::ReportUpdate),
        (Pattern::Exact("generic_subscription_promotion_premium"), NotificationKind::Advertisement),
    ],
    NotificationKind::Unknown,
);

static LIST_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"lists/(\d+)$").expect("valid regex"));
static NOTE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"birdwatch/n/(\d+)(\?src|$)").expect("valid regex"));
static LIST_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"List\s(.*?)$").expect("valid regex"));

fn capture(re: &Regex, haystack: Option<&str>) -> Option<String> {
    re.captures(haystack?)?.get(1).map(|m| m.as_str().to_owned())
}

impl NotificationKind {
    fn is_engagement(self) -> bool {
        matches!(
            self,
            Self::TweetLiked | Self::TweetRetweeted | Self::RetweetLiked | Self::RetweetRetweeted
        )
    }

    fn is_list(self) -> bool {
        matches!(self, Self::AddedToList | Self::ListSubscribedTo)
    }

    fn is_birdwatch(self) -> bool {
        matches!(
            self,
            Self::BirdwatchNoteNeedsHelp
                | Self::BirdwatchNoteRatedHelpful
                | Self::BirdwatchNoteRatedNotHelpful
                | Self::BirdwatchNoteRatedDeleted
        )
    }
}

/// Parse a notification `itemContent`, given its `clientEventInfo.element`.
pub fn notification(value: &Value, element: Option<&str>) -> Result<Notification, ParseError> {
    let kind = NOTIFICATION_KINDS.resolve(element);

    let mentioning = if kind == NotificationKind::Mentioned {
        tweet(value.pointer("/tweet_results/result"))?.into_tweet()
    } else {
        None
    };
    let template = value.get("template");
    let url = value.pointer("/notification_url/url").and_then(Value::as_str);
    let rich_text = value.pointer("/rich_message/text").and_then(Value::as_str);

    let object_id: Option<SmolStr> = if let Some(t) = &mentioning {
        Some(t.id.clone())
    } else if kind.is_engagement() {
        string(template.and_then(|t| t.pointer("/target_objects/0/result/rest_id")))
    } else if kind.is_list() {
        capture(&LIST_ID, url).map(Into::into)
    } else if kind.is_birdwatch() {
        capture(&NOTE_ID, url).map(Into::into)
    } else if kind == NotificationKind::ReportUpdate {
        rich_text.map(Into::into)
    } else {
        None
    };

    let detail = if kind.is_list() {
        capture(&LIST_NAME, rich_text)
    } else if kind.is_birdwatch() {
        text(template.and_then(|t| t.pointer("/additional_context/text")))
    } else if kind == NotificationKind::ReportUpdate {
        rich_text.map(str::to_owned)
    } else {
        None
    };

    let id = string(value.get("id")).or_else(|| mentioning.as_ref().map(|t| t.id.clone()));

    let tweets = match mentioning {
        Some(t) => vec![TweetKind::Tweet(Box::new(t))],
        None => items(template.and_then(|t| t.get("target_objects")))
            .iter()
            .filter(|o| typename(o) == Some("TimelineNotificationTweetRef"))
            .map(|o| tweet(o.get("result")))
            .collect::<Result<_, _>>()?,
    };
    let users = items(template.and_then(|t| t.get("from_users")))
        .iter()
        .map(|u| user(u.pointer("/user_results/result")))
        .collect::<Result<_, _>>()?;

    Ok(Notification {
        id,
        kind,
        created_at: timestamp(value.get("timestamp_ms")),
        object_id,
        text: detail,
        tweets,
        users,
    })
}
