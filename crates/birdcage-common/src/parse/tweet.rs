use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use smol_str::SmolStr;

use super::{count, flag, items, object, string, text, timestamp, typename, unexpected, user};
use crate::error::ParseError;
use crate::lookup::{Lookup, Pattern};
use crate::types::{Link, Media, MediaKind, Mention, ReplyTo, Tweet, TweetKind, TweetTombstone, VideoVariant};

static NULL: Value = Value::Null;

/// Matches the link text of the HTML anchor upstream uses for `source`.
static SOURCE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">([^<]*)<").expect("valid regex"));

/// Upstream `type` of an attached media item.
pub const MEDIA_KINDS: Lookup<MediaKind> = Lookup::new(
    &[
        (Pattern::Exact("photo"), MediaKind::Photo),
        (Pattern::Exact("video"), MediaKind::Video),
        (Pattern::Exact("animated_gif"), MediaKind::Gif),
    ],
    MediaKind::Photo,
);

/// Parse a GraphQL `tweet_results.result` fragment.
pub fn tweet(value: Option<&Value>) -> Result<TweetKind, ParseError> {
    let Some(value) = object(value) else {
        return Ok(tombstone(None, None));
    };

    match typename(value) {
        None | Some("Tweet") => {}
        Some("TweetWithVisibilityResults") => return tweet(value.get("tweet")),
        Some("TweetTombstone") => {
            return Ok(tombstone(
                string(value.get("rest_id")),
                text(value.pointer("/tombstone/text/text")),
            ));
        }
        Some("TweetUnavailable") => {
            return Ok(tombstone(string(value.get("rest_id")), text(value.get("reason"))));
        }
        Some(other) => return Err(unexpected("tweet", other)),
    }

    let legacy = value.get("legacy").unwrap_or(&NULL);
    let id = string(value.get("rest_id")).or_else(|| string(legacy.get("id_str")));
    let (Some(id), Some(created_at)) = (id.clone(), timestamp(legacy.get("created_at"))) else {
        return Ok(tombstone(id, None));
    };

    let author = user(value.pointer("/core/user_results/result"))?;
    let quoted = match object(value.pointer("/quoted_status_result/result")) {
        Some(q) => Some(Box::new(tweet(Some(q))?)),
        None => None,
    };
    let retweet_of = match object(legacy.pointer("/retweeted_status_result/result")) {
        Some(r) => Some(Box::new(tweet(Some(r))?)),
        None => None,
    };

    let entities = legacy.get("entities").unwrap_or(&NULL);
    let media = match legacy.pointer("/extended_entities/media") {
        Some(m) if m.is_array() => items(Some(m)),
        _ => items(entities.get("media")),
    };

    Ok(TweetKind::Tweet(Box::new(Tweet {
        id,
        author,
        text: text(value.pointer("/note_tweet/note_tweet_results/result/text"))
            .or_else(|| text(legacy.get("full_text")))
            .unwrap_or_default(),
        created_at,
        lang: string(legacy.get("lang")),
        conversation_id: string(legacy.get("conversation_id_str")),
        reply_to: string(legacy.get("in_reply_to_status_id_str")).map(|tweet_id| ReplyTo {
            tweet_id,
            user_id: string(legacy.get("in_reply_to_user_id_str")),
            username: string(legacy.get("in_reply_to_screen_name")),
        }),
        source: value
            .get("source")
            .and_then(Value::as_str)
            .and_then(|s| SOURCE_NAME.captures(s))
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_owned()),
        likes_count: count(legacy.get("favorite_count")),
        retweets_count: count(legacy.get("retweet_count")),
        replies_count: count(legacy.get("reply_count")),
        quotes_count: count(legacy.get("quote_count")),
        bookmarks_count: count(legacy.get("bookmark_count")),
        views_count: count(value.pointer("/views/count")),
        liked: flag(legacy, "favorited"),
        retweeted: flag(legacy, "retweeted"),
        bookmarked: flag(legacy, "bookmarked"),
        sensitive: flag(legacy, "possibly_sensitive"),
        hashtags: items(entities.get("hashtags"))
            .iter()
            .filter_map(|h| string(h.get("text")))
            .collect(),
        mentions: items(entities.get("user_mentions"))
            .iter()
            .filter_map(mention)
            .collect(),
        urls: items(entities.get("urls")).iter().filter_map(link).collect(),
        media: media.iter().filter_map(attachment).collect(),
        quoted,
        retweet_of,
    })))
}

fn tombstone(id: Option<SmolStr>, reason: Option<String>) -> TweetKind {
    TweetKind::TweetTombstone(TweetTombstone { id, reason })
}

fn mention(value: &Value) -> Option<Mention> {
    Some(Mention {
        id: string(value.get("id_str"))?,
        username: string(value.get("screen_name"))?,
        name: text(value.get("name")).unwrap_or_default(),
    })
}

fn link(value: &Value) -> Option<Link> {
    let url = text(value.get("url"))?;
    Some(Link {
        expanded_url: text(value.get("expanded_url")).unwrap_or_else(|| url.clone()),
        display_url: text(value.get("display_url")).unwrap_or_else(|| url.clone()),
        url,
    })
}

fn attachment(value: &Value) -> Option<Media> {
    Some(Media {
        id: string(value.get("id_str"))?,
        kind: MEDIA_KINDS.resolve(value.get("type").and_then(Value::as_str)),
        url: text(value.get("media_url_https"))?,
        alt_text: text(value.get("ext_alt_text")),
        width: count(value.pointer("/original_info/width")),
        height: count(value.pointer("/original_info/height")),
        variants: items(value.pointer("/video_info/variants"))
            .iter()
            .filter_map(|v| {
                Some(VideoVariant {
                    bitrate: count(v.get("bitrate")),
                    content_type: string(v.get("content_type"))?,
                    url: text(v.get("url"))?,
                })
            })
            .collect(),
    })
}
