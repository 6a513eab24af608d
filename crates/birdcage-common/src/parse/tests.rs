use super::*;
use crate::types::{
    CommunityKind, CommunityRole, CursorDirection, DmPolicy, ListKind, MediaKind, NotificationKind, TweetKind,
    UserKind,
};
use serde_json::json;

fn user_result() -> Value {
    json!({
        "__typename": "User",
        "rest_id": "44196397",
        "is_blue_verified": true,
        "core": {
            "created_at": "Tue Jun 02 20:12:29 +0000 2009",
            "name": "Elon Musk",
            "screen_name": "elonmusk"
        },
        "avatar": { "image_url": "https://pbs.twimg.com/profile_images/1/a.jpg" },
        "relationship_perspectives": { "following": true },
        "legacy": {
            "description": "",
            "followers_count": 200000000,
            "friends_count": "1100",
            "statuses_count": 70000,
            "pinned_tweet_ids_str": ["1"],
            "entities": { "url": { "urls": [{ "expanded_url": "https://x.com" }] } }
        }
    })
}

fn tweet_result() -> Value {
    json!({
        "__typename": "Tweet",
        "rest_id": "1700000000000000000",
        "core": { "user_results": { "result": user_result() } },
        "views": { "count": "1234" },
        "source": "<a href=\"https://mobile.twitter.com\" rel=\"nofollow\">Twitter Web App</a>",
        "legacy": {
            "created_at": "Fri Sep 08 12:00:00 +0000 2023",
            "full_text": "hello #rust @someone https://t.co/abc",
            "favorite_count": 10,
            "retweet_count": 2,
            "favorited": 1,
            "lang": "en",
            "conversation_id_str": "1700000000000000000",
            "entities": {
                "hashtags": [{ "text": "rust" }],
                "user_mentions": [{ "id_str": "5", "screen_name": "someone", "name": "Some One" }],
                "urls": [{ "url": "https://t.co/abc", "expanded_url": "https://example.com", "display_url": "example.com" }]
            },
            "extended_entities": {
                "media": [{
                    "id_str": "99",
                    "type": "animated_gif",
                    "media_url_https": "https://pbs.twimg.com/tweet_video_thumb/x.jpg",
                    "original_info": { "width": 480, "height": 270 },
                    "video_info": { "variants": [{ "bitrate": 0, "content_type": "video/mp4", "url": "https://video.twimg.com/x.mp4" }] }
                }]
            }
        }
    })
}

#[test]
fn full_user() {
    let parsed = user(Some(&user_result())).unwrap();
    let UserKind::User(u) = parsed else {
        panic!("expected a full user, got {parsed:?}");
    };
    assert_eq!(u.id, "44196397");
    assert_eq!(u.username, "elonmusk");
    assert_eq!(u.followers_count, 200_000_000);
    assert_eq!(u.following_count, 1100);
    assert_eq!(u.likes_count, 0);
    assert!(u.following);
    assert!(!u.followed_by);
    assert!(u.blue_verified);
    assert_eq!(u.url.as_deref(), Some("https://x.com"));
    assert_eq!(u.pinned_tweet_ids, vec![SmolStr::new("1")]);
}

#[test]
fn user_degrades() {
    assert!(matches!(user(None), Ok(UserKind::UnavailableUser(_))));

    let suspended = json!({ "__typename": "UserUnavailable", "rest_id": "7", "reason": "Suspended" });
    match user(Some(&suspended)).unwrap() {
        UserKind::SuspendedUser(s) => assert_eq!(s.id.as_deref(), Some("7")),
        other => panic!("unexpected {other:?}"),
    }

    let gone = json!({ "__typename": "UserUnavailable", "reason": "NoReason" });
    match user(Some(&gone)).unwrap() {
        UserKind::UnavailableUser(u) => assert_eq!(u.reason.as_deref(), Some("NoReason")),
        other => panic!("unexpected {other:?}"),
    }

    let no_date = json!({ "__typename": "User", "rest_id": "8", "legacy": { "screen_name": "x" } });
    match user(Some(&no_date)).unwrap() {
        UserKind::UnavailableUser(u) => assert_eq!(u.id.as_deref(), Some("8")),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn unknown_typename_is_an_error() {
    let odd = json!({ "__typename": "UserFromTheFuture", "rest_id": "1" });
    assert!(matches!(
        user(Some(&odd)),
        Err(ParseError::UnexpectedTypename { family: "user", .. })
    ));
}

#[test]
fn legacy_user_shape() {
    let v = json!({
        "id_str": "12",
        "screen_name": "jack",
        "name": "jack",
        "created_at": "Tue Mar 21 20:50:14 +0000 2006",
        "followers_count": 5,
        "protected": false,
        "profile_image_url_https": "https://pbs.twimg.com/profile_images/j.jpg"
    });
    let u = user_legacy(Some(&v)).unwrap().into_user().unwrap();
    assert_eq!(u.username, "jack");
    assert_eq!(u.followers_count, 5);
    assert_eq!(u.avatar_url.as_deref(), Some("https://pbs.twimg.com/profile_images/j.jpg"));
}

#[test]
fn full_tweet() {
    let t = tweet(Some(&tweet_result())).unwrap().into_tweet().unwrap();
    assert_eq!(t.id, "1700000000000000000");
    assert_eq!(t.author.as_user().map(|u| u.username.as_str()), Some("elonmusk"));
    assert_eq!(t.likes_count, 10);
    assert_eq!(t.replies_count, 0);
    assert_eq!(t.views_count, 1234);
    assert!(t.liked);
    assert!(!t.bookmarked);
    assert_eq!(t.hashtags, vec![SmolStr::new("rust")]);
    assert_eq!(t.mentions[0].username, "someone");
    assert_eq!(t.urls[0].expanded_url, "https://example.com");
    assert_eq!(t.media[0].kind, MediaKind::Gif);
    assert_eq!(t.media[0].variants.len(), 1);
    assert_eq!(t.source.as_deref(), Some("Twitter Web App"));
    assert!(t.quoted.is_none());
}

#[test]
fn tweet_unwraps_visibility_results_and_prefers_note_text() {
    let mut inner = tweet_result();
    inner.as_object_mut().unwrap().remove("__typename");
    inner["note_tweet"] = json!({ "note_tweet_results": { "result": { "text": "a much longer text" } } });
    let wrapped = json!({ "__typename": "TweetWithVisibilityResults", "tweet": inner });

    let t = tweet(Some(&wrapped)).unwrap().into_tweet().unwrap();
    assert_eq!(t.text, "a much longer text");
}

#[test]
fn tweet_nests_quotes_and_retweets() {
    let mut outer = tweet_result();
    outer["quoted_status_result"] = json!({ "result": { "__typename": "TweetTombstone", "tombstone": { "text": { "text": "gone" } } } });
    outer["legacy"]["retweeted_status_result"] = json!({ "result": tweet_result() });

    let t = tweet(Some(&outer)).unwrap().into_tweet().unwrap();
    match t.quoted.as_deref() {
        Some(TweetKind::TweetTombstone(ts)) => assert_eq!(ts.reason.as_deref(), Some("gone")),
        other => panic!("unexpected {other:?}"),
    }
    assert!(matches!(t.retweet_of.as_deref(), Some(TweetKind::Tweet(_))));
}

#[test]
fn tweet_degrades() {
    assert!(matches!(tweet(None), Ok(TweetKind::TweetTombstone(_))));

    let tomb = json!({ "__typename": "TweetTombstone", "tombstone": { "text": { "text": "This Post was deleted by the Post author." } } });
    match tweet(Some(&tomb)).unwrap() {
        TweetKind::TweetTombstone(t) => {
            assert_eq!(t.reason.as_deref(), Some("This Post was deleted by the Post author."))
        }
        other => panic!("unexpected {other:?}"),
    }

    let unavailable = json!({ "__typename": "TweetUnavailable", "reason": "Protected" });
    assert!(matches!(tweet(Some(&unavailable)), Ok(TweetKind::TweetTombstone(_))));

    let no_date = json!({ "__typename": "Tweet", "rest_id": "5", "legacy": {} });
    match tweet(Some(&no_date)).unwrap() {
        TweetKind::TweetTombstone(t) => assert_eq!(t.id.as_deref(), Some("5")),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn parsing_is_repeatable() {
    let v = tweet_result();
    assert_eq!(tweet(Some(&v)).unwrap(), tweet(Some(&v)).unwrap());
    let u = user_result();
    assert_eq!(user(Some(&u)).unwrap(), user(Some(&u)).unwrap());
}

#[test]
fn list_parses_and_degrades() {
    let v = json!({
        "id_str": "1500",
        "created_at": 1_600_000_000_000i64,
        "name": "rustaceans",
        "mode": "Public",
        "member_count": 42,
        "following": true,
        "user_results": { "result": user_result() }
    });
    let ListKind::List(l) = list(Some(&v)).unwrap() else {
        panic!("expected a list");
    };
    assert_eq!(l.name, "rustaceans");
    assert!(l.public);
    assert!(l.subscribed);
    assert!(!l.muted);
    assert_eq!(l.members_count, 42);
    assert_eq!(l.subscribers_count, 0);
    assert_eq!(l.description, "");

    let no_date = json!({ "id_str": "1501", "name": "x" });
    assert!(matches!(list(Some(&no_date)), Ok(ListKind::UnavailableList(_))));
    assert!(matches!(list(None), Ok(ListKind::UnavailableList(_))));
}

#[test]
fn community_roles_and_degrade() {
    let v = json!({
        "__typename": "Community",
        "id_str": "1",
        "created_at": 1_650_000_000_000i64,
        "name": "Rust",
        "join_policy": "Open",
        "role": "Admin",
        "rules": [{ "rest_id": "r1", "name": "Be nice" }],
        "creator_results": { "result": user_result() }
    });
    let c = community(Some(&v)).unwrap();
    let c = c.as_community().unwrap();
    assert_eq!(c.role, CommunityRole::Owner);
    assert!(c.can_join);
    assert!(!c.can_invite);
    assert_eq!(c.rules[0].name, "Be nice");
    assert!(c.rules[0].description.is_none());

    assert_eq!(COMMUNITY_ROLES.resolve(Some("NonMember")), CommunityRole::Guest);
    assert_eq!(COMMUNITY_ROLES.resolve(Some("Moderator")), CommunityRole::Moderator);

    let gone = json!({ "__typename": "CommunityUnavailable" });
    assert!(matches!(community(Some(&gone)), Ok(CommunityKind::UnavailableCommunity(_))));
    let no_date = json!({ "__typename": "Community", "id_str": "2" });
    assert!(matches!(community(Some(&no_date)), Ok(CommunityKind::UnavailableCommunity(_))));
}

#[test]
fn cursor_direction_defaults_to_next() {
    let c = cursor(&json!({ "value": "DAABCgAB", "cursorType": "Top" })).unwrap();
    assert_eq!(c.direction, CursorDirection::Previous);
    let c = cursor(&json!({ "value": "x", "cursorType": "ShowMoreThreads" })).unwrap();
    assert_eq!(c.direction, CursorDirection::ShowSpam);
    let c = cursor(&json!({ "value": "x", "cursorType": "Gap" })).unwrap();
    assert_eq!(c.direction, CursorDirection::Next);
    let c = cursor(&json!({ "value": "x" })).unwrap();
    assert_eq!(c.direction, CursorDirection::Next);
    assert!(cursor(&json!({ "cursorType": "Bottom" })).is_err());
}

#[test]
fn notification_kinds() {
    assert_eq!(NOTIFICATION_KINDS.resolve(Some("users_liked_your_tweet")), NotificationKind::TweetLiked);
    assert_eq!(
        NOTIFICATION_KINDS.resolve(Some("users_retweeted_your_retweet")),
        NotificationKind::RetweetRetweeted
    );
    assert_eq!(NOTIFICATION_KINDS.resolve(Some("brand_new_kind")), NotificationKind::Unknown);
    assert_eq!(NOTIFICATION_KINDS.resolve(None), NotificationKind::Unknown);
}

#[test]
fn liked_notification() {
    let v = json!({
        "id": "n1",
        "timestamp_ms": "1700000000000",
        "template": {
            "target_objects": [{ "__typename": "TimelineNotificationTweetRef", "result": tweet_result() }],
            "from_users": [{ "user_results": { "result": user_result() } }]
        }
    });
    let n = notification(&v, Some("users_liked_your_tweet")).unwrap();
    assert_eq!(n.kind, NotificationKind::TweetLiked);
    assert_eq!(n.object_id.as_deref(), Some("1700000000000000000"));
    assert_eq!(n.tweets.len(), 1);
    assert_eq!(n.users.len(), 1);
    assert!(n.created_at.is_some());
}

#[test]
fn list_and_note_notifications() {
    let v = json!({
        "id": "n2",
        "notification_url": { "url": "https://twitter.com/i/lists/1234" },
        "rich_message": { "text": "Someone added you to their List Rustaceans" }
    });
    let n = notification(&v, Some("users_added_you_to_lists")).unwrap();
    assert_eq!(n.object_id.as_deref(), Some("1234"));
    assert_eq!(n.text.as_deref(), Some("Rustaceans"));

    let v = json!({
        "id": "n3",
        "notification_url": { "url": "https://twitter.com/i/birdwatch/n/98765?src=notif" },
        "template": { "additional_context": { "text": "Note preview" } }
    });
    let n = notification(&v, Some("generic_birdwatch_needs_your_help")).unwrap();
    assert_eq!(n.object_id.as_deref(), Some("98765"));
    assert_eq!(n.text.as_deref(), Some("Note preview"));
}

#[test]
fn mention_notification_uses_tweet_id() {
    let v = json!({ "tweet_results": { "result": tweet_result() } });
    let n = notification(&v, Some("users_mentioned_you")).unwrap();
    assert_eq!(n.id.as_deref(), Some("1700000000000000000"));
    assert_eq!(n.object_id, n.id);
    assert_eq!(n.tweets.len(), 1);
}

#[test]
fn settings_defaults() {
    let s = settings(&json!({ "screen_name": "me", "allow_dms_from": "verified", "protected": true })).unwrap();
    assert!(s.autoplay);
    assert_eq!(s.country, "us");
    assert_eq!(s.dm_allowed_from, DmPolicy::Verified);
    assert!(s.dm_receipts);
    assert!(s.protected);
    assert_eq!(s.username.as_deref(), Some("me"));
    assert!(settings(&Value::Null).is_err());
}

#[test]
fn follow_requests_keep_ids_as_strings() {
    let r = follow_requests(&json!({
        "ids": ["11", 12],
        "next_cursor_str": "0",
        "previous_cursor_str": "-5"
    }))
    .unwrap();
    assert_eq!(r.ids, vec![SmolStr::new("11"), SmolStr::new("12")]);
    assert_eq!(r.next_cursor.as_deref(), Some("0"));
    assert_eq!(r.previous_cursor.as_deref(), Some("-5"));

    assert_eq!(follow_requests(&json!({})), Err(ParseError::Missing("ids".into())));
    assert!(follow_requests(&json!({ "ids": [true] })).is_err());
}

#[test]
fn counters_and_typeahead() {
    let c = unread_count(&json!({ "ntab_unread_count": 3, "xchat_unread_count": 2 })).unwrap();
    assert_eq!((c.notifications, c.inbox), (3, 2));

    let t = typeahead(&json!({
        "num_results": 2,
        "query": "rust",
        "topics": [{ "topic": "Rust" }],
        "users": [{ "id_str": "1" }]
    }))
    .unwrap();
    assert_eq!(t.results_count, 2);
    assert_eq!(t.topics, vec!["Rust".to_string()]);
    assert_eq!(t.user_ids, vec![SmolStr::new("1")]);
}

#[test]
fn upload_responses() {
    let init = media_upload_init(&json!({ "media_id": 1, "media_id_string": "1", "expires_after_secs": 86400 })).unwrap();
    assert_eq!(init.media_id, "1");
    assert_eq!(init.expires_after_secs, Some(86400));

    let status = media_upload(&json!({
        "media_id_string": "1",
        "processing_info": { "state": "in_progress", "check_after_secs": 5, "progress_percent": 40 }
    }))
    .unwrap();
    assert!(!status.is_ready());
    assert_eq!(status.processing.unwrap().check_after_secs, Some(5));

    assert!(media_upload_init(&json!({ "errors": [] })).is_err());
}

#[test]
fn coercions() {
    assert!(!truthy(None));
    assert!(!truthy(Some(&json!(0))));
    assert!(!truthy(Some(&json!(""))));
    assert!(truthy(Some(&json!("false"))));
    assert_eq!(count(Some(&json!("17"))), 17);
    assert_eq!(count(Some(&json!(null))), 0);
    assert!(items(None).is_empty());
    assert_eq!(
        at(&json!({ "a": { "b": null } }), &["a", "b", "c"]),
        Err(ParseError::Missing("a.b".into()))
    );
    assert!(timestamp(Some(&json!("Wed Oct 10 20:19:24 +0000 2018"))).is_some());
    assert!(timestamp(Some(&json!("2018-10-10T20:19:24Z"))).is_some());
    assert!(timestamp(Some(&json!("not a date"))).is_none());
}
