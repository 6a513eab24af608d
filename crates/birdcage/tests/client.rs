mod support;

use std::sync::Arc;

use birdcage::options::{ALT_TOKEN, OAUTH_KEY};
use birdcage::types::TweetKind;
use birdcage::{
    ClientOptions, LongTweetBehavior, NewTweet, Page, ReplyPermission, SearchArgs, SearchProduct,
    ThreadTweet, TimelineArgs, TimelineKind, TransactionIdGenerator, TwitterClient, UserRef,
    UserTweetsArgs,
};
use futures::StreamExt;
use serde_json::{Value, json};
use support::*;

fn created(id: &str) -> Value {
    json!({ "data": { "create_tweet": { "tweet_results": { "result": tweet_result(id) } } } })
}

#[tokio::test]
async fn pagination_stops_when_the_cursor_repeats() {
    let http = MockClient::default();
    let client = client(&http);
    http.push_json(200, user_tweets_page(&["1", "2"], "c1")).await;
    http.push_json(200, user_tweets_page(&["3"], "c2")).await;
    http.push_json(200, user_tweets_page(&[], "c2")).await;

    let pages: Vec<_> = client
        .user_tweets("44", UserTweetsArgs::default())
        .collect()
        .await;
    assert_eq!(pages.len(), 2);
    let ids: Vec<_> = pages
        .iter()
        .flat_map(|p| p.data.as_ref().unwrap().items())
        .filter_map(TweetKind::id)
        .map(|id| id.to_string())
        .collect();
    assert_eq!(ids, ["1", "2", "3"]);

    let log = http.take_log().await;
    assert_eq!(log.len(), 3);
    let cursors: Vec<Value> = log.iter().map(|r| query_variables(r)["cursor"].clone()).collect();
    assert_eq!(cursors, [Value::Null, json!("c1"), json!("c2")]);
    assert_eq!(query_variables(&log[0])["userId"], "44");
    assert_eq!(query_variables(&log[0])["count"], 40);
}

#[tokio::test]
async fn pagination_starts_from_the_given_cursor() {
    let http = MockClient::default();
    let client = client(&http);
    http.push_json(200, user_tweets_page(&["9"], "z")).await;
    http.push_json(200, user_tweets_page(&[], "z")).await;

    let args = UserTweetsArgs::builder().replies(true).cursor("start").build();
    let pages: Vec<_> = client.user_tweets("44", args).collect().await;
    assert_eq!(pages.len(), 1);

    let log = http.take_log().await;
    assert!(log[0].uri().path().ends_with("/UserTweetsAndReplies"));
    assert_eq!(query_variables(&log[0])["cursor"], "start");
    assert_eq!(query_variables(&log[1])["cursor"], "z");
}

#[tokio::test]
async fn stream_pages_are_lazy() {
    let http = MockClient::default();
    let client = client(&http);
    http.push_json(200, user_tweets_page(&["1"], "c1")).await;

    let mut pages = Box::pin(client.user_tweets("44", UserTweetsArgs::default()).take(1));
    assert_eq!(http.sent().await, 0);
    let first = pages.next().await;
    assert!(first.is_some());
    assert!(pages.next().await.is_none());
    assert_eq!(http.sent().await, 1);
}

#[tokio::test]
async fn looking_up_yourself_refreshes_the_cache() {
    let http = MockClient::default();
    let client = client_with(
        http.clone(),
        ClientOptions::new().twid("44196397").auto_fetch_self(false).build(),
    );
    assert!(client.self_user().await.is_none());

    http.push_json(200, user_body("12", "someone")).await;
    client.user(UserRef::username("someone")).await;
    assert!(client.self_user().await.is_none());

    http.push_json(200, user_body("44196397", "me")).await;
    client.user(UserRef::username("me")).await;
    let me = client.self_user().await.unwrap();
    assert_eq!(me.username, "me");

    // Renamed, still the same account.
    http.push_json(200, user_body("44196397", "me_again")).await;
    client.user(UserRef::id("44196397")).await;
    assert_eq!(client.self_user().await.unwrap().username, "me_again");
}

#[tokio::test]
async fn refresh_self_reads_the_handle_from_settings() {
    let http = MockClient::default();
    let generator: Arc<dyn TransactionIdGenerator> =
        Arc::new(|_: &http::Method, _: &str| Ok::<_, birdcage::TransactionError>("tx".to_owned()));
    let client = TwitterClient::builder()
        .http(http.clone())
        .credentials(credentials())
        .transaction(generator)
        .build();
    http.push_json(200, json!({ "screen_name": "me" })).await;
    http.push_json(200, user_body("44196397", "me")).await;

    let me = client.refresh_self().await;
    assert!(me.is_ok());
    assert_eq!(client.twid().await.as_deref(), Some("44196397"));

    let log = http.take_log().await;
    assert!(log[0].uri().path().ends_with("/account/settings.json"));
    assert_eq!(query_variables(&log[1])["screen_name"], "me");

    // Known id now goes into the cookie.
    http.push_json(200, json!({ "data": { "favorite_tweet": "Done" } })).await;
    client.like("1").await;
    let log = http.take_log().await;
    assert!(header(&log[0], "cookie").unwrap().contains("twid=u%3D44196397"));
}

#[tokio::test]
async fn refresh_self_without_settings_is_an_error() {
    let http = MockClient::default();
    let client = client(&http);

    // No transaction generator, so settings cannot be read.
    let me = client.refresh_self().await;
    assert!(me.data.is_none());
    assert!(me.errors[0].is_client_error());
    assert!(client.self_user().await.is_none());
}

#[tokio::test]
async fn long_tweets_can_be_refused_locally() {
    let http = MockClient::default();
    let client = client_with(
        http.clone(),
        ClientOptions::new()
            .long_tweet_behavior(LongTweetBehavior::Fail)
            .auto_fetch_self(false)
            .build(),
    );

    let tweet = NewTweet::builder().text("a".repeat(281)).build();
    let posted = client.create_tweet(&tweet, &[]).await;
    assert!(posted.data.is_none());
    assert_eq!(posted.errors[0].code, -1);
    assert_eq!(posted.errors[0].message, "Tweet exceeded character limit");
    assert_eq!(http.sent().await, 0);

    // Emoji count twice, like upstream does.
    http.push_json(200, created("1")).await;
    let tweet = NewTweet::builder().text("🐦".repeat(140)).build();
    assert!(client.create_tweet(&tweet, &[]).await.is_ok());
}

#[tokio::test]
async fn long_tweets_become_note_tweets() {
    let http = MockClient::default();
    let client = client_with(
        http.clone(),
        ClientOptions::new()
            .long_tweet_behavior(LongTweetBehavior::NoteTweet)
            .auto_fetch_self(false)
            .build(),
    );
    http.push_json(
        200,
        json!({ "data": { "notetweet_create": { "tweet_results": { "result": tweet_result("8") } } } }),
    )
    .await;

    let tweet = NewTweet::builder().text("b".repeat(300)).build();
    let posted = client.create_tweet(&tweet, &[]).await;
    assert_eq!(posted.data.as_ref().and_then(TweetKind::id).map(|id| id.as_str()), Some("8"));

    let log = http.take_log().await;
    assert!(log[0].uri().path().ends_with("/CreateNoteTweet"));
}

#[tokio::test]
async fn threads_chain_replies_to_the_previous_tweet() {
    let http = MockClient::default();
    let client = client(&http);
    http.push_json(200, created("100")).await;
    http.push_json(200, created("101")).await;
    http.push_json(200, created("102")).await;

    let root = NewTweet::builder()
        .text("1/3")
        .media_ids(vec!["55".into()])
        .sensitive(true)
        .reply_permission(ReplyPermission::Mentioned)
        .build();
    let thread = [
        ThreadTweet::builder().text("2/3").build(),
        ThreadTweet::builder().text("3/3").build(),
    ];
    let posted = client.create_tweet(&root, &thread).await;
    assert_eq!(posted.data.as_ref().and_then(TweetKind::id).map(|id| id.as_str()), Some("100"));

    let log = http.take_log().await;
    assert_eq!(log.len(), 3);
    assert_eq!(header(&log[0], "authorization"), Some(OAUTH_KEY));

    let variables: Vec<Value> = log.iter().map(|r| body_json(r)["variables"].clone()).collect();
    assert_eq!(variables[0]["tweet_text"], "1/3");
    assert_eq!(variables[0]["batch_compose"], "BatchFirst");
    assert_eq!(variables[0]["conversation_control"]["mode"], "ByInvitation");
    assert_eq!(variables[0]["media"]["media_entities"][0]["media_id"], "55");
    assert!(variables[0].get("reply").is_none());

    assert_eq!(variables[1]["batch_compose"], "BatchSubsequent");
    assert_eq!(variables[1]["reply"]["in_reply_to_tweet_id"], "100");
    assert_eq!(variables[1]["media"]["possibly_sensitive"], true);
    assert_eq!(variables[2]["reply"]["in_reply_to_tweet_id"], "101");
    assert!(variables[2].get("conversation_control").is_none());
}

#[tokio::test]
async fn a_failing_thread_still_returns_the_root() {
    let http = MockClient::default();
    let client = client(&http);
    http.push_json(200, created("100")).await;
    http.push_json(200, json!({ "errors": [{ "code": 187, "message": "Status is a duplicate." }] }))
        .await;

    let thread = [
        ThreadTweet::builder().text("dup").build(),
        ThreadTweet::builder().text("never sent").build(),
    ];
    let posted = client
        .create_tweet(&NewTweet::builder().text("root").build(), &thread)
        .await;
    assert!(posted.is_ok());
    assert_eq!(http.sent().await, 2);
}

#[tokio::test]
async fn search_sends_product_and_query() {
    let http = MockClient::default();
    let client = client(&http);
    http.push_json(
        200,
        json!({ "data": { "search_by_raw_query": { "search_timeline": { "timeline": {
            "instructions": [{ "type": "TimelineAddEntries", "entries": [tweet_entry("3")] }]
        } } } } }),
    )
    .await;

    let args = SearchArgs::builder().product(SearchProduct::Latest).build();
    let page = client.search_slice("from:jack rust", args).await;
    assert_eq!(page.data.map(|s| s.items().count()), Some(1));

    let log = http.take_log().await;
    let variables = query_variables(&log[0]);
    assert_eq!(variables["rawQuery"], "from:jack rust");
    assert_eq!(variables["product"], "Latest");
    assert_eq!(variables["querySource"], "typed_query");
}

#[tokio::test]
async fn home_timeline_flavors() {
    let http = MockClient::default();
    let client = client(&http);
    let home = |next: &str| {
        json!({ "data": { "home": { "home_timeline_urt": {
            "instructions": [{ "type": "TimelineAddEntries", "entries": [tweet_entry("1"), cursor_entry("Bottom", next)] }]
        } } } })
    };
    http.push_json(200, home("n")).await;
    http.push_json(200, home("n")).await;

    let first = client.home_timeline_slice(TimelineArgs::default()).await;
    assert!(first.is_ok(), "{:?}", first.errors);
    let args = TimelineArgs::builder()
        .kind(TimelineKind::Chronological)
        .seen_tweet_ids(vec!["1".into()])
        .cursor("n")
        .build();
    assert!(client.home_timeline_slice(args).await.is_ok());

    let log = http.take_log().await;
    assert!(log[0].uri().path().ends_with("/HomeTimeline"));
    assert_eq!(query_variables(&log[0])["requestContext"], "launch");
    assert!(log[1].uri().path().ends_with("/HomeLatestTimeline"));
    let variables = query_variables(&log[1]);
    assert_eq!(variables["seenTweetIds"], json!(["1"]));
    assert!(variables.get("requestContext").is_none());
}

fn user_entry(id: &str, screen_name: &str) -> Value {
    json!({
        "entryId": format!("user-{id}"),
        "content": {
            "entryType": "TimelineTimelineItem",
            "itemContent": {
                "itemType": "TimelineUser",
                "__typename": "TimelineUser",
                "user_results": { "result": user_result(id, screen_name) }
            }
        }
    })
}

fn user_timeline_page(entries: Vec<Value>) -> Value {
    json!({ "data": { "user": { "result": { "timeline": { "timeline": {
        "instructions": [{ "type": "TimelineAddEntries", "entries": entries }]
    } } } } } })
}

#[tokio::test]
async fn quote_tweets_search_for_the_quoted_id() {
    let http = MockClient::default();
    let client = client(&http);
    http.push_json(
        200,
        json!({ "data": { "search_by_raw_query": { "search_timeline": { "timeline": {
            "instructions": [{ "type": "TimelineAddEntries", "entries": [
                tweet_entry("8"), tweet_entry("9"), cursor_entry("Bottom", "q2")
            ] }]
        } } } } }),
    )
    .await;

    let page = client.quote_tweets_slice("5", Page::default()).await;
    let page = page.data.expect("quote tweets");
    let ids: Vec<_> = page.items().filter_map(TweetKind::id).map(|id| id.to_string()).collect();
    assert_eq!(ids, ["8", "9"]);
    assert_eq!(page.cursors.next.as_deref(), Some("q2"));

    let log = http.take_log().await;
    assert!(log[0].uri().path().ends_with("/SearchTimeline"));
    assert_eq!(header(&log[0], "authorization"), Some(ALT_TOKEN));
    let variables = query_variables(&log[0]);
    assert_eq!(variables["rawQuery"], "quoted_tweet_id:5");
    assert_eq!(variables["querySource"], "tdqt");
    assert_eq!(variables["product"], "Top");
    assert!(variables.get("cursor").is_none());
}

#[tokio::test]
async fn hidden_replies_read_the_moderated_timeline() {
    let http = MockClient::default();
    let client = client(&http);
    http.push_json(
        200,
        json!({ "data": { "tweet": { "result": { "timeline_response": { "timeline": {
            "instructions": [{ "type": "TimelineAddEntries", "entries": [tweet_entry("21")] }]
        } } } } } }),
    )
    .await;

    let page = client.hidden_replies_slice("20", Page::at("c1")).await;
    assert_eq!(page.data.map(|s| s.items().count()), Some(1));

    let log = http.take_log().await;
    assert!(log[0].uri().path().ends_with("/ModeratedTimeline"));
    let variables = query_variables(&log[0]);
    assert_eq!(variables["rootTweetId"], "20");
    assert_eq!(variables["cursor"], "c1");
    assert_eq!(variables["includePromotedContent"], false);
}

#[tokio::test]
async fn unmention_reports_done() {
    let http = MockClient::default();
    let client = client(&http);
    http.push_json(200, json!({ "data": { "unmention_user": "Done" } })).await;
    http.push_json(200, json!({ "data": {} })).await;

    assert_eq!(client.unmention("31").await.data, Some(true));
    assert_eq!(client.unmention("31").await.data, Some(false));

    let log = http.take_log().await;
    assert_eq!(log[0].method(), http::Method::POST);
    assert!(log[0].uri().path().ends_with("/UnmentionUserFromConversation"));
    let body = body_json(&log[0]);
    assert_eq!(body["variables"]["tweet_id"], "31");
    assert_eq!(body["queryId"], "xVW9j3OqoBRY9d6_2OONEg");
}

#[tokio::test]
async fn list_banner_is_set_or_removed() {
    let http = MockClient::default();
    let client = client(&http);
    let list = json!({ "data": { "list": { "id_str": "40" } } });
    http.push_json(200, list.clone()).await;
    http.push_json(200, list).await;

    assert_eq!(client.set_list_banner("40", Some("900")).await.data, Some(true));
    assert_eq!(client.set_list_banner("40", None).await.data, Some(true));

    let log = http.take_log().await;
    assert!(log[0].uri().path().ends_with("/EditListBanner"));
    assert_eq!(
        body_json(&log[0])["variables"],
        json!({ "listId": "40", "mediaId": "900" })
    );
    assert!(log[1].uri().path().ends_with("/DeleteListBanner"));
    assert_eq!(body_json(&log[1])["variables"], json!({ "listId": "40" }));
}

#[tokio::test]
async fn super_following_and_affiliates_list_users() {
    let http = MockClient::default();
    let client = client(&http);
    http.push_json(
        200,
        user_timeline_page(vec![user_entry("51", "creator"), cursor_entry("Bottom", "s2")]),
    )
    .await;
    http.push_json(200, user_timeline_page(vec![user_entry("52", "teammate")]))
        .await;

    let creators = client.super_following_slice("50", Page::default()).await;
    let creators = creators.data.expect("creator subscriptions");
    let ids: Vec<_> = creators.items().filter_map(|u| u.id()).map(|id| id.to_string()).collect();
    assert_eq!(ids, ["51"]);
    assert_eq!(creators.cursors.next.as_deref(), Some("s2"));

    let team = client.affiliates_slice("50", Page::default()).await;
    assert_eq!(team.data.map(|s| s.items().count()), Some(1));

    let log = http.take_log().await;
    assert!(log[0].uri().path().ends_with("/UserCreatorSubscriptions"));
    assert_eq!(query_variables(&log[0])["userId"], "50");
    assert!(log[1].uri().path().ends_with("/UserBusinessProfileTeamTimeline"));
    let variables = query_variables(&log[1]);
    assert_eq!(variables["userId"], "50");
    assert_eq!(variables["teamName"], "NotAssigned");
}

#[tokio::test]
async fn follow_requests_start_at_minus_one() {
    let http = MockClient::default();
    let client = client(&http);
    http.push_json(
        200,
        json!({ "ids": ["61", "62"], "next_cursor_str": "1700", "previous_cursor_str": "0" }),
    )
    .await;
    http.push_json(200, json!({ "ids": [], "next_cursor_str": "0" })).await;

    let first = client.follow_requests(Page::default()).await;
    let first = first.data.expect("follow requests");
    assert_eq!(first.ids, ["61", "62"]);
    assert_eq!(first.next_cursor.as_deref(), Some("1700"));

    let second = client.follow_requests(Page::at("1700")).await;
    assert_eq!(second.data.map(|r| r.ids.len()), Some(0));

    let log = http.take_log().await;
    assert_eq!(log[0].method(), http::Method::GET);
    assert_eq!(log[0].uri().path(), "/1.1/friendships/incoming.json");
    assert_eq!(header(&log[0], "authorization"), Some(ALT_TOKEN));
    let pairs = |request: &http::Request<Vec<u8>>| -> Vec<(String, String)> {
        serde_html_form::from_str(request.uri().query().unwrap_or_default()).unwrap()
    };
    let query = pairs(&log[0]);
    assert!(query.contains(&("cursor".into(), "-1".into())));
    assert!(query.contains(&("stringify_ids".into(), "true".into())));
    assert!(pairs(&log[1]).contains(&("cursor".into(), "1700".into())));
}
