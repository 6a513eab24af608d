mod support;

use birdcage::types::TweetKind;
use birdcage::{AccountUsage, ClientPool, Page, PoolError, SearchArgs, TwitterClient, UserRef};
use futures::StreamExt;
use serde_json::json;
use support::*;

fn pool(mocks: &[MockClient]) -> ClientPool<MockClient> {
    ClientPool::new(mocks.iter().map(client).collect()).unwrap()
}

fn uses(pool: &ClientPool<MockClient>) -> Vec<u64> {
    pool.accounts().iter().map(|a| a.uses).collect()
}

#[test]
fn empty_pool_is_rejected() {
    let pool = ClientPool::<MockClient>::new(Vec::<TwitterClient<MockClient>>::new());
    assert!(matches!(pool, Err(PoolError::Empty)));
}

#[test]
fn selection_prefers_the_most_used_account() {
    let mocks = [MockClient::default(), MockClient::default(), MockClient::default()];
    let pool = pool(&mocks);
    assert_eq!(pool.len(), 3);
    assert_eq!(uses(&pool), [0, 0, 0]);

    // Ties go to the account added first.
    pool.client();
    assert_eq!(uses(&pool), [1, 0, 0]);

    pool.client();
    pool.client();
    assert_eq!(uses(&pool), [3, 0, 0]);
    assert_eq!(
        pool.accounts()[0],
        AccountUsage { id: 0, uses: 3 }
    );
}

#[tokio::test]
async fn operations_run_on_the_selected_client() {
    let mocks = [MockClient::default(), MockClient::default()];
    let pool = pool(&mocks);
    mocks[0]
        .push_json(200, json!({ "data": { "tweetResult": { "result": tweet_result("5") } } }))
        .await;
    mocks[0].push_json(200, user_body("7", "jack")).await;

    let tweet = pool.tweet("5").await;
    assert_eq!(tweet.data.as_ref().and_then(TweetKind::id).map(|id| id.as_str()), Some("5"));

    let user = pool.user(UserRef::id("7")).await;
    assert!(user.is_ok());

    assert_eq!(mocks[0].sent().await, 2);
    assert_eq!(mocks[1].sent().await, 0);
    assert_eq!(uses(&pool), [2, 0]);
}

#[tokio::test]
async fn with_hands_out_a_clone() {
    let mocks = [MockClient::default()];
    let pool = pool(&mocks);
    mocks[0].push_json(200, json!({ "data": { "favorite_tweet": "Done" } })).await;

    let liked = pool.with(|client| async move { client.like("5").await }).await;
    assert_eq!(liked.data, Some(true));
    assert_eq!(uses(&pool), [1]);
}

#[tokio::test]
async fn streams_select_a_client_per_page() {
    let mocks = [MockClient::default()];
    let pool = pool(&mocks);
    let page = |next: &str| {
        json!({
            "data": { "search_by_raw_query": { "search_timeline": { "timeline": {
                "instructions": [{
                    "type": "TimelineAddEntries",
                    "entries": [tweet_entry("1"), cursor_entry("Bottom", next)]
                }]
            } } } }
        })
    };
    mocks[0].push_json(200, page("a")).await;
    mocks[0].push_json(200, page("a")).await;

    let pages: Vec<_> = pool.search("rust", SearchArgs::default()).collect().await;
    assert_eq!(pages.len(), 1);
    assert_eq!(uses(&pool), [2]);
}

#[tokio::test]
async fn list_and_media_operations_are_forwarded() {
    let mocks = [MockClient::default()];
    let pool = pool(&mocks);
    let list_page = |next: &str| {
        json!({
            "data": { "list": { "tweets_timeline": { "timeline": {
                "instructions": [{
                    "type": "TimelineAddEntries",
                    "entries": [tweet_entry("1"), cursor_entry("Bottom", next)]
                }]
            } } } }
        })
    };
    mocks[0].push_json(200, list_page("a")).await;
    mocks[0].push_json(200, list_page("a")).await;
    mocks[0]
        .push_json(200, json!({ "media_id_string": "77", "processing_info": { "state": "succeeded" } }))
        .await;

    let pages: Vec<_> = pool.list_tweets("9", Page::default()).collect().await;
    assert_eq!(pages.len(), 1);
    assert!(pages[0].is_ok(), "{:?}", pages[0].errors);

    let status = pool.media_status("77").await;
    assert!(status.is_ok(), "{:?}", status.errors);

    let log = mocks[0].take_log().await;
    assert!(log[0].uri().path().ends_with("/ListLatestTweetsTimeline"));
    assert_eq!(query_variables(&log[0])["listId"], "9");
    assert!(log[2].uri().path().ends_with("/media/upload.json"));
    assert!(log[2].uri().query().is_some_and(|q| q.contains("command=STATUS")));
    assert_eq!(uses(&pool), [3]);
}
