use birdcage_common::types::{Slice, TweetKind, UserKind};
use birdcage_common::{ApiResponse, HttpClient, SmolStr, paginate};
use futures::Stream;
use serde_json::{Value, json};

use super::{NewTweet, Page, ReplyPermission, ThreadTweet, TweetArgs, TwitterClient};
use crate::endpoint::Endpoint;
use crate::options::{LongTweetBehavior, TWEET_CHARACTER_LIMIT};

/// How a tweet relates to a thread being posted in one go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Batch {
    First,
    Subsequent,
}

impl Batch {
    fn as_str(self) -> &'static str {
        match self {
            Batch::First => "BatchFirst",
            Batch::Subsequent => "BatchSubsequent",
        }
    }
}

/// Tweet length as upstream counts it, in UTF-16 code units.
pub(crate) fn tweet_length(text: &str) -> usize {
    text.encode_utf16().count()
}

fn compose_params(
    text: &str,
    media_ids: &[SmolStr],
    sensitive: bool,
    reply_to: Option<&str>,
    batch: Option<Batch>,
    permission: Option<ReplyPermission>,
) -> Value {
    let media_entities: Vec<Value> = media_ids
        .iter()
        .map(|id| json!({ "media_id": id, "tagged_users": [] }))
        .collect();

    json!({
        "batch_compose": batch.map(Batch::as_str),
        "conversation_control": permission.map(|p| json!({ "mode": p.mode() })),
        "media": {
            "media_entities": media_entities,
            "possibly_sensitive": sensitive,
        },
        "reply": reply_to.map(|id| json!({
            "exclude_reply_user_ids": [],
            "in_reply_to_tweet_id": id,
        })),
        "semantic_annotation_ids": [],
        "tweet_text": text,
    })
}

impl<C: HttpClient> TwitterClient<C> {
    /// The compose endpoint for `text` under the long tweet policy, or
    /// `None` when the policy refuses it.
    fn compose_endpoint(&self, text: &str) -> Option<&Endpoint<TweetKind>> {
        let endpoints = &self.inner.endpoints;
        if tweet_length(text) <= TWEET_CHARACTER_LIMIT {
            return Some(&endpoints.create_tweet);
        }
        match self.inner.options.long_tweet_behavior {
            LongTweetBehavior::Force => Some(&endpoints.create_tweet),
            LongTweetBehavior::Fail => None,
            LongTweetBehavior::NoteTweet | LongTweetBehavior::NoteTweetUnchecked => {
                Some(&endpoints.create_note_tweet)
            }
        }
    }

    /// Post a tweet, optionally followed by a thread of replies to it.
    ///
    /// Thread tweets are posted one by one, each replying to the previous
    /// one. The result is always the first tweet; a failure part way through
    /// the thread stops posting but does not fail the call.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all, fields(thread = thread.len())))]
    pub async fn create_tweet(&self, tweet: &NewTweet, thread: &[ThreadTweet]) -> ApiResponse<TweetKind> {
        let Some(endpoint) = self.compose_endpoint(&tweet.text) else {
            return ApiResponse::client_error("Tweet exceeded character limit");
        };

        let batch = (!thread.is_empty() && tweet.reply_to.is_none()).then_some(Batch::First);
        let root = self
            .fetch(
                endpoint,
                compose_params(
                    &tweet.text,
                    &tweet.media_ids,
                    tweet.sensitive,
                    tweet.reply_to.as_deref(),
                    batch,
                    tweet.reply_permission,
                ),
            )
            .await;

        let Some(mut last_id) = root.data.as_ref().and_then(TweetKind::id).cloned() else {
            return root;
        };

        let batch = tweet.reply_to.is_none().then_some(Batch::Subsequent);
        for next in thread {
            let Some(endpoint) = self.compose_endpoint(&next.text) else {
                break;
            };
            let posted = self
                .fetch(
                    endpoint,
                    compose_params(
                        &next.text,
                        &next.media_ids,
                        tweet.sensitive,
                        Some(last_id.as_str()),
                        batch,
                        None,
                    ),
                )
                .await;
            match posted.data.as_ref().and_then(TweetKind::id) {
                Some(id) => last_id = id.clone(),
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(errors = ?posted.errors, "thread stopped early");
                    break;
                }
            }
        }
        root
    }

    /// Delete one of the authenticated user's tweets.
    pub async fn delete_tweet(&self, id: &str) -> ApiResponse<bool> {
        self.fetch(&self.inner.endpoints.delete_tweet, json!({ "tweet_id": id }))
            .await
    }

    /// One page of [`tweet_detail`](Self::tweet_detail).
    pub async fn tweet_detail_slice(&self, id: &str, args: TweetArgs) -> ApiResponse<Slice<TweetKind>> {
        self.fetch(
            &self.inner.endpoints.tweet_detail,
            json!({
                "focalTweetId": id,
                "rankingMode": args.sort.ranking_mode(),
                "cursor": args.cursor,
            }),
        )
        .await
    }

    /// A tweet together with its conversation.
    pub fn tweet_detail<'a>(
        &'a self,
        id: &'a str,
        args: TweetArgs,
    ) -> impl Stream<Item = ApiResponse<Slice<TweetKind>>> + 'a {
        paginate(args, move |args| self.tweet_detail_slice(id, args))
    }

    /// A single tweet without its conversation.
    pub async fn tweet(&self, id: &str) -> ApiResponse<TweetKind> {
        self.fetch(&self.inner.endpoints.tweet_by_id, json!({ "tweetId": id }))
            .await
    }

    /// Several tweets at once, in request order.
    pub async fn tweets(&self, ids: &[&str]) -> ApiResponse<Vec<TweetKind>> {
        self.fetch(&self.inner.endpoints.tweets_by_ids, json!({ "tweetIds": ids }))
            .await
    }

    /// One page of [`likers`](Self::likers).
    pub async fn likers_slice(&self, tweet_id: &str, page: Page) -> ApiResponse<Slice<UserKind>> {
        self.fetch(
            &self.inner.endpoints.favoriters,
            json!({ "tweetId": tweet_id, "cursor": page.cursor }),
        )
        .await
    }

    /// Accounts that liked a tweet.
    pub fn likers<'a>(
        &'a self,
        tweet_id: &'a str,
        page: Page,
    ) -> impl Stream<Item = ApiResponse<Slice<UserKind>>> + 'a {
        paginate(page, move |page| self.likers_slice(tweet_id, page))
    }

    /// One page of [`retweeters`](Self::retweeters).
    pub async fn retweeters_slice(&self, tweet_id: &str, page: Page) -> ApiResponse<Slice<UserKind>> {
        self.fetch(
            &self.inner.endpoints.retweeters,
            json!({ "tweetId": tweet_id, "cursor": page.cursor }),
        )
        .await
    }

    /// Accounts that retweeted a tweet.
    pub fn retweeters<'a>(
        &'a self,
        tweet_id: &'a str,
        page: Page,
    ) -> impl Stream<Item = ApiResponse<Slice<UserKind>>> + 'a {
        paginate(page, move |page| self.retweeters_slice(tweet_id, page))
    }

    /// One page of [`quote_tweets`](Self::quote_tweets).
    pub async fn quote_tweets_slice(&self, tweet_id: &str, page: Page) -> ApiResponse<Slice<TweetKind>> {
        self.fetch(
            &self.inner.endpoints.quote_tweets,
            json!({ "rawQuery": format!("quoted_tweet_id:{tweet_id}"), "cursor": page.cursor }),
        )
        .await
    }

    /// Tweets quoting a tweet.
    pub fn quote_tweets<'a>(
        &'a self,
        tweet_id: &'a str,
        page: Page,
    ) -> impl Stream<Item = ApiResponse<Slice<TweetKind>>> + 'a {
        paginate(page, move |page| self.quote_tweets_slice(tweet_id, page))
    }

    /// One page of [`hidden_replies`](Self::hidden_replies).
    pub async fn hidden_replies_slice(&self, tweet_id: &str, page: Page) -> ApiResponse<Slice<TweetKind>> {
        self.fetch(
            &self.inner.endpoints.moderated_timeline,
            json!({ "rootTweetId": tweet_id, "cursor": page.cursor }),
        )
        .await
    }

    /// Replies the author of a tweet has hidden.
    pub fn hidden_replies<'a>(
        &'a self,
        tweet_id: &'a str,
        page: Page,
    ) -> impl Stream<Item = ApiResponse<Slice<TweetKind>>> + 'a {
        paginate(page, move |page| self.hidden_replies_slice(tweet_id, page))
    }

    /// Like a tweet.
    pub async fn like(&self, tweet_id: &str) -> ApiResponse<bool> {
        self.fetch(&self.inner.endpoints.favorite, json!({ "tweet_id": tweet_id }))
            .await
    }

    /// Remove a like.
    pub async fn unlike(&self, tweet_id: &str) -> ApiResponse<bool> {
        self.fetch(&self.inner.endpoints.unfavorite, json!({ "tweet_id": tweet_id }))
            .await
    }

    /// Retweet a tweet.
    pub async fn retweet(&self, tweet_id: &str) -> ApiResponse<bool> {
        self.fetch(&self.inner.endpoints.retweet, json!({ "tweet_id": tweet_id }))
            .await
    }

    /// Undo a retweet of the given source tweet.
    pub async fn unretweet(&self, tweet_id: &str) -> ApiResponse<bool> {
        self.fetch(
            &self.inner.endpoints.unretweet,
            json!({ "source_tweet_id": tweet_id }),
        )
        .await
    }

    /// Hide a reply to one of the authenticated user's tweets.
    pub async fn hide_reply(&self, tweet_id: &str) -> ApiResponse<bool> {
        self.fetch(&self.inner.endpoints.moderate, json!({ "tweetId": tweet_id }))
            .await
    }

    /// Show a hidden reply again.
    pub async fn unhide_reply(&self, tweet_id: &str) -> ApiResponse<bool> {
        self.fetch(&self.inner.endpoints.unmoderate, json!({ "tweetId": tweet_id }))
            .await
    }

    /// Pin a tweet to the authenticated user's profile.
    pub async fn pin_tweet(&self, tweet_id: &str) -> ApiResponse<bool> {
        self.fetch(&self.inner.endpoints.pin_tweet, json!({ "tweet_id": tweet_id }))
            .await
    }

    /// Remove the pinned tweet from the profile.
    pub async fn unpin_tweet(&self, tweet_id: &str) -> ApiResponse<bool> {
        self.fetch(&self.inner.endpoints.unpin_tweet, json!({ "tweet_id": tweet_id }))
            .await
    }

    /// Restrict who may reply, or let everyone reply again with `None`.
    pub async fn change_reply_permission(
        &self,
        tweet_id: &str,
        permission: Option<ReplyPermission>,
    ) -> ApiResponse<bool> {
        match permission {
            None => {
                self.fetch(
                    &self.inner.endpoints.conversation_control_delete,
                    json!({ "tweet_id": tweet_id }),
                )
                .await
            }
            Some(permission) => {
                self.fetch(
                    &self.inner.endpoints.conversation_control_change,
                    json!({ "tweet_id": tweet_id, "mode": permission.mode() }),
                )
                .await
            }
        }
    }

    /// Stop notifications for a conversation.
    pub async fn mute_conversation(&self, tweet_id: &str) -> ApiResponse<bool> {
        self.fetch(
            &self.inner.endpoints.mute_conversation,
            json!({ "tweet_id": tweet_id }),
        )
        .await
    }

    /// Resume notifications for a conversation.
    pub async fn unmute_conversation(&self, tweet_id: &str) -> ApiResponse<bool> {
        self.fetch(
            &self.inner.endpoints.unmute_conversation,
            json!({ "tweet_id": tweet_id }),
        )
        .await
    }

    /// Leave a conversation the authenticated user was mentioned in.
    ///
    /// Mentions of the account in the conversation stop linking to it.
    pub async fn unmention(&self, tweet_id: &str) -> ApiResponse<bool> {
        self.fetch(&self.inner.endpoints.unmention, json!({ "tweet_id": tweet_id }))
            .await
    }
}
