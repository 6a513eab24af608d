use birdcage_common::types::{CommunityKind, Slice, TweetKind};
use birdcage_common::{ApiResponse, HttpClient, paginate};
use futures::Stream;
use serde_json::json;

use super::{CommunityTimelineArgs, Page, TwitterClient};

impl<C: HttpClient> TwitterClient<C> {
    /// A community by id.
    pub async fn community(&self, id: &str) -> ApiResponse<CommunityKind> {
        self.fetch(&self.inner.endpoints.community, json!({ "communityId": id }))
            .await
    }

    /// One page of [`community_tweets`](Self::community_tweets).
    pub async fn community_tweets_slice(
        &self,
        id: &str,
        args: CommunityTimelineArgs,
    ) -> ApiResponse<Slice<TweetKind>> {
        self.fetch(
            &self.inner.endpoints.community_tweets,
            json!({
                "communityId": id,
                "rankingMode": args.sort.ranking_mode(),
                "cursor": args.cursor,
            }),
        )
        .await
    }

    /// Tweets posted to a community.
    pub fn community_tweets<'a>(
        &'a self,
        id: &'a str,
        args: CommunityTimelineArgs,
    ) -> impl Stream<Item = ApiResponse<Slice<TweetKind>>> + 'a {
        paginate(args, move |args| self.community_tweets_slice(id, args))
    }

    /// One page of [`community_media`](Self::community_media).
    pub async fn community_media_slice(&self, id: &str, page: Page) -> ApiResponse<Slice<TweetKind>> {
        self.fetch(
            &self.inner.endpoints.community_media,
            json!({ "communityId": id, "cursor": page.cursor }),
        )
        .await
    }

    /// Tweets with media posted to a community.
    pub fn community_media<'a>(
        &'a self,
        id: &'a str,
        page: Page,
    ) -> impl Stream<Item = ApiResponse<Slice<TweetKind>>> + 'a {
        paginate(page, move |page| self.community_media_slice(id, page))
    }

    /// Join a community. `true` on success.
    pub async fn join_community(&self, id: &str) -> ApiResponse<bool> {
        self.fetch(&self.inner.endpoints.join_community, json!({ "communityId": id }))
            .await
    }

    /// Leave a community.
    pub async fn leave_community(&self, id: &str) -> ApiResponse<bool> {
        self.fetch(&self.inner.endpoints.leave_community, json!({ "communityId": id }))
            .await
    }
}
