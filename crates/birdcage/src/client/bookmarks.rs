use birdcage_common::types::{Slice, TweetKind};
use birdcage_common::{ApiResponse, HttpClient, paginate};
use futures::Stream;
use serde_json::{Value, json};

use super::{Page, TwitterClient};

impl<C: HttpClient> TwitterClient<C> {
    /// One page of [`bookmarks`](Self::bookmarks).
    pub async fn bookmarks_slice(&self, page: Page) -> ApiResponse<Slice<TweetKind>> {
        self.fetch(&self.inner.endpoints.bookmarks, json!({ "cursor": page.cursor }))
            .await
    }

    /// Bookmarked tweets, newest first.
    pub fn bookmarks(&self, page: Page) -> impl Stream<Item = ApiResponse<Slice<TweetKind>>> + '_ {
        paginate(page, move |page| self.bookmarks_slice(page))
    }

    /// One page of [`search_bookmarks`](Self::search_bookmarks).
    pub async fn search_bookmarks_slice(&self, query: &str, page: Page) -> ApiResponse<Slice<TweetKind>> {
        self.fetch(
            &self.inner.endpoints.bookmark_search,
            json!({ "rawQuery": query, "cursor": page.cursor }),
        )
        .await
    }

    /// Bookmarked tweets matching a search query.
    pub fn search_bookmarks<'a>(
        &'a self,
        query: &'a str,
        page: Page,
    ) -> impl Stream<Item = ApiResponse<Slice<TweetKind>>> + 'a {
        paginate(page, move |page| self.search_bookmarks_slice(query, page))
    }

    /// `true` when the tweet was bookmarked.
    pub async fn bookmark(&self, tweet_id: &str) -> ApiResponse<bool> {
        self.fetch(&self.inner.endpoints.create_bookmark, json!({ "tweet_id": tweet_id }))
            .await
    }

    /// `true` when the bookmark was removed.
    pub async fn unbookmark(&self, tweet_id: &str) -> ApiResponse<bool> {
        self.fetch(&self.inner.endpoints.delete_bookmark, json!({ "tweet_id": tweet_id }))
            .await
    }

    /// Remove every bookmark.
    pub async fn clear_bookmarks(&self) -> ApiResponse<bool> {
        self.fetch(&self.inner.endpoints.delete_all_bookmarks, Value::Null)
            .await
    }
}
