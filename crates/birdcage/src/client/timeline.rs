use birdcage_common::types::{Slice, TweetKind};
use birdcage_common::{ApiResponse, HttpClient, paginate};
use futures::Stream;
use serde_json::json;

use super::{Page, TimelineArgs, TimelineKind, TwitterClient};

impl<C: HttpClient> TwitterClient<C> {
    /// One page of [`home_timeline`](Self::home_timeline).
    pub async fn home_timeline_slice(&self, args: TimelineArgs) -> ApiResponse<Slice<TweetKind>> {
        let endpoint = match args.kind {
            TimelineKind::Algorithmic => &self.inner.endpoints.home,
            TimelineKind::Chronological => &self.inner.endpoints.home_latest,
        };
        // The first page announces itself as an app launch.
        let request_context = args.cursor.is_none().then_some("launch");
        self.fetch(
            endpoint,
            json!({
                "seenTweetIds": args.seen_tweet_ids,
                "requestContext": request_context,
                "cursor": args.cursor,
            }),
        )
        .await
    }

    /// The home timeline.
    pub fn home_timeline(&self, args: TimelineArgs) -> impl Stream<Item = ApiResponse<Slice<TweetKind>>> + '_ {
        paginate(args, move |args| self.home_timeline_slice(args))
    }

    /// One page of [`generic_timeline`](Self::generic_timeline).
    pub async fn generic_timeline_slice(&self, id: &str, page: Page) -> ApiResponse<Slice<TweetKind>> {
        self.fetch(
            &self.inner.endpoints.generic_timeline,
            json!({ "timelineId": id, "cursor": page.cursor }),
        )
        .await
    }

    /// A curated timeline addressed by its id.
    pub fn generic_timeline<'a>(
        &'a self,
        id: &'a str,
        page: Page,
    ) -> impl Stream<Item = ApiResponse<Slice<TweetKind>>> + 'a {
        paginate(page, move |page| self.generic_timeline_slice(id, page))
    }
}
