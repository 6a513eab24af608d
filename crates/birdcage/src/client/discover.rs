use birdcage_common::types::{DiscoverItem, Slice, Trend};
use birdcage_common::{ApiResponse, HttpClient, paginate};
use futures::Stream;
use serde_json::{Value, json};

use super::{Page, TwitterClient};

impl<C: HttpClient> TwitterClient<C> {
    /// One page of [`explore`](Self::explore).
    pub async fn explore_slice(&self, page: Page) -> ApiResponse<Slice<DiscoverItem>> {
        self.fetch(&self.inner.endpoints.explore_page, json!({ "cursor": page.cursor }))
            .await
    }

    /// The explore page: trends and featured tweets, split into segments.
    pub fn explore(&self, page: Page) -> impl Stream<Item = ApiResponse<Slice<DiscoverItem>>> + '_ {
        paginate(page, move |page| self.explore_slice(page))
    }

    /// Trends shown in the sidebar.
    pub async fn trends(&self) -> ApiResponse<Slice<Trend>> {
        self.fetch(&self.inner.endpoints.explore_sidebar, Value::Null).await
    }

    /// One page of [`timeline_trends`](Self::timeline_trends).
    pub async fn timeline_trends_slice(&self, timeline_id: &str, page: Page) -> ApiResponse<Slice<Trend>> {
        self.fetch(
            &self.inner.endpoints.generic_trends,
            json!({ "timelineId": timeline_id, "cursor": page.cursor }),
        )
        .await
    }

    /// Trends of an explore tab, addressed by its timeline id.
    pub fn timeline_trends<'a>(
        &'a self,
        timeline_id: &'a str,
        page: Page,
    ) -> impl Stream<Item = ApiResponse<Slice<Trend>>> + 'a {
        paginate(page, move |page| self.timeline_trends_slice(timeline_id, page))
    }
}
