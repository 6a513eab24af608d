use birdcage_common::types::{SearchItem, Slice, Typeahead};
use birdcage_common::{ApiResponse, HttpClient, paginate};
use futures::Stream;
use serde_json::json;

use super::{SearchArgs, TwitterClient};

impl<C: HttpClient> TwitterClient<C> {
    /// One page of [`search`](Self::search).
    pub async fn search_slice(&self, query: &str, args: SearchArgs) -> ApiResponse<Slice<SearchItem>> {
        self.fetch(
            &self.inner.endpoints.search,
            json!({
                "rawQuery": query,
                "querySource": "typed_query",
                "product": args.product.as_str(),
                "cursor": args.cursor,
            }),
        )
        .await
    }

    /// Run a search. Advanced search operators work as on the website.
    ///
    /// Depending on the product the pages hold tweets, users or lists.
    pub fn search<'a>(
        &'a self,
        query: &'a str,
        args: SearchArgs,
    ) -> impl Stream<Item = ApiResponse<Slice<SearchItem>>> + 'a {
        paginate(args, move |args| self.search_slice(query, args))
    }

    /// Search box suggestions.
    pub async fn typeahead(&self, query: &str) -> ApiResponse<Typeahead> {
        self.fetch(&self.inner.endpoints.typeahead, json!({ "q": query }))
            .await
    }
}
