use birdcage_common::types::{ListKind, Slice, TweetKind, UserKind};
use birdcage_common::{ApiResponse, HttpClient, paginate};
use futures::Stream;
use serde_json::{Value, json};

use super::{ListDetails, Page, TwitterClient};

impl<C: HttpClient> TwitterClient<C> {
    /// Look up a list by id.
    pub async fn list(&self, id: &str) -> ApiResponse<ListKind> {
        self.fetch(&self.inner.endpoints.list_by_id, json!({ "listId": id }))
            .await
    }

    /// Look up a list by its slug.
    pub async fn list_by_slug(&self, slug: &str) -> ApiResponse<ListKind> {
        self.fetch(&self.inner.endpoints.list_by_slug, json!({ "listId": slug }))
            .await
    }

    /// One page of [`list_tweets`](Self::list_tweets).
    pub async fn list_tweets_slice(&self, id: &str, page: Page) -> ApiResponse<Slice<TweetKind>> {
        self.fetch(
            &self.inner.endpoints.list_tweets,
            json!({ "listId": id, "cursor": page.cursor }),
        )
        .await
    }

    /// Latest tweets from a list's members.
    pub fn list_tweets<'a>(
        &'a self,
        id: &'a str,
        page: Page,
    ) -> impl Stream<Item = ApiResponse<Slice<TweetKind>>> + 'a {
        paginate(page, move |page| self.list_tweets_slice(id, page))
    }

    /// One page of [`list_members`](Self::list_members).
    pub async fn list_members_slice(&self, id: &str, page: Page) -> ApiResponse<Slice<UserKind>> {
        self.fetch(
            &self.inner.endpoints.list_members,
            json!({ "listId": id, "cursor": page.cursor }),
        )
        .await
    }

    /// Accounts on a list.
    pub fn list_members<'a>(
        &'a self,
        id: &'a str,
        page: Page,
    ) -> impl Stream<Item = ApiResponse<Slice<UserKind>>> + 'a {
        paginate(page, move |page| self.list_members_slice(id, page))
    }

    /// One page of [`list_subscribers`](Self::list_subscribers).
    pub async fn list_subscribers_slice(&self, id: &str, page: Page) -> ApiResponse<Slice<UserKind>> {
        self.fetch(
            &self.inner.endpoints.list_subscribers,
            json!({ "listId": id, "cursor": page.cursor }),
        )
        .await
    }

    /// Accounts subscribed to a list.
    pub fn list_subscribers<'a>(
        &'a self,
        id: &'a str,
        page: Page,
    ) -> impl Stream<Item = ApiResponse<Slice<UserKind>>> + 'a {
        paginate(page, move |page| self.list_subscribers_slice(id, page))
    }

    /// Lists the authenticated user has been added to.
    pub async fn list_memberships_slice(&self, page: Page) -> ApiResponse<Slice<ListKind>> {
        self.fetch(&self.inner.endpoints.list_memberships, json!({ "cursor": page.cursor }))
            .await
    }

    /// Every page of [`list_memberships_slice`](Self::list_memberships_slice).
    pub fn list_memberships(&self, page: Page) -> impl Stream<Item = ApiResponse<Slice<ListKind>>> + '_ {
        paginate(page, move |page| self.list_memberships_slice(page))
    }

    /// Lists owned by `user_id`, flagged by whether `member_id` is on them.
    pub async fn list_ownerships_slice(
        &self,
        user_id: &str,
        member_id: &str,
        page: Page,
    ) -> ApiResponse<Slice<ListKind>> {
        self.fetch(
            &self.inner.endpoints.list_ownerships,
            json!({
                "userId": user_id,
                "isListMemberTargetUserId": member_id,
                "cursor": page.cursor,
            }),
        )
        .await
    }

    /// Every page of [`list_ownerships_slice`](Self::list_ownerships_slice).
    pub fn list_ownerships<'a>(
        &'a self,
        user_id: &'a str,
        member_id: &'a str,
        page: Page,
    ) -> impl Stream<Item = ApiResponse<Slice<ListKind>>> + 'a {
        paginate(page, move |page| self.list_ownerships_slice(user_id, member_id, page))
    }

    /// Lists a user owns or subscribes to.
    pub async fn combined_lists_slice(&self, user_id: &str, page: Page) -> ApiResponse<Slice<ListKind>> {
        self.fetch(
            &self.inner.endpoints.combined_lists,
            json!({ "userId": user_id, "cursor": page.cursor }),
        )
        .await
    }

    /// Every page of [`combined_lists_slice`](Self::combined_lists_slice).
    pub fn combined_lists<'a>(
        &'a self,
        user_id: &'a str,
        page: Page,
    ) -> impl Stream<Item = ApiResponse<Slice<ListKind>>> + 'a {
        paginate(page, move |page| self.combined_lists_slice(user_id, page))
    }

    /// Suggested lists.
    pub async fn list_discovery(&self) -> ApiResponse<Slice<ListKind>> {
        self.fetch(&self.inner.endpoints.lists_discovery, Value::Null).await
    }

    /// Create a list owned by the authenticated user.
    pub async fn create_list(&self, details: &ListDetails) -> ApiResponse<ListKind> {
        self.fetch(
            &self.inner.endpoints.create_list,
            json!({
                "name": details.name,
                "description": details.description,
                "isPrivate": details.private,
            }),
        )
        .await
    }

    /// Replace a list's name, description and privacy.
    pub async fn update_list(&self, id: &str, details: &ListDetails) -> ApiResponse<bool> {
        self.fetch(
            &self.inner.endpoints.update_list,
            json!({
                "listId": id,
                "name": details.name,
                "description": details.description,
                "isPrivate": details.private,
            }),
        )
        .await
    }

    /// Delete an owned list.
    pub async fn delete_list(&self, id: &str) -> ApiResponse<bool> {
        self.fetch(&self.inner.endpoints.delete_list, json!({ "listId": id }))
            .await
    }

    /// Add an account to an owned list.
    pub async fn add_list_member(&self, list_id: &str, user_id: &str) -> ApiResponse<bool> {
        self.fetch(
            &self.inner.endpoints.list_add_member,
            json!({ "listId": list_id, "userId": user_id }),
        )
        .await
    }

    /// Remove an account from an owned list.
    pub async fn remove_list_member(&self, list_id: &str, user_id: &str) -> ApiResponse<bool> {
        self.fetch(
            &self.inner.endpoints.list_remove_member,
            json!({ "listId": list_id, "userId": user_id }),
        )
        .await
    }

    /// Follow a list.
    pub async fn subscribe_list(&self, id: &str) -> ApiResponse<bool> {
        self.fetch(&self.inner.endpoints.list_subscribe, json!({ "listId": id }))
            .await
    }

    /// Stop following a list.
    pub async fn unsubscribe_list(&self, id: &str) -> ApiResponse<bool> {
        self.fetch(&self.inner.endpoints.list_unsubscribe, json!({ "listId": id }))
            .await
    }

    /// Pin a list to the home timeline tabs.
    pub async fn pin_list(&self, id: &str) -> ApiResponse<bool> {
        self.fetch(&self.inner.endpoints.pin_timeline, pinned_list(id)).await
    }

    /// Remove a list from the home timeline tabs.
    pub async fn unpin_list(&self, id: &str) -> ApiResponse<bool> {
        self.fetch(&self.inner.endpoints.unpin_timeline, pinned_list(id)).await
    }

    /// Keep a list's tweets out of notifications.
    pub async fn mute_list(&self, id: &str) -> ApiResponse<bool> {
        self.fetch(&self.inner.endpoints.mute_list, json!({ "listId": id }))
            .await
    }

    /// Unmute a list.
    pub async fn unmute_list(&self, id: &str) -> ApiResponse<bool> {
        self.fetch(&self.inner.endpoints.unmute_list, json!({ "listId": id }))
            .await
    }

    /// Set the banner of an owned list to an uploaded image, or remove it
    /// with `None`.
    pub async fn set_list_banner(&self, list_id: &str, media_id: Option<&str>) -> ApiResponse<bool> {
        let endpoints = &self.inner.endpoints;
        match media_id {
            Some(media_id) => {
                self.fetch(
                    &endpoints.edit_list_banner,
                    json!({ "listId": list_id, "mediaId": media_id }),
                )
                .await
            }
            None => {
                self.fetch(&endpoints.delete_list_banner, json!({ "listId": list_id }))
                    .await
            }
        }
    }
}

fn pinned_list(id: &str) -> Value {
    json!({ "pinnedTimelineItem": { "id": id, "pinned_timeline_type": "List" } })
}
