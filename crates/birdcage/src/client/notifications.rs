use birdcage_common::types::{Notification, Slice, UnreadCount};
use birdcage_common::{ApiResponse, HttpClient, SmolStr, paginate};
use futures::Stream;
use serde_json::{Value, json};

use super::{NotificationArgs, TwitterClient};

impl<C: HttpClient> TwitterClient<C> {
    /// One page of [`notifications`](Self::notifications).
    pub async fn notifications_slice(&self, args: NotificationArgs) -> ApiResponse<Slice<Notification>> {
        self.fetch(
            &self.inner.endpoints.notifications,
            json!({ "timeline_type": args.timeline.as_str(), "cursor": args.cursor }),
        )
        .await
    }

    /// The notifications tab, newest first.
    pub fn notifications(
        &self,
        args: NotificationArgs,
    ) -> impl Stream<Item = ApiResponse<Slice<Notification>>> + '_ {
        paginate(args, move |args| self.notifications_slice(args))
    }

    /// Unread notification and inbox counters.
    pub async fn unread_count(&self) -> ApiResponse<UnreadCount> {
        self.fetch(&self.inner.endpoints.badge_count, Value::Null).await
    }

    /// Mark notifications up to `cursor` as read. Returns the stored cursor.
    pub async fn mark_notifications_seen(&self, cursor: &str) -> ApiResponse<SmolStr> {
        self.fetch(&self.inner.endpoints.last_seen_cursor, json!({ "cursor": cursor }))
            .await
    }
}
