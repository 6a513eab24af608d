use birdcage_common::types::{FollowRequests, Slice, TweetKind, UserKind};
use birdcage_common::{ApiResponse, HttpClient, SmolStr, paginate};
use futures::Stream;
use serde_json::json;

use super::{Page, TwitterClient, UserRef, UserTweetsArgs};
use crate::endpoint::Endpoint;

/// Paginated per-user timelines that only need the user id and a cursor.
macro_rules! user_timeline {
    ($($(#[$meta:meta])* $slice:ident, $stream:ident => $endpoint:ident: $item:ty;)+) => {
        impl<C: HttpClient> TwitterClient<C> {
            $(
                #[doc = concat!("One page of [`", stringify!($stream), "`](Self::", stringify!($stream), ").")]
                pub async fn $slice(&self, user_id: &str, page: Page) -> ApiResponse<Slice<$item>> {
                    self.fetch(
                        &self.inner.endpoints.$endpoint,
                        json!({ "userId": user_id, "cursor": page.cursor }),
                    )
                    .await
                }

                $(#[$meta])*
                pub fn $stream<'a>(
                    &'a self,
                    user_id: &'a str,
                    page: Page,
                ) -> impl Stream<Item = ApiResponse<Slice<$item>>> + 'a {
                    paginate(page, move |page| self.$slice(user_id, page))
                }
            )+
        }
    };
}

user_timeline! {
    /// Tweets with media posted by a user.
    user_media_slice, user_media => user_media: TweetKind;
    /// Tweets a user liked.
    user_likes_slice, user_likes => likes: TweetKind;
    /// Tweets a user highlighted on their profile.
    user_highlights_slice, user_highlights => highlights: TweetKind;
    /// Accounts a user follows.
    following_slice, following => following: UserKind;
    /// Accounts following a user.
    followers_slice, followers => followers: UserKind;
    /// Followers of a user that the authenticated user follows too.
    followers_you_know_slice, followers_you_know => followers_you_know: UserKind;
    /// Verified accounts following a user.
    verified_followers_slice, verified_followers => verified_followers: UserKind;
    /// Creators a user subscribes to.
    super_following_slice, super_following => creator_subscriptions: UserKind;
    /// Affiliates of a business account.
    affiliates_slice, affiliates => business_team: UserKind;
}

impl<C: HttpClient> TwitterClient<C> {
    /// Look up one account.
    ///
    /// When the result is the authenticated account, the self cache is
    /// refreshed with it.
    pub async fn user(&self, user: UserRef) -> ApiResponse<UserKind> {
        let endpoints = &self.inner.endpoints;
        let response = match &user {
            UserRef::Id(id) => self.fetch(&endpoints.user_by_id, json!({ "userId": id })).await,
            UserRef::Username(username) => {
                self.fetch(&endpoints.user_by_username, json!({ "screen_name": username }))
                    .await
            }
        };

        if let Some(UserKind::User(found)) = &response.data {
            if self.is_self(found).await {
                self.remember_self(found).await;
            }
        }
        response
    }

    /// Look up several accounts by id, in request order.
    pub async fn users_by_ids(&self, ids: &[&str]) -> ApiResponse<Vec<UserKind>> {
        self.fetch(&self.inner.endpoints.users_by_ids, json!({ "userIds": ids }))
            .await
    }

    /// Look up several accounts by handle, in request order.
    pub async fn users_by_usernames(&self, usernames: &[&str]) -> ApiResponse<Vec<UserKind>> {
        self.fetch(
            &self.inner.endpoints.users_by_usernames,
            json!({ "screen_names": usernames }),
        )
        .await
    }

    /// One page of [`user_tweets`](Self::user_tweets).
    pub async fn user_tweets_slice(&self, user_id: &str, args: UserTweetsArgs) -> ApiResponse<Slice<TweetKind>> {
        let endpoint = if args.replies {
            &self.inner.endpoints.user_tweets_and_replies
        } else {
            &self.inner.endpoints.user_tweets
        };
        self.fetch(endpoint, json!({ "userId": user_id, "cursor": args.cursor }))
            .await
    }

    /// Tweets posted by a user, with or without their replies.
    pub fn user_tweets<'a>(
        &'a self,
        user_id: &'a str,
        args: UserTweetsArgs,
    ) -> impl Stream<Item = ApiResponse<Slice<TweetKind>>> + 'a {
        paginate(args, move |args| self.user_tweets_slice(user_id, args))
    }

    async fn relationship(&self, endpoint: &Endpoint<bool>, user: &UserRef) -> ApiResponse<bool> {
        self.fetch(endpoint, user.legacy_params()).await
    }

    /// Follow an account, or request to follow a protected one.
    pub async fn follow(&self, user: &UserRef) -> ApiResponse<bool> {
        self.relationship(&self.inner.endpoints.follow, user).await
    }

    /// Stop following an account.
    pub async fn unfollow(&self, user: &UserRef) -> ApiResponse<bool> {
        self.relationship(&self.inner.endpoints.unfollow, user).await
    }

    /// Make a user stop following the authenticated account.
    pub async fn remove_follower(&self, user_id: &str) -> ApiResponse<bool> {
        self.fetch(
            &self.inner.endpoints.remove_follower,
            json!({ "target_user_id": user_id }),
        )
        .await
    }

    /// Show or hide a followed user's retweets on the home timeline.
    pub async fn set_retweets(&self, user_id: &str, enabled: bool) -> ApiResponse<bool> {
        self.fetch(
            &self.inner.endpoints.update_friendship,
            json!({ "id": user_id, "retweets": enabled }),
        )
        .await
    }

    /// Turn on or off notifications for a followed user's tweets.
    pub async fn set_notifications(&self, user_id: &str, enabled: bool) -> ApiResponse<bool> {
        self.fetch(
            &self.inner.endpoints.update_friendship,
            json!({ "id": user_id, "device": enabled }),
        )
        .await
    }

    /// Ids of accounts waiting for the authenticated user to accept their
    /// follow request. Upstream pages these with numeric cursors; `-1` is
    /// the first page.
    pub async fn follow_requests(&self, page: Page) -> ApiResponse<FollowRequests> {
        let cursor = page.cursor.unwrap_or_else(|| SmolStr::new_static("-1"));
        self.fetch(
            &self.inner.endpoints.incoming_follow_requests,
            json!({ "cursor": cursor }),
        )
        .await
    }

    /// Withdraw a pending follow request to a protected account.
    pub async fn cancel_follow_request(&self, user: &UserRef) -> ApiResponse<bool> {
        self.relationship(&self.inner.endpoints.cancel_follow_request, user)
            .await
    }

    /// Let a user follow the authenticated protected account.
    pub async fn accept_follow_request(&self, user: &UserRef) -> ApiResponse<bool> {
        self.relationship(&self.inner.endpoints.accept_follow_request, user)
            .await
    }

    /// Refuse a pending follow request.
    pub async fn decline_follow_request(&self, user: &UserRef) -> ApiResponse<bool> {
        self.relationship(&self.inner.endpoints.decline_follow_request, user)
            .await
    }

    /// Block an account.
    pub async fn block(&self, user: &UserRef) -> ApiResponse<bool> {
        self.relationship(&self.inner.endpoints.block, user).await
    }

    /// Unblock an account.
    pub async fn unblock(&self, user: &UserRef) -> ApiResponse<bool> {
        self.relationship(&self.inner.endpoints.unblock, user).await
    }

    /// Hide an account's tweets without unfollowing it.
    pub async fn mute(&self, user: &UserRef) -> ApiResponse<bool> {
        self.relationship(&self.inner.endpoints.mute_user, user).await
    }

    /// Unmute an account.
    pub async fn unmute(&self, user: &UserRef) -> ApiResponse<bool> {
        self.relationship(&self.inner.endpoints.unmute_user, user).await
    }
}
