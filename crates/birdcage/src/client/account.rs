use birdcage_common::types::{Settings, Slice, UserKind};
use birdcage_common::{ApiResponse, HttpClient, paginate};
use futures::Stream;
use serde_json::{Value, json};

use super::{BlockedAccountsArgs, Page, TwitterClient, UpdateProfile};

impl<C: HttpClient> TwitterClient<C> {
    /// Accounts blocked by the authenticated user.
    pub async fn blocked_accounts_slice(&self, args: BlockedAccountsArgs) -> ApiResponse<Slice<UserKind>> {
        let endpoint = if args.imported {
            &self.inner.endpoints.blocked_accounts_imported
        } else {
            &self.inner.endpoints.blocked_accounts_all
        };
        self.fetch(endpoint, json!({ "cursor": args.cursor })).await
    }

    /// Every page of blocked accounts.
    pub fn blocked_accounts(
        &self,
        args: BlockedAccountsArgs,
    ) -> impl Stream<Item = ApiResponse<Slice<UserKind>>> + '_ {
        paginate(args, move |args| self.blocked_accounts_slice(args))
    }

    /// Accounts muted by the authenticated user.
    pub async fn muted_accounts_slice(&self, page: Page) -> ApiResponse<Slice<UserKind>> {
        self.fetch(&self.inner.endpoints.muted_accounts, json!({ "cursor": page.cursor }))
            .await
    }

    /// Every page of muted accounts.
    pub fn muted_accounts(&self, page: Page) -> impl Stream<Item = ApiResponse<Slice<UserKind>>> + '_ {
        paginate(page, move |page| self.muted_accounts_slice(page))
    }

    /// Account settings of the authenticated user.
    pub async fn settings(&self) -> ApiResponse<Settings> {
        self.fetch(&self.inner.endpoints.account_settings, Value::Null).await
    }

    /// The authenticated user, as the v1.1 API reports it.
    pub async fn verify_credentials(&self) -> ApiResponse<UserKind> {
        self.fetch(&self.inner.endpoints.verify_credentials, Value::Null).await
    }

    /// Replace the profile fields. `true` on success.
    pub async fn update_profile(&self, profile: &UpdateProfile) -> ApiResponse<bool> {
        self.fetch(&self.inner.endpoints.update_profile, profile.params()).await
    }

    /// Use previously uploaded media as the avatar. `true` on success.
    pub async fn set_avatar(&self, media_id: &str) -> ApiResponse<bool> {
        self.fetch(
            &self.inner.endpoints.update_profile_image,
            json!({ "media_id": media_id }),
        )
        .await
    }
}
