//! Spreading calls over several accounts.
//!
//! A [`ClientPool`] holds one [`TwitterClient`] per account and counts how
//! often each was handed out. Selection picks the account with the most
//! uses so far, ties going to the account added first. Nothing here reads
//! rate limit headers yet, so the counters are the only signal.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use birdcage_common::types::{
    CommunityKind, ListKind, MediaUpload, SearchItem, Slice, TweetKind, UserKind,
};
use birdcage_common::{ApiResponse, HttpClient, paginate};
use futures::Stream;

use crate::client::{
    CommunityTimelineArgs, MediaUploadArgs, Page, SearchArgs, TweetArgs, TwitterClient, UserRef,
    UserTweetsArgs,
};
use crate::error::PoolError;

struct Account<C> {
    client: TwitterClient<C>,
    uses: AtomicU64,
}

/// Usage snapshot of one pooled account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountUsage {
    /// Position the account was added at
    pub id: usize,
    /// Times the account has been selected
    pub uses: u64,
}

/// Several authenticated clients used interchangeably.
pub struct ClientPool<C = reqwest::Client> {
    accounts: Vec<Account<C>>,
}

impl<C> std::fmt::Debug for ClientPool<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientPool")
            .field("accounts", &self.accounts())
            .finish()
    }
}

impl<C> ClientPool<C> {
    /// Pool the given clients. Ids are their positions in `clients`.
    pub fn new(clients: Vec<TwitterClient<C>>) -> Result<Self, PoolError> {
        if clients.is_empty() {
            return Err(PoolError::Empty);
        }
        Ok(Self {
            accounts: clients
                .into_iter()
                .map(|client| Account {
                    client,
                    uses: AtomicU64::new(0),
                })
                .collect(),
        })
    }

    /// Select a client and count the use.
    pub fn client(&self) -> &TwitterClient<C> {
        // `max_by_key` keeps the last maximum, so walk backwards to prefer
        // the lowest id on ties.
        let account = self
            .accounts
            .iter()
            .rev()
            .max_by_key(|account| account.uses.load(Ordering::Relaxed))
            .unwrap_or(&self.accounts[0]);
        account.uses.fetch_add(1, Ordering::Relaxed);
        &account.client
    }

    /// Current usage of every account, in id order.
    pub fn accounts(&self) -> Vec<AccountUsage> {
        self.accounts
            .iter()
            .enumerate()
            .map(|(id, account)| AccountUsage {
                id,
                uses: account.uses.load(Ordering::Relaxed),
            })
            .collect()
    }

    /// Number of pooled accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Always false: a pool holds at least one account.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl<C: HttpClient> ClientPool<C> {
    /// Run any operation on a selected client.
    pub async fn with<F, Fut, R>(&self, f: F) -> R
    where
        F: FnOnce(TwitterClient<C>) -> Fut,
        Fut: Future<Output = R>,
    {
        f(self.client().clone()).await
    }

    /// [`TwitterClient::user`] on a selected account.
    pub async fn user(&self, user: UserRef) -> ApiResponse<UserKind> {
        self.client().user(user).await
    }

    /// [`TwitterClient::users_by_ids`] on a selected account.
    pub async fn users_by_ids(&self, ids: &[&str]) -> ApiResponse<Vec<UserKind>> {
        self.client().users_by_ids(ids).await
    }

    /// [`TwitterClient::tweet`] on a selected account.
    pub async fn tweet(&self, id: &str) -> ApiResponse<TweetKind> {
        self.client().tweet(id).await
    }

    /// [`TwitterClient::tweets`] on a selected account.
    pub async fn tweets(&self, ids: &[&str]) -> ApiResponse<Vec<TweetKind>> {
        self.client().tweets(ids).await
    }

    /// One page of a conversation.
    pub async fn tweet_detail_slice(&self, id: &str, args: TweetArgs) -> ApiResponse<Slice<TweetKind>> {
        self.client().tweet_detail_slice(id, args).await
    }

    /// One page of search results.
    pub async fn search_slice(&self, query: &str, args: SearchArgs) -> ApiResponse<Slice<SearchItem>> {
        self.client().search_slice(query, args).await
    }

    /// Search, selecting a client for every page.
    pub fn search<'a>(
        &'a self,
        query: &'a str,
        args: SearchArgs,
    ) -> impl Stream<Item = ApiResponse<Slice<SearchItem>>> + 'a {
        paginate(args, move |args| self.search_slice(query, args))
    }

    /// One page of a user's tweets.
    pub async fn user_tweets_slice(
        &self,
        user_id: &str,
        args: UserTweetsArgs,
    ) -> ApiResponse<Slice<TweetKind>> {
        self.client().user_tweets_slice(user_id, args).await
    }

    /// A user's tweets, selecting a client for every page.
    pub fn user_tweets<'a>(
        &'a self,
        user_id: &'a str,
        args: UserTweetsArgs,
    ) -> impl Stream<Item = ApiResponse<Slice<TweetKind>>> + 'a {
        paginate(args, move |args| self.user_tweets_slice(user_id, args))
    }

    /// One page of a user's followers.
    pub async fn followers_slice(&self, user_id: &str, page: Page) -> ApiResponse<Slice<UserKind>> {
        self.client().followers_slice(user_id, page).await
    }

    /// One page of the accounts a user follows.
    pub async fn following_slice(&self, user_id: &str, page: Page) -> ApiResponse<Slice<UserKind>> {
        self.client().following_slice(user_id, page).await
    }

    /// [`TwitterClient::community`] on a selected account.
    pub async fn community(&self, id: &str) -> ApiResponse<CommunityKind> {
        self.client().community(id).await
    }

    /// One page of a community's tweets.
    pub async fn community_tweets_slice(
        &self,
        id: &str,
        args: CommunityTimelineArgs,
    ) -> ApiResponse<Slice<TweetKind>> {
        self.client().community_tweets_slice(id, args).await
    }

    /// A community's tweets, selecting a client for every page.
    pub fn community_tweets<'a>(
        &'a self,
        id: &'a str,
        args: CommunityTimelineArgs,
    ) -> impl Stream<Item = ApiResponse<Slice<TweetKind>>> + 'a {
        paginate(args, move |args| self.community_tweets_slice(id, args))
    }

    /// One page of a community's media tweets.
    pub async fn community_media_slice(&self, id: &str, page: Page) -> ApiResponse<Slice<TweetKind>> {
        self.client().community_media_slice(id, page).await
    }

    /// A community's media tweets, selecting a client for every page.
    pub fn community_media<'a>(
        &'a self,
        id: &'a str,
        page: Page,
    ) -> impl Stream<Item = ApiResponse<Slice<TweetKind>>> + 'a {
        paginate(page, move |page| self.community_media_slice(id, page))
    }

    /// [`TwitterClient::list`] on a selected account.
    pub async fn list(&self, id: &str) -> ApiResponse<ListKind> {
        self.client().list(id).await
    }

    /// One page of a list's tweets.
    pub async fn list_tweets_slice(&self, id: &str, page: Page) -> ApiResponse<Slice<TweetKind>> {
        self.client().list_tweets_slice(id, page).await
    }

    /// A list's tweets, selecting a client for every page.
    pub fn list_tweets<'a>(
        &'a self,
        id: &'a str,
        page: Page,
    ) -> impl Stream<Item = ApiResponse<Slice<TweetKind>>> + 'a {
        paginate(page, move |page| self.list_tweets_slice(id, page))
    }

    /// One page of a list's members.
    pub async fn list_members_slice(&self, id: &str, page: Page) -> ApiResponse<Slice<UserKind>> {
        self.client().list_members_slice(id, page).await
    }

    /// A list's members, selecting a client for every page.
    pub fn list_members<'a>(
        &'a self,
        id: &'a str,
        page: Page,
    ) -> impl Stream<Item = ApiResponse<Slice<UserKind>>> + 'a {
        paginate(page, move |page| self.list_members_slice(id, page))
    }

    /// One page of a list's subscribers.
    pub async fn list_subscribers_slice(&self, id: &str, page: Page) -> ApiResponse<Slice<UserKind>> {
        self.client().list_subscribers_slice(id, page).await
    }

    /// A list's subscribers, selecting a client for every page.
    pub fn list_subscribers<'a>(
        &'a self,
        id: &'a str,
        page: Page,
    ) -> impl Stream<Item = ApiResponse<Slice<UserKind>>> + 'a {
        paginate(page, move |page| self.list_subscribers_slice(id, page))
    }

    /// [`TwitterClient::media_status`] on a selected account.
    pub async fn media_status(&self, media_id: &str) -> ApiResponse<MediaUpload> {
        self.client().media_status(media_id).await
    }

    /// [`TwitterClient::add_alt_text`] on a selected account.
    pub async fn add_alt_text(&self, media_id: &str, text: &str) -> ApiResponse<bool> {
        self.client().add_alt_text(media_id, text).await
    }
}

impl<C> ClientPool<C>
where
    C: HttpClient + Send + Sync + 'static,
{
    /// Upload media through a single selected account. Every chunk of one
    /// upload goes through the same account.
    pub async fn upload(&self, media: &[u8], args: &MediaUploadArgs) -> ApiResponse<MediaUpload> {
        self.client().upload(media, args).await
    }
}
