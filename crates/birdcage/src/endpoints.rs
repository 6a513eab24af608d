//! The endpoint catalog.
//!
//! [`Endpoints::DEFAULT`] holds every descriptor the client uses. The client
//! keeps it behind an `Arc`, so tests and callers can swap in a different
//! table (for example with rotated query ids) without touching the dispatcher.

use birdcage_common::parse::{
    community, follow_requests, list, media_upload, media_upload_init, settings, string, truthy, tweet, typeahead,
    unread_count, user, user_legacy,
};
use birdcage_common::timeline::{
    discover_entries, entries, list_entries, media_entries, notification_entries, search_entries,
    trend_entries, user_entries,
};
use birdcage_common::types::{
    CommunityKind, DiscoverItem, FollowRequests, ListKind, MediaUpload, MediaUploadInit, Notification, SearchItem,
    Settings, Slice, Trend, Typeahead, TweetKind, UnreadCount, UserKind,
};
use birdcage_common::{ParseError, SmolStr};
use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::flags::{SHORT, TIMELINE, USER};
use crate::options::{ALT_TOKEN, OAUTH_KEY};
use crate::{gql, v11};

/// Follow a JSON pointer, failing when it is absent or null.
pub(crate) fn required<'a>(body: &'a Value, pointer: &str) -> Result<&'a Value, ParseError> {
    body.pointer(pointer)
        .filter(|v| !v.is_null())
        .ok_or_else(|| ParseError::Missing(pointer.trim_start_matches('/').replace('/', ".").into()))
}

/// An assembler applied to the instructions found at a pointer.
macro_rules! timeline {
    ($assemble:path, $pointer:literal) => {
        |body: &Value| $assemble(required(body, $pointer)?)
    };
}

/// A union parser applied to the fragment at a pointer, which may be absent.
macro_rules! fragment {
    ($parse:path, $pointer:literal) => {
        |body: &Value| $parse(body.pointer($pointer))
    };
}

/// Whether the value at a pointer is the string `Done`.
macro_rules! done {
    ($pointer:literal) => {
        |body: &Value| Ok(body.pointer($pointer).and_then(Value::as_str) == Some("Done"))
    };
}

/// Truthiness of the value at a pointer.
macro_rules! present {
    ($pointer:literal) => {
        |body: &Value| Ok(truthy(body.pointer($pointer)))
    };
}

fn pinned(body: &Value, pointer: &str) -> Result<bool, ParseError> {
    Ok(body
        .pointer(pointer)
        .and_then(Value::as_str)
        .is_some_and(|message| message.contains("success")))
}

fn users_at(body: &Value) -> Result<Vec<UserKind>, ParseError> {
    required(body, "/data/users")?
        .as_array()
        .into_iter()
        .flatten()
        .map(|u| user(u.get("result")))
        .collect()
}

fn tweets_at(body: &Value) -> Result<Vec<TweetKind>, ParseError> {
    required(body, "/data/tweetResult")?
        .as_array()
        .into_iter()
        .flatten()
        .map(|t| tweet(t.get("result")))
        .collect()
}

fn last_seen(body: &Value) -> Result<SmolStr, ParseError> {
    string(Some(required(body, "/cursor")?)).ok_or_else(|| ParseError::Type {
        path: "cursor".into(),
        expected: "string",
    })
}

const USER_TIMELINE: &str =
    r#"{"count":40,"includePromotedContent":true,"withCommunity":true,"withVoice":true}"#;
const FOLLOWS: &str = r#"{"count":50,"includePromotedContent":false,"withVoice":true}"#;
const HOME: &str = r#"{"count":20,"includePromotedContent":false,"latestControlAvailable":true,"withCommunity":true}"#;
const TWEET_LOOKUP: &str = r#"{"with_rux_injections":false,"includePromotedContent":false,"withCommunity":true,"withBirdwatchNotes":true,"withVoice":true,"withV2Timeline":true}"#;
const ENGAGEMENT: &str = r#"{"count":40,"enableRanking":false,"includePromotedContent":false}"#;
const COMMUNITY_TIMELINE: &str = r#"{"count":20,"displayLocation":"Community","withCommunity":true}"#;
const RELATIONSHIP: &str = r#"{"include_profile_interstitial_type":1,"include_blocking":1,"include_blocked_by":1,"include_followed_by":1,"include_want_retweets":1,"include_mute_edge":1,"include_can_dm":1,"include_can_media_tag":1,"include_ext_is_blue_verified":1,"include_ext_verified_type":1,"include_ext_profile_image_shape":1,"skip_status":1}"#;
const UPLOAD: &str = "https://upload.twitter.com/1.1/media/upload.json";

/// Every descriptor the client dispatches.
///
/// Fields are named after the upstream operation they describe.
#[allow(missing_docs)]
#[derive(Debug, Clone)]
pub struct Endpoints {
    // account
    pub blocked_accounts_all: Endpoint<Slice<UserKind>>,
    pub blocked_accounts_imported: Endpoint<Slice<UserKind>>,
    pub muted_accounts: Endpoint<Slice<UserKind>>,
    pub account_settings: Endpoint<Settings>,
    pub update_profile: Endpoint<bool>,
    pub update_profile_image: Endpoint<bool>,
    pub verify_credentials: Endpoint<UserKind>,

    // bookmarks
    pub bookmarks: Endpoint<Slice<TweetKind>>,
    pub bookmark_search: Endpoint<Slice<TweetKind>>,
    pub create_bookmark: Endpoint<bool>,
    pub delete_bookmark: Endpoint<bool>,
    pub delete_all_bookmarks: Endpoint<bool>,

    // communities
    pub community: Endpoint<CommunityKind>,
    pub community_tweets: Endpoint<Slice<TweetKind>>,
    pub community_media: Endpoint<Slice<TweetKind>>,
    pub join_community: Endpoint<bool>,
    pub leave_community: Endpoint<bool>,

    // discover
    pub explore_page: Endpoint<Slice<DiscoverItem>>,
    pub explore_sidebar: Endpoint<Slice<Trend>>,
    pub generic_timeline: Endpoint<Slice<TweetKind>>,
    pub generic_trends: Endpoint<Slice<Trend>>,

    // lists
    pub list_by_id: Endpoint<ListKind>,
    pub list_by_slug: Endpoint<ListKind>,
    pub list_tweets: Endpoint<Slice<TweetKind>>,
    pub lists_discovery: Endpoint<Slice<ListKind>>,
    pub list_memberships: Endpoint<Slice<ListKind>>,
    pub list_ownerships: Endpoint<Slice<ListKind>>,
    pub list_members: Endpoint<Slice<UserKind>>,
    pub list_subscribers: Endpoint<Slice<UserKind>>,
    pub combined_lists: Endpoint<Slice<ListKind>>,
    pub create_list: Endpoint<ListKind>,
    pub delete_list: Endpoint<bool>,
    pub update_list: Endpoint<bool>,
    pub edit_list_banner: Endpoint<bool>,
    pub delete_list_banner: Endpoint<bool>,
    pub list_add_member: Endpoint<bool>,
    pub list_remove_member: Endpoint<bool>,
    pub list_subscribe: Endpoint<bool>,
    pub list_unsubscribe: Endpoint<bool>,
    pub pin_timeline: Endpoint<bool>,
    pub unpin_timeline: Endpoint<bool>,
    pub mute_list: Endpoint<bool>,
    pub unmute_list: Endpoint<bool>,

    // notifications
    pub notifications: Endpoint<Slice<Notification>>,
    pub badge_count: Endpoint<UnreadCount>,
    pub last_seen_cursor: Endpoint<SmolStr>,

    // search
    pub search: Endpoint<Slice<SearchItem>>,
    pub typeahead: Endpoint<Typeahead>,

    // timelines
    pub home_latest: Endpoint<Slice<TweetKind>>,
    pub home: Endpoint<Slice<TweetKind>>,

    // tweets
    pub create_tweet: Endpoint<TweetKind>,
    pub create_note_tweet: Endpoint<TweetKind>,
    pub delete_tweet: Endpoint<bool>,
    pub tweet_detail: Endpoint<Slice<TweetKind>>,
    pub tweet_by_id: Endpoint<TweetKind>,
    pub tweets_by_ids: Endpoint<Vec<TweetKind>>,
    pub quote_tweets: Endpoint<Slice<TweetKind>>,
    pub moderated_timeline: Endpoint<Slice<TweetKind>>,
    pub favoriters: Endpoint<Slice<UserKind>>,
    pub retweeters: Endpoint<Slice<UserKind>>,
    pub favorite: Endpoint<bool>,
    pub unfavorite: Endpoint<bool>,
    pub retweet: Endpoint<bool>,
    pub unretweet: Endpoint<bool>,
    pub moderate: Endpoint<bool>,
    pub unmoderate: Endpoint<bool>,
    pub pin_tweet: Endpoint<bool>,
    pub unpin_tweet: Endpoint<bool>,
    pub conversation_control_change: Endpoint<bool>,
    pub conversation_control_delete: Endpoint<bool>,
    pub mute_conversation: Endpoint<bool>,
    pub unmute_conversation: Endpoint<bool>,
    pub unmention: Endpoint<bool>,

    // media
    pub media_init: Endpoint<MediaUploadInit>,
    pub media_finalize: Endpoint<MediaUpload>,
    pub media_status: Endpoint<MediaUpload>,
    pub media_metadata: Endpoint<bool>,

    // users
    pub user_by_username: Endpoint<UserKind>,
    pub users_by_usernames: Endpoint<Vec<UserKind>>,
    pub user_by_id: Endpoint<UserKind>,
    pub users_by_ids: Endpoint<Vec<UserKind>>,
    pub user_tweets: Endpoint<Slice<TweetKind>>,
    pub user_tweets_and_replies: Endpoint<Slice<TweetKind>>,
    pub user_media: Endpoint<Slice<TweetKind>>,
    pub likes: Endpoint<Slice<TweetKind>>,
    pub highlights: Endpoint<Slice<TweetKind>>,
    pub following: Endpoint<Slice<UserKind>>,
    pub followers: Endpoint<Slice<UserKind>>,
    pub followers_you_know: Endpoint<Slice<UserKind>>,
    pub verified_followers: Endpoint<Slice<UserKind>>,
    pub creator_subscriptions: Endpoint<Slice<UserKind>>,
    pub business_team: Endpoint<Slice<UserKind>>,
    pub incoming_follow_requests: Endpoint<FollowRequests>,
    pub remove_follower: Endpoint<bool>,
    pub follow: Endpoint<bool>,
    pub unfollow: Endpoint<bool>,
    pub update_friendship: Endpoint<bool>,
    pub cancel_follow_request: Endpoint<bool>,
    pub accept_follow_request: Endpoint<bool>,
    pub decline_follow_request: Endpoint<bool>,
    pub block: Endpoint<bool>,
    pub unblock: Endpoint<bool>,
    pub mute_user: Endpoint<bool>,
    pub unmute_user: Endpoint<bool>,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Endpoints {
    /// The catalog as the web client currently uses it.
    pub const DEFAULT: Endpoints = Endpoints {
        blocked_accounts_all: Endpoint::query(
            gql!("cViKW5oZPiIce0MOSKYblw/BlockedAccountsAll"),
            timeline!(user_entries, "/data/viewer/timeline/timeline/instructions"),
        )
        .with_variables(r#"{"count":20,"includePromotedContent":false}"#)
        .with_features(TIMELINE),
        blocked_accounts_imported: Endpoint::query(
            gql!("CJ8VCYGYHBNu2Dq2AdgO2w/BlockedAccountsImported"),
            timeline!(user_entries, "/data/viewer/timeline/timeline/instructions"),
        )
        .with_variables(r#"{"count":20,"includePromotedContent":false}"#)
        .with_features(TIMELINE),
        muted_accounts: Endpoint::query(
            gql!("mJA1YbOoJTyoB64W9hd6ZQ/MutedAccounts"),
            timeline!(user_entries, "/data/viewer/muting_timeline/timeline/instructions"),
        )
        .with_variables(r#"{"count":20,"includePromotedContent":false}"#)
        .with_features(TIMELINE),
        account_settings: Endpoint::get(v11!("account/settings.json"), settings)
            .with_variables(r#"{"include_ext_sharing_audiospaces_listening_data_with_followers":true,"include_mention_filter":true,"include_nsfw_user_flag":true,"include_nsfw_admin_flag":true,"include_ranked_timeline":true,"include_alt_text_compose":true,"include_ext_dm_av_call_settings":true,"ext":"ssoConnections","include_country_code":true,"include_ext_dm_nsfw_media_filter":true}"#)
            .with_transaction_id(),
        update_profile: Endpoint::post(v11!("account/update_profile.json"), present!("/id_str"))
            .with_variables(r#"{"displayNameMaxLength":50}"#)
            .with_transaction_id(),
        update_profile_image: Endpoint::post(
            v11!("account/update_profile_image.json"),
            present!("/id_str"),
        )
        .with_variables(r#"{"include_profile_interstitial_type":1,"include_blocking":1,"include_blocked_by":1,"include_followed_by":1,"include_want_retweets":1,"include_mute_edge":1,"include_can_dm":1,"include_can_media_tag":1,"include_ext_is_blue_verified":1,"include_ext_verified_type":1,"include_ext_profile_image_shape":1,"skip_status":1,"return_user":true}"#)
        .with_transaction_id(),
        verify_credentials: Endpoint::get(v11!("account/verify_credentials.json"), |body: &Value| {
            user_legacy(Some(body))
        })
        .with_transaction_id(),

        bookmarks: Endpoint::query(
            gql!("E6jlrZG4703s0mcA9DfNKQ/Bookmarks"),
            timeline!(entries, "/data/bookmark_timeline_v2/timeline/instructions"),
        )
        .with_variables(r#"{"count":50,"includePromotedContent":false}"#)
        .with_features(TIMELINE),
        bookmark_search: Endpoint::query(
            gql!("9467z_eRSDs6mi8CHRLxnA/BookmarkSearchTimeline"),
            timeline!(
                entries,
                "/data/search_by_raw_query/bookmarks_search_timeline/timeline/instructions"
            ),
        )
        .with_variables(r#"{"count":50}"#)
        .with_features(TIMELINE),
        create_bookmark: Endpoint::mutation(
            gql!("aoDbu3RHznuiSkQ9aNM67Q/CreateBookmark"),
            done!("/data/tweet_bookmark_put"),
        )
        .with_token(OAUTH_KEY),
        delete_bookmark: Endpoint::mutation(
            gql!("Wlmlj2-xzyS1GN3a6cj-mQ/DeleteBookmark"),
            done!("/data/tweet_bookmark_delete"),
        )
        .with_token(OAUTH_KEY),
        delete_all_bookmarks: Endpoint::mutation(
            gql!("skiACZKC1GDYli-M8RzEPQ/BookmarksAllDelete"),
            done!("/data/bookmark_all_delete"),
        )
        .with_token(OAUTH_KEY),

        community: Endpoint::query(
            gql!("iO-Ycgd1CdS0xk9nQYMCaA/CommunityByRestId"),
            fragment!(community, "/data/communityResults/result"),
        )
        .with_features(SHORT),
        community_tweets: Endpoint::query(
            gql!("ZoPkicnDp0_M60vVsWxf7w/CommunityTweetsTimeline"),
            timeline!(
                entries,
                "/data/communityResults/result/ranked_community_timeline/timeline/instructions"
            ),
        )
        .with_variables(COMMUNITY_TIMELINE)
        .with_features(TIMELINE),
        community_media: Endpoint::query(
            gql!("_DJU-HFPmQZX0_nclxm0Qg/CommunityMediaTimeline"),
            timeline!(
                media_entries,
                "/data/communityResults/result/ranked_community_timeline/timeline/instructions"
            ),
        )
        .with_variables(COMMUNITY_TIMELINE)
        .with_features(TIMELINE),
        join_community: Endpoint::query(
            gql!("b9bfcMQtJqWWCoyuM91Cpw/JoinCommunity"),
            present!("/data/community_join/id_str"),
        )
        .with_features(SHORT),
        leave_community: Endpoint::query(
            gql!("LLQ-xxy7KYe7VJFtRO31ig/LeaveCommunity"),
            present!("/data/community_leave/id_str"),
        )
        .with_features(SHORT),

        explore_page: Endpoint::query(
            gql!("r-XJpn_t210wJmpV9qnAHg/ExplorePage"),
            timeline!(discover_entries, "/data/explore_page/body"),
        )
        .with_features(TIMELINE),
        explore_sidebar: Endpoint::query(
            gql!("FrpzJjnhtQSrL4txK29E7A/ExploreSidebar"),
            timeline!(trend_entries, "/data/explore_sidebar/timeline/instructions"),
        )
        .with_features(TIMELINE),
        generic_timeline: Endpoint::query(
            gql!("8Ncv6o18kamVfavnfvrSTA/GenericTimelineById"),
            timeline!(entries, "/data/timeline/timeline/instructions"),
        )
        .with_variables(r#"{"count":20,"withQuickPromoteEligibilityTweetFields":true}"#)
        .with_features(TIMELINE),
        generic_trends: Endpoint::query(
            gql!("8Ncv6o18kamVfavnfvrSTA/GenericTimelineById"),
            timeline!(trend_entries, "/data/timeline/timeline/instructions"),
        )
        .with_variables(r#"{"count":20,"withQuickPromoteEligibilityTweetFields":true}"#)
        .with_features(TIMELINE),

        list_by_id: Endpoint::query(
            gql!("Tzkkg-NaBi_y1aAUUb6_eQ/ListByRestId"),
            fragment!(list, "/data/list"),
        )
        .with_features(SHORT),
        list_by_slug: Endpoint::query(
            gql!("kPoa5ip1Zl3rYF0T-e2HcA/ListBySlug"),
            fragment!(list, "/data/list"),
        )
        .with_features(SHORT),
        list_tweets: Endpoint::query(
            gql!("fqNUs_6rqLf89u_2waWuqg/ListLatestTweetsTimeline"),
            timeline!(entries, "/data/list/tweets_timeline/timeline/instructions"),
        )
        .with_variables(r#"{"count":40}"#)
        .with_features(TIMELINE),
        lists_discovery: Endpoint::query(
            gql!("WcZy_1yhZQ5zOabw_WElww/ListsDiscovery"),
            timeline!(list_entries, "/data/list_discovery_list_mixer_timeline/timeline/instructions"),
        )
        .with_variables(r#"{"count":40}"#)
        .with_features(TIMELINE),
        list_memberships: Endpoint::query(
            gql!("X6U9LAaMZ5C8MvPM12aK2A/ListMemberships"),
            timeline!(list_entries, "/data/user/result/timeline/instructions"),
        )
        .with_variables(r#"{"count":20}"#)
        .with_features(TIMELINE),
        list_ownerships: Endpoint::query(
            gql!("k0_MqdZDcbfRtDVuuk2Dig/ListOwnerships"),
            timeline!(list_entries, "/data/user/result/timeline/instructions"),
        )
        .with_variables(r#"{"count":20}"#)
        .with_features(TIMELINE),
        list_members: Endpoint::query(
            gql!("Bnhcen0kdsMAU1tW7U79qQ/ListMembers"),
            timeline!(user_entries, "/data/list/members_timeline/timeline/instructions"),
        )
        .with_variables(r#"{"count":40}"#)
        .with_features(TIMELINE),
        list_subscribers: Endpoint::query(
            gql!("5EDvteYto4oDpMVpPG1cPw/ListSubscribers"),
            timeline!(user_entries, "/data/list/subscribers_timeline/timeline/instructions"),
        )
        .with_variables(r#"{"count":40}"#)
        .with_features(TIMELINE),
        combined_lists: Endpoint::query(
            gql!("NFidCm38TCj56xu-yOqOXA/CombinedLists"),
            timeline!(list_entries, "/data/user/result/timeline/timeline/instructions"),
        )
        .with_variables(r#"{"count":100}"#)
        .with_features(TIMELINE),
        create_list: Endpoint::mutation(
            gql!("CzrvV0ePRFW1dPgLY6an7g/CreateList"),
            fragment!(list, "/data/list"),
        )
        .with_features(SHORT),
        delete_list: Endpoint::mutation(
            gql!("UnN9Th1BDbeLjpgjGSpL3Q/DeleteList"),
            done!("/data/list_delete"),
        ),
        update_list: Endpoint::mutation(
            gql!("CToNDwmbHSq5tqV0ExBFeg/UpdateList"),
            present!("/data/list/id_str"),
        ),
        edit_list_banner: Endpoint::mutation(
            gql!("CChy7omMr21Rx5xgqzTDeA/EditListBanner"),
            present!("/data/list/id_str"),
        )
        .with_features(SHORT),
        delete_list_banner: Endpoint::mutation(
            gql!("uT6t6CXdWqMF9UBPaQgxjw/DeleteListBanner"),
            present!("/data/list/id_str"),
        )
        .with_features(SHORT),
        list_add_member: Endpoint::mutation(
            gql!("EadD8ivrhZhYQr2pDmCpjA/ListAddMember"),
            present!("/data/list/id_str"),
        )
        .with_features(SHORT),
        list_remove_member: Endpoint::mutation(
            gql!("B5tMzrMYuFHJex_4EXFTSw/ListRemoveMember"),
            present!("/data/list/id_str"),
        )
        .with_features(SHORT),
        list_subscribe: Endpoint::mutation(
            gql!("qItCdxZic3vKHuF2nwO5cg/ListSubscribe"),
            present!("/data/list_subscribe_v3/id_str"),
        )
        .with_features(SHORT),
        list_unsubscribe: Endpoint::mutation(
            gql!("lJyQ2Rp6vk4h5czTYqOeLA/ListUnsubscribe"),
            present!("/data/list/id_str"),
        )
        .with_features(SHORT),
        pin_timeline: Endpoint::mutation(
            gql!("y62a1ZmM0tI0kjTj4j8-LA/PinTimeline"),
            present!("/data/pin_timeline/updated_pinned_timeline/list/id_str"),
        )
        .with_features(SHORT),
        unpin_timeline: Endpoint::mutation(
            gql!("_flfMJhBPURJJLxAuIFAfw/UnpinTimeline"),
            present!("/data/unpin_timeline/updated_pinned_timeline/list/id_str"),
        )
        .with_features(SHORT),
        mute_list: Endpoint::mutation(gql!("ZYyanJsskNUcltu9bliMLA/MuteList"), done!("/data/list")),
        unmute_list: Endpoint::mutation(
            gql!("pMZrHRNsmEkXgbn3tOyr7Q/UnmuteList"),
            done!("/data/list"),
        ),

        notifications: Endpoint::query(
            gql!("Ev6UMJRROInk_RMH2oVbBg/NotificationsTimeline"),
            timeline!(
                notification_entries,
                "/data/viewer_v2/user_results/result/notification_timeline/timeline/instructions"
            ),
        )
        .with_variables(r#"{"count":40}"#)
        .with_features(TIMELINE),
        badge_count: Endpoint::get(
            "https://twitter.com/i/api/2/badge_count/badge_count.json",
            unread_count,
        )
        .with_variables(r#"{"supports_ntab_urt":1,"include_xchat_count":1}"#),
        last_seen_cursor: Endpoint::post(
            "https://twitter.com/i/api/2/notifications/all/last_seen_cursor.json",
            last_seen,
        ),

        search: Endpoint::query(
            gql!("M1jEez78PEfVfbQLvlWMvQ/SearchTimeline"),
            timeline!(search_entries, "/data/search_by_raw_query/search_timeline/timeline/instructions"),
        )
        .with_variables(r#"{"count":40}"#)
        .with_features(TIMELINE)
        .with_token(ALT_TOKEN),
        typeahead: Endpoint::get(v11!("search/typeahead.json"), typeahead)
            .with_variables(r#"{"include_ext_is_blue_verified":1,"include_ext_verified_type":1,"include_ext_profile_image_shape":1,"src":"search_box","result_type":"events,users,topics,lists"}"#),

        home_latest: Endpoint::query(
            gql!("_qO7FJzShSKYWi9gtboE6A/HomeLatestTimeline"),
            timeline!(entries, "/data/home/home_timeline_urt/instructions"),
        )
        .with_variables(HOME)
        .with_features(TIMELINE),
        home: Endpoint::query(
            gql!("V7xdnRnvW6a8vIsMr9xK7A/HomeTimeline"),
            timeline!(entries, "/data/home/home_timeline_urt/instructions"),
        )
        .with_variables(HOME)
        .with_features(TIMELINE),

        create_tweet: Endpoint::mutation(
            gql!("Uf3io9zVp1DsYxrmL5FJ7g/CreateTweet"),
            fragment!(tweet, "/data/create_tweet/tweet_results/result"),
        )
        .with_variables(r#"{"dark_request":false,"disallowed_reply_options":null}"#)
        .with_features(TIMELINE)
        .with_token(OAUTH_KEY),
        create_note_tweet: Endpoint::mutation(
            gql!("lPTBLb_FPA5r8z_cH-s8lw/CreateNoteTweet"),
            fragment!(tweet, "/data/notetweet_create/tweet_results/result"),
        )
        .with_variables(r#"{"dark_request":false,"disallowed_reply_options":null}"#)
        .with_features(TIMELINE)
        .with_token(OAUTH_KEY),
        delete_tweet: Endpoint::mutation(
            gql!("VaenaVgh5q5ih7kvyVjgtg/DeleteTweet"),
            present!("/data/delete_tweet"),
        )
        .with_variables(r#"{"dark_request":false}"#),
        tweet_detail: Endpoint::query(
            gql!("97JF30KziU00483E_8elBA/TweetDetail"),
            timeline!(entries, "/data/threaded_conversation_with_injections_v2/instructions"),
        )
        .with_variables(TWEET_LOOKUP)
        .with_features(TIMELINE),
        tweet_by_id: Endpoint::query(
            gql!("aFvUsJm2c-oDkJV75blV6g/TweetResultByRestId"),
            fragment!(tweet, "/data/tweetResult/result"),
        )
        .with_variables(TWEET_LOOKUP)
        .with_features(TIMELINE),
        tweets_by_ids: Endpoint::query(gql!("-R17e8UqwApFGdMxa3jASA/TweetResultsByRestIds"), tweets_at)
            .with_variables(TWEET_LOOKUP)
            .with_features(TIMELINE),
        quote_tweets: Endpoint::query(
            gql!("M1jEez78PEfVfbQLvlWMvQ/SearchTimeline"),
            timeline!(entries, "/data/search_by_raw_query/search_timeline/timeline/instructions"),
        )
        .with_variables(r#"{"count":40,"querySource":"tdqt","product":"Top"}"#)
        .with_features(TIMELINE)
        .with_token(ALT_TOKEN),
        moderated_timeline: Endpoint::query(
            gql!("ftAt_EqbCL3YVp0VURo8iQ/ModeratedTimeline"),
            timeline!(entries, "/data/tweet/result/timeline_response/timeline/instructions"),
        )
        .with_variables(r#"{"count":40,"includePromotedContent":false}"#)
        .with_features(TIMELINE),
        favoriters: Endpoint::query(
            gql!("b3OrdeHDQfb9zRMC0fV3bw/Favoriters"),
            timeline!(user_entries, "/data/favoriters_timeline/timeline/instructions"),
        )
        .with_variables(ENGAGEMENT)
        .with_features(TIMELINE),
        retweeters: Endpoint::query(
            gql!("wfglZEC0MRgBdxMa_1a5YQ/Retweeters"),
            timeline!(user_entries, "/data/retweeters_timeline/timeline/instructions"),
        )
        .with_variables(ENGAGEMENT)
        .with_features(TIMELINE),
        favorite: Endpoint::mutation(
            gql!("ZYKSe-w7KEslx3JhSIk5LA/FavoriteTweet"),
            done!("/data/favorite_tweet"),
        ),
        unfavorite: Endpoint::mutation(
            gql!("lI07N6Otwv1PhnEgXILM7A/UnfavoriteTweet"),
            done!("/data/unfavorite_tweet"),
        ),
        retweet: Endpoint::mutation(
            gql!("LFho5rIi4xcKO90p9jwG7A/CreateRetweet"),
            present!("/data/create_retweet/retweet_results/result/rest_id"),
        )
        .with_variables(r#"{"dark_request":false}"#),
        unretweet: Endpoint::mutation(
            gql!("G4MoqBiE6aqyo4QWAgCy4w/DeleteRetweet"),
            present!("/data/unretweet/source_retweet_results/result/rest_id"),
        )
        .with_variables(r#"{"dark_request":false}"#),
        moderate: Endpoint::mutation(
            gql!("pjFnHGVqCjTcZol0xcBJjw/ModerateTweet"),
            done!("/data/tweet_moderate_put"),
        ),
        unmoderate: Endpoint::mutation(
            gql!("pVSyu6PA57TLvIE4nN2tsA/UnmoderateTweet"),
            done!("/data/tweet_unmoderate_put"),
        ),
        pin_tweet: Endpoint::mutation(gql!("VIHsNu89pK-kW35JpHq7Xw/PinTweet"), |body: &Value| {
            pinned(body, "/data/pin_tweet/message")
        }),
        unpin_tweet: Endpoint::mutation(gql!("BhKei844ypCyLYCg0nwigw/UnpinTweet"), |body: &Value| {
            pinned(body, "/data/unpin_tweet/message")
        }),
        conversation_control_change: Endpoint::mutation(
            gql!("hb1elGcj6769uT8qVYqtjw/ConversationControlChange"),
            done!("/data/tweet_conversation_control_put"),
        ),
        conversation_control_delete: Endpoint::mutation(
            gql!("OoMO_aSZ1ZXjegeamF9QmA/ConversationControlDelete"),
            done!("/data/tweet_conversation_control_delete"),
        ),
        mute_conversation: Endpoint::post(v11!("mutes/conversations/create.json"), present!("/id_str"))
            .with_token(OAUTH_KEY),
        unmute_conversation: Endpoint::post(
            v11!("mutes/conversations/destroy.json"),
            present!("/id_str"),
        )
        .with_token(OAUTH_KEY),
        unmention: Endpoint::mutation(
            gql!("xVW9j3OqoBRY9d6_2OONEg/UnmentionUserFromConversation"),
            done!("/data/unmention_user"),
        ),

        media_init: Endpoint::media(UPLOAD, media_upload_init).with_variables(r#"{"command":"INIT"}"#),
        media_finalize: Endpoint::media(UPLOAD, media_upload)
            .with_variables(r#"{"command":"FINALIZE"}"#),
        media_status: Endpoint::media(UPLOAD, media_upload).with_variables(r#"{"command":"STATUS"}"#),
        media_metadata: Endpoint::post(v11!("media/metadata/create.json"), |_: &Value| Ok(true)),

        user_by_username: Endpoint::query(
            gql!("-oaLodhGbbnzJBACb1kk2Q/UserByScreenName"),
            fragment!(user, "/data/user/result"),
        )
        .with_features(USER),
        users_by_usernames: Endpoint::query(gql!("ujL_oXbgVlDHQzWSTgzvnA/UsersByScreenNames"), users_at)
            .with_features(USER),
        user_by_id: Endpoint::query(
            gql!("Bbaot8ySMtJD7K2t01gW7A/UserByRestId"),
            fragment!(user, "/data/user/result"),
        )
        .with_features(USER),
        users_by_ids: Endpoint::query(gql!("xavgLWWbFH8wm_8MQN8plQ/UsersByRestIds"), users_at)
            .with_features(USER),
        user_tweets: Endpoint::query(
            gql!("-V26I6Pb5xDZ3C7BWwCQ_Q/UserTweets"),
            timeline!(entries, "/data/user/result/timeline/timeline/instructions"),
        )
        .with_variables(USER_TIMELINE)
        .with_features(TIMELINE),
        user_tweets_and_replies: Endpoint::query(
            gql!("61HQnvcGP870hiE-hCbG4A/UserTweetsAndReplies"),
            timeline!(entries, "/data/user/result/timeline/timeline/instructions"),
        )
        .with_variables(USER_TIMELINE)
        .with_features(TIMELINE),
        user_media: Endpoint::query(
            gql!("MMnr49cP_nldzCTfeVDRtA/UserMedia"),
            timeline!(media_entries, "/data/user/result/timeline/timeline/instructions"),
        )
        .with_variables(USER_TIMELINE)
        .with_features(TIMELINE),
        likes: Endpoint::query(
            gql!("JR2gceKucIKcVNB_9JkhsA/Likes"),
            timeline!(entries, "/data/user/result/timeline/timeline/instructions"),
        )
        .with_variables(USER_TIMELINE)
        .with_features(TIMELINE),
        highlights: Endpoint::query(
            gql!("QzHVmkiRhEfSMY_BRkxFRQ/UserHighlightsTweets"),
            timeline!(entries, "/data/user/result/timeline/timeline/instructions"),
        )
        .with_variables(USER_TIMELINE)
        .with_features(TIMELINE),
        following: Endpoint::query(
            gql!("BEkNpEt5pNETESoqMsTEGA/Following"),
            timeline!(user_entries, "/data/user/result/timeline/timeline/instructions"),
        )
        .with_variables(FOLLOWS)
        .with_features(TIMELINE)
        .with_token(ALT_TOKEN),
        followers: Endpoint::query(
            gql!("kuFUYP9eV1FPoEy4N-pi7w/Followers"),
            timeline!(user_entries, "/data/user/result/timeline/timeline/instructions"),
        )
        .with_variables(FOLLOWS)
        .with_features(TIMELINE)
        .with_token(ALT_TOKEN),
        followers_you_know: Endpoint::query(
            gql!("G3jEqceFeMKS559RiF4UDw/FollowersYouKnow"),
            timeline!(user_entries, "/data/user/result/timeline/timeline/instructions"),
        )
        .with_variables(FOLLOWS)
        .with_features(TIMELINE)
        .with_token(ALT_TOKEN),
        verified_followers: Endpoint::query(
            gql!("8a7QJe2CCHf4AWcs-1P6KQ/BlueVerifiedFollowers"),
            timeline!(user_entries, "/data/user/result/timeline/timeline/instructions"),
        )
        .with_variables(FOLLOWS)
        .with_features(TIMELINE)
        .with_token(OAUTH_KEY),
        creator_subscriptions: Endpoint::query(
            gql!("fl06vhYypYRcRxgLKO011Q/UserCreatorSubscriptions"),
            timeline!(user_entries, "/data/user/result/timeline/timeline/instructions"),
        )
        .with_variables(FOLLOWS)
        .with_features(TIMELINE),
        business_team: Endpoint::query(
            gql!("KFaAofDlKP7bnzskNWmjwA/UserBusinessProfileTeamTimeline"),
            timeline!(user_entries, "/data/user/result/timeline/timeline/instructions"),
        )
        .with_variables(r#"{"count":50,"includePromotedContent":false,"withVoice":true,"teamName":"NotAssigned"}"#)
        .with_features(TIMELINE),
        incoming_follow_requests: Endpoint::get(v11!("friendships/incoming.json"), follow_requests)
            .with_variables(r#"{"include_profile_interstitial_type":1,"include_blocking":1,"include_blocked_by":1,"include_followed_by":1,"include_want_retweets":1,"include_mute_edge":1,"include_can_dm":1,"include_can_media_tag":1,"include_ext_is_blue_verified":1,"include_ext_verified_type":1,"include_ext_profile_image_shape":1,"skip_status":1,"stringify_ids":true,"count":100}"#)
            .with_token(ALT_TOKEN),
        remove_follower: Endpoint::mutation(
            gql!("QpNfg0kpPRfjROQ_9eOLXA/RemoveFollower"),
            |body: &Value| {
                Ok(body
                    .pointer("/data/remove_follower/unfollow_success_reason")
                    .and_then(Value::as_str)
                    == Some("Unfollowed"))
            },
        ),
        follow: Endpoint::post(v11!("friendships/create.json"), present!("/id_str"))
            .with_variables(RELATIONSHIP)
            .with_token(ALT_TOKEN),
        unfollow: Endpoint::post(v11!("friendships/destroy.json"), present!("/id_str"))
            .with_variables(RELATIONSHIP)
            .with_token(ALT_TOKEN),
        update_friendship: Endpoint::post(
            v11!("friendships/update.json"),
            present!("/relationship/target/id_str"),
        )
        .with_variables(RELATIONSHIP)
        .with_token(ALT_TOKEN),
        cancel_follow_request: Endpoint::post(v11!("friendships/cancel.json"), present!("/id_str"))
            .with_token(ALT_TOKEN),
        accept_follow_request: Endpoint::post(v11!("friendships/accept.json"), present!("/id_str"))
            .with_token(ALT_TOKEN),
        decline_follow_request: Endpoint::post(v11!("friendships/deny.json"), present!("/id_str"))
            .with_token(ALT_TOKEN),
        block: Endpoint::post("https://twitter.com/i/api/1.1/blocks/create.json", present!("/id_str"))
            .with_transaction_id(),
        unblock: Endpoint::post(
            "https://twitter.com/i/api/1.1/blocks/destroy.json",
            present!("/id_str"),
        )
        .with_transaction_id(),
        mute_user: Endpoint::post(v11!("mutes/users/create.json"), present!("/id_str"))
            .with_token(ALT_TOKEN),
        unmute_user: Endpoint::post(v11!("mutes/users/destroy.json"), present!("/id_str"))
            .with_token(ALT_TOKEN),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{Family, Verb};
    use serde_json::json;

    #[test]
    fn variables_are_valid_json_objects() {
        let e = &Endpoints::DEFAULT;
        for variables in [
            e.account_settings.variables,
            e.update_profile_image.variables,
            e.typeahead.variables,
            e.create_tweet.variables,
            e.follow.variables,
            e.home.variables,
            e.tweet_detail.variables,
            e.media_init.variables,
            e.quote_tweets.variables,
            e.business_team.variables,
            e.incoming_follow_requests.variables,
        ] {
            let parsed: Value = serde_json::from_str(variables).expect("valid json");
            assert!(parsed.is_object(), "{variables}");
        }
    }

    #[test]
    fn catalog_shapes() {
        let e = &Endpoints::DEFAULT;
        assert_eq!(e.home.name(), "HomeTimeline");
        assert_eq!(e.create_tweet.query_id(), Some("Uf3io9zVp1DsYxrmL5FJ7g"));
        assert_eq!(e.create_tweet.token, Some(OAUTH_KEY));
        assert_eq!(e.search.token, Some(ALT_TOKEN));
        assert_eq!(e.media_init.family, Family::Media);
        assert_eq!(e.media_init.verb, Verb::Get);
        assert!(e.account_settings.requires_transaction_id);
        assert!(e.block.requires_transaction_id);
        assert!(!e.follow.requires_transaction_id);
    }

    #[test]
    fn done_and_present_parsers() {
        let e = &Endpoints::DEFAULT;
        let liked = json!({"data": {"favorite_tweet": "Done"}});
        assert_eq!((e.favorite.parser)(&liked), Ok(true));
        assert_eq!((e.favorite.parser)(&json!({"data": {}})), Ok(false));

        assert_eq!((e.follow.parser)(&json!({"id_str": "12"})), Ok(true));
        assert_eq!((e.follow.parser)(&json!({})), Ok(false));

        let pinned = json!({"data": {"pin_tweet": {"message": "post pinned successfully"}}});
        assert_eq!((e.pin_tweet.parser)(&pinned), Ok(true));
    }

    #[test]
    fn missing_timeline_path_is_a_parse_error() {
        let e = &Endpoints::DEFAULT;
        let err = (e.bookmarks.parser)(&json!({"data": {}})).unwrap_err();
        assert_eq!(
            err,
            ParseError::Missing("data.bookmark_timeline_v2.timeline.instructions".into())
        );
    }

    #[test]
    fn batch_lookups_degrade_per_item() {
        let e = &Endpoints::DEFAULT;
        let body = json!({"data": {"users": [
            {"result": {"__typename": "UserUnavailable", "rest_id": "1"}},
            {}
        ]}});
        let users = (e.users_by_ids.parser)(&body).unwrap();
        assert_eq!(users.len(), 2);
        assert!(users.iter().all(|u| u.as_user().is_none()));
    }

    #[test]
    fn last_seen_cursor_reads_the_cursor() {
        let e = &Endpoints::DEFAULT;
        let cursor = (e.last_seen_cursor.parser)(&json!({"cursor": "DAABDAAB"})).unwrap();
        assert_eq!(cursor, "DAABDAAB");
    }
}
