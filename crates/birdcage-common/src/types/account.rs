//! Account settings and counters.

use serde::Serialize;
use smol_str::SmolStr;

/// Who may start a direct message conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DmPolicy {
    /// Anyone
    All,
    /// Verified accounts
    Verified,
    /// Accounts the viewer follows
    Following,
}

/// Who may add the viewer to group conversations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GroupDmPolicy {
    /// Anyone
    All,
    /// Accounts the viewer follows
    Following,
}

/// Privacy toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Privacy {
    /// Personalized ads
    pub allow_personalized_ads: bool,
    /// Personalization based on cookies
    pub allow_cookies: bool,
    /// Data sharing with partners
    pub allow_selling_your_information: bool,
    /// Location history
    pub allow_location_history: bool,
    /// Trends based on the viewer's activity
    pub personalized_trends: bool,
    /// Show the space the viewer is listening to
    pub show_current_audiospace_publicly: bool,
}

/// Account-level settings of the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Videos autoplay
    pub autoplay: bool,
    /// Two letter country code
    pub country: SmolStr,
    /// Sensitive media shown without a warning
    pub display_sensitive_media: bool,
    /// Direct message policy
    pub dm_allowed_from: DmPolicy,
    /// Group message policy
    pub dm_groups_allowed_from: GroupDmPolicy,
    /// Read receipts enabled
    pub dm_receipts: bool,
    /// Low quality messages filtered
    pub dm_quality_filter: bool,
    /// Account subject to EU rules
    pub is_eu: bool,
    /// Discoverable by email
    pub is_email_public: bool,
    /// Account marked sensitive
    pub is_nsfw: bool,
    /// Discoverable by phone number
    pub is_phone_number_public: bool,
    /// Interface language
    pub lang: Option<SmolStr>,
    /// Tweets protected
    pub protected: bool,
    /// Privacy toggles
    pub privacy: Privacy,
    /// Handle of the authenticated account
    pub username: Option<SmolStr>,
}

/// Unread counters shown on the navigation badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UnreadCount {
    /// Unread notifications
    pub notifications: u64,
    /// Unread direct messages
    pub inbox: u64,
}

/// Live search suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Typeahead {
    /// Total suggestions
    pub results_count: u64,
    /// Suggested topics
    pub topics: Vec<String>,
    /// Suggested account ids
    pub user_ids: Vec<SmolStr>,
    /// Query the suggestions are for
    pub query: String,
}

/// One page of incoming follow requests.
///
/// Upstream only returns account ids here; look them up with a batch user
/// query when profiles are needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FollowRequests {
    /// Requesting account ids
    pub ids: Vec<SmolStr>,
    /// Cursor of the next page, `0` when there is none
    pub next_cursor: Option<SmolStr>,
    /// Cursor of the previous page
    pub previous_cursor: Option<SmolStr>,
}
