use serde_json::Value;

use super::{count, flag, items, string, text};
use crate::error::ParseError;
use crate::lookup::{Lookup, Pattern};
use crate::types::{DmPolicy, FollowRequests, GroupDmPolicy, Privacy, Settings, Typeahead, UnreadCount};

const DM_POLICIES: Lookup<DmPolicy> = Lookup::new(
    &[
        (Pattern::Exact("following"), DmPolicy::Following),
        (Pattern::Exact("verified"), DmPolicy::Verified),
    ],
    DmPolicy::All,
);

const GROUP_DM_POLICIES: Lookup<GroupDmPolicy> =
    Lookup::new(&[(Pattern::Exact("following"), GroupDmPolicy::Following)], GroupDmPolicy::All);

fn str_of<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// Parse the `account/settings.json` response.
pub fn settings(value: &Value) -> Result<Settings, ParseError> {
    if !value.is_object() {
        return Err(ParseError::Type {
            path: "".into(),
            expected: "object",
        });
    }

    Ok(Settings {
        autoplay: !flag(value, "autoplay_disabled"),
        country: string(value.get("country_code")).unwrap_or_else(|| "us".into()),
        display_sensitive_media: flag(value, "display_sensitive_media"),
        dm_allowed_from: DM_POLICIES.resolve(str_of(value, "allow_dms_from")),
        dm_groups_allowed_from: GROUP_DM_POLICIES.resolve(str_of(value, "allow_dm_groups_from")),
        dm_receipts: str_of(value, "dm_receipt_setting") != Some("all_disabled"),
        dm_quality_filter: str_of(value, "dm_quality_filter") != Some("disabled"),
        is_eu: value.pointer("/settings_metadata/is_eu").and_then(Value::as_str) == Some("true"),
        is_email_public: flag(value, "discoverable_by_email_address"),
        is_nsfw: flag(value, "nsfw_user") || flag(value, "nsfw_admin"),
        is_phone_number_public: flag(value, "discoverable_by_mobile_phone"),
        lang: string(value.get("language")),
        protected: flag(value, "protected"),
        privacy: Privacy {
            allow_personalized_ads: flag(value, "allow_ads_personalization"),
            allow_cookies: flag(value, "use_cookie_personalization"),
            allow_selling_your_information: flag(
                value,
                "allow_sharing_data_for_third_party_personalization",
            ),
            allow_location_history: flag(value, "allow_location_history_personalization"),
            personalized_trends: flag(value, "personalized_trends"),
            show_current_audiospace_publicly: flag(
                value,
                "ext_sharing_audiospaces_listening_data_with_followers",
            ),
        },
        username: string(value.get("screen_name")),
    })
}

/// Parse the `badge_count.json` response.
pub fn unread_count(value: &Value) -> Result<UnreadCount, ParseError> {
    let dm = count(value.get("dm_unread_count"));
    Ok(UnreadCount {
        notifications: count(value.get("ntab_unread_count")),
        inbox: if dm > 0 {
            dm
        } else {
            count(value.get("xchat_unread_count"))
        },
    })
}

/// Parse the `search/typeahead.json` response.
pub fn typeahead(value: &Value) -> Result<Typeahead, ParseError> {
    Ok(Typeahead {
        results_count: count(value.get("num_results")),
        topics: items(value.get("topics"))
            .iter()
            .filter_map(|t| text(t.get("topic")))
            .collect(),
        user_ids: items(value.get("users"))
            .iter()
            .filter_map(|u| string(u.get("id_str")))
            .collect(),
        query: text(value.get("query")).unwrap_or_default(),
    })
}

/// Parse the `friendships/incoming.json` response.
pub fn follow_requests(value: &Value) -> Result<FollowRequests, ParseError> {
    let ids = match value.get("ids") {
        Some(Value::Array(ids)) => ids
            .iter()
            .map(|id| {
                string(Some(id)).ok_or_else(|| ParseError::Type {
                    path: "ids".into(),
                    expected: "string or number",
                })
            })
            .collect::<Result<_, _>>()?,
        None | Some(Value::Null) => return Err(ParseError::Missing("ids".into())),
        Some(_) => {
            return Err(ParseError::Type {
                path: "ids".into(),
                expected: "array",
            });
        }
    };
    Ok(FollowRequests {
        ids,
        next_cursor: string(value.get("next_cursor_str")),
        previous_cursor: string(value.get("previous_cursor_str")),
    })
}
