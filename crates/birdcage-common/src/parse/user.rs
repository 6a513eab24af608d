use serde_json::Value;
use smol_str::SmolStr;

use super::{count, flag, items, object, string, text, timestamp, typename, unexpected};
use crate::error::ParseError;
use crate::types::{SuspendedUser, UnavailableUser, User, UserKind};

static NULL: Value = Value::Null;

/// Parse a GraphQL `user_results.result` fragment.
pub fn user(value: Option<&Value>) -> Result<UserKind, ParseError> {
    let Some(value) = object(value) else {
        return Ok(UserKind::UnavailableUser(UnavailableUser::default()));
    };
    let id = string(value.get("rest_id"));

    match typename(value) {
        None | Some("User") => {}
        Some("UserUnavailable") => return Ok(degraded(value, id)),
        Some(other) => return Err(unexpected("user", other)),
    }

    let legacy = value.get("legacy").unwrap_or(&NULL);
    let core = value.get("core").unwrap_or(&NULL);
    Ok(profile(value, legacy, core, id))
}

/// Parse a REST v1.1 user object, e.g. from `verify_credentials`.
pub fn user_legacy(value: Option<&Value>) -> Result<UserKind, ParseError> {
    let Some(value) = object(value) else {
        return Ok(UserKind::UnavailableUser(UnavailableUser::default()));
    };
    let id = string(value.get("id_str"));
    Ok(profile(value, value, &NULL, id))
}

fn degraded(value: &Value, id: Option<SmolStr>) -> UserKind {
    let reason = string(value.get("reason"));
    if reason.as_deref() == Some("Suspended") {
        UserKind::SuspendedUser(SuspendedUser { id })
    } else {
        UserKind::UnavailableUser(UnavailableUser { id, reason })
    }
}

/// Newer responses move some profile fields out of `legacy` into dedicated
/// objects; every lookup tries the new location first.
fn profile(root: &Value, legacy: &Value, core: &Value, id: Option<SmolStr>) -> UserKind {
    let created_at = timestamp(core.get("created_at")).or_else(|| timestamp(legacy.get("created_at")));
    let (Some(id), Some(created_at)) = (id.clone(), created_at) else {
        return UserKind::UnavailableUser(UnavailableUser { id, reason: None });
    };

    let either = |new: Option<&Value>, key: &str| match new {
        Some(v) if !v.is_null() => crate::parse::truthy(Some(v)),
        _ => flag(legacy, key),
    };
    let relationship = root.get("relationship_perspectives");

    UserKind::User(Box::new(User {
        id,
        username: string(core.get("screen_name"))
            .or_else(|| string(legacy.get("screen_name")))
            .unwrap_or_default(),
        name: text(core.get("name"))
            .or_else(|| text(legacy.get("name")))
            .unwrap_or_default(),
        description: text(legacy.get("description"))
            .or_else(|| text(root.pointer("/profile_bio/description")))
            .unwrap_or_default(),
        created_at,
        location: text(root.pointer("/location/location")).or_else(|| text(legacy.get("location"))),
        url: text(legacy.pointer("/entities/url/urls/0/expanded_url"))
            .or_else(|| text(legacy.get("url"))),
        avatar_url: text(root.pointer("/avatar/image_url"))
            .or_else(|| text(legacy.get("profile_image_url_https"))),
        banner_url: text(legacy.get("profile_banner_url")),
        followers_count: count(legacy.get("followers_count")),
        following_count: count(legacy.get("friends_count")),
        tweets_count: count(legacy.get("statuses_count")),
        likes_count: count(legacy.get("favourites_count")),
        media_count: count(legacy.get("media_count")),
        listed_count: count(legacy.get("listed_count")),
        protected: either(root.pointer("/privacy/protected"), "protected"),
        verified: either(root.pointer("/verification/verified"), "verified"),
        blue_verified: flag(root, "is_blue_verified") || flag(legacy, "ext_is_blue_verified"),
        following: either(relationship.and_then(|r| r.get("following")), "following"),
        followed_by: either(relationship.and_then(|r| r.get("followed_by")), "followed_by"),
        blocking: either(relationship.and_then(|r| r.get("blocking")), "blocking"),
        blocked_by: either(relationship.and_then(|r| r.get("blocked_by")), "blocked_by"),
        muting: either(relationship.and_then(|r| r.get("muting")), "muting"),
        can_dm: either(root.pointer("/dm_permissions/can_dm"), "can_dm"),
        pinned_tweet_ids: items(legacy.get("pinned_tweet_ids_str"))
            .iter()
            .filter_map(|id| string(Some(id)))
            .collect(),
    }))
}
