use serde_json::Value;

use super::{count, flag, items, object, string, text, timestamp, typename, unexpected, user};
use crate::error::ParseError;
use crate::lookup::{Lookup, Pattern};
use crate::types::{Community, CommunityKind, CommunityRole, CommunityRule, UnavailableCommunity};

/// Upstream `role` to [`CommunityRole`]. Admins and creators fall through to
/// [`CommunityRole::Owner`].
pub const COMMUNITY_ROLES: Lookup<CommunityRole> = Lookup::new(
    &[
        (Pattern::Exact("NonMember"), CommunityRole::Guest),
        (Pattern::Exact("Member"), CommunityRole::Member),
        (Pattern::Exact("Moderator"), CommunityRole::Moderator),
    ],
    CommunityRole::Owner,
);

/// Parse a `communityResults.result` fragment.
pub fn community(value: Option<&Value>) -> Result<CommunityKind, ParseError> {
    let Some(value) = object(value) else {
        return Ok(CommunityKind::UnavailableCommunity(UnavailableCommunity::default()));
    };
    let id = string(value.get("id_str")).or_else(|| string(value.get("rest_id")));

    match typename(value) {
        None | Some("Community") => {}
        Some("CommunityUnavailable") => {
            return Ok(CommunityKind::UnavailableCommunity(UnavailableCommunity {
                id,
                reason: string(value.get("reason")),
            }));
        }
        Some(other) => return Err(unexpected("community", other)),
    }

    let (Some(id), Some(created_at)) = (id.clone(), timestamp(value.get("created_at"))) else {
        return Ok(CommunityKind::UnavailableCommunity(UnavailableCommunity { id, reason: None }));
    };

    let invites_unavailable = value
        .pointer("/invites_result/__typename")
        .and_then(Value::as_str)
        .is_some_and(|t| t.contains("Unavailable"));

    Ok(CommunityKind::Community(Box::new(Community {
        id,
        banner_url: text(value.pointer("/custom_banner_media/media_info/original_img_url")),
        can_join: value.get("join_policy").and_then(Value::as_str) == Some("Open"),
        can_invite: value.get("invites_policy").and_then(Value::as_str) == Some("MemberInvitesAllowed")
            && !invites_unavailable,
        created_at,
        creator: user(value.pointer("/creator_results/result"))?,
        description: text(value.get("description")).unwrap_or_default(),
        member: flag(value, "is_member"),
        members_count: count(value.get("member_count")),
        moderators_count: count(value.get("moderator_count")),
        name: text(value.get("name")).unwrap_or_default(),
        nsfw: flag(value, "is_nsfw"),
        pinned: flag(value, "is_pinned"),
        role: COMMUNITY_ROLES.resolve(value.get("role").and_then(Value::as_str)),
        rules: items(value.get("rules"))
            .iter()
            .filter_map(|rule| {
                Some(CommunityRule {
                    id: string(rule.get("rest_id"))?,
                    name: text(rule.get("name")).unwrap_or_default(),
                    description: text(rule.get("description")),
                })
            })
            .collect(),
        topic: text(value.pointer("/primary_community_topic/topic_name")),
    })))
}
