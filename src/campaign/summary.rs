use super::model::{Campaign, CampaignType, EndMode, MemberScope};
use crate::util::{format_number, plural, truncate_chars};

const NAME_PREVIEW_CHARS: usize = 32;

pub(super) fn basic_info(campaign: &Campaign) -> String {
    let name = match campaign.name.trim() {
        "" => "Untitled campaign".to_string(),
        name => truncate_chars(name, NAME_PREVIEW_CHARS),
    };
    let kind = match campaign.campaign_type {
        CampaignType::PointsMultiplier => "Points multiplier",
        CampaignType::BonusPoints => "Bonus points",
        CampaignType::TierUpgrade => "Tier upgrade",
    };
    format!("{name} · {kind}")
}

pub(super) fn audience(campaign: &Campaign) -> String {
    let members = match campaign.audience {
        MemberScope::AllMembers => "All members".to_string(),
        MemberScope::SpecificSegments => plural(campaign.segments.len(), "segment", "segments"),
    };
    if campaign.participant_cap_enabled {
        format!(
            "{members} · Up to {}",
            plural(
                campaign.participant_cap as usize,
                "participant",
                "participants"
            )
        )
    } else {
        members
    }
}

/// Reward mechanic and its value as one phrase, e.g. `2x points`.
pub fn reward_phrase(campaign: &Campaign) -> String {
    match campaign.campaign_type {
        CampaignType::PointsMultiplier => format!("{}x points", format_number(campaign.multiplier)),
        CampaignType::BonusPoints => format!("+{} bonus points", campaign.bonus_points),
        CampaignType::TierUpgrade if campaign.target_tier.trim().is_empty() => {
            "Tier upgrade".to_string()
        }
        CampaignType::TierUpgrade => format!("Upgrade to {}", campaign.target_tier.trim()),
    }
}

pub(super) fn rewards(campaign: &Campaign) -> String {
    let reward = reward_phrase(campaign);
    if campaign.points_budget_enabled {
        format!("{reward} · Budget {} points", campaign.points_budget)
    } else {
        reward
    }
}

pub(super) fn schedule(campaign: &Campaign) -> String {
    match (campaign.start_date, campaign.end_mode, campaign.end_date) {
        (None, _, _) => "Start date not set".to_string(),
        (Some(start), EndMode::OpenEnded, _) => format!("Starts {start} · No end date"),
        (Some(start), EndMode::FixedEnd, Some(end)) => format!("Runs {start} to {end}"),
        (Some(start), EndMode::FixedEnd, None) => format!("Starts {start} · End date not set"),
    }
}
