use super::model::{Campaign, CampaignType, EndMode, MemberScope};
use crate::config::WizardConfig;
use crate::wizard::{Rules, SectionCheck};

pub(super) fn basic_info(config: &WizardConfig, campaign: &Campaign) -> SectionCheck {
    let mut rules = Rules::new();
    let name = campaign.name.trim();
    rules
        .check(name.is_empty(), "Campaign name is required")
        .check(
            name.chars().count() > config.max_name_length,
            format!(
                "Campaign name must be at most {} characters",
                config.max_name_length
            ),
        );
    rules.finish()
}

pub(super) fn audience(campaign: &Campaign) -> SectionCheck {
    let mut rules = Rules::new();
    rules
        .check(
            campaign.audience == MemberScope::SpecificSegments && campaign.segments.is_empty(),
            "Select at least one member segment",
        )
        .check(
            campaign.participant_cap_enabled && campaign.participant_cap < 1,
            "Participant cap must be at least 1",
        );
    rules.finish()
}

pub(super) fn rewards(campaign: &Campaign) -> SectionCheck {
    let mut rules = Rules::new();
    match campaign.campaign_type {
        CampaignType::PointsMultiplier => {
            rules.check(
                campaign.multiplier.is_nan() || campaign.multiplier <= 1.0,
                "Points multiplier must be greater than 1",
            );
        }
        CampaignType::BonusPoints => {
            rules.check(
                campaign.bonus_points == 0,
                "Bonus points must be greater than 0",
            );
        }
        CampaignType::TierUpgrade => {
            rules.check(
                campaign.target_tier.trim().is_empty(),
                "Target tier is required for a tier upgrade",
            );
        }
    }
    rules.check(
        campaign.points_budget_enabled && campaign.points_budget < 1,
        "Points budget must be at least 1",
    );
    rules.finish()
}

pub(super) fn schedule(campaign: &Campaign) -> SectionCheck {
    let mut rules = Rules::new();
    rules.check(campaign.start_date.is_none(), "Start date is required");
    if campaign.end_mode == EndMode::FixedEnd {
        rules.check(
            campaign.end_date.is_none(),
            "End date is required for a fixed end",
        );
        if let (Some(start), Some(end)) = (campaign.start_date, campaign.end_date) {
            rules.check(end <= start, "End date must be after start date");
        }
    }
    rules.finish()
}
