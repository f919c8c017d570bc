//! Campaign draft entity and its partial-update patch.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignType {
    #[default]
    PointsMultiplier,
    BonusPoints,
    TierUpgrade,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberScope {
    #[default]
    AllMembers,
    SpecificSegments,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndMode {
    #[default]
    OpenEnded,
    FixedEnd,
}

/// Loyalty campaign being configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Campaign {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub campaign_type: CampaignType,
    pub audience: MemberScope,
    pub segments: Vec<String>,
    pub participant_cap_enabled: bool,
    pub participant_cap: u32,
    pub multiplier: f64,
    pub bonus_points: u32,
    pub target_tier: String,
    pub points_budget_enabled: bool,
    pub points_budget: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    pub end_mode: EndMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Default for Campaign {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            campaign_type: CampaignType::PointsMultiplier,
            audience: MemberScope::AllMembers,
            segments: Vec::new(),
            participant_cap_enabled: false,
            participant_cap: 0,
            multiplier: 2.0,
            bonus_points: 0,
            target_tier: String::new(),
            points_budget_enabled: false,
            points_budget: 0,
            start_date: None,
            end_mode: EndMode::OpenEnded,
            end_date: None,
        }
    }
}

/// Partial campaign update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignPatch {
    pub id: Option<Option<String>>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub campaign_type: Option<CampaignType>,
    pub audience: Option<MemberScope>,
    pub segments: Option<Vec<String>>,
    pub participant_cap_enabled: Option<bool>,
    pub participant_cap: Option<u32>,
    pub multiplier: Option<f64>,
    pub bonus_points: Option<u32>,
    pub target_tier: Option<String>,
    pub points_budget_enabled: Option<bool>,
    pub points_budget: Option<u32>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_mode: Option<EndMode>,
    pub end_date: Option<Option<NaiveDate>>,
}

impl From<Campaign> for CampaignPatch {
    fn from(campaign: Campaign) -> Self {
        Self {
            id: Some(campaign.id),
            name: Some(campaign.name),
            description: Some(campaign.description),
            campaign_type: Some(campaign.campaign_type),
            audience: Some(campaign.audience),
            segments: Some(campaign.segments),
            participant_cap_enabled: Some(campaign.participant_cap_enabled),
            participant_cap: Some(campaign.participant_cap),
            multiplier: Some(campaign.multiplier),
            bonus_points: Some(campaign.bonus_points),
            target_tier: Some(campaign.target_tier),
            points_budget_enabled: Some(campaign.points_budget_enabled),
            points_budget: Some(campaign.points_budget),
            start_date: Some(campaign.start_date),
            end_mode: Some(campaign.end_mode),
            end_date: Some(campaign.end_date),
        }
    }
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl CampaignPatch {
    pub fn apply(self, campaign: &mut Campaign) {
        merge(&mut campaign.id, self.id);
        merge(&mut campaign.name, self.name);
        merge(&mut campaign.description, self.description);
        merge(&mut campaign.campaign_type, self.campaign_type);
        merge(&mut campaign.audience, self.audience);
        merge(&mut campaign.segments, self.segments);
        merge(&mut campaign.participant_cap_enabled, self.participant_cap_enabled);
        merge(&mut campaign.participant_cap, self.participant_cap);
        merge(&mut campaign.multiplier, self.multiplier);
        merge(&mut campaign.bonus_points, self.bonus_points);
        merge(&mut campaign.target_tier, self.target_tier);
        merge(&mut campaign.points_budget_enabled, self.points_budget_enabled);
        merge(&mut campaign.points_budget, self.points_budget);
        merge(&mut campaign.start_date, self.start_date);
        merge(&mut campaign.end_mode, self.end_mode);
        merge(&mut campaign.end_date, self.end_date);
    }
}
