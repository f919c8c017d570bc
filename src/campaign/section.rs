use crate::wizard::WizardSection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four steps of the campaign wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignSection {
    BasicInfo,
    Audience,
    Rewards,
    Schedule,
}

impl WizardSection for CampaignSection {
    const ORDER: &'static [Self] = &[
        CampaignSection::BasicInfo,
        CampaignSection::Audience,
        CampaignSection::Rewards,
        CampaignSection::Schedule,
    ];

    fn position(self) -> usize {
        match self {
            CampaignSection::BasicInfo => 0,
            CampaignSection::Audience => 1,
            CampaignSection::Rewards => 2,
            CampaignSection::Schedule => 3,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            CampaignSection::BasicInfo => "basic_info",
            CampaignSection::Audience => "audience",
            CampaignSection::Rewards => "rewards",
            CampaignSection::Schedule => "schedule",
        }
    }

    fn label(self) -> &'static str {
        match self {
            CampaignSection::BasicInfo => "Basic info",
            CampaignSection::Audience => "Audience",
            CampaignSection::Rewards => "Rewards",
            CampaignSection::Schedule => "Schedule",
        }
    }
}

impl fmt::Display for CampaignSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
