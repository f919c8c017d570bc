//! Loyalty campaign creation wizard.
//!
//! Built on the same engine as the coupon wizard, with sections
//! `basic_info`, `audience`, `rewards` and `schedule`. No campaign validator
//! consults an external service.
mod model;
mod section;
mod summary;
mod validate;

pub use model::{Campaign, CampaignPatch, CampaignType, EndMode, MemberScope};
pub use section::CampaignSection;
pub use summary::reward_phrase;

use crate::config::WizardConfig;
use crate::wizard::{SectionCheck, Wizard, WizardForm};

/// Validators and synopses for [`Campaign`] drafts.
pub struct CampaignForm {
    config: WizardConfig,
}

impl CampaignForm {
    pub fn new(config: WizardConfig) -> Self {
        Self { config }
    }
}

impl WizardForm for CampaignForm {
    type Section = CampaignSection;
    type Entity = Campaign;
    type Patch = CampaignPatch;

    fn apply_patch(entity: &mut Campaign, patch: CampaignPatch) {
        patch.apply(entity);
    }

    fn validate(&self, section: CampaignSection, campaign: &Campaign) -> SectionCheck {
        match section {
            CampaignSection::BasicInfo => validate::basic_info(&self.config, campaign),
            CampaignSection::Audience => validate::audience(campaign),
            CampaignSection::Rewards => validate::rewards(campaign),
            CampaignSection::Schedule => validate::schedule(campaign),
        }
    }

    fn synopsis(&self, section: CampaignSection, campaign: &Campaign) -> String {
        match section {
            CampaignSection::BasicInfo => summary::basic_info(campaign),
            CampaignSection::Audience => summary::audience(campaign),
            CampaignSection::Rewards => summary::rewards(campaign),
            CampaignSection::Schedule => summary::schedule(campaign),
        }
    }
}

/// A campaign editing session.
pub type CampaignWizard = Wizard<CampaignForm>;

pub fn campaign_wizard(config: WizardConfig) -> CampaignWizard {
    let policy = config.navigation_policy();
    Wizard::with_policy(CampaignForm::new(config), policy)
}
