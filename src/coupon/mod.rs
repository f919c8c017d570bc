//! Coupon creation wizard.
//!
//! Sections, in order:
//!
//! - `basic_info`: name, code (auto or manual), discount type and value
//! - `validity_rules`: unlimited or fixed date range, minimum purchase
//! - `distribution_limits`: audience segments, total redemption cap
//! - `redemption_limits`: per-customer cap, channels, stacking
//!
//! Manual codes are checked against an [`IdentifierRegistry`]; it is the only
//! validator with an external dependency.
mod model;
mod section;
mod summary;
mod validate;

pub use model::{
    AudienceScope, ChannelScope, CodeMode, Coupon, CouponPatch, DiscountType, RedemptionChannel,
    ValidityMode,
};
pub use section::CouponSection;
pub use summary::discount_phrase;

use crate::config::WizardConfig;
use crate::registry::IdentifierRegistry;
use crate::wizard::{SectionCheck, Wizard, WizardForm};
use regex::Regex;

/// Validators and synopses for [`Coupon`] drafts.
pub struct CouponForm {
    config: WizardConfig,
    code_pattern: Regex,
    registry: Box<dyn IdentifierRegistry>,
}

impl CouponForm {
    pub fn new(config: WizardConfig, registry: impl IdentifierRegistry + 'static) -> Self {
        Self {
            config,
            code_pattern: Regex::new(r"^[A-Z0-9_-]+$").expect("regex for coupon codes"),
            registry: Box::new(registry),
        }
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }
}

impl WizardForm for CouponForm {
    type Section = CouponSection;
    type Entity = Coupon;
    type Patch = CouponPatch;

    fn apply_patch(entity: &mut Coupon, patch: CouponPatch) {
        patch.apply(entity);
    }

    fn validate(&self, section: CouponSection, coupon: &Coupon) -> SectionCheck {
        match section {
            CouponSection::BasicInfo => validate::basic_info(
                &self.config,
                &self.code_pattern,
                self.registry.as_ref(),
                coupon,
            ),
            CouponSection::ValidityRules => validate::validity_rules(coupon),
            CouponSection::DistributionLimits => validate::distribution_limits(coupon),
            CouponSection::RedemptionLimits => validate::redemption_limits(coupon),
        }
    }

    fn synopsis(&self, section: CouponSection, coupon: &Coupon) -> String {
        match section {
            CouponSection::BasicInfo => summary::basic_info(&self.config, coupon),
            CouponSection::ValidityRules => summary::validity_rules(&self.config, coupon),
            CouponSection::DistributionLimits => summary::distribution_limits(coupon),
            CouponSection::RedemptionLimits => summary::redemption_limits(coupon),
        }
    }
}

/// A coupon editing session.
pub type CouponWizard = Wizard<CouponForm>;

/// Start a coupon session using the config's navigation policy.
pub fn coupon_wizard(
    config: WizardConfig,
    registry: impl IdentifierRegistry + 'static,
) -> CouponWizard {
    let policy = config.navigation_policy();
    Wizard::with_policy(CouponForm::new(config, registry), policy)
}

#[cfg(test)]
#[path = "coupon_tests.rs"]
mod tests;
