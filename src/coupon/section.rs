use crate::wizard::WizardSection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four steps of the coupon wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CouponSection {
    BasicInfo,
    ValidityRules,
    DistributionLimits,
    RedemptionLimits,
}

impl WizardSection for CouponSection {
    const ORDER: &'static [Self] = &[
        CouponSection::BasicInfo,
        CouponSection::ValidityRules,
        CouponSection::DistributionLimits,
        CouponSection::RedemptionLimits,
    ];

    fn position(self) -> usize {
        match self {
            CouponSection::BasicInfo => 0,
            CouponSection::ValidityRules => 1,
            CouponSection::DistributionLimits => 2,
            CouponSection::RedemptionLimits => 3,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            CouponSection::BasicInfo => "basic_info",
            CouponSection::ValidityRules => "validity_rules",
            CouponSection::DistributionLimits => "distribution_limits",
            CouponSection::RedemptionLimits => "redemption_limits",
        }
    }

    fn label(self) -> &'static str {
        match self {
            CouponSection::BasicInfo => "Basic info",
            CouponSection::ValidityRules => "Validity rules",
            CouponSection::DistributionLimits => "Distribution limits",
            CouponSection::RedemptionLimits => "Redemption limits",
        }
    }
}

impl fmt::Display for CouponSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
