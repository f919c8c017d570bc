//! Coupon section validators.
//!
//! Each function checks its rules top to bottom; the order of the `check`
//! calls is the order errors are reported in.
use super::model::{AudienceScope, ChannelScope, CodeMode, Coupon, DiscountType, ValidityMode};
use crate::config::WizardConfig;
use crate::registry::IdentifierRegistry;
use crate::wizard::{Rules, SectionCheck};
use regex::Regex;

pub(super) fn basic_info(
    config: &WizardConfig,
    code_pattern: &Regex,
    registry: &dyn IdentifierRegistry,
    coupon: &Coupon,
) -> SectionCheck {
    let mut rules = Rules::new();
    let name = coupon.name.trim();
    rules
        .check(name.is_empty(), "Coupon name is required")
        .check(
            name.chars().count() > config.max_name_length,
            format!(
                "Coupon name must be at most {} characters",
                config.max_name_length
            ),
        );

    if coupon.code_mode == CodeMode::Manual {
        let code = coupon.code.trim();
        if code.is_empty() {
            rules.push("Coupon code is required when using a manual code");
        } else {
            let length = code.chars().count();
            let well_formed = code_pattern.is_match(code)
                && (config.code_min_length..=config.code_max_length).contains(&length);
            rules.check(
                !well_formed,
                format!(
                    "Coupon code must be {}-{} characters of A-Z, 0-9, '-' or '_'",
                    config.code_min_length, config.code_max_length
                ),
            );
            if let Some(error) = code_uniqueness_error(registry, code, coupon.id.as_deref()) {
                rules.push(error);
            }
        }
    }

    if coupon.discount_type.requires_value() {
        rules.check(
            coupon.discount_value.is_nan() || coupon.discount_value <= 0.0,
            "Discount value must be greater than 0",
        );
    }
    rules.check(
        coupon.discount_type == DiscountType::Percentage && coupon.discount_value > 100.0,
        "Percentage discount cannot exceed 100%",
    );
    rules.finish()
}

fn code_uniqueness_error(
    registry: &dyn IdentifierRegistry,
    code: &str,
    coupon_id: Option<&str>,
) -> Option<String> {
    match registry.is_identifier_taken(code, coupon_id) {
        Ok(false) => None,
        Ok(true) => Some(format!("Coupon code \"{code}\" is already in use")),
        Err(err) => {
            tracing::warn!(code, error = %format!("{err:#}"), "coupon code lookup failed");
            Some("Could not verify that the coupon code is unique".to_string())
        }
    }
}

pub(super) fn validity_rules(coupon: &Coupon) -> SectionCheck {
    let mut rules = Rules::new();
    if coupon.validity_mode == ValidityMode::FixedRange {
        rules
            .check(
                coupon.start_date.is_none(),
                "Start date is required for a fixed validity range",
            )
            .check(
                coupon.end_date.is_none(),
                "End date is required for a fixed validity range",
            );
        if let (Some(start), Some(end)) = (coupon.start_date, coupon.end_date) {
            rules.check(end <= start, "End date must be after start date");
        }
    }
    rules.check(
        coupon.minimum_purchase < 0.0,
        "Minimum purchase amount cannot be negative",
    );
    rules.finish()
}

pub(super) fn distribution_limits(coupon: &Coupon) -> SectionCheck {
    let mut rules = Rules::new();
    rules
        .check(
            coupon.audience == AudienceScope::SpecificSegments && coupon.segments.is_empty(),
            "Select at least one customer segment",
        )
        .check(
            coupon.total_limit_enabled && coupon.total_limit < 1,
            "Total redemption limit must be at least 1",
        );
    rules.finish()
}

pub(super) fn redemption_limits(coupon: &Coupon) -> SectionCheck {
    let mut rules = Rules::new();
    rules
        .check(
            coupon.per_customer_limit_enabled && coupon.per_customer_limit < 1,
            "Per-customer limit must be at least 1",
        )
        .check(
            coupon.per_customer_limit_enabled
                && coupon.total_limit_enabled
                && coupon.total_limit >= 1
                && coupon.per_customer_limit > coupon.total_limit,
            "Per-customer limit cannot exceed the total redemption limit",
        )
        .check(
            coupon.channels == ChannelScope::SpecificChannels && coupon.channel_list.is_empty(),
            "Select at least one redemption channel",
        );
    rules.finish()
}
