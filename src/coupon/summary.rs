//! One-line synopses of each coupon section for the stepper.
use super::model::{AudienceScope, ChannelScope, CodeMode, Coupon, DiscountType, ValidityMode};
use crate::config::WizardConfig;
use crate::util::{format_money, format_number, plural, truncate_chars};

const NAME_PREVIEW_CHARS: usize = 32;

pub(super) fn basic_info(config: &WizardConfig, coupon: &Coupon) -> String {
    let name = match coupon.name.trim() {
        "" => "Untitled coupon".to_string(),
        name => truncate_chars(name, NAME_PREVIEW_CHARS),
    };
    let code = match coupon.code_mode {
        CodeMode::Auto => "Auto-generated code".to_string(),
        CodeMode::Manual if coupon.code.trim().is_empty() => "No code yet".to_string(),
        CodeMode::Manual => coupon.code.trim().to_string(),
    };
    format!("{name} · {code} · {}", discount_phrase(config, coupon))
}

/// Discount type and value as one phrase, e.g. `10% off`.
pub fn discount_phrase(config: &WizardConfig, coupon: &Coupon) -> String {
    match coupon.discount_type {
        DiscountType::Percentage => format!("{}% off", format_number(coupon.discount_value)),
        DiscountType::FixedAmount => format!(
            "{} off",
            format_money(&config.currency_symbol, coupon.discount_value)
        ),
        DiscountType::FreeShipping => "Free shipping".to_string(),
        DiscountType::FreeItem => "Free item".to_string(),
    }
}

pub(super) fn validity_rules(config: &WizardConfig, coupon: &Coupon) -> String {
    let window = match coupon.validity_mode {
        ValidityMode::Unlimited => "No expiry".to_string(),
        ValidityMode::FixedRange => match (coupon.start_date, coupon.end_date) {
            (Some(start), Some(end)) => format!("Valid {start} to {end}"),
            (Some(start), None) => format!("Valid from {start}"),
            (None, Some(end)) => format!("Valid until {end}"),
            (None, None) => "Dates not set".to_string(),
        },
    };
    if coupon.minimum_purchase > 0.0 {
        format!(
            "{window} · Min. purchase {}",
            format_money(&config.currency_symbol, coupon.minimum_purchase)
        )
    } else {
        window
    }
}

pub(super) fn distribution_limits(coupon: &Coupon) -> String {
    let audience = match coupon.audience {
        AudienceScope::AllCustomers => "All customers".to_string(),
        AudienceScope::SpecificSegments => plural(coupon.segments.len(), "segment", "segments"),
    };
    let limit = if coupon.total_limit_enabled {
        plural(
            coupon.total_limit as usize,
            "total redemption",
            "total redemptions",
        )
    } else {
        "Unlimited redemptions".to_string()
    };
    format!("{audience} · {limit}")
}

pub(super) fn redemption_limits(coupon: &Coupon) -> String {
    let per_customer = if coupon.per_customer_limit_enabled {
        format!("{} per customer", coupon.per_customer_limit)
    } else {
        "Unlimited per customer".to_string()
    };
    let channels = match coupon.channels {
        ChannelScope::AllChannels => "All channels".to_string(),
        ChannelScope::SpecificChannels if coupon.channel_list.is_empty() => {
            "No channels selected".to_string()
        }
        ChannelScope::SpecificChannels => coupon
            .channel_list
            .iter()
            .map(|channel| channel.label())
            .collect::<Vec<_>>()
            .join(", "),
    };
    let stacking = if coupon.stackable {
        "Stackable"
    } else {
        "Not stackable"
    };
    format!("{per_customer} · {channels} · {stacking}")
}
