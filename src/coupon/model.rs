//! Coupon draft entity and its partial-update patch.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeMode {
    #[default]
    Auto,
    Manual,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    #[default]
    Percentage,
    FixedAmount,
    FreeShipping,
    FreeItem,
}

impl DiscountType {
    /// Monetary kinds carry a numeric discount value.
    pub fn requires_value(self) -> bool {
        matches!(self, DiscountType::Percentage | DiscountType::FixedAmount)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidityMode {
    #[default]
    Unlimited,
    FixedRange,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudienceScope {
    #[default]
    AllCustomers,
    SpecificSegments,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelScope {
    #[default]
    AllChannels,
    SpecificChannels,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedemptionChannel {
    Online,
    InStore,
    MobileApp,
    CallCenter,
}

impl RedemptionChannel {
    pub fn label(self) -> &'static str {
        match self {
            RedemptionChannel::Online => "Online",
            RedemptionChannel::InStore => "In-store",
            RedemptionChannel::MobileApp => "Mobile app",
            RedemptionChannel::CallCenter => "Call center",
        }
    }
}

/// Coupon being configured.
///
/// Every field has a default so partially written drafts always load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coupon {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub code_mode: CodeMode,
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub validity_mode: ValidityMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub minimum_purchase: f64,
    pub audience: AudienceScope,
    pub segments: Vec<String>,
    pub total_limit_enabled: bool,
    pub total_limit: u32,
    pub per_customer_limit_enabled: bool,
    pub per_customer_limit: u32,
    pub channels: ChannelScope,
    pub channel_list: Vec<RedemptionChannel>,
    pub stackable: bool,
}

impl Default for Coupon {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            code_mode: CodeMode::Auto,
            code: String::new(),
            discount_type: DiscountType::Percentage,
            discount_value: 0.0,
            validity_mode: ValidityMode::Unlimited,
            start_date: None,
            end_date: None,
            minimum_purchase: 0.0,
            audience: AudienceScope::AllCustomers,
            segments: Vec::new(),
            total_limit_enabled: false,
            total_limit: 0,
            per_customer_limit_enabled: true,
            per_customer_limit: 1,
            channels: ChannelScope::AllChannels,
            channel_list: Vec::new(),
            stackable: false,
        }
    }
}

/// Partial coupon update. `None` leaves a field unchanged.
///
/// The optional dates use a nested `Option` so a patch can clear them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CouponPatch {
    pub id: Option<Option<String>>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub code_mode: Option<CodeMode>,
    pub code: Option<String>,
    pub discount_type: Option<DiscountType>,
    pub discount_value: Option<f64>,
    pub validity_mode: Option<ValidityMode>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
    pub minimum_purchase: Option<f64>,
    pub audience: Option<AudienceScope>,
    pub segments: Option<Vec<String>>,
    pub total_limit_enabled: Option<bool>,
    pub total_limit: Option<u32>,
    pub per_customer_limit_enabled: Option<bool>,
    pub per_customer_limit: Option<u32>,
    pub channels: Option<ChannelScope>,
    pub channel_list: Option<Vec<RedemptionChannel>>,
    pub stackable: Option<bool>,
}

impl From<Coupon> for CouponPatch {
    fn from(coupon: Coupon) -> Self {
        Self {
            id: Some(coupon.id),
            name: Some(coupon.name),
            description: Some(coupon.description),
            code_mode: Some(coupon.code_mode),
            code: Some(coupon.code),
            discount_type: Some(coupon.discount_type),
            discount_value: Some(coupon.discount_value),
            validity_mode: Some(coupon.validity_mode),
            start_date: Some(coupon.start_date),
            end_date: Some(coupon.end_date),
            minimum_purchase: Some(coupon.minimum_purchase),
            audience: Some(coupon.audience),
            segments: Some(coupon.segments),
            total_limit_enabled: Some(coupon.total_limit_enabled),
            total_limit: Some(coupon.total_limit),
            per_customer_limit_enabled: Some(coupon.per_customer_limit_enabled),
            per_customer_limit: Some(coupon.per_customer_limit),
            channels: Some(coupon.channels),
            channel_list: Some(coupon.channel_list),
            stackable: Some(coupon.stackable),
        }
    }
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl CouponPatch {
    pub fn apply(self, coupon: &mut Coupon) {
        merge(&mut coupon.id, self.id);
        merge(&mut coupon.name, self.name);
        merge(&mut coupon.description, self.description);
        merge(&mut coupon.code_mode, self.code_mode);
        merge(&mut coupon.code, self.code);
        merge(&mut coupon.discount_type, self.discount_type);
        merge(&mut coupon.discount_value, self.discount_value);
        merge(&mut coupon.validity_mode, self.validity_mode);
        merge(&mut coupon.start_date, self.start_date);
        merge(&mut coupon.end_date, self.end_date);
        merge(&mut coupon.minimum_purchase, self.minimum_purchase);
        merge(&mut coupon.audience, self.audience);
        merge(&mut coupon.segments, self.segments);
        merge(&mut coupon.total_limit_enabled, self.total_limit_enabled);
        merge(&mut coupon.total_limit, self.total_limit);
        merge(
            &mut coupon.per_customer_limit_enabled,
            self.per_customer_limit_enabled,
        );
        merge(&mut coupon.per_customer_limit, self.per_customer_limit);
        merge(&mut coupon.channels, self.channels);
        merge(&mut coupon.channel_list, self.channel_list);
        merge(&mut coupon.stackable, self.stackable);
    }
}
