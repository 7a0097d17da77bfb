//! Deserializable response models for the NOWPayments endpoints.
//!
//! Field names follow the wire format, including the `payin_extra_id` spelling
//! the live API actually returns (official docs claim `payment_extra_id`).

use serde::{Deserialize, Serialize};

use crate::serde_util;

/// Response of the `status` endpoint. `message` is "OK" when the API is up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiStatus {
    pub message: String,
}

/// JWT obtained from the `auth` endpoint.
///
/// Tokens expire after five minutes on the vendor side; there is no caching or
/// refresh logic in this client, callers re-authenticate per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthToken {
    pub token: String,
}

/// Lifecycle states of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentState {
    Waiting,
    Confirming,
    Confirmed,
    Sending,
    PartiallyPaid,
    Finished,
    Failed,
    Refunded,
    Expired,
    /// States the vendor adds without notice land here.
    #[serde(other)]
    Unknown,
}

/// Response of the `estimate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatedPrice {
    pub currency_from: String,
    #[serde(deserialize_with = "serde_util::f64_or_string")]
    pub amount_from: f64,
    pub currency_to: String,
    #[serde(deserialize_with = "serde_util::f64_or_string")]
    pub estimated_amount: f64,
}

/// A payment record, as returned by `payment` and `invoice-payment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    #[serde(deserialize_with = "serde_util::u64_or_string")]
    pub payment_id: u64,
    pub payment_status: PaymentState,
    pub pay_address: String,
    #[serde(deserialize_with = "serde_util::f64_or_string")]
    pub price_amount: f64,
    pub price_currency: String,
    #[serde(deserialize_with = "serde_util::f64_or_string")]
    pub pay_amount: f64,
    pub pay_currency: String,
    #[serde(default)]
    pub order_id: Option<String>,
    /// Absent on payments created through an invoice.
    #[serde(default)]
    pub order_description: Option<String>,
    #[serde(default)]
    pub ipn_callback_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_u64_or_string")]
    pub purchase_id: Option<u64>,
    #[serde(default, deserialize_with = "serde_util::opt_f64_or_string")]
    pub amount_received: Option<f64>,
    #[serde(default, deserialize_with = "serde_util::opt_string_or_number")]
    pub payin_extra_id: Option<String>,
    #[serde(default)]
    pub smart_contract: Option<String>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub network_precision: Option<u32>,
    #[serde(default)]
    pub time_limit: Option<u64>,
    #[serde(default, deserialize_with = "serde_util::opt_string_or_number")]
    pub burning_percent: Option<String>,
    #[serde(default)]
    pub expiration_estimate_date: Option<String>,
    /// Hosted checkout link, only set on payments created through an invoice:
    /// `{web_payment_url}?iid={invoice_id}&paymentId={payment_id}`.
    #[serde(default)]
    pub uri: Option<String>,
}

/// An invoice record, as returned by the `invoice` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(deserialize_with = "serde_util::u64_or_string")]
    pub id: u64,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub order_description: Option<String>,
    #[serde(deserialize_with = "serde_util::f64_or_string")]
    pub price_amount: f64,
    pub price_currency: String,
    #[serde(default)]
    pub pay_currency: Option<String>,
    #[serde(default)]
    pub ipn_callback_url: Option<String>,
    /// Hosted checkout page the customer follows to pay.
    pub invoice_url: String,
    #[serde(default)]
    pub success_url: Option<String>,
    #[serde(default)]
    pub cancel_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Current state of a payment, as returned by `payment/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentStatus {
    #[serde(deserialize_with = "serde_util::u64_or_string")]
    pub payment_id: u64,
    pub payment_status: PaymentState,
    pub pay_address: String,
    #[serde(deserialize_with = "serde_util::f64_or_string")]
    pub price_amount: f64,
    pub price_currency: String,
    #[serde(deserialize_with = "serde_util::f64_or_string")]
    pub pay_amount: f64,
    #[serde(default, deserialize_with = "serde_util::opt_f64_or_string")]
    pub actually_paid: Option<f64>,
    pub pay_currency: String,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub order_description: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_u64_or_string")]
    pub purchase_id: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_f64_or_string")]
    pub outcome_amount: Option<f64>,
    #[serde(default)]
    pub outcome_currency: Option<String>,
}

/// One page of payment records plus pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentList {
    pub data: Vec<PaymentStatus>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default, rename = "pagesCount")]
    pub pages_count: Option<u32>,
    #[serde(default)]
    pub total: Option<u32>,
}

/// Ticker list from the `currencies` endpoint.
///
/// This is the set every creation/estimate call validates its target currency
/// against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currencies {
    pub currencies: Vec<String>,
}

/// Detailed coin descriptor from the `full-currencies` endpoint.
///
/// The vendor attaches more fields than anyone needs; only the stable ones are
/// typed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyDetail {
    #[serde(default)]
    pub id: Option<u64>,
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub enable: Option<bool>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub priority: Option<i64>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub extra_id_exists: Option<bool>,
}

/// Response of the `full-currencies` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullCurrencies {
    pub currencies: Vec<CurrencyDetail>,
}

/// Coins enabled in the merchant's own settings, from `merchant/coins`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckedCurrencies {
    #[serde(rename = "selectedCurrencies")]
    pub selected_currencies: Vec<String>,
}

/// Response of the `min-amount` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinimumAmount {
    pub currency_from: String,
    #[serde(default)]
    pub currency_to: Option<String>,
    #[serde(deserialize_with = "serde_util::f64_or_string")]
    pub min_amount: f64,
    #[serde(default, deserialize_with = "serde_util::opt_f64_or_string")]
    pub fiat_equivalent: Option<f64>,
}

/// Response of `payment/{id}/update-estimate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatedEstimate {
    #[serde(deserialize_with = "serde_util::u64_or_string")]
    pub id: u64,
    #[serde(default, deserialize_with = "serde_util::opt_string_or_number")]
    pub token_id: Option<String>,
    #[serde(deserialize_with = "serde_util::f64_or_string")]
    pub pay_amount: f64,
    #[serde(default)]
    pub expiration_estimate_date: Option<String>,
}
