//! Serializable request payloads for the NOWPayments endpoints.
//!
//! Each creation endpoint accepts a closed set of optional fields, modelled
//! here as a dedicated options struct. Supplying a field the endpoint does not
//! know is therefore a compile error rather than something silently forwarded
//! to the vendor.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Forces simulated settlement in the sandbox environment.
const SANDBOX_CASE: &str = "success";

/// Credentials payload for the `auth` endpoint.
///
/// Email and password are case-sensitive on the vendor side.
#[derive(Debug, Serialize)]
pub struct AuthRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment creation
// ─────────────────────────────────────────────────────────────────────────────

/// Optional fields accepted by the `payment` endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentOptions {
    /// Amount the customer has to pay, stated in crypto.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_amount: Option<f64>,
    /// Url to receive callbacks, should contain "http" or "https".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipn_callback_url: Option<String>,
    /// Inner store order ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Inner store order description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_description: Option<String>,
    /// Purchase to attach this payment to, for several payments per order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_id: Option<u64>,
    /// Receive funds on an address other than the payout wallet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_address: Option<String>,
    /// Currency of the external payout address, required alongside it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_currency: Option<String>,
    /// Extra id / memo / tag for the external payout address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_extra_id: Option<u64>,
    /// Required for fixed-rate exchanges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fixed_rate: Option<bool>,
    /// Required for fixed-rate exchanges with all fees paid by the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fee_paid_by_user: Option<bool>,
}

/// Body of a `POST payment` request.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRequest {
    pub price_amount: f64,
    pub price_currency: String,
    pub pay_currency: String,
    #[serde(flatten)]
    pub options: PaymentOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    case: Option<&'static str>,
}

impl PaymentRequest {
    pub fn new(
        price_amount: f64,
        price_currency: &str,
        pay_currency: &str,
        options: PaymentOptions,
        sandbox: bool,
    ) -> Self {
        Self {
            price_amount,
            price_currency: price_currency.to_string(),
            pay_currency: pay_currency.to_string(),
            options,
            case: sandbox.then_some(SANDBOX_CASE),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Invoice creation
// ─────────────────────────────────────────────────────────────────────────────

/// Optional fields accepted by the `invoice` endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InvoiceOptions {
    /// Url to receive callbacks, should contain "http" or "https".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipn_callback_url: Option<String>,
    /// Inner store order ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Inner store order description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_description: Option<String>,
    /// Where the customer is redirected after a successful payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    /// Where the customer is redirected after a failed payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
}

/// Body of a `POST invoice` request.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceRequest {
    pub price_amount: f64,
    pub price_currency: String,
    pub pay_currency: String,
    #[serde(flatten)]
    pub options: InvoiceOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    case: Option<&'static str>,
}

impl InvoiceRequest {
    pub fn new(
        price_amount: f64,
        price_currency: &str,
        pay_currency: &str,
        options: InvoiceOptions,
        sandbox: bool,
    ) -> Self {
        Self {
            price_amount,
            price_currency: price_currency.to_string(),
            pay_currency: pay_currency.to_string(),
            options,
            case: sandbox.then_some(SANDBOX_CASE),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment by invoice
// ─────────────────────────────────────────────────────────────────────────────

/// Optional fields accepted by the `invoice-payment` endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InvoicePaymentOptions {
    /// Purchase to attach this payment to, for several payments per order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_id: Option<u64>,
    /// Inner store order description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_description: Option<String>,
    /// Email notified when the payment completes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    /// Receive funds on an address other than the payout wallet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_address: Option<String>,
    /// Extra id / memo / tag for the external payout address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_extra_id: Option<u64>,
    /// Currency of the external payout address, required alongside it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_currency: Option<String>,
}

/// Body of a `POST invoice-payment` request.
#[derive(Debug, Clone, Serialize)]
pub struct InvoicePaymentRequest {
    /// Invoice id, named `iid` on the wire.
    pub iid: u64,
    pub pay_currency: String,
    #[serde(flatten)]
    pub options: InvoicePaymentOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    case: Option<&'static str>,
}

impl InvoicePaymentRequest {
    pub fn new(
        invoice_id: u64,
        pay_currency: &str,
        options: InvoicePaymentOptions,
        sandbox: bool,
    ) -> Self {
        Self {
            iid: invoice_id,
            pay_currency: pay_currency.to_string(),
            options,
            case: sandbox.then_some(SANDBOX_CASE),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment listing
// ─────────────────────────────────────────────────────────────────────────────

/// Fields the payment listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    CreatedAt,
    PaymentId,
    PaymentStatus,
    PayAddress,
    PriceAmount,
    PriceCurrency,
    PayAmount,
    ActuallyPaid,
    PayCurrency,
    OrderId,
    OrderDescription,
    PurchaseId,
    OutcomeAmount,
    OutcomeCurrency,
}

impl SortField {
    /// Wire name used in the `sortBy` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::PaymentId => "payment_id",
            SortField::PaymentStatus => "payment_status",
            SortField::PayAddress => "pay_address",
            SortField::PriceAmount => "price_amount",
            SortField::PriceCurrency => "price_currency",
            SortField::PayAmount => "pay_amount",
            SortField::ActuallyPaid => "actually_paid",
            SortField::PayCurrency => "pay_currency",
            SortField::OrderId => "order_id",
            SortField::OrderDescription => "order_description",
            SortField::PurchaseId => "purchase_id",
            SortField::OutcomeAmount => "outcome_amount",
            SortField::OutcomeCurrency => "outcome_currency",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at" => Ok(SortField::CreatedAt),
            "payment_id" => Ok(SortField::PaymentId),
            "payment_status" => Ok(SortField::PaymentStatus),
            "pay_address" => Ok(SortField::PayAddress),
            "price_amount" => Ok(SortField::PriceAmount),
            "price_currency" => Ok(SortField::PriceCurrency),
            "pay_amount" => Ok(SortField::PayAmount),
            "actually_paid" => Ok(SortField::ActuallyPaid),
            "pay_currency" => Ok(SortField::PayCurrency),
            "order_id" => Ok(SortField::OrderId),
            "order_description" => Ok(SortField::OrderDescription),
            "purchase_id" => Ok(SortField::PurchaseId),
            "outcome_amount" => Ok(SortField::OutcomeAmount),
            "outcome_currency" => Ok(SortField::OutcomeCurrency),
            _ => Err(ValidationError::InvalidSortField),
        }
    }
}

/// Sort direction for the payment listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Wire name used in the `orderBy` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ValidationError::InvalidSortOrder),
        }
    }
}

/// Query parameters for listing payments.
///
/// `page` is unsigned, so the "page must be equal or greater than 0" rule
/// holds by construction; the limit range still needs a runtime check.
#[derive(Debug, Clone)]
pub struct ListPaymentsQuery {
    /// Records per page, 1 to 500.
    pub limit: u32,
    /// Zero-based page number.
    pub page: u32,
    pub sort_by: SortField,
    pub order_by: SortOrder,
    /// Only include payments created on or after this date.
    pub date_from: Option<NaiveDate>,
    /// Only include payments created on or before this date.
    pub date_to: Option<NaiveDate>,
}

impl Default for ListPaymentsQuery {
    fn default() -> Self {
        Self {
            limit: 10,
            page: 0,
            sort_by: SortField::CreatedAt,
            order_by: SortOrder::Asc,
            date_from: None,
            date_to: None,
        }
    }
}

impl ListPaymentsQuery {
    /// Checks the limit range the endpoint enforces.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.limit < 1 || self.limit > 500 {
            return Err(ValidationError::LimitOutOfRange);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_options_skip_absent_fields() {
        let body = PaymentRequest::new(100.0, "usd", "btc", PaymentOptions::default(), false);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "price_amount": 100.0,
                "price_currency": "usd",
                "pay_currency": "btc",
            })
        );
    }

    #[test]
    fn test_payment_options_serialize_present_fields() {
        let options = PaymentOptions {
            pay_amount: Some(0.17070286),
            order_id: Some("RGDBP-21314".into()),
            is_fixed_rate: Some(true),
            ..Default::default()
        };
        let body = PaymentRequest::new(3999.5, "usd", "btc", options, false);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["pay_amount"], 0.17070286);
        assert_eq!(json["order_id"], "RGDBP-21314");
        assert_eq!(json["is_fixed_rate"], true);
        assert!(json.get("ipn_callback_url").is_none());
    }

    #[test]
    fn test_sandbox_payload_carries_success_case() {
        let body = PaymentRequest::new(100.0, "usd", "btc", PaymentOptions::default(), true);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["case"], "success");
    }

    #[test]
    fn test_invoice_payment_uses_iid_wire_name() {
        let body = InvoicePaymentRequest::new(
            4522625843,
            "btc",
            InvoicePaymentOptions::default(),
            false,
        );
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["iid"], 4522625843u64);
        assert_eq!(json["pay_currency"], "btc");
    }

    #[test]
    fn test_sort_field_round_trip() {
        let all = [
            "created_at",
            "payment_id",
            "payment_status",
            "pay_address",
            "price_amount",
            "price_currency",
            "pay_amount",
            "actually_paid",
            "pay_currency",
            "order_id",
            "order_description",
            "purchase_id",
            "outcome_amount",
            "outcome_currency",
        ];
        for name in all {
            let field: SortField = name.parse().unwrap();
            assert_eq!(field.as_str(), name);
        }
    }

    #[test]
    fn test_invalid_sort_field() {
        let err = "invalid_sort_parameter".parse::<SortField>().unwrap_err();
        assert_eq!(err, ValidationError::InvalidSortField);
        assert_eq!(err.to_string(), "Invalid sort parameter");
    }

    #[test]
    fn test_invalid_sort_order() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        let err = "ascending".parse::<SortOrder>().unwrap_err();
        assert_eq!(err, ValidationError::InvalidSortOrder);
        assert_eq!(err.to_string(), "Invalid order parameter");
    }

    #[test]
    fn test_list_query_defaults() {
        let query = ListPaymentsQuery::default();
        assert_eq!(query.limit, 10);
        assert_eq!(query.page, 0);
        assert_eq!(query.sort_by, SortField::CreatedAt);
        assert_eq!(query.order_by, SortOrder::Asc);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_list_query_limit_bounds() {
        let mut query = ListPaymentsQuery::default();
        for valid in [1, 500] {
            query.limit = valid;
            assert!(query.validate().is_ok());
        }
        for invalid in [0, 501] {
            query.limit = invalid;
            assert_eq!(
                query.validate().unwrap_err(),
                ValidationError::LimitOutOfRange
            );
        }
    }
}
