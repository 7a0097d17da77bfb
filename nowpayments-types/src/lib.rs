//! # NOWPayments Types
//!
//! Request payloads, response models and validation errors for the
//! NOWPayments API. This crate has ZERO IO dependencies - only data
//! structures and the rules they enforce.
//!
//! ## Layout
//!
//! - `currency` - fiat allow-list
//! - `error` - client-side validation errors with fixed vendor-facing messages
//! - `request` - serializable request payloads and per-endpoint option structs
//! - `response` - deserializable response models
//! - `serde_util` - helpers for the vendor's number-or-string JSON fields

pub mod currency;
pub mod error;
pub mod request;
pub mod response;
pub mod serde_util;

// Re-export commonly used types
pub use currency::{FIAT_CURRENCIES, is_supported_fiat};
pub use error::ValidationError;
pub use request::{
    AuthRequest, InvoiceOptions, InvoicePaymentOptions, InvoicePaymentRequest, InvoiceRequest,
    ListPaymentsQuery, PaymentOptions, PaymentRequest, SortField, SortOrder,
};
pub use response::{
    ApiStatus, AuthToken, CheckedCurrencies, Currencies, CurrencyDetail, EstimatedPrice,
    FullCurrencies, Invoice, MinimumAmount, Payment, PaymentList, PaymentState, PaymentStatus,
    UpdatedEstimate,
};
