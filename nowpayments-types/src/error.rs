//! Client-side validation errors.
//!
//! Every variant carries a fixed message; callers matching on message text
//! can rely on it staying stable.

/// Precondition failures detected before any network call.
///
/// Validation errors are deterministic and never wrap an HTTP failure: if one
/// is returned, no request was issued for the failing parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Amount must be greater than 0")]
    AmountNotPositive,

    #[error("Unsupported fiat currency")]
    UnsupportedFiatCurrency,

    #[error("Unsupported cryptocurrency")]
    UnsupportedCryptoCurrency,

    #[error("Email and password are missing")]
    MissingCredentials,

    #[error("Limit must be a number between 1 and 500")]
    LimitOutOfRange,

    #[error("Invalid sort parameter")]
    InvalidSortField,

    #[error("Invalid order parameter")]
    InvalidSortOrder,

    #[error("Payment ID should be greater than zero")]
    PaymentIdNotPositive,
}
