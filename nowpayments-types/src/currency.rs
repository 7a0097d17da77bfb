//! Fiat currencies accepted as the price side of an exchange.

/// Fiat currencies the API accepts for `price_currency` / `currency_from`.
///
/// Cryptocurrencies are not listed here: the set of supported coins depends on
/// the merchant's payout wallet setup and has to be fetched live from the
/// `currencies` endpoint.
pub const FIAT_CURRENCIES: [&str; 5] = ["usd", "eur", "nzd", "brl", "gbp"];

/// Returns true if `currency` is one of the accepted fiat currencies.
///
/// The API is case-sensitive and expects lowercase codes; no normalization is
/// performed here.
pub fn is_supported_fiat(currency: &str) -> bool {
    FIAT_CURRENCIES.contains(&currency)
}
