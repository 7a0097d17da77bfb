//! # NOWPayments Client SDK
//!
//! A typed Rust client for the NOWPayments crypto payment-processing API.
//!
//! Every public method maps to one remote endpoint: the client validates its
//! inputs, issues a single HTTP request and decodes the JSON body, or returns
//! a [`ClientError`]. There is no retry logic, no caching and no background
//! work; the only state shared between calls is the immutable configuration
//! and the reqwest connection pool.
//!
//! ```no_run
//! use nowpayments_client::NowPaymentsClient;
//! use nowpayments_types::PaymentOptions;
//!
//! # async fn demo() -> Result<(), nowpayments_client::ClientError> {
//! let client = NowPaymentsClient::sandbox("api-key");
//! let payment = client
//!     .create_payment(100.0, "usd", "btc", PaymentOptions::default())
//!     .await?;
//! println!("send {} btc to {}", payment.pay_amount, payment.pay_address);
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use nowpayments_types::{
    ApiStatus, AuthRequest, AuthToken, CheckedCurrencies, Currencies, EstimatedPrice,
    FullCurrencies, Invoice, InvoiceOptions, InvoicePaymentOptions, InvoicePaymentRequest,
    InvoiceRequest, ListPaymentsQuery, MinimumAmount, Payment, PaymentList, PaymentOptions,
    PaymentRequest, PaymentStatus, UpdatedEstimate, ValidationError, is_supported_fiat,
};

mod error;
pub use error::ClientError;


/// Production API base.
pub const API_URL: &str = "https://api.nowpayments.io/v1/";
/// Sandbox API base.
pub const SANDBOX_API_URL: &str = "https://api-sandbox.nowpayments.io/v1/";
/// Production hosted-checkout base, referenced by invoice-payment `uri`s.
pub const WEB_PAYMENT_URL: &str = "https://nowpayments.io/payment/";
/// Sandbox hosted-checkout base.
pub const SANDBOX_WEB_PAYMENT_URL: &str = "https://sandbox.nowpayments.io/payment/";

/// Placeholder when an error body carries no `message` field.
const NO_DESCRIPTION: &str = "No description";

/// NOWPayments API client.
///
/// Construction performs no network IO. One instance is meant for sequential
/// use; for concurrent calls, clone it (the connection pool is shared) or
/// create one instance per task.
#[derive(Debug, Clone)]
pub struct NowPaymentsClient {
    base_url: String,
    web_payment_url: String,
    api_key: String,
    email: Option<String>,
    password: Option<String>,
    sandbox: bool,
    timeout: Option<Duration>,
    http: Client,
}

impl NowPaymentsClient {
    /// Creates a client against the production environment.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: API_URL.to_string(),
            web_payment_url: WEB_PAYMENT_URL.to_string(),
            api_key: api_key.into(),
            email: None,
            password: None,
            sandbox: false,
            timeout: None,
            http: Client::new(),
        }
    }

    /// Creates a client against the sandbox environment.
    ///
    /// Sandbox payloads carry the `case: success` switch so settlement is
    /// simulated immediately.
    pub fn sandbox(api_key: impl Into<String>) -> Self {
        Self {
            base_url: SANDBOX_API_URL.to_string(),
            web_payment_url: SANDBOX_WEB_PAYMENT_URL.to_string(),
            sandbox: true,
            ..Self::new(api_key)
        }
    }

    /// Sets the dashboard credentials needed by [`authenticate`] and
    /// [`list_payments`].
    ///
    /// [`authenticate`]: NowPaymentsClient::authenticate
    /// [`list_payments`]: NowPaymentsClient::list_payments
    pub fn with_credentials(
        mut self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.email = Some(email.into());
        self.password = Some(password.into());
        self
    }

    /// Sets a per-request timeout. Without it, reqwest's default applies.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the API base URL, e.g. to point at a local mock or proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }

    /// The API base this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The hosted-checkout base matching this client's environment.
    pub fn web_payment_url(&self) -> &str {
        &self.web_payment_url
    }

    /// Whether this client targets the sandbox environment.
    pub fn is_sandbox(&self) -> bool {
        self.sandbox
    }

    // -------------------------
    // Auth and API status
    // -------------------------

    /// Checks the current state of the API. `message` is "OK" when healthy.
    pub async fn status(&self) -> Result<ApiStatus, ClientError> {
        self.get("status", &[], None).await
    }

    /// Obtains a JWT for account-scoped endpoints.
    ///
    /// Tokens expire after five minutes and are not cached: every call site
    /// that needs one re-authenticates. Fails with
    /// [`ValidationError::MissingCredentials`] before any network call when
    /// email or password were not supplied.
    pub async fn authenticate(&self) -> Result<AuthToken, ClientError> {
        let (email, password) = match (self.email.as_deref(), self.password.as_deref()) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                (email, password)
            }
            _ => return Err(ValidationError::MissingCredentials.into()),
        };
        self.post("auth", &AuthRequest { email, password }).await
    }

    // -------------------------
    // Payments
    // -------------------------

    /// Calculates the approximate crypto price for a fiat amount.
    ///
    /// Validates, in order: amount, fiat currency, then `currency_to` against
    /// the live currency listing - so a successful call issues two requests.
    pub async fn estimate_price(
        &self,
        amount: f64,
        currency_from: &str,
        currency_to: &str,
    ) -> Result<EstimatedPrice, ClientError> {
        validate_amount(amount)?;
        validate_fiat(currency_from)?;
        self.ensure_supported_crypto(currency_to).await?;

        let query = [
            ("amount", amount.to_string()),
            ("currency_from", currency_from.to_string()),
            ("currency_to", currency_to.to_string()),
        ];
        self.get("estimate", &query, None).await
    }

    /// Creates a payment tied to one specific cryptocurrency.
    ///
    /// Same precondition chain as [`estimate_price`]. Optional fields go in
    /// [`PaymentOptions`]; a field the endpoint does not know cannot be
    /// expressed at all.
    ///
    /// [`estimate_price`]: NowPaymentsClient::estimate_price
    pub async fn create_payment(
        &self,
        price_amount: f64,
        price_currency: &str,
        pay_currency: &str,
        options: PaymentOptions,
    ) -> Result<Payment, ClientError> {
        validate_amount(price_amount)?;
        validate_fiat(price_currency)?;
        self.ensure_supported_crypto(pay_currency).await?;

        let body = PaymentRequest::new(
            price_amount,
            price_currency,
            pay_currency,
            options,
            self.sandbox,
        );
        self.post("payment", &body).await
    }

    /// Creates an invoice; the customer follows `invoice_url` to complete the
    /// payment on the hosted checkout page.
    pub async fn create_invoice(
        &self,
        price_amount: f64,
        price_currency: &str,
        pay_currency: &str,
        options: InvoiceOptions,
    ) -> Result<Invoice, ClientError> {
        validate_amount(price_amount)?;
        validate_fiat(price_currency)?;
        self.ensure_supported_crypto(pay_currency).await?;

        let body = InvoiceRequest::new(
            price_amount,
            price_currency,
            pay_currency,
            options,
            self.sandbox,
        );
        self.post("invoice", &body).await
    }

    /// Creates a payment against an existing invoice.
    ///
    /// The invoice already fixes the price, so only `pay_currency` is
    /// validated. The response carries a `uri` of the form
    /// `{web_payment_url}?iid={invoice_id}&paymentId={payment_id}` and, unlike
    /// a directly created payment, no `order_description`.
    pub async fn create_payment_by_invoice(
        &self,
        invoice_id: u64,
        pay_currency: &str,
        options: InvoicePaymentOptions,
    ) -> Result<Payment, ClientError> {
        self.ensure_supported_crypto(pay_currency).await?;

        let body = InvoicePaymentRequest::new(invoice_id, pay_currency, options, self.sandbox);
        self.post("invoice-payment", &body).await
    }

    /// Gets the current state of a payment.
    ///
    /// An unknown id is not a typed "not found": it surfaces as an `Api` error
    /// with status 404.
    pub async fn payment_status(&self, payment_id: u64) -> Result<PaymentStatus, ClientError> {
        validate_payment_id(payment_id)?;
        self.get(&format!("payment/{payment_id}"), &[], None).await
    }

    /// Re-estimates the pay amount of a pending payment.
    pub async fn update_payment_estimate(
        &self,
        payment_id: u64,
    ) -> Result<UpdatedEstimate, ClientError> {
        validate_payment_id(payment_id)?;
        self.post(
            &format!("payment/{payment_id}/update-estimate"),
            &serde_json::json!({}),
        )
        .await
    }

    /// Lists payments created with this API key.
    ///
    /// This endpoint needs a bearer token, so [`authenticate`] runs first and
    /// its credential precondition applies transitively: API-key-only clients
    /// fail here with [`ValidationError::MissingCredentials`].
    ///
    /// [`authenticate`]: NowPaymentsClient::authenticate
    pub async fn list_payments(
        &self,
        query: ListPaymentsQuery,
    ) -> Result<PaymentList, ClientError> {
        query.validate()?;
        let token = self.authenticate().await?;

        let mut pairs = vec![
            ("limit", query.limit.to_string()),
            ("page", query.page.to_string()),
            ("sortBy", query.sort_by.as_str().to_string()),
            ("orderBy", query.order_by.as_str().to_string()),
        ];
        if let Some(from) = query.date_from {
            pairs.push(("dateFrom", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = query.date_to {
            pairs.push(("dateTo", to.format("%Y-%m-%d").to_string()));
        }
        self.get("payment", &pairs, Some(&token.token)).await
    }

    // -------------------------
    // Currencies
    // -------------------------

    /// Lists cryptocurrencies available for the current payout wallet setup.
    ///
    /// Hot path: every validating operation re-fetches this listing. No cache
    /// is kept; callers who accept staleness can build their own.
    pub async fn currencies(&self, fixed_rate: bool) -> Result<Currencies, ClientError> {
        let query = [("fixed_rate", fixed_rate.to_string())];
        self.get("currencies", &query, None).await
    }

    /// Detailed information about all cryptocurrencies available for payments.
    pub async fn full_currencies(&self) -> Result<FullCurrencies, ClientError> {
        self.get("full-currencies", &[], None).await
    }

    /// The coins enabled in the merchant's own "coins settings" tab.
    pub async fn checked_currencies(&self) -> Result<CheckedCurrencies, ClientError> {
        self.get("merchant/coins", &[], None).await
    }

    /// Gets the minimum payment amount for a currency pair.
    ///
    /// Optional parameters are appended only when present. Unlike the sibling
    /// methods, no currency validation happens client-side.
    pub async fn minimum_payment_amount(
        &self,
        currency_from: &str,
        currency_to: Option<&str>,
        fiat_equivalent: Option<&str>,
    ) -> Result<MinimumAmount, ClientError> {
        let mut query = vec![("currency_from", currency_from.to_string())];
        if let Some(to) = currency_to {
            query.push(("currency_to", to.to_string()));
        }
        if let Some(fiat) = fiat_equivalent {
            query.push(("fiat_equivalent", fiat.to_string()));
        }
        self.get("min-amount", &query, None).await
    }

    // -------------------------
    // Request plumbing
    // -------------------------

    /// Rejects `pay_currency` values absent from the live currency listing.
    async fn ensure_supported_crypto(&self, currency: &str) -> Result<(), ClientError> {
        let listing = self.currencies(true).await?;
        if listing.currencies.iter().any(|c| c == currency) {
            Ok(())
        } else {
            Err(ValidationError::UnsupportedCryptoCurrency.into())
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        bearer: Option<&str>,
    ) -> Result<T, ClientError> {
        let mut req = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .header("x-api-key", &self.api_key);
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(token) = bearer {
            req = req.bearer_auth(token);
        }
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }
        debug!(path, "GET");
        let resp = req.send().await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let mut req = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .header("x-api-key", &self.api_key)
            .json(body);
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }
        debug!(path, "POST");
        let resp = req.send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
                .unwrap_or_else(|| NO_DESCRIPTION.to_string());
            warn!(status = status.as_u16(), %message, "api returned error");
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// First failing check wins; these run before any network request.
fn validate_amount(amount: f64) -> Result<(), ValidationError> {
    if amount > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::AmountNotPositive)
    }
}

fn validate_fiat(currency: &str) -> Result<(), ValidationError> {
    if is_supported_fiat(currency) {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedFiatCurrency)
    }
}

fn validate_payment_id(payment_id: u64) -> Result<(), ValidationError> {
    if payment_id > 0 {
        Ok(())
    } else {
        Err(ValidationError::PaymentIdNotPositive)
    }
}
