//! NOWPayments CLI
//!
//! Command-line interface for the NOWPayments API.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nowpayments_client::NowPaymentsClient;
use nowpayments_types::{
    InvoiceOptions, InvoicePaymentOptions, ListPaymentsQuery, PaymentOptions, SortField, SortOrder,
};

#[derive(Parser)]
#[command(name = "nowpayments")]
#[command(author, version, about = "NOWPayments API CLI client", long_about = None)]
struct Cli {
    /// API key from the NOWPayments dashboard
    #[arg(long, env = "NOWPAYMENTS_API_KEY")]
    api_key: String,

    /// Dashboard email, needed for auth and payment listing
    #[arg(long, env = "NOWPAYMENTS_EMAIL")]
    email: Option<String>,

    /// Dashboard password, needed for auth and payment listing
    #[arg(long, env = "NOWPAYMENTS_PASSWORD")]
    password: Option<String>,

    /// Talk to the sandbox environment instead of production
    #[arg(long, env = "NOWPAYMENTS_SANDBOX")]
    sandbox: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check API availability
    Status,
    /// Obtain a JWT token for account-scoped endpoints
    Auth,
    /// Estimate the crypto price for a fiat amount
    Estimate {
        /// Cost value in fiat currency
        amount: f64,
        /// Fiat currency (usd, eur, nzd, brl, gbp)
        #[arg(long, default_value = "usd")]
        from: String,
        /// Target cryptocurrency (btc, eth, ...)
        #[arg(long)]
        to: String,
    },
    /// Payment operations
    Payment {
        #[command(subcommand)]
        action: PaymentCommands,
    },
    /// Invoice operations
    Invoice {
        #[command(subcommand)]
        action: InvoiceCommands,
    },
    /// Currency listings
    Currencies {
        #[command(subcommand)]
        action: CurrencyCommands,
    },
    /// Minimum payment amount for a currency pair
    MinAmount {
        /// Source currency
        from: String,
        /// Target currency
        #[arg(long)]
        to: Option<String>,
        /// Fiat currency to express the minimum in
        #[arg(long)]
        fiat_equivalent: Option<String>,
    },
}

#[derive(Subcommand)]
enum PaymentCommands {
    /// Create a payment tied to one cryptocurrency
    Create {
        /// Price in fiat currency
        amount: f64,
        #[arg(long, default_value = "usd")]
        price_currency: String,
        #[arg(long)]
        pay_currency: String,
        #[arg(long)]
        pay_amount: Option<f64>,
        #[arg(long)]
        ipn_callback_url: Option<String>,
        #[arg(long)]
        order_id: Option<String>,
        #[arg(long)]
        order_description: Option<String>,
        #[arg(long)]
        purchase_id: Option<u64>,
        #[arg(long)]
        payout_address: Option<String>,
        #[arg(long)]
        payout_currency: Option<String>,
        #[arg(long)]
        payout_extra_id: Option<u64>,
        #[arg(long)]
        fixed_rate: bool,
        #[arg(long)]
        fee_paid_by_user: bool,
    },
    /// Get the current status of a payment
    Status {
        /// Payment ID
        id: u64,
    },
    /// Re-estimate the pay amount of a pending payment
    UpdateEstimate {
        /// Payment ID
        id: u64,
    },
    /// List payments created with this API key (requires email/password)
    List {
        #[arg(long, default_value_t = 10)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        page: u32,
        /// One of the sortable fields, e.g. created_at, payment_id, ...
        #[arg(long, default_value = "created_at")]
        sort_by: SortField,
        /// asc or desc
        #[arg(long, default_value = "asc")]
        order_by: SortOrder,
        /// Only payments created on or after this date (YYYY-MM-DD)
        #[arg(long)]
        date_from: Option<NaiveDate>,
        /// Only payments created on or before this date (YYYY-MM-DD)
        #[arg(long)]
        date_to: Option<NaiveDate>,
    },
}

#[derive(Subcommand)]
enum InvoiceCommands {
    /// Create a hosted-checkout invoice
    Create {
        /// Price in fiat currency
        amount: f64,
        #[arg(long, default_value = "usd")]
        price_currency: String,
        #[arg(long)]
        pay_currency: String,
        #[arg(long)]
        ipn_callback_url: Option<String>,
        #[arg(long)]
        order_id: Option<String>,
        #[arg(long)]
        order_description: Option<String>,
        #[arg(long)]
        success_url: Option<String>,
        #[arg(long)]
        cancel_url: Option<String>,
    },
    /// Create a payment against an existing invoice
    Pay {
        /// Invoice ID
        invoice_id: u64,
        #[arg(long)]
        pay_currency: String,
        #[arg(long)]
        order_description: Option<String>,
        #[arg(long)]
        customer_email: Option<String>,
    },
}

#[derive(Subcommand)]
enum CurrencyCommands {
    /// Ticker list of available cryptocurrencies
    List {
        /// Skip the fixed-rate min/max information
        #[arg(long)]
        no_fixed_rate: bool,
    },
    /// Detailed coin descriptors
    Full,
    /// Coins enabled in the merchant's own settings
    Checked,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut client = if cli.sandbox {
        NowPaymentsClient::sandbox(&cli.api_key)
    } else {
        NowPaymentsClient::new(&cli.api_key)
    };
    if let (Some(email), Some(password)) = (cli.email, cli.password) {
        client = client.with_credentials(email, password);
    }

    match cli.command {
        Commands::Status => {
            let status = client.status().await?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }

        Commands::Auth => {
            let auth = client.authenticate().await?;
            println!("{}", serde_json::to_string_pretty(&auth)?);
        }

        Commands::Estimate { amount, from, to } => {
            let estimate = client.estimate_price(amount, &from, &to).await?;
            println!("{}", serde_json::to_string_pretty(&estimate)?);
        }

        Commands::Payment { action } => match action {
            PaymentCommands::Create {
                amount,
                price_currency,
                pay_currency,
                pay_amount,
                ipn_callback_url,
                order_id,
                order_description,
                purchase_id,
                payout_address,
                payout_currency,
                payout_extra_id,
                fixed_rate,
                fee_paid_by_user,
            } => {
                let options = PaymentOptions {
                    pay_amount,
                    ipn_callback_url,
                    order_id,
                    order_description,
                    purchase_id,
                    payout_address,
                    payout_currency,
                    payout_extra_id,
                    is_fixed_rate: fixed_rate.then_some(true),
                    is_fee_paid_by_user: fee_paid_by_user.then_some(true),
                };
                let payment = client
                    .create_payment(amount, &price_currency, &pay_currency, options)
                    .await?;
                println!("{}", serde_json::to_string_pretty(&payment)?);
            }
            PaymentCommands::Status { id } => {
                let status = client.payment_status(id).await?;
                println!("{}", serde_json::to_string_pretty(&status)?);
            }
            PaymentCommands::UpdateEstimate { id } => {
                let estimate = client.update_payment_estimate(id).await?;
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            }
            PaymentCommands::List {
                limit,
                page,
                sort_by,
                order_by,
                date_from,
                date_to,
            } => {
                let query = ListPaymentsQuery {
                    limit,
                    page,
                    sort_by,
                    order_by,
                    date_from,
                    date_to,
                };
                let listing = client.list_payments(query).await?;
                println!("{}", serde_json::to_string_pretty(&listing)?);
            }
        },

        Commands::Invoice { action } => match action {
            InvoiceCommands::Create {
                amount,
                price_currency,
                pay_currency,
                ipn_callback_url,
                order_id,
                order_description,
                success_url,
                cancel_url,
            } => {
                let options = InvoiceOptions {
                    ipn_callback_url,
                    order_id,
                    order_description,
                    success_url,
                    cancel_url,
                };
                let invoice = client
                    .create_invoice(amount, &price_currency, &pay_currency, options)
                    .await?;
                println!("{}", serde_json::to_string_pretty(&invoice)?);
            }
            InvoiceCommands::Pay {
                invoice_id,
                pay_currency,
                order_description,
                customer_email,
            } => {
                let options = InvoicePaymentOptions {
                    order_description,
                    customer_email,
                    ..Default::default()
                };
                let payment = client
                    .create_payment_by_invoice(invoice_id, &pay_currency, options)
                    .await?;
                println!("{}", serde_json::to_string_pretty(&payment)?);
            }
        },

        Commands::Currencies { action } => match action {
            CurrencyCommands::List { no_fixed_rate } => {
                let listing = client.currencies(!no_fixed_rate).await?;
                println!("{}", serde_json::to_string_pretty(&listing)?);
            }
            CurrencyCommands::Full => {
                let listing = client.full_currencies().await?;
                println!("{}", serde_json::to_string_pretty(&listing)?);
            }
            CurrencyCommands::Checked => {
                let listing = client.checked_currencies().await?;
                println!("{}", serde_json::to_string_pretty(&listing)?);
            }
        },

        Commands::MinAmount {
            from,
            to,
            fiat_equivalent,
        } => {
            let min = client
                .minimum_payment_amount(&from, to.as_deref(), fiat_equivalent.as_deref())
                .await?;
            println!("{}", serde_json::to_string_pretty(&min)?);
        }
    }

    Ok(())
}
