//! Client for the swap quote service
//!
//! The quote service aggregates route providers and returns a single
//! unsigned swap transaction, optionally followed by a hook on the
//! destination chain

use std::time::Duration;

use alloy_primitives::U256;
use reqwest::Client;
use swap_hook_api::{
    network::NetworkId,
    params::PrepareSwapParams,
    quote::{QuoteProviderError, SwapQuoteRequest, SwapQuoteResponse, SwapTransaction},
};
use tracing::{instrument, warn};

use crate::error::SwapPreparationError;

// -------------
// | Constants |
// -------------

/// The slippage tolerance sent with every quote, as a percentage
pub const SLIPPAGE_PERCENTAGE: &str = "1";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The error message emitted when a quote carries no transaction
const ERR_NO_SWAP_TRANSACTION: &str = "Unable to get swap quote";

// ---------
// | Types |
// ---------

/// Configuration options for the quote client
#[derive(Debug, Clone)]
pub struct QuoteClientConfig {
    /// The URL of the swap quote endpoint
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl QuoteClientConfig {
    /// Create a config for the given endpoint with the default timeout
    pub fn new(url: String) -> Self {
        Self { url, timeout_secs: DEFAULT_TIMEOUT_SECS }
    }
}

/// A quote that carries a swap transaction
#[derive(Debug, Clone)]
pub struct SwapQuote {
    /// The proposed swap transaction
    pub transaction: SwapTransaction,
    /// The route provider that produced it, if reported
    pub swap_provider: Option<String>,
}

// ----------
// | Client |
// ----------

/// HTTP client for the swap quote service
#[derive(Debug, Clone)]
pub struct QuoteClient {
    /// The URL of the swap quote endpoint
    url: String,
    /// The underlying HTTP client
    http_client: Client,
}

impl QuoteClient {
    /// Create a new client
    pub fn new(config: QuoteClientConfig) -> Result<Self, SwapPreparationError> {
        let QuoteClientConfig { url, timeout_secs } = config;
        let http_client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(SwapPreparationError::setup)?;

        Ok(Self { url, http_client })
    }

    /// Request a swap quote
    ///
    /// Fails with `Transport` on a non-2xx status and with `NoQuoteAvailable`
    /// when a successful response carries no transaction. Nothing is retried
    #[instrument(skip_all, fields(
        sell_network = %request.sell_network_id,
        buy_network = %request.buy_network_id,
    ))]
    pub async fn get_swap_quote(
        &self,
        request: &SwapQuoteRequest,
    ) -> Result<SwapQuote, SwapPreparationError> {
        let response = match self.http_client.post(&self.url).json(request).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(swap_params = %fmt_request(request), "Error getting swap quote: {e}");
                return Err(e.into());
            },
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(
                    status = status.as_u16(),
                    swap_params = %fmt_request(request),
                    "Error reading swap quote response: {e}"
                );
                return Err(e.into());
            },
        };

        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                response = %body,
                swap_params = %fmt_request(request),
                "Got a non-2xx response from the swap quote service"
            );
            return Err(SwapPreparationError::Transport { status: status.as_u16(), body });
        }

        parse_quote_response(&body).inspect_err(|e| {
            warn!(
                swap_params = %fmt_request(request),
                swap_quote = %body,
                "No usable unvalidatedSwapTransaction in swap quote: {e}"
            )
        })
    }
}

// ----------------------
// | Non-Member Helpers |
// ----------------------

/// Build the quote request for a swap
///
/// `sell_amount` must already be in the sold token's smallest unit, and
/// `sell_network` is the effective source network of the swap
pub fn build_quote_request(
    params: &PrepareSwapParams,
    sell_amount: U256,
    sell_network: NetworkId,
) -> SwapQuoteRequest {
    SwapQuoteRequest {
        buy_token: params.swap_to_token_address,
        buy_is_native: false,
        buy_network_id: params.network_id,
        sell_token: params.swap_from_token.address,
        sell_is_native: params.swap_from_token.is_native,
        sell_network_id: sell_network,
        sell_amount,
        slippage_percentage: SLIPPAGE_PERCENTAGE.to_string(),
        post_hook: params.options.post_hook.clone(),
        user_address: params.wallet_address,
        enable_app_fee: params.options.enable_app_fee,
    }
}

/// Parse a successful quote response body
///
/// A body that does not decode, or decodes without a transaction, means no
/// quote is available
pub fn parse_quote_response(body: &str) -> Result<SwapQuote, SwapPreparationError> {
    let response: SwapQuoteResponse = serde_json::from_str(body).map_err(|e| {
        SwapPreparationError::no_quote_available(format!("{ERR_NO_SWAP_TRANSACTION}: {e}"))
    })?;

    let SwapQuoteResponse { unvalidated_swap_transaction, details, errors } = response;
    match unvalidated_swap_transaction {
        Some(transaction) => Ok(SwapQuote { transaction, swap_provider: details.swap_provider }),
        None if errors.is_empty() => {
            Err(SwapPreparationError::no_quote_available(ERR_NO_SWAP_TRANSACTION))
        },
        None => Err(SwapPreparationError::no_quote_available(format!(
            "{ERR_NO_SWAP_TRANSACTION}: {}",
            fmt_provider_errors(&errors)
        ))),
    }
}

/// Summarize the errors reported by route providers
fn fmt_provider_errors(errors: &[QuoteProviderError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.provider, e.error.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Render a quote request for logging
fn fmt_request(request: &SwapQuoteRequest) -> String {
    serde_json::to_string(request).unwrap_or_else(|_| format!("{request:?}"))
}
