//! Quote service request and response types

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::{hook::PostHook, network::NetworkId};
use crate::serialization::u256_string_serialization;

/// The error message emitted when a quantity cannot be parsed
const ERR_INVALID_QUANTITY: &str = "invalid quantity";

// ------------
// | Requests |
// ------------

/// The body of a swap quote request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapQuoteRequest {
    /// The token being bought
    pub buy_token: Address,
    /// Whether the bought token is native
    pub buy_is_native: bool,
    /// The network the bought token is delivered on
    pub buy_network_id: NetworkId,
    /// The token being sold, if it has a contract address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sell_token: Option<Address>,
    /// Whether the sold token is native
    pub sell_is_native: bool,
    /// The network the sold token lives on
    pub sell_network_id: NetworkId,
    /// The amount sold, in the token's smallest unit
    #[serde(with = "u256_string_serialization")]
    pub sell_amount: U256,
    /// The slippage tolerance as a percentage, e.g. "1" for 1%
    pub slippage_percentage: String,
    /// The calls to run after the swap settles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_hook: Option<PostHook>,
    /// The wallet executing the swap
    pub user_address: Address,
    /// Whether to charge the app fee; provider default when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_app_fee: Option<bool>,
}

// -------------
// | Responses |
// -------------

/// A numeric field as sent by the quote service
///
/// Providers send these as decimal strings, hex strings or bare numbers; the
/// original form is kept so the descriptor can be returned to callers as-is
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    /// A decimal or `0x`-prefixed hex string
    Text(String),
    /// A JSON number
    Number(Number),
}

impl Quantity {
    /// Parse the quantity into a U256
    pub fn to_u256(&self) -> Result<U256, String> {
        match self {
            Quantity::Text(s) => parse_quantity_str(s.trim()),
            Quantity::Number(n) => {
                n.as_u64().map(U256::from).ok_or_else(|| format!("{ERR_INVALID_QUANTITY}: {n}"))
            },
        }
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Quantity::Number(value.into())
    }
}

impl From<&str> for Quantity {
    fn from(value: &str) -> Self {
        Quantity::Text(value.to_string())
    }
}

/// Parse a decimal or `0x`-prefixed hex string into a U256
fn parse_quantity_str(s: &str) -> Result<U256, String> {
    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };

    if digits.is_empty() {
        return Err(format!("{ERR_INVALID_QUANTITY}: {s:?}"));
    }

    U256::from_str_radix(digits, radix).map_err(|e| format!("{ERR_INVALID_QUANTITY} {s:?}: {e}"))
}

/// The swap transaction proposed by the quote service
///
/// This has not been reconciled with the wallet's on-chain allowance yet
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapTransaction {
    /// The submitting address
    pub from: Address,
    /// The swap contract address
    pub to: Address,
    /// The calldata for the swap
    pub data: Bytes,
    /// The native value sent with the swap
    pub value: Quantity,
    /// The provider's gas limit
    pub gas: Quantity,
    /// The gas used when the provider simulated the swap, if it did
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_gas_use: Option<Quantity>,
    /// The contract the wallet must approve to spend the sold token
    pub allowance_target: Address,
    /// Any other provider fields, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The body of an error reported by a route provider
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderErrorBody {
    /// The error message
    pub message: String,
    /// Provider-specific details
    #[serde(default)]
    pub details: Value,
}

/// An error reported by one of the quote service's route providers
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteProviderError {
    /// The route provider that failed
    pub provider: String,
    /// The error itself
    pub error: ProviderErrorBody,
}

/// Metadata about how a quote was produced
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDetails {
    /// The route provider whose quote was selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swap_provider: Option<String>,
}

/// The body of a swap quote response
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapQuoteResponse {
    /// The proposed swap transaction, absent when no provider could quote
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unvalidated_swap_transaction: Option<SwapTransaction>,
    /// Metadata about the quote
    #[serde(default)]
    pub details: QuoteDetails,
    /// Errors from route providers that failed to quote
    #[serde(default)]
    pub errors: Vec<QuoteProviderError>,
}
