//! Caller-facing parameters for preparing a swap

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use super::{hook::PostHook, network::NetworkId};

/// A source token amount along with the metadata needed to quote it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAmount {
    /// The token contract address; absent for some native tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Whether the token is the chain's native asset
    pub is_native: bool,
    /// The number of decimals the token uses
    pub decimals: u8,
    /// The human-readable amount, e.g. "1.5"
    pub amount: String,
    /// The network the token lives on
    ///
    /// Older callers that only support same-chain swaps leave this unset, in
    /// which case the operation's network is used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<NetworkId>,
}

/// Optional knobs forwarded to the quote service
///
/// Omitted fields are omitted from the quote request, leaving the provider's
/// default in place
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapOptions {
    /// Calls to execute on the destination chain after the swap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_hook: Option<PostHook>,
    /// Whether to charge the app fee on the swap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_app_fee: Option<bool>,
}

/// The parameters for preparing a swap followed by a hook
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepareSwapParams {
    /// The token and amount being sold
    pub swap_from_token: TokenAmount,
    /// The token being bought
    pub swap_to_token_address: Address,
    /// The network on which the bought token is delivered
    pub network_id: NetworkId,
    /// The wallet that sells, and receives the bought token
    pub wallet_address: Address,
    /// Optional provider knobs
    #[serde(flatten)]
    pub options: SwapOptions,
}

impl PrepareSwapParams {
    /// The network the sold token lives on
    ///
    /// Falls back to the operation's network when the token does not carry
    /// one
    pub fn effective_source_network(&self) -> NetworkId {
        self.swap_from_token.network_id.unwrap_or(self.network_id)
    }
}
