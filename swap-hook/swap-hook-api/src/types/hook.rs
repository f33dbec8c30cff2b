//! Post-swap hook types
//!
//! A hook is an ordered list of destination-chain contract calls that the
//! route provider executes once the swap settles

use alloy_primitives::{Address, Bytes};
use serde::{Deserialize, Serialize};

/// The error message emitted when decoding an unknown call type
const ERR_UNKNOWN_CALL_TYPE: &str = "unknown call type";

/// The chain family a hook or call targets
///
/// Only EVM calls are supported
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainType {
    /// An EVM chain
    #[default]
    Evm,
}

/// How the route provider fills in the value of a hook call
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CallType {
    /// Execute the call as-is
    #[default]
    Default,
    /// Replace the amount at `payload.inputPos` with the full token balance
    FullTokenBalance,
    /// Send the full native balance as the call value
    FullNativeBalance,
    /// Transfer the full token balance to the call target
    CollectTokenBalance,
}

impl From<CallType> for u8 {
    fn from(call_type: CallType) -> Self {
        match call_type {
            CallType::Default => 0,
            CallType::FullTokenBalance => 1,
            CallType::FullNativeBalance => 2,
            CallType::CollectTokenBalance => 3,
        }
    }
}

impl TryFrom<u8> for CallType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CallType::Default),
            1 => Ok(CallType::FullTokenBalance),
            2 => Ok(CallType::FullNativeBalance),
            3 => Ok(CallType::CollectTokenBalance),
            _ => Err(format!("{ERR_UNKNOWN_CALL_TYPE}: {value}")),
        }
    }
}

/// Balance-substitution details for a hook call
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallPayload {
    /// The token whose balance is substituted into the call
    pub token_address: Address,
    /// The argument position at which the balance is written
    pub input_pos: u32,
}

/// A single contract call executed on the destination chain
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvmContractCall {
    /// The chain family of the call
    pub chain_type: ChainType,
    /// How the call's amounts are filled in
    pub call_type: CallType,
    /// The contract being called
    pub target: Address,
    /// The native value sent with the call, as a decimal string
    pub value: String,
    /// The calldata
    pub call_data: Bytes,
    /// Balance-substitution details, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<CallPayload>,
    /// The gas the call is expected to use, as a decimal string
    pub estimated_gas: String,
}

/// The calls to execute after the swap completes
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostHook {
    /// The chain family of the hook
    pub chain_type: ChainType,
    /// The calls, in execution order
    pub calls: Vec<EvmContractCall>,
    /// A human-readable description of the hook
    pub description: String,
}
