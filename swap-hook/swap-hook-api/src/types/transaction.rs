//! Prepared transaction types

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

use super::{network::NetworkId, quote::SwapTransaction};
use crate::serialization::option_u256_string_serialization;

/// An unsigned transaction for the caller to sign and submit
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The network the transaction is submitted on
    pub network_id: NetworkId,
    /// The sender
    pub from: Address,
    /// The recipient
    pub to: Address,
    /// The calldata
    pub data: Bytes,
    /// The native value sent
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "option_u256_string_serialization"
    )]
    pub value: Option<U256>,
    /// The gas limit to execute with
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "option_u256_string_serialization"
    )]
    pub gas: Option<U256>,
    /// The simulated gas usage, unpadded
    ///
    /// Informational only; `gas` is the limit meant for execution
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "option_u256_string_serialization"
    )]
    pub estimated_gas_use: Option<U256>,
}

/// Auxiliary data returned alongside the prepared transactions
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapDataProps {
    /// The quote service's transaction, exactly as it was received
    pub swap_transaction: SwapTransaction,
}

/// The transactions needed to perform a swap followed by its hook
///
/// Any approval comes first, the swap always comes last
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedSwap {
    /// The transactions, in execution order
    pub transactions: Vec<Transaction>,
    /// Auxiliary data for logging and analytics
    pub data_props: SwapDataProps,
}

impl PreparedSwap {
    /// The swap transaction
    pub fn swap_tx(&self) -> Option<&Transaction> {
        self.transactions.last()
    }

    /// The approval transaction, if one was needed
    pub fn approval_tx(&self) -> Option<&Transaction> {
        match self.transactions.as_slice() {
            [approval, _swap] => Some(approval),
            _ => None,
        }
    }
}
