//! Converts a quoted swap transaction into the transaction to execute

use alloy_primitives::U256;
use swap_hook_api::{
    network::NetworkId,
    quote::{Quantity, SwapTransaction},
    transaction::Transaction,
};

use crate::error::SwapPreparationError;

/// The padding applied to a simulated gas estimate, as a percentage of it
const GAS_ESTIMATE_PADDING_PERCENT: u64 = 115;

/// Pad a simulated gas estimate by 15%, truncating
pub fn pad_gas_estimate(estimate: U256) -> Result<U256, SwapPreparationError> {
    estimate
        .checked_mul(U256::from(GAS_ESTIMATE_PADDING_PERCENT))
        .map(|padded| padded / U256::from(100u64))
        .ok_or_else(|| SwapPreparationError::quote_conversion("gas estimate overflows"))
}

/// Build the swap transaction from a quoted transaction
///
/// The transaction is tagged with the network the sold token lives on. The
/// gas limit is the padded simulation estimate when the quote has a non-zero
/// one, and the provider's limit otherwise. A zero estimate falls back to the
/// provider's limit and is dropped from the output
pub fn build_swap_tx(
    source_network: NetworkId,
    quote: &SwapTransaction,
) -> Result<Transaction, SwapPreparationError> {
    let value = parse_quantity("value", &quote.value)?;

    // A zero estimate means the simulation did not run
    let estimated_gas_use = quote
        .estimated_gas_use
        .as_ref()
        .map(|estimate| parse_quantity("estimatedGasUse", estimate))
        .transpose()?
        .filter(|estimate| !estimate.is_zero());

    let gas = match estimated_gas_use {
        Some(estimate) => pad_gas_estimate(estimate)?,
        None => parse_quantity("gas", &quote.gas)?,
    };

    Ok(Transaction {
        network_id: source_network,
        from: quote.from,
        to: quote.to,
        data: quote.data.clone(),
        value: Some(value),
        gas: Some(gas),
        estimated_gas_use,
    })
}

/// Parse a numeric field of the quoted transaction
fn parse_quantity(field: &str, quantity: &Quantity) -> Result<U256, SwapPreparationError> {
    quantity.to_u256().map_err(|e| SwapPreparationError::quote_conversion(format!("{field}: {e}")))
}
