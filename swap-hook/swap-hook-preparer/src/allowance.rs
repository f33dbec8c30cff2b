//! Resolves the ERC20 approval needed before a swap

use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
use swap_hook_api::{network::NetworkId, transaction::Transaction};
use tracing::{info, instrument, warn};

use crate::{
    chain_client::{AllowanceReader, IERC20},
    error::SwapPreparationError,
};

/// An approval that may be needed before a swap
#[derive(Debug, Clone, Copy)]
pub struct ApprovalCheck {
    /// The network the token lives on
    pub network: NetworkId,
    /// The token being sold
    pub token: Address,
    /// The wallet selling the token
    pub owner: Address,
    /// The contract that pulls the token during the swap
    pub spender: Address,
    /// The amount being swapped
    pub amount: U256,
}

impl ApprovalCheck {
    /// Build the approval transaction if the current allowance does not cover
    /// the swap
    ///
    /// The approval is for exactly the swap amount
    #[instrument(skip_all, fields(network = %self.network, token = %self.token, spender = %self.spender))]
    pub async fn resolve(
        &self,
        reader: &dyn AllowanceReader,
    ) -> Result<Option<Transaction>, SwapPreparationError> {
        let allowance = reader
            .allowance(self.token, self.owner, self.spender)
            .await
            .inspect_err(|e| warn!(owner = %self.owner, "Error reading erc20 allowance: {e}"))?;
        if allowance >= self.amount {
            info!("Already approved erc20 allowance for {:#x}", self.spender);
            return Ok(None);
        }

        info!(%allowance, amount = %self.amount, "Prepending erc20 approval");
        Ok(Some(self.approval_tx()))
    }

    /// The transaction approving the spender for the swap amount
    pub fn approval_tx(&self) -> Transaction {
        let data = IERC20::approveCall { spender: self.spender, value: self.amount }.abi_encode();

        Transaction {
            network_id: self.network,
            from: self.owner,
            to: self.token,
            data: data.into(),
            value: None,
            gas: None,
            estimated_gas_use: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::MockAllowanceReader;

    /// A check for swapping 100 whole units of an 18-decimal token
    fn check() -> ApprovalCheck {
        ApprovalCheck {
            network: NetworkId::CeloMainnet,
            token: Address::repeat_byte(0x33),
            owner: Address::repeat_byte(0x55),
            spender: Address::repeat_byte(0x77),
            amount: U256::from(100u64) * U256::from(10u64).pow(U256::from(18u64)),
        }
    }

    #[tokio::test]
    async fn test_insufficient_allowance() {
        let check = check();
        let reader = MockAllowanceReader::new(check.amount - U256::from(1u8));

        let tx = check.resolve(&reader).await.unwrap().unwrap();
        assert_eq!(tx.to, check.token);
        assert_eq!(tx.from, check.owner);
        assert_eq!(tx.network_id, NetworkId::CeloMainnet);
        assert!(tx.value.is_none() && tx.gas.is_none());

        let call = IERC20::approveCall::abi_decode(&tx.data).unwrap();
        assert_eq!(call.spender, check.spender);
        assert_eq!(call.value, check.amount);

        // The reader was asked about the right owner and spender
        let queries = reader.queries();
        assert_eq!(queries, vec![(check.token, check.owner, check.spender)]);
    }

    #[tokio::test]
    async fn test_sufficient_allowance() {
        let check = check();

        let exact = MockAllowanceReader::new(check.amount);
        assert!(check.resolve(&exact).await.unwrap().is_none());

        let unlimited = MockAllowanceReader::new(U256::MAX);
        assert!(check.resolve(&unlimited).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_read_failure_propagates() {
        let reader = MockAllowanceReader::failing("rpc unavailable");
        let err = check().resolve(&reader).await.unwrap_err();
        assert!(matches!(err, SwapPreparationError::OnChainRead(msg) if msg == "rpc unavailable"));
    }
}
