//! Prepares the ordered transactions for a swap followed by a hook

use swap_hook_api::{
    params::PrepareSwapParams,
    transaction::{PreparedSwap, SwapDataProps},
};
use tracing::{info, instrument};

use crate::{
    allowance::ApprovalCheck,
    amount::parse_token_amount,
    assembler::build_swap_tx,
    chain_client::ChainClients,
    error::SwapPreparationError,
    quote_client::{build_quote_request, QuoteClient, SwapQuote},
};

/// Prepares swap transactions from a quote and the wallet's on-chain
/// allowance
///
/// Holds no per-swap state, so one preparer may serve concurrent calls
#[derive(Debug, Clone)]
pub struct SwapPreparer {
    /// The client for the quote service
    quote_client: QuoteClient,
    /// The chain clients, keyed by network
    chain_clients: ChainClients,
}

impl SwapPreparer {
    /// Constructor
    pub fn new(quote_client: QuoteClient, chain_clients: ChainClients) -> Self {
        Self { quote_client, chain_clients }
    }

    /// Prepare the transactions for a swap followed by a hook
    ///
    /// Returns an approval for the exact swap amount first, when the wallet's
    /// allowance does not cover the swap, and the swap transaction last
    #[instrument(skip_all, fields(
        wallet = %params.wallet_address,
        network = %params.network_id,
    ))]
    pub async fn prepare_swap_transactions(
        &self,
        params: &PrepareSwapParams,
    ) -> Result<PreparedSwap, SwapPreparationError> {
        let swap_from_token = &params.swap_from_token;
        let amount_to_swap = parse_token_amount(&swap_from_token.amount, swap_from_token.decimals)?;
        let source_network = params.effective_source_network();

        let request = build_quote_request(params, amount_to_swap, source_network);
        let SwapQuote { transaction: swap_transaction, swap_provider } =
            self.quote_client.get_swap_quote(&request).await?;

        let mut transactions = Vec::with_capacity(2);
        if let (false, Some(token)) = (swap_from_token.is_native, swap_from_token.address) {
            let reader = self.chain_clients.get(source_network)?;
            let check = ApprovalCheck {
                network: source_network,
                token,
                owner: params.wallet_address,
                spender: swap_transaction.allowance_target,
                amount: amount_to_swap,
            };

            transactions.extend(check.resolve(reader.as_ref()).await?);
        }

        transactions.push(build_swap_tx(source_network, &swap_transaction)?);

        info!(
            swap_provider = swap_provider.as_deref().unwrap_or("unknown"),
            num_transactions = transactions.len(),
            chain_id = source_network.chain_id(),
            "Prepared swap transactions"
        );

        Ok(PreparedSwap { transactions, data_props: SwapDataProps { swap_transaction } })
    }
}
