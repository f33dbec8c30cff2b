//! Command-line arguments and setup helpers for the `prepare-swap` binary

use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use swap_hook_api::{network::NetworkId, params::PrepareSwapParams};
use swap_hook_preparer::{
    chain_client::ChainClients,
    error::SwapPreparationError,
    quote_client::{QuoteClient, QuoteClientConfig},
    SwapPreparer,
};
use tokio::io::AsyncReadExt;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Prepare the transactions for a token swap followed by a post-swap hook
#[derive(Parser)]
pub struct Cli {
    // --- Quote Service --- //
    /// The URL of the swap quote endpoint
    #[clap(long, env = "GET_SWAP_QUOTE_URL")]
    pub quote_url: String,
    /// The quote request timeout in seconds
    #[clap(long, env = "QUOTE_TIMEOUT_SECS", default_value = "30")]
    pub quote_timeout_secs: u64,

    // --- Chains --- //
    /// The RPC URLs to read allowances with, as a comma-separated list of
    /// `network=url` pairs
    #[clap(long, env = "RPC_URLS", value_delimiter = ',', num_args = 1..)]
    pub rpc_urls: Vec<NetworkRpcUrl>,

    // --- Input & Output --- //
    /// The path to a JSON file holding the swap params.
    ///
    /// If not provided, the params are read from stdin.
    #[clap(long)]
    pub params: Option<PathBuf>,
    /// Whether to pretty-print the prepared transactions
    #[clap(long)]
    pub pretty: bool,
}

impl Cli {
    /// Build the swap preparer from the CLI arguments
    pub fn build_preparer(&self) -> Result<SwapPreparer, SwapPreparationError> {
        let quote_config =
            QuoteClientConfig { url: self.quote_url.clone(), timeout_secs: self.quote_timeout_secs };
        let quote_client = QuoteClient::new(quote_config)?;

        let rpc_urls = self.rpc_urls.iter().map(|entry| (entry.network, entry.url.as_str()));
        let chain_clients = ChainClients::from_rpc_urls(rpc_urls)?;

        Ok(SwapPreparer::new(quote_client, chain_clients))
    }

    /// Read the swap params from the params file, or stdin if none is given
    pub async fn read_params(&self) -> Result<PrepareSwapParams, SwapPreparationError> {
        let raw = match &self.params {
            Some(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
                SwapPreparationError::setup(format!("error reading {}: {e}", path.display()))
            })?,
            None => {
                let mut raw = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut raw)
                    .await
                    .map_err(|e| SwapPreparationError::setup(format!("error reading stdin: {e}")))?;
                raw
            },
        };

        serde_json::from_str(&raw)
            .map_err(|e| SwapPreparationError::setup(format!("invalid swap params: {e}")))
    }
}

/// An RPC URL for a network, parsed from `network=url`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkRpcUrl {
    /// The network
    pub network: NetworkId,
    /// The RPC URL
    pub url: String,
}

impl FromStr for NetworkRpcUrl {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (network, url) =
            s.split_once('=').ok_or_else(|| format!("expected `network=url`, got `{s}`"))?;
        let network = NetworkId::from_str(network.trim())?;
        let url = url.trim();
        if url.is_empty() {
            return Err(format!("empty RPC URL for {network}"));
        }

        Ok(Self { network, url: url.to_string() })
    }
}

/// Set up JSON logging to stderr, leaving stdout for the prepared
/// transactions
pub fn setup_logging() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::builder().with_default_directive(LevelFilter::INFO.into()).from_env_lossy(),
        )
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .json()
                .flatten_event(true),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_network_rpc_url() {
        let entry: NetworkRpcUrl = "arbitrum-one=https://arb.example.org/rpc?key=abc".parse().unwrap();
        assert_eq!(entry.network, NetworkId::ArbitrumOne);
        assert_eq!(entry.url, "https://arb.example.org/rpc?key=abc");
    }

    #[test]
    fn test_parse_network_rpc_url_errors() {
        assert!("https://arb.example.org".parse::<NetworkRpcUrl>().is_err());
        assert!("not-a-network=http://localhost:8545".parse::<NetworkRpcUrl>().is_err());
        assert!("celo-mainnet=".parse::<NetworkRpcUrl>().is_err());
    }

    #[test]
    fn test_cli_args() {
        let cli = Cli::try_parse_from([
            "prepare-swap",
            "--quote-url",
            "http://localhost:3000/quote",
            "--rpc-urls",
            "celo-mainnet=http://localhost:8545,base-mainnet=http://localhost:8546",
            "--pretty",
        ])
        .unwrap();

        assert_eq!(cli.quote_timeout_secs, 30);
        assert_eq!(cli.rpc_urls.len(), 2);
        assert_eq!(cli.rpc_urls[1].network, NetworkId::BaseMainnet);
        assert!(cli.pretty);
        assert!(cli.params.is_none());
    }
}
