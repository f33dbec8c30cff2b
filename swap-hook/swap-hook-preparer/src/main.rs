//! Prepares the transactions for a swap followed by a post-swap hook and
//! prints them as JSON
//!
//! The swap params are read as JSON from `--params` or stdin

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

use clap::Parser;
use cli::{setup_logging, Cli};
use swap_hook_preparer::error::SwapPreparationError;
use tracing::{error, info};

mod cli;

#[tokio::main]
async fn main() -> Result<(), SwapPreparationError> {
    let cli = Cli::parse();
    setup_logging();

    if let Err(e) = run(&cli).await {
        error!("Error preparing swap: {e}");
        return Err(e);
    }

    Ok(())
}

/// Prepare the swap described by the CLI arguments and write it to stdout
async fn run(cli: &Cli) -> Result<(), SwapPreparationError> {
    let preparer = cli.build_preparer()?;
    let params = cli.read_params().await?;
    let prepared = preparer.prepare_swap_transactions(&params).await?;
    info!(num_transactions = prepared.transactions.len(), "Swap prepared");

    let out = if cli.pretty {
        serde_json::to_string_pretty(&prepared)
    } else {
        serde_json::to_string(&prepared)
    }
    .map_err(SwapPreparationError::setup)?;

    println!("{out}");
    Ok(())
}
