//! Error types for swap preparation

use swap_hook_api::network::NetworkId;

/// An error preparing swap transactions
#[derive(Debug, Clone, thiserror::Error)]
pub enum SwapPreparationError {
    /// The quote service responded with a non-2xx status
    #[error("quote service returned status {status}: {body}")]
    Transport {
        /// The response status code
        status: u16,
        /// The response body, unmodified
        body: String,
    },
    /// The quote request failed before a status was received
    #[error("network error: {0}")]
    Network(String),
    /// The quote service responded successfully but without a transaction
    #[error("no quote available: {0}")]
    NoQuoteAvailable(String),
    /// An error reading on-chain state
    #[error("on-chain read error: {0}")]
    OnChainRead(String),
    /// No chain client is configured for a network
    #[error("no chain client configured for {0}")]
    UnsupportedNetwork(NetworkId),
    /// The swap amount could not be converted to the token's smallest unit
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    /// A field of the quoted transaction could not be converted
    #[error("quote conversion error: {0}")]
    QuoteConversion(String),
    /// An error setting up a client
    #[error("setup error: {0}")]
    Setup(String),
}

impl SwapPreparationError {
    /// Create a new network error
    #[allow(clippy::needless_pass_by_value)]
    pub fn network<T: ToString>(e: T) -> Self {
        SwapPreparationError::Network(e.to_string())
    }

    /// Create a new no-quote error
    #[allow(clippy::needless_pass_by_value)]
    pub fn no_quote_available<T: ToString>(e: T) -> Self {
        SwapPreparationError::NoQuoteAvailable(e.to_string())
    }

    /// Create a new on-chain read error
    #[allow(clippy::needless_pass_by_value)]
    pub fn on_chain_read<T: ToString>(e: T) -> Self {
        SwapPreparationError::OnChainRead(e.to_string())
    }

    /// Create a new invalid amount error
    #[allow(clippy::needless_pass_by_value)]
    pub fn invalid_amount<T: ToString>(e: T) -> Self {
        SwapPreparationError::InvalidAmount(e.to_string())
    }

    /// Create a new quote conversion error
    #[allow(clippy::needless_pass_by_value)]
    pub fn quote_conversion<T: ToString>(e: T) -> Self {
        SwapPreparationError::QuoteConversion(e.to_string())
    }

    /// Create a new setup error
    #[allow(clippy::needless_pass_by_value)]
    pub fn setup<T: ToString>(e: T) -> Self {
        SwapPreparationError::Setup(e.to_string())
    }
}

impl From<reqwest::Error> for SwapPreparationError {
    fn from(e: reqwest::Error) -> Self {
        SwapPreparationError::network(e)
    }
}
