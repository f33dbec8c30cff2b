//! Prepares the unsigned transactions for a token swap followed by a
//! post-swap hook
//!
//! A quote is fetched from the swap quote service, the sold token's allowance
//! is checked on the source chain, and an approval is prepended when the
//! allowance does not cover the swap

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::needless_pass_by_ref_mut)]
#![deny(clippy::unused_async)]

pub mod allowance;
pub mod amount;
pub mod assembler;
pub mod chain_client;
pub mod error;
pub mod preparer;
pub mod quote_client;
#[cfg(test)]
mod test_helpers;

pub use preparer::SwapPreparer;
