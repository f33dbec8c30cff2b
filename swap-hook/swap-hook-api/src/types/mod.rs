//! API types for the swap preparer

pub mod hook;
pub mod network;
pub mod params;
pub mod quote;
pub mod transaction;
