//! Test helpers: an in-memory allowance reader and a local quote service

use std::sync::{Arc, Mutex};

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use serde_json::{json, Value};
use warp::{http::StatusCode, Filter};

use crate::{chain_client::AllowanceReader, error::SwapPreparationError};

/// An allowance query as `(token, owner, spender)`
pub type AllowanceQuery = (Address, Address, Address);

/// An allowance reader returning a fixed allowance, or a fixed error
#[derive(Clone)]
pub struct MockAllowanceReader {
    /// The allowance to report, or the error message to fail with
    result: Result<U256, String>,
    /// The queries received so far
    queries: Arc<Mutex<Vec<AllowanceQuery>>>,
}

impl MockAllowanceReader {
    /// A reader that reports `allowance` for every query
    pub fn new(allowance: U256) -> Self {
        Self { result: Ok(allowance), queries: Default::default() }
    }

    /// A reader whose every query fails
    pub fn failing(msg: &str) -> Self {
        Self { result: Err(msg.to_string()), queries: Default::default() }
    }

    /// The queries received so far
    pub fn queries(&self) -> Vec<AllowanceQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl AllowanceReader for MockAllowanceReader {
    async fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, SwapPreparationError> {
        self.queries.lock().unwrap().push((token, owner, spender));
        self.result.clone().map_err(SwapPreparationError::on_chain_read)
    }
}

/// A quote service transaction, as the service sends it
pub fn mock_swap_tx_json() -> Value {
    json!({
        "from": "0x5555555555555555555555555555555555555555",
        "to": "0x6666666666666666666666666666666666666666",
        "data": "0xabcdef",
        "value": "0",
        "gas": "500000",
        "estimatedGasUse": "1000",
        "allowanceTarget": "0x7777777777777777777777777777777777777777",
        "buyAmount": "12345"
    })
}

/// Serve `body` with `status` for every POST to `/quote` on an ephemeral
/// local port
///
/// Returns the endpoint URL and a slot holding the last request body
pub fn spawn_quote_server(status: StatusCode, body: String) -> (String, Arc<Mutex<Option<Value>>>) {
    let captured = Arc::new(Mutex::new(None));
    let captured_clone = captured.clone();

    let route = warp::post().and(warp::path("quote")).and(warp::body::json()).map(
        move |request: Value| {
            *captured_clone.lock().unwrap() = Some(request);
            warp::reply::with_status(body.clone(), status)
        },
    );

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    (format!("http://{addr}/quote"), captured)
}
