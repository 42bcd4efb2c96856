//! API endpoint implementations

pub mod private;
pub mod public;

pub use private::PrivateEndpoints;
pub use public::PublicEndpoints;

use serde_json::Value;
use tracing::debug;

use crate::error::RestResult;
use crate::params::{QueryParams, METHOD_PARAM};
use crate::transport::Transport;

/// Remote method names
pub mod method {
    pub const GLOBAL_CURRENT_STATS: &str = "stats.global.current";
    pub const GLOBAL_24H_STATS: &str = "stats.global.24h";
    /// Provider stats share the remote name of the 24h global stats
    pub const PROVIDER_STATS: &str = "stats.global.24h";
    pub const PROVIDER_STATS_EX: &str = "stats.provider.ex";
    pub const PROVIDER_WORKERS: &str = "stats.provider.workers";
    pub const ORDERS_GET: &str = "orders.get";
    pub const MULTIALGO_INFO: &str = "multialgo.info";
    pub const SIMPLE_MULTIALGO_INFO: &str = "simplemultialgo.info";
    pub const BUY_INFO: &str = "buy.info";
    pub const ORDERS_CREATE: &str = "orders.create";
    pub const ORDERS_REFILL: &str = "orders.refill";
    pub const ORDERS_REMOVE: &str = "orders.remove";
    pub const ORDERS_SET_PRICE: &str = "orders.set.price";
    pub const ORDERS_DECREASE_PRICE: &str = "orders.set.price.decrease";
    pub const ORDERS_SET_LIMIT: &str = "orders.set.limit";
    pub const BALANCE: &str = "balance";
}

/// Sends finished parameter lists to the base URL
#[derive(Clone, Copy)]
pub(crate) struct Dispatcher<'a> {
    transport: &'a dyn Transport,
    base_url: &'a str,
}

impl<'a> Dispatcher<'a> {
    pub(crate) fn new(transport: &'a dyn Transport, base_url: &'a str) -> Self {
        Self { transport, base_url }
    }

    /// Serialize `params` onto the base URL and issue the GET
    pub(crate) async fn send(&self, params: QueryParams) -> RestResult<Value> {
        let url = params.to_url(self.base_url)?;

        // The URL may carry the API key, so only the method name is logged
        debug!(
            method = params.get(METHOD_PARAM).unwrap_or(""),
            params = params.len(),
            "Sending request"
        );

        self.transport.get_json(&url).await
    }
}
