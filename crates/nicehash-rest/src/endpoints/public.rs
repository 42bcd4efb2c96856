//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use serde_json::Value;
use tracing::instrument;

use super::{method, Dispatcher};
use crate::error::RestResult;
use crate::params::QueryParams;
use crate::transport::Transport;

/// Value sent for `from` when detailed provider stats are requested without one
pub const DEFAULT_FROM: &str = "0";

/// Public market data endpoints
pub struct PublicEndpoints<'a> {
    dispatcher: Dispatcher<'a>,
}

impl<'a> PublicEndpoints<'a> {
    pub fn new(transport: &'a dyn Transport, base_url: &'a str) -> Self {
        Self {
            dispatcher: Dispatcher::new(transport, base_url),
        }
    }

    /// Get current global stats, optionally for a single location
    #[instrument(skip(self))]
    pub async fn get_global_current_stats(&self, location: Option<u8>) -> RestResult<Value> {
        let params =
            QueryParams::for_method(method::GLOBAL_CURRENT_STATS).with_opt("location", location);
        self.dispatcher.send(params).await
    }

    /// Get average global stats over the past 24 hours
    #[instrument(skip(self))]
    pub async fn get_global_24h_stats(&self) -> RestResult<Value> {
        self.dispatcher
            .send(QueryParams::for_method(method::GLOBAL_24H_STATS))
            .await
    }

    /// Get current stats for a provider, for all algorithms
    ///
    /// # Arguments
    /// * `addr` - Provider's BTC address
    #[instrument(skip(self))]
    pub async fn get_provider_stats(&self, addr: &str) -> RestResult<Value> {
        let params = QueryParams::for_method(method::PROVIDER_STATS).with("addr", addr);
        self.dispatcher.send(params).await
    }

    /// Get detailed stats for a provider, including history and past payments
    ///
    /// # Arguments
    /// * `addr` - Provider's BTC address
    /// * `from` - Unix timestamp to start history from (default "0")
    #[instrument(skip(self))]
    pub async fn get_detailed_provider_stats(
        &self,
        addr: &str,
        from: Option<&str>,
    ) -> RestResult<Value> {
        let from = from.filter(|f| !f.is_empty()).unwrap_or(DEFAULT_FROM);
        let params = QueryParams::for_method(method::PROVIDER_STATS_EX)
            .with("addr", addr)
            .with("from", from);
        self.dispatcher.send(params).await
    }

    /// Get stats for a provider's workers on one algorithm
    ///
    /// # Arguments
    /// * `addr` - Provider's BTC address
    /// * `algo` - Algorithm code
    #[instrument(skip(self))]
    pub async fn get_provider_workers_stats(&self, addr: &str, algo: u8) -> RestResult<Value> {
        let params = QueryParams::for_method(method::PROVIDER_WORKERS)
            .with("addr", addr)
            .with("algo", algo);
        self.dispatcher.send(params).await
    }

    /// Get stats for a provider's workers on every algorithm
    #[instrument(skip(self))]
    pub async fn get_all_provider_workers_stats(&self, addr: &str) -> RestResult<Value> {
        let params = QueryParams::for_method(method::PROVIDER_WORKERS).with("addr", addr);
        self.dispatcher.send(params).await
    }

    /// Get all orders for an algorithm at a location. Refreshed every 30 seconds.
    #[instrument(skip(self))]
    pub async fn get_orders(&self, location: u8, algo: u8) -> RestResult<Value> {
        let params = QueryParams::for_method(method::ORDERS_GET)
            .with("location", location)
            .with("algo", algo);
        self.dispatcher.send(params).await
    }

    /// Get information about Multi-Algorithm Mining
    #[instrument(skip(self))]
    pub async fn get_multi_algorithm_mining_info(&self) -> RestResult<Value> {
        self.dispatcher
            .send(QueryParams::for_method(method::MULTIALGO_INFO))
            .await
    }

    /// Get information about Simple Multi-Algorithm Mining
    #[instrument(skip(self))]
    pub async fn get_simple_multi_algorithm_mining_info(&self) -> RestResult<Value> {
        self.dispatcher
            .send(QueryParams::for_method(method::SIMPLE_MULTIALGO_INFO))
            .await
    }

    /// Get the information needed to buy hashing power (fees, limits, algorithms)
    #[instrument(skip(self))]
    pub async fn get_needed_buying_info(&self) -> RestResult<Value> {
        self.dispatcher
            .send(QueryParams::for_method(method::BUY_INFO))
            .await
    }

    /// Call any method without credentials
    #[instrument(skip(self, params))]
    pub async fn request(&self, method: &str, params: QueryParams) -> RestResult<Value> {
        let mut query = QueryParams::for_method(method);
        query.extend(params);
        self.dispatcher.send(query).await
    }

    /// Probe the API version: a GET to the base URL with no query string
    #[instrument(skip(self))]
    pub async fn get_api_version(&self) -> RestResult<Value> {
        self.dispatcher.send(QueryParams::new()).await
    }
}
