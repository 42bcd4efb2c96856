//! Private account and order management endpoints
//!
//! These endpoints carry the API id and key as the last query parameters.
//! Missing credentials are not checked locally; the server rejects the call.

use serde_json::Value;
use tracing::instrument;

use super::{method, Dispatcher};
use crate::auth::Credentials;
use crate::error::RestResult;
use crate::params::QueryParams;
use crate::transport::Transport;
use crate::types::{
    CreateOrder, DecreaseOrderPrice, RefillOrder, RemoveOrder, SetOrderLimit, SetOrderPrice,
};

/// Private account and order management endpoints
pub struct PrivateEndpoints<'a> {
    dispatcher: Dispatcher<'a>,
    credentials: &'a Credentials,
}

impl<'a> PrivateEndpoints<'a> {
    pub fn new(transport: &'a dyn Transport, base_url: &'a str, credentials: &'a Credentials) -> Self {
        Self {
            dispatcher: Dispatcher::new(transport, base_url),
            credentials,
        }
    }

    /// Merge credentials and send
    async fn send(&self, mut params: QueryParams) -> RestResult<Value> {
        params.merge_credentials(self.credentials);
        self.dispatcher.send(params).await
    }

    /// Get all orders owned by the account for an algorithm at a location
    #[instrument(skip(self))]
    pub async fn get_my_orders(&self, location: u8, algo: u8) -> RestResult<Value> {
        let params = QueryParams::for_method(method::ORDERS_GET)
            .with("location", location)
            .with("algo", algo)
            .with("my", "");
        self.send(params).await
    }

    /// Create a new order
    #[instrument(skip(self, order), fields(location = order.location, algo = order.algo))]
    pub async fn create_order(&self, order: &CreateOrder) -> RestResult<Value> {
        let params = QueryParams::for_method(method::ORDERS_CREATE)
            .with("location", order.location)
            .with("algo", order.algo)
            .with("amount", order.amount)
            .with("price", order.price)
            .with("limit", order.limit)
            .with_opt("code", order.code.as_deref())
            .with("pool_host", &order.pool_host)
            .with("pool_port", order.pool_port)
            .with("pool_user", &order.pool_user)
            .with("pool_pass", &order.pool_pass);
        self.send(params).await
    }

    /// Add funds to an existing order
    #[instrument(skip(self))]
    pub async fn refill_order(&self, refill: &RefillOrder) -> RestResult<Value> {
        let params = QueryParams::for_method(method::ORDERS_REFILL)
            .with("location", refill.location)
            .with("algo", refill.algo)
            .with("order", refill.order)
            .with("amount", refill.amount);
        self.send(params).await
    }

    /// Remove an order
    #[instrument(skip(self))]
    pub async fn remove_order(&self, remove: &RemoveOrder) -> RestResult<Value> {
        let params = QueryParams::for_method(method::ORDERS_REMOVE)
            .with("location", remove.location)
            .with("algo", remove.algo)
            .with("order", remove.order);
        self.send(params).await
    }

    /// Set a new price for an order
    #[instrument(skip(self))]
    pub async fn set_order_price(&self, update: &SetOrderPrice) -> RestResult<Value> {
        let params = QueryParams::for_method(method::ORDERS_SET_PRICE)
            .with("location", update.location)
            .with("algo", update.algo)
            .with("order", update.order)
            .with("price", update.price);
        self.send(params).await
    }

    /// Decrease an order's price by the marketplace's fixed step
    #[instrument(skip(self))]
    pub async fn decrease_order_price(&self, update: &DecreaseOrderPrice) -> RestResult<Value> {
        let params = QueryParams::for_method(method::ORDERS_DECREASE_PRICE)
            .with("location", update.location)
            .with("algo", update.algo)
            .with("order", update.order);
        self.send(params).await
    }

    /// Set a new speed limit for an order
    #[instrument(skip(self))]
    pub async fn set_order_limit(&self, update: &SetOrderLimit) -> RestResult<Value> {
        let params = QueryParams::for_method(method::ORDERS_SET_LIMIT)
            .with("location", update.location)
            .with("algo", update.algo)
            .with("order", update.order)
            .with("limit", update.limit);
        self.send(params).await
    }

    /// Get the account balance
    #[instrument(skip(self))]
    pub async fn get_my_balance(&self) -> RestResult<Value> {
        self.send(QueryParams::for_method(method::BALANCE)).await
    }

    /// Call any method with credentials merged in
    #[instrument(skip(self, params))]
    pub async fn request(&self, method: &str, params: QueryParams) -> RestResult<Value> {
        let mut query = QueryParams::for_method(method);
        query.extend(params);
        self.send(query).await
    }
}
