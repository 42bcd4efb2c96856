//! Types for NiceHash REST API requests and responses

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::RestResult;

// ============================================================================
// API Response Wrapper
// ============================================================================

/// Standard NiceHash response envelope
///
/// The client returns raw JSON; this wrapper is for callers who want typed
/// results.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Result payload
    pub result: T,
    /// Remote method echoed back by the server
    #[serde(default)]
    pub method: Option<String>,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decode a raw response body
    pub fn from_value(value: Value) -> RestResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Get the result payload
    pub fn into_result(self) -> T {
        self.result
    }
}

/// Result of the bare API version probe
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiVersion {
    /// Version string, e.g. "1.2.6"
    pub api_version: String,
}

/// Result of `balance`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Balance {
    /// Confirmed balance in BTC
    #[serde(with = "rust_decimal::serde::str")]
    pub balance_confirmed: Decimal,
    /// Pending balance in BTC
    #[serde(with = "rust_decimal::serde::str")]
    pub balance_pending: Decimal,
}

// ============================================================================
// Order Management Requests
// ============================================================================

/// Parameters for `orders.create`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrder {
    /// Location code (0 Europe, 1 USA)
    pub location: u8,
    /// Algorithm code
    pub algo: u8,
    /// Amount in BTC to spend
    pub amount: Decimal,
    /// Price in BTC/GH/day or BTC/TH/day
    pub price: Decimal,
    /// Speed limit in GH/s or TH/s (0 for no limit)
    pub limit: Decimal,
    /// Two-factor authentication code, if enabled on the account
    pub code: Option<String>,
    /// Pool hostname or IP
    pub pool_host: String,
    /// Pool port
    pub pool_port: u16,
    /// Pool username
    pub pool_user: String,
    /// Pool password
    pub pool_pass: String,
}

impl CreateOrder {
    /// Create an order request without a 2FA code
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        location: u8,
        algo: u8,
        amount: Decimal,
        price: Decimal,
        limit: Decimal,
        pool_host: impl Into<String>,
        pool_port: u16,
        pool_user: impl Into<String>,
        pool_pass: impl Into<String>,
    ) -> Self {
        Self {
            location,
            algo,
            amount,
            price,
            limit,
            code: None,
            pool_host: pool_host.into(),
            pool_port,
            pool_user: pool_user.into(),
            pool_pass: pool_pass.into(),
        }
    }

    /// Attach a two-factor authentication code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Parameters for `orders.refill`
#[derive(Debug, Clone, PartialEq)]
pub struct RefillOrder {
    pub location: u8,
    pub algo: u8,
    /// Order ID
    pub order: u64,
    /// Amount in BTC to add
    pub amount: Decimal,
}

/// Parameters for `orders.remove`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveOrder {
    pub location: u8,
    pub algo: u8,
    pub order: u64,
}

/// Parameters for `orders.set.price`
#[derive(Debug, Clone, PartialEq)]
pub struct SetOrderPrice {
    pub location: u8,
    pub algo: u8,
    pub order: u64,
    /// New price
    pub price: Decimal,
}

/// Parameters for `orders.set.price.decrease`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecreaseOrderPrice {
    pub location: u8,
    pub algo: u8,
    pub order: u64,
}

/// Parameters for `orders.set.limit`
#[derive(Debug, Clone, PartialEq)]
pub struct SetOrderLimit {
    pub location: u8,
    pub algo: u8,
    pub order: u64,
    /// New speed limit (0 for no limit)
    pub limit: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_api_version_envelope() {
        let body = json!({ "result": { "api_version": "1.2.6" } });
        let response = ApiResponse::<ApiVersion>::from_value(body).unwrap();
        assert_eq!(response.method, None);
        assert_eq!(response.into_result().api_version, "1.2.6");
    }

    #[test]
    fn test_balance_envelope() {
        let body = json!({
            "result": {
                "balance_confirmed": "0.00500000",
                "balance_pending": "0.00000000"
            },
            "method": "balance"
        });
        let response = ApiResponse::<Balance>::from_value(body).unwrap();
        assert_eq!(response.method.as_deref(), Some("balance"));
        assert_eq!(response.result.balance_confirmed, dec!(0.005));
        assert_eq!(response.result.balance_pending, Decimal::ZERO);
    }

    #[test]
    fn test_envelope_shape_mismatch() {
        let body = json!({ "error": "Incorrect key." });
        assert!(ApiResponse::<Balance>::from_value(body).is_err());
    }

    #[test]
    fn test_create_order_builder() {
        let order = CreateOrder::new(
            0,
            3,
            dec!(0.01),
            dec!(2.1),
            dec!(0),
            "stratum.pool.com",
            3333,
            "worker",
            "x",
        )
        .with_code("123456");

        assert_eq!(order.code.as_deref(), Some("123456"));
        assert_eq!(order.pool_port, 3333);
    }
}
