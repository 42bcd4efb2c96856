//! Main REST client implementation

use crate::auth::Credentials;
use crate::endpoints::{PrivateEndpoints, PublicEndpoints};
use crate::error::RestResult;
use crate::params::QueryParams;
use crate::transport::{HttpTransport, Transport};
use crate::types::{
    CreateOrder, DecreaseOrderPrice, RefillOrder, RemoveOrder, SetOrderLimit, SetOrderPrice,
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Production API endpoint
pub const API_BASE_URL: &str = "https://api.nicehash.com/api";

/// Default user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("nicehash-rest/", env!("CARGO_PKG_VERSION"));

/// NiceHash REST API client
///
/// Every method issues exactly one GET and returns the parsed JSON body
/// unmodified. Each call builds its own parameter list, so concurrent calls
/// on clones of the same client never share request state.
///
/// # Example
///
/// ```no_run
/// use nicehash_rest::{Algorithm, Credentials, Location, NiceHashClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = NiceHashClient::new()?;
///     let orders = client
///         .get_orders(Location::Usa.code(), Algorithm::X11.code())
///         .await?;
///
///     // With credentials for private endpoints
///     let auth_client = NiceHashClient::with_credentials(Credentials::from_env()?)?;
///     let balance = auth_client.get_my_balance().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct NiceHashClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    credentials: Credentials,
}

impl NiceHashClient {
    /// Create a new client without credentials
    ///
    /// Private endpoints can still be called; the server will reject them.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::new().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client that sends requests through the given transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        info!(base_url = %config.base_url, "Created NiceHash REST client");

        Self {
            transport,
            base_url: config.base_url,
            credentials: config.credentials,
        }
    }

    /// Check if both API id and key are configured
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_complete()
    }

    /// Current credentials
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Mutable access to the credentials
    pub fn credentials_mut(&mut self) -> &mut Credentials {
        &mut self.credentials
    }

    /// Replace the credentials
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = credentials;
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe the API version of the production endpoint
    ///
    /// Needs no client instance: a GET to the base URL with no parameters.
    pub async fn get_api_version() -> RestResult<Value> {
        let transport = HttpTransport::new(&ClientConfig::default())?;
        Self::get_api_version_via(&transport).await
    }

    /// Probe the API version through a given transport
    pub async fn get_api_version_via(transport: &dyn Transport) -> RestResult<Value> {
        PublicEndpoints::new(transport, API_BASE_URL)
            .get_api_version()
            .await
    }

    // ========================================================================
    // Public Endpoints
    // ========================================================================

    /// Get public endpoints
    pub fn public(&self) -> PublicEndpoints<'_> {
        PublicEndpoints::new(self.transport.as_ref(), &self.base_url)
    }

    /// Get current global stats
    ///
    /// # Arguments
    /// * `location` - Restrict to one location (0 Europe, 1 USA)
    pub async fn get_global_current_stats(&self, location: Option<u8>) -> RestResult<Value> {
        self.public().get_global_current_stats(location).await
    }

    /// Get average global stats for the past 24 hours
    pub async fn get_global_24h_stats(&self) -> RestResult<Value> {
        self.public().get_global_24h_stats().await
    }

    /// Get current stats for a provider
    pub async fn get_provider_stats(&self, addr: &str) -> RestResult<Value> {
        self.public().get_provider_stats(addr).await
    }

    /// Get detailed stats for a provider; `from` defaults to "0"
    pub async fn get_detailed_provider_stats(
        &self,
        addr: &str,
        from: Option<&str>,
    ) -> RestResult<Value> {
        self.public().get_detailed_provider_stats(addr, from).await
    }

    /// Get stats for a provider's workers on one algorithm
    pub async fn get_provider_workers_stats(&self, addr: &str, algo: u8) -> RestResult<Value> {
        self.public().get_provider_workers_stats(addr, algo).await
    }

    /// Get stats for a provider's workers on every algorithm
    pub async fn get_all_provider_workers_stats(&self, addr: &str) -> RestResult<Value> {
        self.public().get_all_provider_workers_stats(addr).await
    }

    /// Get all orders for an algorithm at a location
    pub async fn get_orders(&self, location: u8, algo: u8) -> RestResult<Value> {
        self.public().get_orders(location, algo).await
    }

    /// Get Multi-Algorithm Mining info
    pub async fn get_multi_algorithm_mining_info(&self) -> RestResult<Value> {
        self.public().get_multi_algorithm_mining_info().await
    }

    /// Get Simple Multi-Algorithm Mining info
    pub async fn get_simple_multi_algorithm_mining_info(&self) -> RestResult<Value> {
        self.public().get_simple_multi_algorithm_mining_info().await
    }

    /// Get buying power info
    pub async fn get_needed_buying_info(&self) -> RestResult<Value> {
        self.public().get_needed_buying_info().await
    }

    /// Call a method not wrapped by this client, without credentials
    pub async fn request(&self, method: &str, params: QueryParams) -> RestResult<Value> {
        self.public().request(method, params).await
    }

    // ========================================================================
    // Private Endpoints
    // ========================================================================

    /// Get private endpoints
    ///
    /// Credentials are not checked here.
    pub fn private(&self) -> PrivateEndpoints<'_> {
        PrivateEndpoints::new(self.transport.as_ref(), &self.base_url, &self.credentials)
    }

    /// Get the account's own orders
    pub async fn get_my_orders(&self, location: u8, algo: u8) -> RestResult<Value> {
        self.private().get_my_orders(location, algo).await
    }

    /// Create a new order
    pub async fn create_order(&self, order: &CreateOrder) -> RestResult<Value> {
        self.private().create_order(order).await
    }

    /// Refill an order
    pub async fn refill_order(&self, refill: &RefillOrder) -> RestResult<Value> {
        self.private().refill_order(refill).await
    }

    /// Remove an order
    pub async fn remove_order(&self, remove: &RemoveOrder) -> RestResult<Value> {
        self.private().remove_order(remove).await
    }

    /// Set an order's price
    pub async fn set_order_price(&self, update: &SetOrderPrice) -> RestResult<Value> {
        self.private().set_order_price(update).await
    }

    /// Decrease an order's price
    pub async fn decrease_order_price(&self, update: &DecreaseOrderPrice) -> RestResult<Value> {
        self.private().decrease_order_price(update).await
    }

    /// Set an order's speed limit
    pub async fn set_order_limit(&self, update: &SetOrderLimit) -> RestResult<Value> {
        self.private().set_order_limit(update).await
    }

    /// Get the account balance
    pub async fn get_my_balance(&self) -> RestResult<Value> {
        self.private().get_my_balance().await
    }

    /// Call a method not wrapped by this client, with credentials
    pub async fn request_private(&self, method: &str, params: QueryParams) -> RestResult<Value> {
        self.private().request(method, params).await
    }
}

impl std::fmt::Debug for NiceHashClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NiceHashClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (may be empty)
    pub credentials: Credentials,
    /// Endpoint URL
    pub base_url: String,
    /// User agent header
    pub user_agent: String,
    /// Request timeout applied by the HTTP transport (none by default)
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: Credentials::none(),
            base_url: API_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Set the endpoint URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_without_credentials() {
        let client = NiceHashClient::new().unwrap();
        assert!(!client.has_credentials());
        assert_eq!(client.base_url(), API_BASE_URL);
    }

    #[test]
    fn test_client_with_credentials() {
        let client =
            NiceHashClient::with_credentials(Credentials::new("testApiId", "testApiKey")).unwrap();
        assert!(client.has_credentials());
    }

    #[test]
    fn test_credentials_mutation() {
        let mut client =
            NiceHashClient::with_credentials(Credentials::none().with_api_id("12345")).unwrap();
        assert!(!client.has_credentials());

        client.credentials_mut().set_api_key("test");
        assert!(client.has_credentials());

        client.set_credentials(Credentials::none());
        assert!(!client.has_credentials());
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("test-agent")
            .with_base_url("http://localhost:8080/api");

        assert_eq!(config.timeout, Some(Duration::from_secs(60)));
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.base_url, "http://localhost:8080/api");
    }

    #[test]
    fn test_default_user_agent_has_version() {
        assert!(DEFAULT_USER_AGENT.starts_with("nicehash-rest/"));
        assert!(DEFAULT_USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_debug_hides_key() {
        let client =
            NiceHashClient::with_credentials(Credentials::new("id", "super_secret")).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("super_secret"));
        assert!(debug.contains("has_credentials: true"));
    }
}
