//! REST API client for the NiceHash hashpower marketplace
//!
//! Every endpoint is an RPC-style method on a single URL, selected with the
//! `method` query parameter and called with a GET. This crate builds those
//! query strings and returns the parsed JSON body as-is.
//!
//! # Features
//!
//! - **Public**: Global stats, provider and worker stats, order books,
//!   multi-algorithm info, buying info, API version
//! - **Private**: Own orders, create/refill/remove orders, price and limit
//!   updates, balance
//!
//! # Authentication
//!
//! Private endpoints send the API id and key as the `id` and `key` query
//! parameters, always after the endpoint parameters. The client does not
//! refuse private calls without credentials; the server does.
//!
//! # Example
//!
//! ```no_run
//! use nicehash_rest::{Credentials, NiceHashClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = NiceHashClient::new()?;
//!     let stats = client.get_global_current_stats(None).await?;
//!     println!("Stats: {}", stats["result"]["stats"]);
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = NiceHashClient::with_credentials(creds)?;
//!     let balance = auth_client.get_my_balance().await?;
//!     println!("Balance: {}", balance["result"]);
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod params;
pub mod transport;
pub mod types;

// Re-export main types
pub use auth::Credentials;
pub use client::{ClientConfig, NiceHashClient, API_BASE_URL, DEFAULT_USER_AGENT};
pub use error::{RestError, RestResult};
pub use params::QueryParams;
pub use transport::{HttpTransport, Transport};

pub use types::{
    // Responses
    ApiResponse, ApiVersion, Balance,
    // Order management
    CreateOrder, DecreaseOrderPrice, RefillOrder, RemoveOrder, SetOrderLimit, SetOrderPrice,
};

// Re-export the registries so callers need only one dependency
pub use nicehash_types::{
    algorithm_code, algorithm_name, location_code, location_name, Algorithm, Location, OrderType,
};
