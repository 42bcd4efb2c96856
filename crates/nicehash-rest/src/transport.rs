//! HTTP transport seam
//!
//! The client only needs "GET this URL and give me the JSON body". Anything
//! implementing [`Transport`] can carry requests; [`HttpTransport`] is the
//! reqwest-backed default.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::client::ClientConfig;
use crate::error::RestResult;

/// Carries a single GET request and returns the parsed JSON body
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET to `url` and parse the response body as JSON
    async fn get_json(&self, url: &str) -> RestResult<Value>;
}

/// Default transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: Client,
}

impl HttpTransport {
    /// Build a transport from the client configuration
    ///
    /// Applies the user agent and, if set, the request timeout.
    pub fn new(config: &ClientConfig) -> RestResult<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
        })
    }

    /// Wrap an existing reqwest client
    pub fn from_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> RestResult<Value> {
        // Status codes are not interpreted; the body is parsed either way.
        let response = self.http_client.get(url).send().await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_build_default_transport() {
        let transport = HttpTransport::new(&ClientConfig::default());
        assert!(transport.is_ok());
    }

    #[test]
    fn test_build_with_timeout() {
        let config = ClientConfig::new().with_timeout(Duration::from_secs(5));
        assert!(HttpTransport::new(&config).is_ok());
    }
}
