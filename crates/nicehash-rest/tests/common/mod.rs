//! Common test utilities and fixtures for integration tests
//!
//! Response bodies mirror what the NiceHash API returns.

#![allow(dead_code)]

use async_trait::async_trait;
use nicehash_rest::{ClientConfig, Credentials, NiceHashClient, RestError, RestResult, Transport};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

pub const TEST_API_ID: &str = "testApiId";
pub const TEST_API_KEY: &str = "testApiKey";
pub const TEST_ADDRESS: &str = "1P5PNW6Wd53QiZLdCs9EXNHmuPTX3rD6hW";
pub const BASE_URL: &str = "https://api.nicehash.com/api";

/// Sample body of the version probe
pub const API_VERSION_RESPONSE: &str = r#"{
    "result": {
        "api_version": "1.2.6"
    }
}"#;

/// Sample body of `balance`
pub const BALANCE_RESPONSE: &str = r#"{
    "result": {
        "balance_confirmed": "0.00500000",
        "balance_pending": "0.00000000"
    },
    "method": "balance"
}"#;

/// Transport that records every URL and answers with a canned body
///
/// Without a canned body it echoes the URL back as `{"result": {"url": ...}}`.
#[derive(Default)]
pub struct RecordingTransport {
    urls: Mutex<Vec<String>>,
    body: Option<Value>,
    delay: Option<Duration>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(body: &str) -> Self {
        Self {
            body: Some(serde_json::from_str(body).expect("fixture is valid JSON")),
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Every URL requested so far, in order
    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().clone()
    }

    /// Query string of the only request made so far
    pub fn last_query(&self) -> String {
        let urls = self.urls.lock();
        let url = urls.last().expect("no request recorded");
        query_of(url).to_string()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get_json(&self, url: &str) -> RestResult<Value> {
        self.urls.lock().push(url.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        Ok(self
            .body
            .clone()
            .unwrap_or_else(|| json!({ "result": { "url": url } })))
    }
}

/// Transport that always fails
pub struct FailingTransport;

#[async_trait]
impl Transport for FailingTransport {
    async fn get_json(&self, _url: &str) -> RestResult<Value> {
        Err(RestError::Transport("connection refused".to_string()))
    }
}

/// Part of a URL after `?`, or "" when there is none
pub fn query_of(url: &str) -> &str {
    url.split_once('?').map(|(_, q)| q).unwrap_or("")
}

/// Decode a query string into ordered pairs
pub fn decode_query(query: &str) -> Vec<(String, String)> {
    serde_urlencoded::from_str(query).expect("query string decodes")
}

/// Client wired to a recording transport
pub fn recording_client(credentials: Credentials) -> (NiceHashClient, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::new());
    let config = ClientConfig::new().with_credentials(credentials);
    let client = NiceHashClient::with_transport(config, transport.clone());
    (client, transport)
}

/// Client with the test id/key wired to a recording transport
pub fn authed_client() -> (NiceHashClient, Arc<RecordingTransport>) {
    recording_client(Credentials::new(TEST_API_ID, TEST_API_KEY))
}
