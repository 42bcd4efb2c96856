//! Ordered query parameters
//!
//! Insertion order is wire order. An optional argument that was not supplied
//! is never inserted, so absence stays distinct from `""` and `0`.

use crate::auth::Credentials;
use crate::error::RestResult;

/// Name of the parameter carrying the remote method
pub const METHOD_PARAM: &str = "method";
/// Name of the parameter carrying the API id
pub const ID_PARAM: &str = "id";
/// Name of the parameter carrying the API key
pub const KEY_PARAM: &str = "key";

/// Ordered mapping from parameter name to value, built fresh for each call
#[derive(Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parameter list whose first entry is `method=<name>`
    pub fn for_method(method: &str) -> Self {
        Self::new().with(METHOD_PARAM, method)
    }

    /// Append a parameter
    pub fn push(&mut self, name: impl Into<String>, value: impl ToString) -> &mut Self {
        self.pairs.push((name.into(), value.to_string()));
        self
    }

    /// Append a parameter, builder style
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.push(name, value);
        self
    }

    /// Append a parameter only when a value is present
    pub fn with_opt<V: ToString>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.push(name, value);
        }
        self
    }

    /// Append the pairs of `other`, skipping any `method` entry
    pub fn extend(&mut self, other: QueryParams) {
        self.pairs.extend(
            other
                .pairs
                .into_iter()
                .filter(|(name, _)| name != METHOD_PARAM),
        );
    }

    /// Remove every pair with this name
    pub fn remove(&mut self, name: &str) {
        self.pairs.retain(|(k, _)| k != name);
    }

    /// Value of the first pair with this name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check if a parameter is present
    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == name)
    }

    /// Iterate pairs in wire order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when no parameter is set
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Merge credentials into the parameters
    ///
    /// Any caller-supplied `id` or `key` is dropped first, then the configured
    /// halves are appended, so credentials win and always come last. A half
    /// that was never configured is not sent.
    pub fn merge_credentials(&mut self, credentials: &Credentials) {
        self.remove(ID_PARAM);
        self.remove(KEY_PARAM);

        if let Some(id) = credentials.api_id() {
            self.push(ID_PARAM, id);
        }
        if let Some(key) = credentials.expose_api_key() {
            self.push(KEY_PARAM, key);
        }
    }

    /// Percent-encode into a query string, preserving order
    pub fn to_query_string(&self) -> RestResult<String> {
        Ok(serde_urlencoded::to_string(&self.pairs)?)
    }

    /// Full request URL: `base_url` alone when empty, `base_url?query` otherwise
    pub fn to_url(&self, base_url: &str) -> RestResult<String> {
        if self.is_empty() {
            return Ok(base_url.to_string());
        }
        Ok(format!("{}?{}", base_url, self.to_query_string()?))
    }
}

impl std::fmt::Debug for QueryParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.pairs.iter().map(|(k, v)| {
                let shown = if k == KEY_PARAM { "[REDACTED]" } else { v.as_str() };
                (k.as_str(), shown)
            }))
            .finish()
    }
}
