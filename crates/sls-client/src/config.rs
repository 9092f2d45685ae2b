//! Client configuration

use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection settings for an SLS client
///
/// Deserializable so embedding services can carry it in their own config.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// SLS base URL (e.g., "http://cray-sls")
    pub base_url: String,
    /// Name of the calling service instance, sent as the User-Agent
    pub instance_name: String,
    /// Bearer token; `None` or empty means no Authorization header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
}

impl ClientConfig {
    /// Create a config without a token
    pub fn new(base_url: impl Into<String>, instance_name: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            instance_name: instance_name.into(),
            api_token: None,
        }
    }

    /// Set the bearer token
    #[must_use]
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// The token to send, if one is configured and non-empty
    pub fn bearer_token(&self) -> Option<&str> {
        self.api_token.as_deref().filter(|t| !t.is_empty())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("instance_name", &self.instance_name)
            .field("api_token", &self.bearer_token().map(|_| "<redacted>"))
            .finish()
    }
}
