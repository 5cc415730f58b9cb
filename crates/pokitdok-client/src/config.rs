//! Per-instance client configuration.
//!
//! The API base and default headers are explicit constructor input; there
//! is no process-wide mutable state shared across client instances.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use url::Url;

/// Public platform base URL used by [`ClientConfig::default`].
pub const DEFAULT_API_BASE: &str = "https://platform.pokitdok.com";

/// Library identification string sent as the default `User-Agent`.
pub const USER_AGENT_STRING: &str = concat!("pokitdok-rust/", env!("CARGO_PKG_VERSION"));

/// Configuration for a [`crate::PokitDok`] client instance.
///
/// `default_headers` are attached to every outgoing request; headers
/// supplied per call override them on collision. Timeouts of `None` leave
/// the transport defaults in place.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base: Url,
    pub default_headers: HeaderMap,
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_STRING));

        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default api base is a valid URL"),
            default_headers,
            timeout: None,
            connect_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at a different API base.
    pub fn with_api_base(api_base: Url) -> Self {
        Self {
            api_base,
            ..Self::default()
        }
    }
}
