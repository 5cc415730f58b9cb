//! PokitDok platform REST API client.
//!
//! One method per platform endpoint, with automatic bearer token
//! injection and single-retry on 401 Unauthorized. Endpoint methods
//! return the response body parsed into a schema-agnostic
//! [`serde_json::Value`]; the library imposes no schema on payloads.

use reqwest::Method;
use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::auth::{Authenticator, Credentials, TokenStore};
use crate::{ClientConfig, PokitDokError, Scope};

mod request;

mod activities;
mod claims;
mod directory;
mod eligibility;
mod identity;
mod pharmacy;
mod pricing;
mod scheduling;

/// Query or body parameters for an endpoint call.
///
/// GET/DELETE calls send these as URL query parameters; POST/PUT calls
/// send them as a JSON request body.
pub type Params = serde_json::Map<String, Value>;

/// PokitDok platform API client.
///
/// Owns the credentials and the per-scope token store. Tokens are
/// acquired on first use and refreshed (once per call) when the platform
/// answers 401.
pub struct PokitDok {
    http: reqwest::Client,
    config: ClientConfig,
    authenticator: Authenticator,
    tokens: TokenStore,
}

impl PokitDok {
    /// Create a client against the public platform base URL.
    pub fn new(credentials: Credentials) -> Result<Self, PokitDokError> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with explicit configuration.
    pub fn with_config(
        credentials: Credentials,
        config: ClientConfig,
    ) -> Result<Self, PokitDokError> {
        let mut builder = reqwest::Client::builder().default_headers(config.default_headers.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let http = builder.build()?;

        let authenticator = Authenticator::new(http.clone(), &config.api_base, credentials)?;

        Ok(Self {
            http,
            config,
            authenticator,
            tokens: TokenStore::new(),
        })
    }

    /// Issue an authenticated GET and return the raw response body.
    pub async fn get(
        &self,
        path: &str,
        params: &Params,
        headers: &HeaderMap,
        scope: Scope,
    ) -> Result<String, PokitDokError> {
        self.request(Method::GET, path, params, headers, scope).await
    }

    /// Issue an authenticated POST (JSON body) and return the raw response body.
    pub async fn post(
        &self,
        path: &str,
        params: &Params,
        headers: &HeaderMap,
        scope: Scope,
    ) -> Result<String, PokitDokError> {
        self.request(Method::POST, path, params, headers, scope).await
    }

    /// Issue an authenticated PUT (JSON body) and return the raw response body.
    pub async fn put(
        &self,
        path: &str,
        params: &Params,
        headers: &HeaderMap,
        scope: Scope,
    ) -> Result<String, PokitDokError> {
        self.request(Method::PUT, path, params, headers, scope).await
    }

    /// Issue an authenticated DELETE and return the raw response body.
    pub async fn delete(
        &self,
        path: &str,
        params: &Params,
        headers: &HeaderMap,
        scope: Scope,
    ) -> Result<String, PokitDokError> {
        self.request(Method::DELETE, path, params, headers, scope).await
    }

    /// Endpoint plumbing: issue the call and parse the body as JSON.
    ///
    /// Non-2xx, non-401 responses come back as data here too; the platform's
    /// error envelope is JSON and is handed to the caller unnormalized.
    async fn call(
        &self,
        method: Method,
        path: &str,
        params: &Params,
        scope: Scope,
    ) -> Result<Value, PokitDokError> {
        let body = self
            .request(method, path, params, &HeaderMap::new(), scope)
            .await?;
        Ok(serde_json::from_str(&body)?)
    }
}
