//! OAuth2 client-credentials handshake and per-scope token storage.
//!
//! Tokens are acquired lazily on the first request needing a scope and
//! replaced when a 401 forces a refresh. Each scope has its own slot, so
//! refreshing one scope never touches the other's token.

use chrono::Utc;
use tokio::sync::Mutex;
use url::Url;

use crate::{PokitDokError, Scope, Token};

/// Immutable client credentials for the client-credentials grant.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Holds at most one token per scope.
///
/// The slots are async mutexes rather than plain cells so that concurrent
/// requests sharing a scope wait on an in-flight refresh instead of
/// triggering redundant ones.
pub(crate) struct TokenStore {
    default: Mutex<Option<Token>>,
    user_schedule: Mutex<Option<Token>>,
}

impl TokenStore {
    pub(crate) fn new() -> Self {
        Self {
            default: Mutex::new(None),
            user_schedule: Mutex::new(None),
        }
    }

    pub(crate) fn slot(&self, scope: Scope) -> &Mutex<Option<Token>> {
        match scope {
            Scope::Default => &self.default,
            Scope::UserSchedule => &self.user_schedule,
        }
    }
}

/// Performs the OAuth2 client-credentials handshake against
/// `{api_base}/oauth2/token`.
pub(crate) struct Authenticator {
    credentials: Credentials,
    token_url: Url,
    http: reqwest::Client,
}

impl Authenticator {
    pub(crate) fn new(
        http: reqwest::Client,
        api_base: &Url,
        credentials: Credentials,
    ) -> Result<Self, PokitDokError> {
        let base = api_base.as_str().trim_end_matches('/');
        let token_url = Url::parse(&format!("{base}/oauth2/token"))?;
        Ok(Self {
            credentials,
            token_url,
            http,
        })
    }

    /// Request a fresh token for `scope` from the token endpoint.
    pub(crate) async fn authenticate(&self, scope: Scope) -> Result<Token, PokitDokError> {
        tracing::info!(scope = scope.as_str(), "Requesting access token");

        let mut form = vec![("grant_type", "client_credentials")];
        if let Some(scope_param) = scope.request_param() {
            form.push(("scope", scope_param));
        }

        let resp = self
            .http
            .post(self.token_url.clone())
            .basic_auth(&self.credentials.client_id, Some(&self.credentials.client_secret))
            .form(&form)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(PokitDokError::Auth {
                status: status.as_u16(),
                body,
            });
        }

        Ok(Token {
            scope,
            value: extract_token_value(&body),
            obtained_at: Utc::now(),
        })
    }
}

/// The token endpoint returns either the raw bearer value or a JSON object
/// carrying it in `access_token`, depending on deployment. Both shapes are
/// accepted; the value is otherwise treated as opaque.
fn extract_token_value(body: &str) -> String {
    if let Ok(serde_json::Value::Object(fields)) = serde_json::from_str(body) {
        if let Some(serde_json::Value::String(token)) = fields.get("access_token") {
            return token.clone();
        }
    }
    body.trim().to_string()
}
