//! URL construction and the authenticated request core.
//!
//! Every resource call goes through [`PokitDok::request`]: ensure a token
//! for the requested scope, build the URL, send, and on a 401 refresh the
//! scope's token and retry exactly once.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use url::Url;

use super::*;
use crate::{API_VERSION, Token};

/// Build a resource URL from the API base, endpoint path and query params.
///
/// Yields `{api_base}/api/v4/{path}`, with each param appended as a
/// percent-encoded query pair. Construction failure is an error, never a
/// silent empty request.
pub(super) fn build_url(
    api_base: &Url,
    path: &str,
    params: &Params,
) -> Result<Url, PokitDokError> {
    let base = api_base.as_str().trim_end_matches('/');
    let mut url = Url::parse(&format!("{base}/api/{API_VERSION}/{path}"))?;

    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, &coerce_to_string(value));
        }
    }

    Ok(url)
}

/// Coerce a query value to its string form. Strings pass through unquoted;
/// anything else uses its JSON text. Nested values are not given any
/// structured query serialization.
fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Split an identifying segment out of `params` and interpolate it into
/// the collection path. Falls back to the collection path when absent.
pub(super) fn item_path(collection: &str, params: &mut Params, key: &str) -> String {
    match params.remove(key) {
        Some(value) => format!("{collection}/{}", coerce_to_string(&value)),
        None => collection.to_string(),
    }
}

impl PokitDok {
    /// Execute `method` against `{api_base}/api/v4/{path}` with a valid
    /// token for `scope`.
    ///
    /// If the first attempt is rejected with 401 the scope's token is
    /// invalidated, reacquired, and the request retried exactly once; a
    /// second 401 is terminal. Any other status is returned as the raw
    /// body for the caller to interpret.
    pub(super) async fn request(
        &self,
        method: Method,
        path: &str,
        params: &Params,
        headers: &HeaderMap,
        scope: Scope,
    ) -> Result<String, PokitDokError> {
        let token = self.current_token(scope).await?;
        let resp = self
            .send(method.clone(), path, params, headers, &token)
            .await?;

        if resp.status() != StatusCode::UNAUTHORIZED {
            return Ok(resp.text().await?);
        }

        tracing::warn!(
            path,
            scope = scope.as_str(),
            "Got 401, refreshing token and retrying once"
        );

        let token = self.refreshed_token(scope, &token).await?;
        let resp = self.send(method, path, params, headers, &token).await?;

        if resp.status() == StatusCode::UNAUTHORIZED {
            return Err(PokitDokError::Unauthorized);
        }

        Ok(resp.text().await?)
    }

    /// Single request attempt. GET/DELETE carry params in the query
    /// string; POST/PUT carry them as a JSON body.
    async fn send(
        &self,
        method: Method,
        path: &str,
        params: &Params,
        extra_headers: &HeaderMap,
        token: &Token,
    ) -> Result<reqwest::Response, PokitDokError> {
        let body_method = matches!(method, Method::POST | Method::PUT);

        let url = if body_method {
            build_url(&self.config.api_base, path, &Params::new())?
        } else {
            build_url(&self.config.api_base, path, params)?
        };

        let headers = request_headers(extra_headers, token)?;
        let mut req = self.http.request(method, url).headers(headers);
        if body_method && !params.is_empty() {
            req = req.json(params);
        }

        Ok(req.send().await?)
    }

    /// Token for `scope`, authenticating on first use. Waits on the
    /// scope's slot if another task is mid-refresh.
    async fn current_token(&self, scope: Scope) -> Result<Token, PokitDokError> {
        let mut slot = self.tokens.slot(scope).lock().await;
        match slot.as_ref() {
            Some(token) => Ok(token.clone()),
            None => {
                let token = self.authenticator.authenticate(scope).await?;
                *slot = Some(token.clone());
                Ok(token)
            }
        }
    }

    /// Replace the token for `scope` after a 401, unless another task
    /// already refreshed it while this request was in flight.
    async fn refreshed_token(&self, scope: Scope, stale: &Token) -> Result<Token, PokitDokError> {
        let mut slot = self.tokens.slot(scope).lock().await;
        if let Some(current) = slot.as_ref() {
            if current.value != stale.value {
                return Ok(current.clone());
            }
        }

        let token = self.authenticator.authenticate(scope).await?;
        *slot = Some(token.clone());
        Ok(token)
    }
}

/// Caller headers plus the bearer credential. Default headers ride along
/// at the transport level and lose to anything set here.
fn request_headers(extra: &HeaderMap, token: &Token) -> Result<HeaderMap, PokitDokError> {
    let mut headers = extra.clone();
    let bearer = format!("Bearer {}", token.value);
    let value = HeaderValue::from_str(&bearer)
        .map_err(|_| PokitDokError::InvalidHeader("authorization".into()))?;
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}
