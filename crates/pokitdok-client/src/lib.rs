//! PokitDok platform API client library.
//!
//! Provides OAuth2 client-credentials authentication with per-scope
//! token management, an authenticated request layer with single-retry
//! on 401 Unauthorized, and one method per platform endpoint returning
//! schema-agnostic JSON values.

pub mod api;
pub mod auth;
pub mod config;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use api::{Params, PokitDok};
pub use auth::Credentials;
pub use config::ClientConfig;

/// Platform API version segment used in every resource URL.
pub const API_VERSION: &str = "v4";

/// OAuth2 scope a token is issued for.
///
/// Calendar operations (appointment listing, booking, cancellation) run
/// under [`Scope::UserSchedule`]; everything else uses [`Scope::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Default,
    UserSchedule,
}

impl Scope {
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Default => "default",
            Scope::UserSchedule => "user_schedule",
        }
    }

    /// Value sent as the `scope` form field on the token request.
    /// The default scope is implicit and omitted from the wire.
    pub(crate) fn request_param(self) -> Option<&'static str> {
        match self {
            Scope::Default => None,
            Scope::UserSchedule => Some("user_schedule"),
        }
    }
}

/// Bearer token issued for a single scope.
///
/// Replaced, never mutated, when a 401 forces a refresh. A token is only
/// ever attached to requests declared for the scope it was issued for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub scope: Scope,
    pub value: String,
    pub obtained_at: DateTime<Utc>,
}

/// Unified error type for the pokitdok-client crate.
#[derive(Debug, thiserror::Error)]
pub enum PokitDokError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("token endpoint rejected the request (status {status}): {body}")]
    Auth { status: u16, body: String },

    #[error("request unauthorized even after a token refresh")]
    Unauthorized,

    #[error("URL construction failed: {0}")]
    UrlConstruction(#[from] url::ParseError),

    #[error("invalid value for header {0}")]
    InvalidHeader(String),
}
