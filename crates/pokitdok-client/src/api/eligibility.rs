use reqwest::Method;
use serde_json::Value;

use super::*;

impl PokitDok {
    /// Run an eligibility check.
    pub async fn eligibility(&self, params: Params) -> Result<Value, PokitDokError> {
        self.call(Method::POST, "eligibility/", &params, Scope::Default).await
    }

    /// Submit a benefits enrollment.
    pub async fn enrollment(&self, params: Params) -> Result<Value, PokitDokError> {
        self.call(Method::POST, "enrollment", &params, Scope::Default).await
    }

    /// Submit an authorization request.
    pub async fn authorizations(&self, params: Params) -> Result<Value, PokitDokError> {
        self.call(Method::POST, "authorizations/", &params, Scope::Default).await
    }

    /// Submit a referral request.
    pub async fn referrals(&self, params: Params) -> Result<Value, PokitDokError> {
        self.call(Method::POST, "referrals/", &params, Scope::Default).await
    }
}
