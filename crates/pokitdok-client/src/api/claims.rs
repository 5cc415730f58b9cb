use reqwest::Method;
use serde_json::Value;

use super::*;

impl PokitDok {
    /// Submit a claim.
    pub async fn claims(&self, params: Params) -> Result<Value, PokitDokError> {
        self.call(Method::POST, "claims/", &params, Scope::Default).await
    }

    /// Query the status of a previously submitted claim.
    pub async fn claims_status(&self, params: Params) -> Result<Value, PokitDokError> {
        self.call(Method::POST, "claims/status", &params, Scope::Default).await
    }
}
