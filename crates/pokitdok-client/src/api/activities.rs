use reqwest::Method;
use serde_json::Value;

use super::*;

impl PokitDok {
    /// Invoke the activities endpoint.
    pub async fn activities(&self, params: Params) -> Result<Value, PokitDokError> {
        self.call(Method::GET, "activities", &params, Scope::Default).await
    }
}
