use reqwest::Method;
use serde_json::Value;

use super::*;

impl PokitDok {
    /// Invoke the cash prices endpoint.
    pub async fn cash_prices(&self, params: Params) -> Result<Value, PokitDokError> {
        self.call(Method::GET, "prices/cash", &params, Scope::Default).await
    }

    /// Invoke the insurance prices endpoint.
    pub async fn insurance_prices(&self, params: Params) -> Result<Value, PokitDokError> {
        self.call(Method::GET, "prices/insurance", &params, Scope::Default).await
    }
}
