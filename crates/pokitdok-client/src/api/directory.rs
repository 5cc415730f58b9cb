use reqwest::Method;
use serde_json::Value;

use super::request::item_path;
use super::*;

impl PokitDok {
    /// Search the payers directory.
    pub async fn payers(&self, params: Params) -> Result<Value, PokitDokError> {
        self.call(Method::GET, "payers", &params, Scope::Default).await
    }

    /// Search the providers directory.
    pub async fn providers(&self, params: Params) -> Result<Value, PokitDokError> {
        self.call(Method::GET, "providers", &params, Scope::Default).await
    }

    /// List insurance plans.
    pub async fn plans(&self, params: Params) -> Result<Value, PokitDokError> {
        self.call(Method::GET, "plans", &params, Scope::Default).await
    }

    /// List trading partners, or fetch one when `trading_partner_id` is
    /// present in the params.
    pub async fn trading_partners(&self, mut params: Params) -> Result<Value, PokitDokError> {
        let path = item_path("tradingpartners", &mut params, "trading_partner_id");
        self.call(Method::GET, &path, &params, Scope::Default).await
    }
}
