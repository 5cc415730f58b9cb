use reqwest::Method;
use serde_json::Value;

use super::request::item_path;
use super::*;

impl PokitDok {
    /// Look up pharmacy plan coverage.
    pub async fn pharmacy_plans(&self, params: Params) -> Result<Value, PokitDokError> {
        self.call(Method::GET, "pharmacy/plans", &params, Scope::Default).await
    }

    /// Look up drug coverage in a plan formulary.
    pub async fn pharmacy_formulary(&self, params: Params) -> Result<Value, PokitDokError> {
        self.call(Method::GET, "pharmacy/formulary", &params, Scope::Default).await
    }

    /// Search in-network pharmacies, or fetch one by NPI when `npi` is
    /// present in the params.
    pub async fn pharmacy_network(&self, mut params: Params) -> Result<Value, PokitDokError> {
        let path = item_path("pharmacy/network", &mut params, "npi");
        self.call(Method::GET, &path, &params, Scope::Default).await
    }

    /// Look up medical procedure code information, or a single code when
    /// `code` is present in the params.
    pub async fn mpc(&self, mut params: Params) -> Result<Value, PokitDokError> {
        let path = item_path("mpc", &mut params, "code");
        self.call(Method::GET, &path, &params, Scope::Default).await
    }
}
