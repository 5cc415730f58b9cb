use reqwest::Method;
use serde_json::Value;

use super::request::item_path;
use super::*;

impl PokitDok {
    /// Query identity resources, or fetch one when `uuid` is present in
    /// the params.
    pub async fn identity(&self, mut params: Params) -> Result<Value, PokitDokError> {
        let path = item_path("identity", &mut params, "uuid");
        self.call(Method::GET, &path, &params, Scope::Default).await
    }

    /// Create an identity resource.
    pub async fn create_identity(&self, params: Params) -> Result<Value, PokitDokError> {
        self.call(Method::POST, "identity", &params, Scope::Default).await
    }

    /// Update an existing identity resource.
    pub async fn update_identity(
        &self,
        uuid: &str,
        params: Params,
    ) -> Result<Value, PokitDokError> {
        let path = format!("identity/{uuid}");
        self.call(Method::PUT, &path, &params, Scope::Default).await
    }
}
