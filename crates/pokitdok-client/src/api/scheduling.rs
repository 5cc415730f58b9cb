//! Appointment scheduling endpoints.
//!
//! Appointment listing, booking, update and cancellation run under the
//! `user_schedule` scope; appointment types and schedulers are catalog
//! lookups under the default scope.

use reqwest::Method;
use serde_json::Value;

use super::request::item_path;
use super::*;

impl PokitDok {
    /// List appointments, or fetch one when `uuid` is present in the params.
    pub async fn appointments(&self, mut params: Params) -> Result<Value, PokitDokError> {
        let path = item_path("appointments", &mut params, "uuid");
        self.call(Method::GET, &path, &params, Scope::UserSchedule).await
    }

    /// Book an open appointment slot.
    pub async fn book_appointment(
        &self,
        uuid: &str,
        params: Params,
    ) -> Result<Value, PokitDokError> {
        let path = format!("appointments/{uuid}");
        self.call(Method::PUT, &path, &params, Scope::UserSchedule).await
    }

    /// Update a booked appointment.
    pub async fn update_appointment(
        &self,
        uuid: &str,
        params: Params,
    ) -> Result<Value, PokitDokError> {
        let path = format!("appointments/{uuid}");
        self.call(Method::PUT, &path, &params, Scope::UserSchedule).await
    }

    /// Cancel a booked appointment.
    pub async fn cancel_appointment(
        &self,
        uuid: &str,
        params: Params,
    ) -> Result<Value, PokitDokError> {
        let path = format!("appointments/{uuid}");
        self.call(Method::DELETE, &path, &params, Scope::UserSchedule).await
    }

    /// List appointment types, or fetch one when `uuid` is present.
    pub async fn appointment_types(&self, mut params: Params) -> Result<Value, PokitDokError> {
        let path = item_path("appointment_types", &mut params, "uuid");
        self.call(Method::GET, &path, &params, Scope::Default).await
    }

    /// List schedulers, or fetch one when `uuid` is present.
    pub async fn schedulers(&self, mut params: Params) -> Result<Value, PokitDokError> {
        let path = item_path("schedulers", &mut params, "uuid");
        self.call(Method::GET, &path, &params, Scope::Default).await
    }
}
