use super::client::{ApiClient, ApiError};
use crate::models::{AlertRecord, AlertSystemStatus, ToggleResponse};

impl ApiClient {
    /// Get stored alerts, newest first. `cache_bust` defeats HTTP caches.
    pub async fn get_alerts(&self, cache_bust: i64) -> Result<Vec<AlertRecord>, ApiError> {
        self.get(&format!("/alerts?t={}", cache_bust)).await
    }

    /// Get whether the backend alert system is enabled
    pub async fn get_alert_system_status(&self) -> Result<AlertSystemStatus, ApiError> {
        self.get("/alerts/status").await
    }

    /// Flip the backend alert system on or off
    pub async fn toggle_alert_system(&self) -> Result<ToggleResponse, ApiError> {
        self.post("/alerts/toggle", &serde_json::json!({})).await
    }
}
