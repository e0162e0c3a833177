use super::client::{ApiClient, ApiError};
use crate::models::{ActionResponse, DeviceConfig};

impl ApiClient {
    /// Get the device configuration
    pub async fn get_device_config(&self) -> Result<DeviceConfig, ApiError> {
        self.get("/config").await
    }

    /// Send a test push notification through the backend
    pub async fn send_test_push(&self) -> Result<ActionResponse, ApiError> {
        self.post("/test-push-notification", &serde_json::json!({}))
            .await
    }

    /// Send a test alert email through the backend
    pub async fn send_test_email(&self) -> Result<ActionResponse, ApiError> {
        self.post("/test-email", &serde_json::json!({})).await
    }
}
