pub mod alerts;
pub mod client;
pub mod settings;
pub mod status;

pub use client::{ApiClient, ApiError};

use async_trait::async_trait;

use crate::models::{
    ActionResponse, AlertRecord, AlertSystemStatus, DeviceConfig, ForceReadingResponse,
    HistoryPoint, StatusSnapshot, ToggleResponse,
};

/// Backend operations the dashboard controller depends on.
///
/// Futures are `?Send` because everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait TankApi {
    async fn current_status(&self) -> Result<StatusSnapshot, ApiError>;

    async fn force_reading(&self) -> Result<ForceReadingResponse, ApiError>;

    async fn history(&self) -> Result<Vec<HistoryPoint>, ApiError>;

    async fn alerts(&self, cache_bust: i64) -> Result<Vec<AlertRecord>, ApiError>;

    async fn alert_system_status(&self) -> Result<AlertSystemStatus, ApiError>;

    async fn toggle_alert_system(&self) -> Result<ToggleResponse, ApiError>;

    async fn device_config(&self) -> Result<DeviceConfig, ApiError>;

    async fn test_push_notification(&self) -> Result<ActionResponse, ApiError>;

    async fn test_email(&self) -> Result<ActionResponse, ApiError>;
}

#[async_trait(?Send)]
impl TankApi for ApiClient {
    async fn current_status(&self) -> Result<StatusSnapshot, ApiError> {
        self.get_current_status().await
    }

    async fn force_reading(&self) -> Result<ForceReadingResponse, ApiError> {
        ApiClient::force_reading(self).await
    }

    async fn history(&self) -> Result<Vec<HistoryPoint>, ApiError> {
        self.get_history().await
    }

    async fn alerts(&self, cache_bust: i64) -> Result<Vec<AlertRecord>, ApiError> {
        self.get_alerts(cache_bust).await
    }

    async fn alert_system_status(&self) -> Result<AlertSystemStatus, ApiError> {
        self.get_alert_system_status().await
    }

    async fn toggle_alert_system(&self) -> Result<ToggleResponse, ApiError> {
        ApiClient::toggle_alert_system(self).await
    }

    async fn device_config(&self) -> Result<DeviceConfig, ApiError> {
        self.get_device_config().await
    }

    async fn test_push_notification(&self) -> Result<ActionResponse, ApiError> {
        self.send_test_push().await
    }

    async fn test_email(&self) -> Result<ActionResponse, ApiError> {
        self.send_test_email().await
    }
}
