use super::client::{ApiClient, ApiError};
use crate::models::{ForceReadingResponse, HistoryPoint, StatusSnapshot};

impl ApiClient {
    /// Get the latest tank status; `ApiError::NotFound` until the sensor reports
    pub async fn get_current_status(&self) -> Result<StatusSnapshot, ApiError> {
        no_reading_yet(self.get("/current").await)
    }

    /// Ask the backend to take a fresh reading right now
    pub async fn force_reading(&self) -> Result<ForceReadingResponse, ApiError> {
        self.get("/force-reading").await
    }

    /// Get stored readings, newest first
    pub async fn get_history(&self) -> Result<Vec<HistoryPoint>, ApiError> {
        self.get("/history").await
    }
}

/// A 404 from `/current` only means nothing has been stored yet
fn no_reading_yet<T>(result: Result<T, ApiError>) -> Result<T, ApiError> {
    match result {
        Err(ApiError::Http { status: 404, .. }) => Err(ApiError::NotFound),
        other => other,
    }
}
