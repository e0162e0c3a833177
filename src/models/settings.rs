use serde::{Deserialize, Serialize};

use super::number::zero_if_null;

/// Device configuration as reported by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    #[serde(default)]
    pub esp32_ip: Option<String>,
    #[serde(default)]
    pub alert_threshold: Option<f64>,
    #[serde(default)]
    pub alert_cooldown: Option<i64>,
    #[serde(default)]
    pub firebase_connected: bool,
    #[serde(default)]
    pub enhanced_alerts: Option<EnhancedAlerts>,
    #[serde(default)]
    pub usage_stats: Option<UsageStats>,
}

/// Thresholds for the enhanced alert rules
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnhancedAlerts {
    #[serde(default, deserialize_with = "zero_if_null")]
    pub low_level_threshold: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub critical_level_threshold: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub emergency_level_threshold: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub rapid_drop_threshold: f64,
    #[serde(default)]
    pub email_alerts_enabled: bool,
}

/// Water usage estimate computed by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageStats {
    #[serde(default)]
    pub current_usage_rate_gph: Option<f64>,
    #[serde(default)]
    pub days_remaining: Option<f64>,
}

/// Whether the backend alert system is enabled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSystemStatus {
    pub alerts_enabled: bool,
}

/// Response of the alert toggle endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub alerts_enabled: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Generic `{success, error}` response of the test endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
