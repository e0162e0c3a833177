use serde::{Deserialize, Serialize};

use super::number::{rounded_or_zero, zero_if_null};

/// Latest tank status reported by the sensor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    #[serde(default, deserialize_with = "zero_if_null")]
    pub fill_percentage: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub water_level_cm: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub gallons: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub distance_cm: f64,
    #[serde(default, deserialize_with = "rounded_or_zero")]
    pub wifi_rssi: i32,
    #[serde(default)]
    pub battery_voltage: Option<f64>,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub tank_capacity: Option<f64>,
    /// Device uptime stamp; the dashboard stamps renders with its own clock
    #[serde(default)]
    pub timestamp: Option<serde_json::Value>,
}

/// Response of the force-reading endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForceReadingResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<StatusSnapshot>,
    #[serde(default)]
    pub error: Option<String>,
}
