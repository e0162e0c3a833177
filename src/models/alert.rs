use serde::{Deserialize, Serialize};

use super::RawTimestamp;

/// Alert record stored by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub alert_type: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub timestamp: Option<RawTimestamp>,
    #[serde(default)]
    pub previous_level: Option<f64>,
    #[serde(default)]
    pub current_level: Option<f64>,
    #[serde(default)]
    pub percent_change: Option<f64>,
    #[serde(default)]
    pub hours_remaining: Option<f64>,
    #[serde(default)]
    pub battery_voltage: Option<f64>,
    #[serde(default)]
    pub current_gallons: Option<f64>,
    #[serde(default)]
    pub previous_gallons: Option<f64>,
    #[serde(default)]
    pub usage_rate: Option<f64>,
    #[serde(default)]
    pub device_id: Option<String>,
}

impl AlertRecord {
    pub fn kind(&self) -> AlertKind {
        AlertKind::from_type(self.alert_type.as_deref())
    }

    /// True when the level went up between the two readings
    pub fn is_increase(&self) -> bool {
        self.current_level.unwrap_or(0.0) > self.previous_level.unwrap_or(0.0)
    }
}

/// Reason an alert was raised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    EmergencyLevel,
    CriticalLevel,
    LowLevel,
    RapidDrop,
    Predictive,
    LowBattery,
    /// Plain level change, also used for unrecognized types
    Change,
}

impl AlertKind {
    /// Map the wire `type` string; unknown or missing types are plain changes
    pub fn from_type(value: Option<&str>) -> Self {
        match value {
            Some("emergency_level") => Self::EmergencyLevel,
            Some("critical_level") => Self::CriticalLevel,
            Some("low_level") => Self::LowLevel,
            Some("rapid_drop") => Self::RapidDrop,
            Some("predictive") => Self::Predictive,
            Some("low_battery") => Self::LowBattery,
            _ => Self::Change,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmergencyLevel => "emergency_level",
            Self::CriticalLevel => "critical_level",
            Self::LowLevel => "low_level",
            Self::RapidDrop => "rapid_drop",
            Self::Predictive => "predictive",
            Self::LowBattery => "low_battery",
            Self::Change => "change",
        }
    }

    /// Predictive and battery alerts report gallons instead of a percent change
    pub fn reports_gallons(&self) -> bool {
        matches!(self, Self::Predictive | Self::LowBattery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_types() {
        for kind in [
            AlertKind::EmergencyLevel,
            AlertKind::CriticalLevel,
            AlertKind::LowLevel,
            AlertKind::RapidDrop,
            AlertKind::Predictive,
            AlertKind::LowBattery,
        ] {
            assert_eq!(AlertKind::from_type(Some(kind.as_str())), kind);
        }
    }

    #[test]
    fn unknown_and_missing_types_are_changes() {
        assert_eq!(AlertKind::from_type(None), AlertKind::Change);
        assert_eq!(AlertKind::from_type(Some("flood")), AlertKind::Change);
        assert_eq!(AlertKind::from_type(Some("change")), AlertKind::Change);
    }

    #[test]
    fn parses_type_field() {
        let json = r#"{
            "type": "predictive",
            "severity": "warning",
            "timestamp": {"seconds": 1700000000},
            "previous_level": 30.0,
            "current_level": 25.0,
            "percent_change": -5.0,
            "hours_remaining": 2.5,
            "current_gallons": 125
        }"#;
        let alert: AlertRecord = serde_json::from_str(json).unwrap();
        assert_eq!(alert.kind(), AlertKind::Predictive);
        assert_eq!(alert.hours_remaining, Some(2.5));
        assert!(!alert.is_increase());
    }

    #[test]
    fn legacy_change_record_without_type() {
        let json = r#"{"previous_level": 40.0, "current_level": 55.0, "percent_change": 15.0}"#;
        let alert: AlertRecord = serde_json::from_str(json).unwrap();
        assert_eq!(alert.kind(), AlertKind::Change);
        assert!(alert.is_increase());
    }
}
