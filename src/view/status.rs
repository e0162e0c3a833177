//! Tank gauge and status details

use crate::models::StatusSnapshot;

/// Text shown instead of a battery reading when the sensor reports none
pub const BATTERY_PLACEHOLDER: &str = "-- V";

/// Fill level severity, evaluated from the most to the least severe tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityTier {
    Emergency,
    Critical,
    Low,
    Normal,
}

impl SeverityTier {
    pub fn from_fill(percentage: f64) -> Self {
        if percentage <= 5.0 {
            Self::Emergency
        } else if percentage <= 10.0 {
            Self::Critical
        } else if percentage <= 20.0 {
            Self::Low
        } else {
            Self::Normal
        }
    }

    /// CSS class applied to the tank container
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Critical => "critical",
            Self::Low => "low",
            Self::Normal => "normal",
        }
    }
}

/// Battery field of the status card
#[derive(Debug, Clone, PartialEq)]
pub enum BatteryDisplay {
    /// No reading; the low-battery flag keeps whatever state it had
    Placeholder,
    Reading { text: String, low: bool },
}

impl BatteryDisplay {
    pub fn from_voltage(voltage: Option<f64>, low_threshold: f64) -> Self {
        match voltage {
            Some(v) if v > 0.0 => BatteryDisplay::Reading {
                text: format!("{:.1} V", v),
                low: v < low_threshold,
            },
            _ => BatteryDisplay::Placeholder,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            BatteryDisplay::Placeholder => BATTERY_PLACEHOLDER,
            BatteryDisplay::Reading { text, .. } => text,
        }
    }
}

/// Everything the status card shows for one snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct StatusView {
    /// Height of the water column, 0..=100
    pub fill_height: f64,
    pub fill_text: String,
    pub tier: SeverityTier,
    pub water_level: String,
    pub gallons: String,
    pub distance: String,
    pub wifi_rssi: String,
    pub battery: BatteryDisplay,
    pub updated_at: String,
}

impl StatusView {
    /// Build the view. `updated_at` is the client's local render time.
    pub fn from_snapshot(
        snapshot: &StatusSnapshot,
        low_battery_volts: f64,
        updated_at: String,
    ) -> Self {
        let percentage = finite_or_zero(snapshot.fill_percentage);

        Self {
            fill_height: percentage.clamp(0.0, 100.0),
            fill_text: format!("{:.1}", percentage),
            tier: SeverityTier::from_fill(percentage),
            water_level: format!("{:.1} cm", finite_or_zero(snapshot.water_level_cm)),
            gallons: format!("{:.0} gal", finite_or_zero(snapshot.gallons)),
            distance: format!("{:.1} cm", finite_or_zero(snapshot.distance_cm)),
            wifi_rssi: format!("{} dBm", snapshot.wifi_rssi),
            battery: BatteryDisplay::from_voltage(snapshot.battery_voltage, low_battery_volts),
            updated_at,
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
