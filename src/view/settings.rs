//! Settings surface: device configuration and alert system state

use crate::models::{DeviceConfig, EnhancedAlerts, UsageStats};

pub const USAGE_CALCULATING: &str = "Calculating...";
pub const DAYS_UNKNOWN: &str = "N/A";

/// Static configuration fields
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFields {
    pub device_ip: String,
    pub alert_threshold: String,
    pub alert_cooldown: String,
    pub firebase_status: &'static str,
}

impl ConfigFields {
    pub fn from_config(config: &DeviceConfig) -> Self {
        Self {
            device_ip: config
                .esp32_ip
                .clone()
                .filter(|ip| !ip.is_empty())
                .unwrap_or_else(|| "--".to_string()),
            alert_threshold: format!("{}%", config.alert_threshold.unwrap_or(0.0)),
            alert_cooldown: format!("{} min", config.alert_cooldown.unwrap_or(0)),
            firebase_status: if config.firebase_connected {
                "Connected"
            } else {
                "Disconnected"
            },
        }
    }
}

/// Enhanced alert threshold section
#[derive(Debug, Clone, PartialEq)]
pub struct EnhancedSection {
    pub low_level: String,
    pub critical_level: String,
    pub emergency_level: String,
    pub rapid_drop: String,
    pub email_alerts: &'static str,
}

impl EnhancedSection {
    pub fn from_thresholds(thresholds: &EnhancedAlerts) -> Self {
        Self {
            low_level: format!("{}%", thresholds.low_level_threshold),
            critical_level: format!("{}%", thresholds.critical_level_threshold),
            emergency_level: format!("{}%", thresholds.emergency_level_threshold),
            rapid_drop: format!("{}%", thresholds.rapid_drop_threshold),
            email_alerts: if thresholds.email_alerts_enabled {
                "Enabled"
            } else {
                "Disabled"
            },
        }
    }
}

/// Usage statistics section
#[derive(Debug, Clone, PartialEq)]
pub struct UsageSection {
    pub usage_rate: String,
    pub days_remaining: String,
}

impl UsageSection {
    pub fn from_stats(stats: &UsageStats) -> Self {
        Self {
            usage_rate: match stats.current_usage_rate_gph {
                Some(rate) if rate > 0.0 => format!("{:.2} gal/hr", rate),
                _ => USAGE_CALCULATING.to_string(),
            },
            days_remaining: match stats.days_remaining {
                Some(days) if days > 0.0 => format!("{:.1} days", days),
                _ => DAYS_UNKNOWN.to_string(),
            },
        }
    }
}

/// The whole settings surface. Optional sections appear on the first load
/// that carries them and are only ever overwritten afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPanel {
    pub fields: Option<ConfigFields>,
    pub enhanced: Option<EnhancedSection>,
    pub usage: Option<UsageSection>,
}

impl SettingsPanel {
    pub fn apply_config(&mut self, config: &DeviceConfig) {
        self.fields = Some(ConfigFields::from_config(config));

        if let Some(thresholds) = &config.enhanced_alerts {
            let section = EnhancedSection::from_thresholds(thresholds);
            match &mut self.enhanced {
                Some(existing) => *existing = section,
                None => {
                    log::debug!("Creating enhanced alert section");
                    self.enhanced = Some(section);
                }
            }
        }

        if let Some(stats) = &config.usage_stats {
            let section = UsageSection::from_stats(stats);
            match &mut self.usage {
                Some(existing) => *existing = section,
                None => {
                    log::debug!("Creating usage statistics section");
                    self.usage = Some(section);
                }
            }
        }
    }
}

/// Alert system status display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertSystemDisplay {
    /// Not fetched yet
    #[default]
    Loading,
    Enabled,
    Disabled,
    /// Status fetch failed; the toggle stays disabled until a fetch succeeds
    Error,
}

impl AlertSystemDisplay {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }

    pub fn status_text(&self) -> &'static str {
        match self {
            Self::Loading => "--",
            Self::Enabled => "Enabled",
            Self::Disabled => "Disabled",
            Self::Error => "Error",
        }
    }

    pub fn status_class(&self) -> &'static str {
        match self {
            Self::Enabled => "status-value enabled",
            _ => "status-value disabled",
        }
    }

    /// Label of the toggle button: the action a click performs
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Self::Loading => "Loading",
            Self::Enabled => "Disable",
            Self::Disabled => "Enable",
            Self::Error => "Error",
        }
    }

    pub fn toggle_disabled(&self) -> bool {
        matches!(self, Self::Loading | Self::Error)
    }
}
