//! Alert feed rendering

use crate::models::timestamp::format_date_time;
use crate::models::{AlertKind, AlertRecord};

pub const NO_RECENT_ALERTS: &str = "No recent alerts";
pub const NO_ALERTS: &str = "No alerts found";

/// Direction of the level change between the two readings of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelTrend {
    Increase,
    Decrease,
}

impl LevelTrend {
    pub fn of(alert: &AlertRecord) -> Self {
        if alert.is_increase() {
            Self::Increase
        } else {
            Self::Decrease
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Self::Increase => "📈",
            Self::Decrease => "📉",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Increase => "Water level increased",
            Self::Decrease => "Water level decreased",
        }
    }
}

impl AlertKind {
    pub fn icon(&self, trend: LevelTrend) -> &'static str {
        match self {
            AlertKind::EmergencyLevel => "🚨",
            AlertKind::CriticalLevel => "⚠️",
            AlertKind::LowLevel => "📉",
            AlertKind::RapidDrop => "⬇️",
            AlertKind::Predictive => "🔮",
            AlertKind::LowBattery => "🔋",
            AlertKind::Change => trend.icon(),
        }
    }

    pub fn title(&self, trend: LevelTrend) -> &'static str {
        match self {
            AlertKind::EmergencyLevel => "EMERGENCY - Tank Nearly Empty",
            AlertKind::CriticalLevel => "CRITICAL - Very Low Water Level",
            AlertKind::LowLevel => "Low Water Level Warning",
            AlertKind::RapidDrop => "Rapid Water Level Drop",
            AlertKind::Predictive => "Predictive Low Water Alert",
            AlertKind::LowBattery => "Low Battery Alert",
            AlertKind::Change => trend.title(),
        }
    }

    pub fn details(&self, alert: &AlertRecord) -> String {
        match self {
            AlertKind::Predictive => format!(
                "Estimated {:.1} hours remaining",
                alert.hours_remaining.unwrap_or(0.0)
            ),
            AlertKind::LowBattery => format!(
                "Battery voltage: {:.1}V",
                alert.battery_voltage.unwrap_or(0.0)
            ),
            _ => format!(
                "From {}% to {}%",
                one_decimal(alert.previous_level),
                one_decimal(alert.current_level)
            ),
        }
    }
}

/// Formats a value with one decimal, or "0" if it is absent or zero
pub(crate) fn one_decimal(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 => format!("{:.1}", v),
        _ => "0".to_string(),
    }
}

/// Display form of one alert record
#[derive(Debug, Clone, PartialEq)]
pub struct AlertView {
    pub kind: AlertKind,
    pub severity: String,
    pub icon: &'static str,
    pub title: &'static str,
    pub time: String,
    pub details: String,
    pub usage: Option<String>,
    pub change: String,
    pub trend: LevelTrend,
}

impl AlertView {
    pub fn from_record(alert: &AlertRecord) -> Self {
        let kind = alert.kind();
        let trend = LevelTrend::of(alert);

        let change = if kind.reports_gallons() {
            match alert.current_gallons {
                Some(g) if g != 0.0 => format!("{:.0} gal", g),
                _ => "0 gal".to_string(),
            }
        } else {
            format!("{}%", one_decimal(alert.percent_change))
        };

        let usage = alert
            .usage_rate
            .filter(|rate| *rate > 0.0)
            .map(|rate| format!("Usage rate: {:.2} gal/hr", rate));

        Self {
            kind,
            severity: alert
                .severity
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "normal".to_string()),
            icon: kind.icon(trend),
            title: kind.title(trend),
            time: format_date_time(alert.timestamp.as_ref()),
            details: kind.details(alert),
            usage,
            change,
            trend,
        }
    }
}

/// Render up to `limit` alerts, newest first as fetched
pub fn render_alerts(alerts: &[AlertRecord], limit: Option<usize>) -> Vec<AlertView> {
    alerts
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(AlertView::from_record)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawTimestamp;

    fn alert(alert_type: Option<&str>) -> AlertRecord {
        AlertRecord {
            alert_type: alert_type.map(str::to_string),
            severity: Some("warning".to_string()),
            timestamp: Some(RawTimestamp::EpochSeconds {
                seconds: 1_700_000_000.0,
                nanoseconds: 0,
            }),
            previous_level: Some(30.0),
            current_level: Some(24.5),
            percent_change: Some(-5.5),
            current_gallons: Some(122.4),
            ..Default::default()
        }
    }

    #[test]
    fn predictive_shows_hours_and_gallons() {
        let mut record = alert(Some("predictive"));
        record.hours_remaining = Some(2.5);
        let view = AlertView::from_record(&record);
        assert!(view.details.contains("2.5"));
        assert!(view.details.contains("hours"));
        assert_eq!(view.change, "122 gal");
        assert_eq!(view.icon, "🔮");
        assert_eq!(view.title, "Predictive Low Water Alert");
    }

    #[test]
    fn low_battery_shows_voltage() {
        let mut record = alert(Some("low_battery"));
        record.battery_voltage = Some(10.8);
        let view = AlertView::from_record(&record);
        assert_eq!(view.details, "Battery voltage: 10.8V");
        assert_eq!(view.change, "122 gal");
        assert_eq!(view.icon, "🔋");
    }

    #[test]
    fn level_alerts_show_range_and_percent() {
        let view = AlertView::from_record(&alert(Some("emergency_level")));
        assert_eq!(view.details, "From 30.0% to 24.5%");
        assert_eq!(view.change, "-5.5%");
        assert_eq!(view.title, "EMERGENCY - Tank Nearly Empty");
        assert_eq!(view.severity, "warning");
    }

    #[test]
    fn unknown_type_falls_back_to_trend() {
        let view = AlertView::from_record(&alert(Some("mystery")));
        assert_eq!(view.kind, AlertKind::Change);
        assert_eq!(view.trend, LevelTrend::Decrease);
        assert_eq!(view.icon, "📉");
        assert_eq!(view.title, "Water level decreased");

        let mut record = alert(None);
        record.previous_level = Some(20.0);
        record.current_level = Some(35.0);
        let view = AlertView::from_record(&record);
        assert_eq!(view.trend, LevelTrend::Increase);
        assert_eq!(view.icon, "📈");
        assert_eq!(view.title, "Water level increased");
        assert_eq!(view.trend.css_class(), "increase");
    }

    #[test]
    fn missing_levels_render_as_zero() {
        let record = AlertRecord::default();
        let view = AlertView::from_record(&record);
        assert_eq!(view.details, "From 0% to 0%");
        assert_eq!(view.change, "0%");
        assert_eq!(view.time, "Unknown");
        assert_eq!(view.severity, "normal");
    }

    #[test]
    fn usage_rate_appended_for_any_type() {
        for t in [Some("predictive"), Some("rapid_drop"), None] {
            let mut record = alert(t);
            record.usage_rate = Some(4.256);
            let view = AlertView::from_record(&record);
            assert_eq!(view.usage.as_deref(), Some("Usage rate: 4.26 gal/hr"));
        }
        assert_eq!(AlertView::from_record(&alert(None)).usage, None);
    }

    #[test]
    fn render_respects_limit() {
        let alerts: Vec<AlertRecord> = (0..8).map(|_| alert(None)).collect();
        assert_eq!(render_alerts(&alerts, Some(5)).len(), 5);
        assert_eq!(render_alerts(&alerts, None).len(), 8);
        assert!(render_alerts(&[], Some(5)).is_empty());
    }
}
