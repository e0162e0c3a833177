//! Pure view models computed from fetched data

pub mod alerts;
pub mod history;
pub mod notice;
pub mod settings;
pub mod status;

pub use alerts::{render_alerts, AlertView, LevelTrend, NO_ALERTS, NO_RECENT_ALERTS};
pub use history::{ChartSlot, ChartState, HistoryChart, HistoryPanel, HistoryRow, NO_HISTORY};
pub use notice::{Notice, NoticeBoard, NoticeKind};
pub use settings::{AlertSystemDisplay, SettingsPanel};
pub use status::{BatteryDisplay, SeverityTier, StatusView};
