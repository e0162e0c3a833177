pub mod alert;
pub mod history;
mod number;
pub mod settings;
pub mod status;
pub mod timestamp;

pub use alert::{AlertKind, AlertRecord};
pub use history::HistoryPoint;
pub use settings::{
    ActionResponse, AlertSystemStatus, DeviceConfig, EnhancedAlerts, ToggleResponse, UsageStats,
};
pub use status::{ForceReadingResponse, StatusSnapshot};
pub use timestamp::RawTimestamp;
