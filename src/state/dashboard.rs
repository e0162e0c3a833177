//! UI state owned by the dashboard controller

use crate::models::StatusSnapshot;
use crate::state::notifications::NotificationToggle;
use crate::view::{
    AlertSystemDisplay, AlertView, BatteryDisplay, ChartSlot, HistoryPanel, NoticeBoard,
    SettingsPanel, StatusView,
};

/// Everything the dashboard and settings pages render
#[derive(Debug)]
pub struct DashboardState {
    /// None until the first successful status fetch
    pub status: Option<StatusView>,
    /// Sticky: only a real battery reading changes it
    pub battery_low: bool,
    pub online: bool,

    pub history: Option<HistoryPanel>,
    pub chart_slot: ChartSlot,
    pub history_open: bool,

    /// None until the first successful alerts fetch
    pub recent_alerts: Option<Vec<AlertView>>,
    pub all_alerts: Vec<AlertView>,
    pub alerts_open: bool,

    pub settings: SettingsPanel,
    pub alert_system: AlertSystemDisplay,
    pub notifications: NotificationToggle,

    pub notices: NoticeBoard,
    busy: u32,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            status: None,
            battery_low: false,
            online: true,
            history: None,
            chart_slot: ChartSlot::default(),
            history_open: false,
            recent_alerts: None,
            all_alerts: Vec::new(),
            alerts_open: false,
            settings: SettingsPanel::default(),
            alert_system: AlertSystemDisplay::default(),
            notifications: NotificationToggle::default(),
            notices: NoticeBoard::default(),
            busy: 0,
        }
    }
}

impl DashboardState {
    /// Replace the status view with one rendered from `snapshot`
    pub fn apply_snapshot(
        &mut self,
        snapshot: &StatusSnapshot,
        low_battery_volts: f64,
        updated_at: String,
    ) {
        let view = StatusView::from_snapshot(snapshot, low_battery_volts, updated_at);
        if let BatteryDisplay::Reading { low, .. } = &view.battery {
            self.battery_low = *low;
        }
        self.status = Some(view);
    }

    pub fn begin_busy(&mut self) {
        self.busy += 1;
    }

    pub fn end_busy(&mut self) {
        self.busy = self.busy.saturating_sub(1);
    }

    /// Whether the loading overlay is shown
    pub fn is_busy(&self) -> bool {
        self.busy > 0
    }
}
