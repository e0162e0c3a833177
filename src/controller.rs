//! Dashboard controller: owns UI state and drives every backend call

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Local, Utc};

use crate::api::{ApiError, TankApi};
use crate::config::DashboardConfig;
use crate::models::{ActionResponse, StatusSnapshot};
use crate::state::notifications::{self, NotificationToggle, PermissionPrompt};
use crate::state::DashboardState;
use crate::view::{render_alerts, AlertSystemDisplay, HistoryPanel, NoticeKind};

type Listener = Rc<dyn Fn()>;
type NoticeHook = Rc<dyn Fn(u64)>;

/// Single owner of dashboard state.
///
/// State is borrowed only between awaits. Listeners run after each change
/// with no borrow held, so they may read the state back.
pub struct DashboardController<A: TankApi> {
    api: A,
    config: DashboardConfig,
    charts_supported: bool,
    state: RefCell<DashboardState>,
    listener: RefCell<Option<Listener>>,
    notice_hook: RefCell<Option<NoticeHook>>,
}

impl<A: TankApi> DashboardController<A> {
    pub fn new(api: A, config: DashboardConfig, charts_supported: bool) -> Self {
        Self {
            api,
            config,
            charts_supported,
            state: RefCell::new(DashboardState::default()),
            listener: RefCell::new(None),
            notice_hook: RefCell::new(None),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Register the change listener, replacing any previous one
    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        *self.listener.borrow_mut() = Some(Rc::new(listener));
    }

    /// Called with the id of every notice raised, e.g. to schedule its expiry
    pub fn on_notice(&self, hook: impl Fn(u64) + 'static) {
        *self.notice_hook.borrow_mut() = Some(Rc::new(hook));
    }

    pub fn read<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        f(&self.state.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        let result = f(&mut self.state.borrow_mut());
        self.changed();
        result
    }

    fn changed(&self) {
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener();
        }
    }

    fn notify(&self, kind: NoticeKind, message: impl Into<String>) {
        let message = message.into();
        let id = self.update(|s| s.notices.push(kind, message));
        let hook = self.notice_hook.borrow().clone();
        if let Some(hook) = hook {
            hook(id);
        }
    }

    pub fn dismiss_notice(&self, id: u64) {
        if self.state.borrow_mut().notices.dismiss(id) {
            self.changed();
        }
    }

    fn apply_snapshot(&self, snapshot: &StatusSnapshot) {
        let updated_at = Local::now().format("%H:%M:%S").to_string();
        let low_battery_volts = self.config.low_battery_volts;
        self.update(|s| s.apply_snapshot(snapshot, low_battery_volts, updated_at));
    }

    /// Startup sequence: status, recent alerts and settings
    pub async fn load_initial(&self) {
        self.update(|s| s.begin_busy());
        self.refresh().await;
        self.load_recent_alerts().await;
        self.load_config().await;
        self.load_alert_status().await;
        self.update(|s| s.end_busy());
    }

    /// Fetch the current status. A 404 means no reading yet and is silent.
    pub async fn refresh(&self) {
        match self.api.current_status().await {
            Ok(snapshot) => self.apply_snapshot(&snapshot),
            Err(ApiError::NotFound) => {
                log::info!("No status reading available yet");
            }
            Err(e) => {
                log::error!("Failed to refresh data: {}", e);
                self.notify(NoticeKind::Error, "Failed to refresh data");
            }
        }
    }

    /// One scheduled poll; skipped while offline
    pub async fn poll_tick(&self) {
        if self.is_online() {
            self.refresh().await;
        } else {
            log::debug!("Offline, skipping poll");
        }
    }

    /// Seed connectivity from `navigator.onLine` without raising notices
    pub fn init_online(&self, online: bool) {
        self.update(|s| s.online = online);
    }

    pub fn is_online(&self) -> bool {
        self.state.borrow().online
    }

    /// Connectivity change from the browser
    pub async fn set_online(&self, online: bool) {
        self.update(|s| s.online = online);
        if online {
            log::info!("Connection restored");
            self.notify(NoticeKind::Success, "Connection restored");
            self.refresh().await;
        } else {
            log::warn!("Connection lost");
            self.notify(NoticeKind::Warning, "Connection lost");
        }
    }

    /// Ask the device for a fresh measurement
    pub async fn force_reading(&self) {
        self.update(|s| s.begin_busy());
        match self.api.force_reading().await {
            Ok(response) => match (response.success, response.data) {
                (true, Some(snapshot)) => {
                    self.apply_snapshot(&snapshot);
                    self.notify(NoticeKind::Success, "New reading taken successfully");
                }
                _ => {
                    let error = response
                        .error
                        .unwrap_or_else(|| "Unknown error".to_string());
                    self.notify(
                        NoticeKind::Error,
                        format!("Failed to take new reading: {}", error),
                    );
                }
            },
            Err(e) => {
                log::error!("Force reading failed: {}", e);
                self.notify(
                    NoticeKind::Error,
                    format!("Failed to take new reading: {}", e.detail()),
                );
            }
        }
        self.update(|s| s.end_busy());
    }

    /// Fetch history and open the history modal
    pub async fn load_history(&self) {
        self.update(|s| s.begin_busy());
        match self.api.history().await {
            Ok(points) => {
                let charts_supported = self.charts_supported;
                let max_ticks = self.config.chart_max_ticks;
                self.update(|s| {
                    let panel = HistoryPanel::build(
                        &points,
                        charts_supported,
                        &mut s.chart_slot,
                        max_ticks,
                        Utc::now(),
                    );
                    s.history = Some(panel);
                    s.history_open = true;
                });
            }
            Err(e) => {
                log::error!("Failed to load history: {}", e);
                self.notify(NoticeKind::Error, "Failed to load history");
            }
        }
        self.update(|s| s.end_busy());
    }

    pub fn close_history(&self) {
        self.update(|s| s.history_open = false);
    }

    /// Recent alerts card; failures are only logged
    pub async fn load_recent_alerts(&self) {
        match self.api.alerts(Utc::now().timestamp_millis()).await {
            Ok(alerts) => {
                let views = render_alerts(&alerts, Some(self.config.recent_alert_limit));
                self.update(|s| s.recent_alerts = Some(views));
            }
            Err(e) => log::warn!("Failed to load recent alerts: {}", e),
        }
    }

    /// Fetch every alert and open the alerts modal
    pub async fn show_all_alerts(&self) {
        self.update(|s| s.begin_busy());
        match self.api.alerts(Utc::now().timestamp_millis()).await {
            Ok(alerts) => {
                let views = render_alerts(&alerts, None);
                self.update(|s| {
                    s.all_alerts = views;
                    s.alerts_open = true;
                });
            }
            Err(e) => {
                log::error!("Failed to load alerts: {}", e);
                self.notify(
                    NoticeKind::Error,
                    format!("Failed to load alerts: {}", e.detail()),
                );
            }
        }
        self.update(|s| s.end_busy());
    }

    pub fn close_alerts(&self) {
        self.update(|s| s.alerts_open = false);
    }

    /// Device configuration; failures are only logged
    pub async fn load_config(&self) {
        match self.api.device_config().await {
            Ok(config) => self.update(|s| s.settings.apply_config(&config)),
            Err(e) => log::warn!("Failed to load device config: {}", e),
        }
    }

    pub async fn load_alert_status(&self) {
        match self.api.alert_system_status().await {
            Ok(status) => {
                let display = AlertSystemDisplay::from_enabled(status.alerts_enabled);
                self.update(|s| s.alert_system = display);
            }
            Err(e) => {
                log::error!("Failed to load alert system status: {}", e);
                self.update(|s| s.alert_system = AlertSystemDisplay::Error);
            }
        }
    }

    /// Flip alert-system enablement on the backend
    pub async fn toggle_alert_system(&self) {
        self.update(|s| s.begin_busy());
        match self.api.toggle_alert_system().await {
            Ok(response) if response.success => {
                let current = self.read(|s| s.alert_system == AlertSystemDisplay::Enabled);
                let enabled = response.alerts_enabled.unwrap_or(!current);
                self.update(|s| s.alert_system = AlertSystemDisplay::from_enabled(enabled));
                let message = if enabled {
                    "Alert system enabled"
                } else {
                    "Alert system disabled"
                };
                self.notify(NoticeKind::Success, message);
            }
            Ok(response) => {
                let error = response
                    .error
                    .unwrap_or_else(|| "Unknown error".to_string());
                self.notify(
                    NoticeKind::Error,
                    format!("Failed to toggle alert system: {}", error),
                );
            }
            Err(e) => {
                log::error!("Toggle alert system failed: {}", e);
                self.notify(
                    NoticeKind::Error,
                    format!("Failed to toggle alert system: {}", e.detail()),
                );
            }
        }
        self.update(|s| s.end_busy());
    }

    /// Checkbox handler for browser notifications
    pub async fn set_notifications_enabled(&self, checked: bool, prompt: &dyn PermissionPrompt) {
        if !checked {
            self.update(|s| s.notifications = NotificationToggle::Disabled);
            return;
        }

        if !prompt.is_supported() {
            self.update(|s| s.notifications = NotificationToggle::Disabled);
            self.notify(NoticeKind::Error, notifications::UNSUPPORTED);
            return;
        }

        self.update(|s| s.notifications = NotificationToggle::PendingPermission);
        let (toggle, kind, message) = notifications::resolve(prompt.request().await);
        self.update(|s| s.notifications = toggle);
        self.notify(kind, message);
    }

    /// Local confirmation only; the push backend is reached through the service worker
    pub fn subscribe_to_notifications(&self) {
        if self.read(|s| s.notifications.subscribe_available()) {
            self.notify(NoticeKind::Success, "Subscribed to alerts");
        } else {
            log::warn!("Subscribe requested without notification permission");
        }
    }

    pub async fn send_test_push(&self) {
        self.update(|s| s.begin_busy());
        let result = self.api.test_push_notification().await;
        self.report_test(
            result,
            "Test push notification sent successfully!",
            "push notification",
        );
        self.update(|s| s.end_busy());
    }

    pub async fn send_test_email(&self) {
        self.update(|s| s.begin_busy());
        let result = self.api.test_email().await;
        self.report_test(
            result,
            "Test email sent successfully! Check your inbox.",
            "email",
        );
        self.update(|s| s.end_busy());
    }

    fn report_test(
        &self,
        result: Result<ActionResponse, ApiError>,
        success: &str,
        what: &str,
    ) {
        let error = match result {
            Ok(response) if response.success => {
                self.notify(NoticeKind::Success, success);
                return;
            }
            Ok(response) => response
                .error
                .unwrap_or_else(|| "Unknown error".to_string()),
            Err(e) => {
                log::error!("Test {} failed: {}", what, e);
                e.detail()
            }
        };
        self.notify(
            NoticeKind::Error,
            format!("Failed to send test {}: {}", what, error),
        );
    }
}
