//! Drives the dashboard controller against a scripted backend

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future;

use well_tank_web_leptos::api::{ApiError, TankApi};
use well_tank_web_leptos::config::DashboardConfig;
use well_tank_web_leptos::controller::DashboardController;
use well_tank_web_leptos::models::{
    ActionResponse, AlertRecord, AlertSystemStatus, DeviceConfig, ForceReadingResponse,
    HistoryPoint, RawTimestamp, StatusSnapshot, ToggleResponse,
};
use well_tank_web_leptos::state::{run_poll_loop, PollHandle};
use well_tank_web_leptos::view::{ChartState, HistoryPanel, NoticeKind};

/// Backend answering each call from a queue; an empty queue answers 404
#[derive(Default)]
struct ScriptedBackend {
    status: RefCell<VecDeque<Result<StatusSnapshot, ApiError>>>,
    history: RefCell<VecDeque<Result<Vec<HistoryPoint>, ApiError>>>,
    alerts: RefCell<VecDeque<Result<Vec<AlertRecord>, ApiError>>>,
    alert_status: RefCell<VecDeque<Result<AlertSystemStatus, ApiError>>>,
    toggle: RefCell<VecDeque<Result<ToggleResponse, ApiError>>>,
    config: RefCell<VecDeque<Result<DeviceConfig, ApiError>>>,
    calls: RefCell<Vec<&'static str>>,
}

fn next<T>(queue: &RefCell<VecDeque<Result<T, ApiError>>>) -> Result<T, ApiError> {
    queue
        .borrow_mut()
        .pop_front()
        .unwrap_or(Err(ApiError::NotFound))
}

#[async_trait(?Send)]
impl TankApi for ScriptedBackend {
    async fn current_status(&self) -> Result<StatusSnapshot, ApiError> {
        self.calls.borrow_mut().push("current");
        next(&self.status)
    }

    async fn force_reading(&self) -> Result<ForceReadingResponse, ApiError> {
        self.calls.borrow_mut().push("force-reading");
        Err(ApiError::Network("unreachable".to_string()))
    }

    async fn history(&self) -> Result<Vec<HistoryPoint>, ApiError> {
        self.calls.borrow_mut().push("history");
        next(&self.history)
    }

    async fn alerts(&self, _cache_bust: i64) -> Result<Vec<AlertRecord>, ApiError> {
        self.calls.borrow_mut().push("alerts");
        next(&self.alerts)
    }

    async fn alert_system_status(&self) -> Result<AlertSystemStatus, ApiError> {
        self.calls.borrow_mut().push("alerts/status");
        next(&self.alert_status)
    }

    async fn toggle_alert_system(&self) -> Result<ToggleResponse, ApiError> {
        self.calls.borrow_mut().push("alerts/toggle");
        next(&self.toggle)
    }

    async fn device_config(&self) -> Result<DeviceConfig, ApiError> {
        self.calls.borrow_mut().push("config");
        next(&self.config)
    }

    async fn test_push_notification(&self) -> Result<ActionResponse, ApiError> {
        self.calls.borrow_mut().push("test-push-notification");
        Err(ApiError::NotFound)
    }

    async fn test_email(&self) -> Result<ActionResponse, ApiError> {
        self.calls.borrow_mut().push("test-email");
        Err(ApiError::NotFound)
    }
}

fn reading(fill: f64, battery: Option<f64>) -> StatusSnapshot {
    StatusSnapshot {
        fill_percentage: fill,
        water_level_cm: 90.0,
        gallons: 250.0,
        distance_cm: 30.0,
        wifi_rssi: -60,
        battery_voltage: battery,
        ..Default::default()
    }
}

fn point(seconds: i64, fill: f64) -> HistoryPoint {
    HistoryPoint {
        id: None,
        timestamp: Some(RawTimestamp::EpochSeconds {
            seconds: seconds as f64,
            nanoseconds: 0,
        }),
        fill_percentage: fill,
        gallons: fill * 5.0,
    }
}

fn controller(backend: ScriptedBackend) -> DashboardController<ScriptedBackend> {
    DashboardController::new(backend, DashboardConfig::default(), true)
}

#[tokio::test]
async fn startup_then_not_found_keeps_prior_status() {
    let backend = ScriptedBackend::default();
    backend
        .status
        .borrow_mut()
        .push_back(Ok(reading(18.0, Some(10.2))));
    backend
        .alert_status
        .borrow_mut()
        .push_back(Ok(AlertSystemStatus {
            alerts_enabled: true,
        }));
    let ctrl = controller(backend);

    ctrl.load_initial().await;
    let (tier, battery_low) = ctrl.read(|s| {
        (
            s.status.as_ref().map(|v| v.tier.css_class()),
            s.battery_low,
        )
    });
    assert_eq!(tier, Some("low"));
    assert!(battery_low);
    assert!(!ctrl.read(|s| s.is_busy()));

    // Queue is empty now, so the next poll sees 404
    ctrl.poll_tick().await;
    let fill = ctrl.read(|s| s.status.as_ref().map(|v| v.fill_text.clone()));
    assert_eq!(fill.as_deref(), Some("18.0"));
    assert!(ctrl.read(|s| s.notices.all().is_empty()));
}

#[tokio::test]
async fn toggle_failure_keeps_enabled_state() {
    let backend = ScriptedBackend::default();
    backend
        .alert_status
        .borrow_mut()
        .push_back(Ok(AlertSystemStatus {
            alerts_enabled: false,
        }));
    backend.toggle.borrow_mut().push_back(Err(ApiError::Http {
        status: 500,
        message: "Firestore write failed".to_string(),
    }));
    let ctrl = controller(backend);

    ctrl.load_alert_status().await;
    ctrl.toggle_alert_system().await;

    assert_eq!(ctrl.read(|s| s.alert_system.status_text()), "Disabled");
    let notice = ctrl.read(|s| s.notices.last().cloned()).expect("notice raised");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(
        notice.message,
        "Failed to toggle alert system: Firestore write failed"
    );
}

#[tokio::test]
async fn history_chart_is_chronological_and_list_newest_first() {
    let backend = ScriptedBackend::default();
    backend.history.borrow_mut().push_back(Ok(vec![
        point(1_700_007_200, 40.0),
        point(1_700_003_600, 45.0),
        point(1_700_000_000, 50.0),
    ]));
    let ctrl = controller(backend);

    ctrl.load_history().await;
    let panel = ctrl.read(|s| s.history.clone()).expect("history panel");
    let HistoryPanel::Loaded { rows, chart } = panel else {
        panic!("expected a loaded panel");
    };
    assert_eq!(rows[0].fill, "40.0%");
    assert_eq!(rows[2].fill, "50.0%");

    let ChartState::Ready(chart) = chart else {
        panic!("expected a chart");
    };
    assert_eq!(chart.model.values, vec![50.0, 45.0, 40.0]);
}

#[tokio::test]
async fn rebuilding_history_replaces_the_chart() {
    let backend = ScriptedBackend::default();
    backend
        .history
        .borrow_mut()
        .push_back(Ok(vec![point(1_700_000_000, 50.0)]));
    backend
        .history
        .borrow_mut()
        .push_back(Ok(vec![point(1_700_003_600, 48.0)]));
    let ctrl = controller(backend);

    ctrl.load_history().await;
    let first = ctrl.read(|s| s.chart_slot.current().map(|c| c.id));
    ctrl.close_history();
    ctrl.load_history().await;
    let second = ctrl.read(|s| s.chart_slot.current().map(|c| c.id));

    assert!(first.is_some());
    assert_ne!(first, second);
}

#[tokio::test]
async fn poll_loop_refreshes_until_stopped() {
    let backend = ScriptedBackend::default();
    for fill in [60.0, 59.5, 59.0, 58.5] {
        backend
            .status
            .borrow_mut()
            .push_back(Ok(reading(fill, Some(12.6))));
    }
    let ctrl = Rc::new(controller(backend));

    let (handle, stop) = PollHandle::new();
    let handle = Rc::new(RefCell::new(handle));
    let ticks = Rc::new(Cell::new(0));

    let loop_ctrl = ctrl.clone();
    let loop_handle = handle.clone();
    let loop_ticks = ticks.clone();
    run_poll_loop(
        Duration::from_secs(30),
        stop,
        |_| future::ready(()),
        move || {
            let ctrl = loop_ctrl.clone();
            let handle = loop_handle.clone();
            let ticks = loop_ticks.clone();
            async move {
                ctrl.poll_tick().await;
                ticks.set(ticks.get() + 1);
                if ticks.get() == 2 {
                    handle.borrow_mut().stop();
                }
            }
        },
    )
    .await;

    assert_eq!(ticks.get(), 2);
    let fill = ctrl.read(|s| s.status.as_ref().map(|v| v.fill_text.clone()));
    assert_eq!(fill.as_deref(), Some("59.5"));
}

#[tokio::test]
async fn offline_polls_do_not_reach_the_backend() {
    let ctrl = controller(ScriptedBackend::default());
    ctrl.init_online(false);

    ctrl.poll_tick().await;
    ctrl.poll_tick().await;

    assert!(ctrl.api().calls.borrow().is_empty());
    assert!(!ctrl.is_online());
}
