//! Runtime configuration read from `window.ENV`

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Dashboard settings; every field has a default so a partial `window.ENV` works
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_api_base", alias = "API_URL")]
    pub api_base: String,
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_recent_alert_limit")]
    pub recent_alert_limit: usize,
    #[serde(default = "default_notice_ttl_ms")]
    pub notice_ttl_ms: u32,
    #[serde(default = "default_chart_max_ticks")]
    pub chart_max_ticks: usize,
    #[serde(default = "default_low_battery_volts")]
    pub low_battery_volts: f64,
    #[serde(default = "default_service_worker_path")]
    pub service_worker_path: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            poll_interval_secs: default_poll_interval_secs(),
            recent_alert_limit: default_recent_alert_limit(),
            notice_ttl_ms: default_notice_ttl_ms(),
            chart_max_ticks: default_chart_max_ticks(),
            low_battery_volts: default_low_battery_volts(),
            service_worker_path: default_service_worker_path(),
        }
    }
}

impl DashboardConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }

    /// Parse a JSON document, falling back to defaults for missing keys
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load from `window.ENV` if the page defines it
    pub fn from_env() -> Self {
        match read_window_env() {
            Some(json) => match Self::from_json(&json) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Ignoring malformed window.ENV: {}", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}

fn read_window_env() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsValue;

        let window = web_sys::window()?;
        let env = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")).ok()?;
        if env.is_undefined() || env.is_null() {
            return None;
        }
        js_sys::JSON::stringify(&env).ok().map(String::from)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn default_api_base() -> String {
    "/api".to_string()
}

fn default_poll_interval_secs() -> u64 {
    30
}

fn default_recent_alert_limit() -> usize {
    5
}

fn default_notice_ttl_ms() -> u32 {
    5000
}

fn default_chart_max_ticks() -> usize {
    8
}

fn default_low_battery_volts() -> f64 {
    11.0
}

fn default_service_worker_path() -> String {
    "/sw.js".to_string()
}
