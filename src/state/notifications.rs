//! Notification permission handshake

use async_trait::async_trait;

use crate::view::NoticeKind;

pub const PERMISSION_DENIED: &str =
    "Notification permission denied. Please enable notifications in your browser settings.";
pub const PERMISSION_DISMISSED: &str = "Notification permission cancelled";
pub const INSECURE_CONTEXT: &str = "Push notifications require a secure context (HTTPS).";
pub const UNSUPPORTED: &str = "Notifications not supported in this browser";
pub const ENABLED: &str = "Notifications enabled";

/// State of the "enable notifications" checkbox
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationToggle {
    #[default]
    Disabled,
    /// Waiting for the browser permission prompt
    PendingPermission,
    Enabled,
}

impl NotificationToggle {
    pub fn checked(&self) -> bool {
        !matches!(self, NotificationToggle::Disabled)
    }

    /// Subscribe is only offered once permission was granted
    pub fn subscribe_available(&self) -> bool {
        matches!(self, NotificationToggle::Enabled)
    }
}

/// Answer of the browser permission prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionOutcome {
    Granted,
    Denied,
    /// Prompt closed without a choice
    Dismissed,
}

impl PermissionOutcome {
    /// Map the `Notification.permission` string
    pub fn from_permission(value: &str) -> Self {
        match value {
            "granted" => PermissionOutcome::Granted,
            "denied" => PermissionOutcome::Denied,
            _ => PermissionOutcome::Dismissed,
        }
    }
}

/// Resolve a finished request into the next toggle state and the notice to raise
pub fn resolve(
    outcome: Result<PermissionOutcome, String>,
) -> (NotificationToggle, NoticeKind, &'static str) {
    match outcome {
        Ok(PermissionOutcome::Granted) => {
            (NotificationToggle::Enabled, NoticeKind::Success, ENABLED)
        }
        Ok(PermissionOutcome::Denied) => (
            NotificationToggle::Disabled,
            NoticeKind::Error,
            PERMISSION_DENIED,
        ),
        Ok(PermissionOutcome::Dismissed) => (
            NotificationToggle::Disabled,
            NoticeKind::Warning,
            PERMISSION_DISMISSED,
        ),
        Err(e) => {
            log::error!("Notification permission request failed: {}", e);
            (NotificationToggle::Disabled, NoticeKind::Error, INSECURE_CONTEXT)
        }
    }
}

/// Source of notification permission
#[async_trait(?Send)]
pub trait PermissionPrompt {
    /// Whether the Notification API exists at all
    fn is_supported(&self) -> bool;

    async fn request(&self) -> Result<PermissionOutcome, String>;
}

/// Prompt backed by `Notification.requestPermission()`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPermissionPrompt;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl PermissionPrompt for BrowserPermissionPrompt {
    fn is_supported(&self) -> bool {
        web_sys::window()
            .map(|w| js_sys::Reflect::has(&w, &"Notification".into()).unwrap_or(false))
            .unwrap_or(false)
    }

    async fn request(&self) -> Result<PermissionOutcome, String> {
        use wasm_bindgen_futures::JsFuture;

        let promise = web_sys::Notification::request_permission()
            .map_err(|e| format!("{:?}", e))?;
        let value = JsFuture::from(promise)
            .await
            .map_err(|e| format!("{:?}", e))?;

        Ok(PermissionOutcome::from_permission(
            &value.as_string().unwrap_or_default(),
        ))
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl PermissionPrompt for BrowserPermissionPrompt {
    fn is_supported(&self) -> bool {
        false
    }

    async fn request(&self) -> Result<PermissionOutcome, String> {
        Err("Notification API is only available in the browser".to_string())
    }
}
