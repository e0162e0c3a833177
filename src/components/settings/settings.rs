use leptos::*;

use crate::state::{use_dashboard, BrowserPermissionPrompt, NotificationToggle};
use crate::view::settings::{EnhancedSection, UsageSection};

use super::setting_row::{ActionButton, SettingRow};

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    let ctx = use_dashboard();

    let refresh = move |_| {
        ctx.run(|c| async move {
            c.load_config().await;
            c.load_alert_status().await;
        });
    };

    view! {
        <div class="settings-page">
            <div class="settings-header">
                <h2>"Device Settings"</h2>
                <button class="refresh-button" on:click=refresh>
                    "Refresh"
                </button>
            </div>

            <div class="settings-grid">
                <DeviceConfigCard />
                <AlertSystemCard />
                <NotificationsCard />
            </div>
        </div>
    }
}

#[component]
fn DeviceConfigCard() -> impl IntoView {
    let ctx = use_dashboard();
    let fields = move || ctx.with(|s| s.settings.fields.clone());
    let enhanced = move || ctx.with(|s| s.settings.enhanced.clone());
    let usage = move || ctx.with(|s| s.settings.usage.clone());

    view! {
        <div class="settings-card">
            <div class="settings-section">
                <h4>"Device Configuration"</h4>
                {move || match fields() {
                    Some(fields) => view! {
                        <SettingRow label="Device IP" value=fields.device_ip />
                        <SettingRow label="Alert Threshold" value=fields.alert_threshold />
                        <SettingRow label="Alert Cooldown" value=fields.alert_cooldown />
                        <SettingRow label="Firebase" value=fields.firebase_status />
                    }
                    .into_view(),
                    None => view! { <div class="loading">"Loading settings..."</div> }.into_view(),
                }}
            </div>
            {move || enhanced().map(|section| view! { <EnhancedThresholds section=section /> })}
            {move || usage().map(|section| view! { <UsageStatistics section=section /> })}
        </div>
    }
}

#[component]
fn EnhancedThresholds(section: EnhancedSection) -> impl IntoView {
    view! {
        <div class="settings-section">
            <h4>"Alert Thresholds"</h4>
            <SettingRow label="Low Level" value=section.low_level />
            <SettingRow label="Critical Level" value=section.critical_level />
            <SettingRow label="Emergency Level" value=section.emergency_level />
            <SettingRow label="Rapid Drop" value=section.rapid_drop />
            <SettingRow label="Email Alerts" value=section.email_alerts />
        </div>
    }
}

#[component]
fn UsageStatistics(section: UsageSection) -> impl IntoView {
    view! {
        <div class="settings-section">
            <h4>"Usage Statistics"</h4>
            <SettingRow label="Usage Rate" value=section.usage_rate />
            <SettingRow label="Days Remaining" value=section.days_remaining />
        </div>
    }
}

#[component]
fn AlertSystemCard() -> impl IntoView {
    let ctx = use_dashboard();
    let display = move || ctx.with(|s| s.alert_system);

    let toggle = Callback::new(move |_: ()| {
        ctx.run(|c| async move { c.toggle_alert_system().await });
    });

    view! {
        <div class="settings-card">
            <div class="settings-section">
                <h4>"Alert System"</h4>
                <div class="setting-item">
                    <span class="setting-label">"Status"</span>
                    <span class=move || display().status_class()>
                        {move || display().status_text()}
                    </span>
                </div>
                {move || view! {
                    <ActionButton
                        label=display().toggle_label()
                        disabled=Signal::derive(move || display().toggle_disabled())
                        on_press=toggle
                    />
                }}
            </div>
        </div>
    }
}

#[component]
fn NotificationsCard() -> impl IntoView {
    let ctx = use_dashboard();
    let toggle = move || ctx.with(|s| s.notifications);

    let on_change = move |ev: web_sys::Event| {
        let checked = event_target_checked(&ev);
        ctx.run(move |c| async move {
            c.set_notifications_enabled(checked, &BrowserPermissionPrompt)
                .await
        });
    };

    let subscribe = Callback::new(move |_: ()| ctx.controller().subscribe_to_notifications());
    let test_push = Callback::new(move |_: ()| {
        ctx.run(|c| async move { c.send_test_push().await });
    });
    let test_email = Callback::new(move |_: ()| {
        ctx.run(|c| async move { c.send_test_email().await });
    });

    view! {
        <div class="settings-card">
            <div class="settings-section">
                <h4>"Notifications"</h4>
                <label class="setting-item checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || toggle().checked()
                        disabled=move || toggle() == NotificationToggle::PendingPermission
                        on:change=on_change
                    />
                    <span class="setting-label">"Enable browser notifications"</span>
                </label>
                <ActionButton
                    label="Subscribe to Alerts"
                    disabled=Signal::derive(move || !toggle().subscribe_available())
                    on_press=subscribe
                />
                <ActionButton label="Send Test Push" disabled=false on_press=test_push />
                <ActionButton label="Send Test Email" disabled=false on_press=test_email />
            </div>
        </div>
    }
}
