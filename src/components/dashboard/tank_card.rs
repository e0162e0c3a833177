use leptos::*;

use crate::state::use_dashboard;
use crate::view::StatusView;

/// Tank gauge and the latest reading's details
#[component]
pub fn TankCard() -> impl IntoView {
    let ctx = use_dashboard();
    let status = move || ctx.with(|s| s.status.clone());
    let battery_low = move || ctx.with(|s| s.battery_low);

    view! {
        <div class="card tank-card">
            <h3>"Water Tank"</h3>
            {move || match status() {
                Some(current) => view! { <TankGauge status=current battery_low=Signal::derive(battery_low) /> }.into_view(),
                None => view! { <div class="no-data">"No reading available yet"</div> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn TankGauge(status: StatusView, battery_low: Signal<bool>) -> impl IntoView {
    let container_class = format!("tank-container {}", status.tier.css_class());
    let fill_style = format!("height: {}%", status.fill_height);

    view! {
        <div class=container_class>
            <div class="tank">
                <div class="water-fill" style=fill_style></div>
                <span class="fill-text">{status.fill_text.clone()}"%"</span>
            </div>
        </div>
        <div class="status-grid">
            <StatusItem label="Water Level" value=status.water_level.clone() />
            <StatusItem label="Volume" value=status.gallons.clone() />
            <StatusItem label="Sensor Distance" value=status.distance.clone() />
            <StatusItem label="WiFi Signal" value=status.wifi_rssi.clone() />
            <div class="status-item">
                <span class="status-label">"Battery"</span>
                <span class=move || if battery_low.get() { "status-value battery low" } else { "status-value battery" }>
                    {status.battery.text().to_string()}
                </span>
            </div>
        </div>
        <div class="last-update">"Last update: " {status.updated_at.clone()}</div>
    }
}

#[component]
fn StatusItem(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="status-item">
            <span class="status-label">{label}</span>
            <span class="status-value">{value}</span>
        </div>
    }
}
