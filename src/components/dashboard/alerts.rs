use leptos::*;

use crate::state::use_dashboard;
use crate::view::{AlertView, NO_ALERTS, NO_RECENT_ALERTS};

/// The most recent alerts, refreshed with the status
#[component]
pub fn RecentAlertsCard() -> impl IntoView {
    let ctx = use_dashboard();
    let alerts = move || ctx.with(|s| s.recent_alerts.clone());

    let show_all = move |_| ctx.run(|c| async move { c.show_all_alerts().await });

    view! {
        <div class="card alerts-card">
            <div class="card-header">
                <h3>"Recent Alerts"</h3>
                <button class="link-button" on:click=show_all>"View all"</button>
            </div>
            {move || match alerts() {
                None => view! { <div class="loading">"Loading..."</div> }.into_view(),
                Some(list) => view! { <AlertList alerts=list empty=NO_RECENT_ALERTS /> }.into_view(),
            }}
        </div>
    }
}

/// Modal listing every alert
#[component]
pub fn AlertsModal() -> impl IntoView {
    let ctx = use_dashboard();
    let close = move |_| ctx.controller().close_alerts();

    view! {
        <Show when=move || ctx.with(|s| s.alerts_open)>
            <div class="modal-backdrop" on:click=close>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"All Alerts"</h2>
                        <button class="modal-close" aria-label="Close" on:click=close>"×"</button>
                    </div>
                    <div class="modal-body">
                        {move || view! {
                            <AlertList alerts=ctx.with(|s| s.all_alerts.clone()) empty=NO_ALERTS />
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn AlertList(alerts: Vec<AlertView>, empty: &'static str) -> impl IntoView {
    if alerts.is_empty() {
        return view! { <div class="no-data">{empty}</div> }.into_view();
    }

    view! {
        <ul class="alert-list">
            {alerts.into_iter().map(|alert| view! { <AlertItem alert=alert /> }).collect_view()}
        </ul>
    }
    .into_view()
}

#[component]
fn AlertItem(alert: AlertView) -> impl IntoView {
    let item_class = format!("alert-item {} {}", alert.severity, alert.kind.as_str());
    let change_class = format!("alert-change {}", alert.trend.css_class());

    view! {
        <li class=item_class>
            <span class="alert-icon" aria-hidden="true">{alert.icon}</span>
            <div class="alert-content">
                <div class="alert-title">{alert.title}</div>
                <div class="alert-time">{alert.time}</div>
                <div class="alert-details">{alert.details}</div>
                {alert.usage.map(|usage| view! { <div class="alert-usage">{usage}</div> })}
            </div>
            <span class=change_class>{alert.change}</span>
        </li>
    }
}
