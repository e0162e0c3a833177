use leptos::*;

use crate::state::use_dashboard;

use super::alerts::{AlertsModal, RecentAlertsCard};
use super::history::HistoryModal;
use super::tank_card::TankCard;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_dashboard();

    let force_reading = move |_| ctx.run(|c| async move { c.force_reading().await });
    let show_history = move |_| ctx.run(|c| async move { c.load_history().await });

    view! {
        <div class="dashboard">
            <div class="dashboard-actions">
                <button class="action-button" on:click=force_reading>"Take Reading"</button>
                <button class="action-button" on:click=show_history>"View History"</button>
            </div>
            <div class="dashboard-grid">
                <TankCard />
                <RecentAlertsCard />
            </div>
            <HistoryModal />
            <AlertsModal />
        </div>
    }
}
