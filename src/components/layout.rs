use leptos::*;
use leptos_router::*;

use crate::state::use_dashboard;

/// Layout component with navbar, notices and content outlet
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar />
            <main class="main-content">
                <Outlet />
            </main>
            <NoticeStack />
            <LoadingOverlay />
        </div>
    }
}

/// Navbar with tabs, connection badge and refresh button
#[component]
fn Navbar() -> impl IntoView {
    let location = use_location();

    // Check if a path is active
    let is_active = move |path: &str| location.pathname.get().starts_with(path);

    view! {
        <nav class="navbar">
            <div class="navbar-content">
                <h1 class="navbar-title">"Well Tank Monitor"</h1>
                <div class="navbar-tabs">
                    <A
                        href="/dashboard"
                        class=move || if is_active("/dashboard") { "tab active" } else { "tab" }
                    >
                        "Dashboard"
                    </A>
                    <A
                        href="/settings"
                        class=move || if is_active("/settings") { "tab active" } else { "tab" }
                    >
                        "Settings"
                    </A>
                </div>
                <div class="navbar-actions">
                    <ConnectionBadge />
                    <RefreshButton />
                </div>
            </div>
        </nav>
    }
}

#[component]
fn ConnectionBadge() -> impl IntoView {
    let ctx = use_dashboard();
    let online = move || ctx.with(|s| s.online);

    view! {
        <span class=move || if online() { "connection online" } else { "connection offline" }>
            {move || if online() { "Online" } else { "Offline" }}
        </span>
    }
}

#[component]
fn RefreshButton() -> impl IntoView {
    let ctx = use_dashboard();

    let refresh = move |_| {
        ctx.run(|c| async move {
            c.refresh().await;
            c.load_recent_alerts().await;
        });
    };

    view! {
        <button class="refresh-button" aria-label="Refresh data" on:click=refresh>
            "Refresh"
        </button>
    }
}

/// Toasts; each one is removed by its expiry timer or a click
#[component]
fn NoticeStack() -> impl IntoView {
    let ctx = use_dashboard();
    let notices = move || ctx.with(|s| s.notices.all().to_vec());

    view! {
        <div class="notice-stack" aria-live="polite">
            <For
                each=notices
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div
                            class=notice.kind.css_class()
                            on:click=move |_| ctx.controller().dismiss_notice(id)
                        >
                            <strong class="notice-title">{notice.kind.title()}</strong>
                            <span class="notice-message">{notice.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
fn LoadingOverlay() -> impl IntoView {
    let ctx = use_dashboard();

    view! {
        <Show when=move || ctx.with(|s| s.is_busy())>
            <div class="loading-overlay">
                <div class="loading">"Loading..."</div>
            </div>
        </Show>
    }
}
