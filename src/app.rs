use leptos::*;
use leptos_router::*;

use crate::components::layout::Layout;
use crate::components::Dashboard;
use crate::components::Settings;
use crate::state::provide_dashboard_context;

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    // Provide the dashboard controller at the app root
    let ctx = provide_dashboard_context();

    #[cfg(target_arch = "wasm32")]
    {
        use crate::browser;
        use crate::state::poller;

        let controller = ctx.controller();
        browser::register_service_worker(&controller.config().service_worker_path);
        browser::watch_install_prompt();

        controller.init_online(browser::is_online());
        let on_connectivity = controller.clone();
        browser::watch_connectivity(move |online| {
            let controller = on_connectivity.clone();
            spawn_local(async move { controller.set_online(online).await });
        });

        ctx.run(|c| async move { c.load_initial().await });

        let interval = controller.config().poll_interval();
        let handle = poller::start(interval, move || {
            let controller = controller.clone();
            async move { controller.poll_tick().await }
        });

        on_cleanup(move || drop(handle));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = ctx;

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Layout>
                    <Route path="" view=|| view! { <Redirect path="/dashboard" /> } />
                    <Route path="dashboard" view=Dashboard />
                    <Route path="settings" view=Settings />
                </Route>
            </Routes>
        </Router>
    }
}
