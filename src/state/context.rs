use std::future::Future;
use std::rc::Rc;

use leptos::*;

use crate::api::ApiClient;
use crate::browser;
use crate::config::DashboardConfig;
use crate::controller::DashboardController;
use crate::state::DashboardState;

pub type Controller = DashboardController<ApiClient>;

/// Shared handle to the controller plus a version signal bumped on every change
#[derive(Clone, Copy)]
pub struct DashboardContext {
    controller: StoredValue<Rc<Controller>>,
    version: ReadSignal<u64>,
}

impl DashboardContext {
    /// Read state reactively
    pub fn with<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        self.version.with(|_| ());
        self.controller.with_value(|c| c.read(f))
    }

    pub fn controller(&self) -> Rc<Controller> {
        self.controller.get_value()
    }

    /// Run a controller action on the event loop
    pub fn run<F, Fut>(&self, action: F)
    where
        F: FnOnce(Rc<Controller>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(action(self.controller()));
    }
}

/// Build the controller and provide it to the app
/// Call this once at the root (in App)
pub fn provide_dashboard_context() -> DashboardContext {
    let config = DashboardConfig::from_env();
    let client = ApiClient::new(&config);
    let controller = Rc::new(DashboardController::new(
        client,
        config,
        browser::charts_supported(),
    ));

    let (version, set_version) = create_signal(0u64);
    controller.subscribe(move || set_version.update(|v| *v += 1));

    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::callback::Timeout;

        let notice_ttl_ms = controller.config().notice_ttl_ms;
        let weak = Rc::downgrade(&controller);
        controller.on_notice(move |id| {
            let weak = weak.clone();
            Timeout::new(notice_ttl_ms, move || {
                if let Some(controller) = weak.upgrade() {
                    controller.dismiss_notice(id);
                }
            })
            .forget();
        });
    }

    let ctx = DashboardContext {
        controller: store_value(controller),
        version,
    };
    provide_context(ctx);
    ctx
}

/// Hook to access the dashboard context
pub fn use_dashboard() -> DashboardContext {
    use_context::<DashboardContext>()
        .expect("DashboardContext must be provided by a parent component")
}
