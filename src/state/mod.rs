pub mod context;
pub mod dashboard;
pub mod notifications;
pub mod poller;

pub use context::{provide_dashboard_context, use_dashboard, Controller, DashboardContext};
pub use dashboard::DashboardState;
pub use notifications::{
    BrowserPermissionPrompt, NotificationToggle, PermissionOutcome, PermissionPrompt,
};
pub use poller::{run_poll_loop, PollHandle};
