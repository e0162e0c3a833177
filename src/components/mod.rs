pub mod dashboard;
pub mod layout;
pub mod settings;

pub use dashboard::Dashboard;
pub use settings::Settings;
