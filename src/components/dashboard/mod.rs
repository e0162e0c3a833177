mod alerts;
mod dashboard;
mod history;
mod tank_card;

pub use dashboard::Dashboard;
