mod setting_row;
mod settings;

pub use settings::Settings;
