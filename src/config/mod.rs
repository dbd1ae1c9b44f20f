pub mod log;
pub mod settings;

pub use log::LogConfig;
pub use settings::Settings;
