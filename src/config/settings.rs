use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

use crate::config::LogConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub logs: LogConfig,
}

fn get_env_file_name() -> String {
    if let Ok(env_file) = std::env::var("DDLGEN_ENV_FILE") {
        return env_file;
    }
    if let Ok(env) = std::env::var("DDLGEN_ENV") {
        return match env.to_lowercase().as_str() {
            "dev" => ".env.dev".to_string(),
            "test" => ".env.test".to_string(),
            _ => ".env".to_string(),
        };
    }
    ".env".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file selected by `DDLGEN_ENV_FILE` / `DDLGEN_ENV`
        dotenvy::from_filename(get_env_file_name()).ok();

        let settings = Config::builder()
            .add_source(
                Environment::with_prefix("DDLGEN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
