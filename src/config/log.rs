use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_dir")]
    pub dir: Option<String>,

    #[serde(default = "default_console_format")]
    pub console_format: String,

    #[serde(default)]
    pub file_enabled: bool,

    #[serde(
        default = "default_ext_level",
        deserialize_with = "deserialize_ext_level"
    )]
    pub ext_level: Option<HashMap<String, String>>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: default_log_dir(),
            console_format: default_console_format(),
            file_enabled: false,
            ext_level: default_ext_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_dir() -> Option<String> {
    Some("./logs".to_string())
}

fn default_console_format() -> String {
    "compact".to_string()
}

fn default_ext_level() -> Option<HashMap<String, String>> {
    let mut map = HashMap::new();
    map.insert("oracle".to_string(), "error".to_string());
    Some(map)
}

/// Parses `target:level, target:level` pairs on top of the default `oracle:error`.
fn deserialize_ext_level<'de, D>(
    deserializer: D,
) -> Result<Option<HashMap<String, String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;

    let mut map = default_ext_level().unwrap_or_default();

    if let Some(s) = s {
        for pair in s.split(',') {
            if let Some((key, value)) = pair.trim().split_once(':') {
                map.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
    }

    Ok(Some(map))
}
