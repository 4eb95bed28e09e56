use std::fs;
use std::path::Path;
use std::time::Duration;

use iced::Theme;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "config.json";
pub const DEFAULT_STORAGE: &str = "edu_center.db";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme_name: String,
    pub auth_url: String,
    pub data_url: String,
    pub public_url: String,
    pub booking_url: String,
    pub storage_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme_name: "Light".to_string(),
            auth_url: "http://127.0.0.1:8000/auth".to_string(),
            data_url: "http://127.0.0.1:8000/admin-api".to_string(),
            public_url: "http://127.0.0.1:8000/public-api".to_string(),
            booking_url: "http://127.0.0.1:8000/submit-booking".to_string(),
            storage_path: DEFAULT_STORAGE.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// `config.json` from the working directory, then `.env` / environment overrides.
    pub fn load() -> Config {
        dotenvy::dotenv().ok();
        let mut config = Config::load_from(CONFIG_FILE).unwrap_or_default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    pub fn load_from(path: impl AsRef<Path>) -> Option<Config> {
        let contents = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("config file is not valid JSON, using defaults: {}", e);
                None
            }
        }
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let targets: [(&str, &mut String); 5] = [
            ("EDU_AUTH_URL", &mut self.auth_url),
            ("EDU_DATA_URL", &mut self.data_url),
            ("EDU_PUBLIC_URL", &mut self.public_url),
            ("EDU_BOOKING_URL", &mut self.booking_url),
            ("EDU_STORAGE_PATH", &mut self.storage_path),
        ];
        for (key, slot) in targets {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                *slot = value;
            }
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn theme(&self) -> Theme {
        theme_from_str(&self.theme_name).unwrap_or(Theme::Light)
    }
}

pub fn theme_from_str(name: &str) -> Option<Theme> {
    Theme::ALL
        .iter()
        .find(|t| t.to_string().eq_ignore_ascii_case(name))
        .cloned()
}
