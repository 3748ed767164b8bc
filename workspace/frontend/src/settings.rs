use log::Level;
use wasm_bindgen::JsValue;
use web_sys::{window, Storage};

const STORAGE_PREFIX: &str = "sitebook_";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Backend API host (e.g., "localhost")
    pub api_host: String,

    /// Backend API port
    pub api_port: u16,

    /// API path prefix (e.g., "/api/v1")
    pub api_path: String,

    pub api_use_https: bool,

    pub log_level: Level,

    /// How long a toast stays on screen
    pub toast_duration_ms: u32,

    /// Number of past notifications kept for the history panel
    pub notification_history_cap: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "localhost".to_string(),
            api_port: 3000,
            api_path: "/api/v1".to_string(),
            api_use_https: false,
            log_level: Level::Info,
            toast_duration_ms: 5000,
            notification_history_cap: 50,
        }
    }
}

impl AppSettings {
    /// Defaults, adjusted for localhost and then overridden from localStorage.
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            if hostname == "localhost" || hostname == "127.0.0.1" {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            settings.apply_storage(&storage);
        }

        settings
    }

    fn apply_storage(&mut self, storage: &Storage) {
        let read = |key: &str| {
            storage
                .get_item(&format!("{}{}", STORAGE_PREFIX, key))
                .ok()
                .flatten()
        };

        if let Some(api_host) = read("api_host") {
            self.api_host = api_host;
        }
        if let Some(port) = read("api_port").and_then(|v| v.parse().ok()) {
            self.api_port = port;
        }
        if let Some(api_path) = read("api_path") {
            self.api_path = api_path;
        }
        if let Some(use_https) = read("api_use_https") {
            self.api_use_https = use_https.eq_ignore_ascii_case("true");
        }
        if let Some(level) = read("log_level").and_then(|v| parse_level(&v)) {
            self.log_level = level;
        }
        if let Some(duration) = read("toast_duration_ms").and_then(|v| v.parse().ok()) {
            self.toast_duration_ms = duration;
        }
        if let Some(cap) = read("notification_history_cap").and_then(|v| v.parse().ok()) {
            self.notification_history_cap = cap;
        }
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        let Some(storage) = window().map(|w| w.local_storage()).transpose()?.flatten() else {
            return Ok(());
        };
        let write = |key: &str, value: String| {
            storage.set_item(&format!("{}{}", STORAGE_PREFIX, key), &value)
        };

        write("api_host", self.api_host.clone())?;
        write("api_port", self.api_port.to_string())?;
        write("api_path", self.api_path.clone())?;
        write("api_use_https", self.api_use_https.to_string())?;
        write("log_level", self.log_level.as_str().to_lowercase())?;
        write("toast_duration_ms", self.toast_duration_ms.to_string())?;
        write(
            "notification_history_cap",
            self.notification_history_cap.to_string(),
        )?;
        Ok(())
    }

    /// Protocol, host, port and path prefix.
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, self.api_path)
    }

    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Call once at startup, before the logger is installed.
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
