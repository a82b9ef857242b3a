use log::Level;
use web_sys::window;

const STORAGE_PREFIX: &str = "alma_";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Session service host (e.g., "localhost" or "auth.example.com")
    pub auth_host: String,

    /// Session service port
    pub auth_port: u16,

    /// Session service path prefix (e.g., "/api/auth")
    pub auth_path: String,

    /// Use HTTPS for session requests
    pub auth_use_https: bool,

    /// Where the browser goes after logout
    pub login_path: String,

    /// localStorage key holding the access token
    pub token_storage_key: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Name shown in the sidebar user section
    pub admin_name: String,

    /// Email shown in the sidebar user section
    pub admin_email: String,

    /// Letter drawn in the avatar; empty falls back to the first letter of the name
    pub avatar_initial: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            auth_host: "localhost".to_string(),
            auth_port: 3000,
            auth_path: "/api/auth".to_string(),
            auth_use_https: false,
            login_path: "/login".to_string(),
            token_storage_key: "alma_access_token".to_string(),
            log_level: Level::Info,
            debug_mode: false,
            admin_name: "المدير".to_string(),
            admin_email: "admin@alma.com".to_string(),
            avatar_initial: "م".to_string(),
        }
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

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            let read = |key: &str| storage.get_item(&format!("{STORAGE_PREFIX}{key}")).ok().flatten();
            settings.apply_overrides(read);
        }

        settings
    }

    /// Apply stored overrides; `read` returns the raw value for a key without prefix.
    pub fn apply_overrides<F>(&mut self, read: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = read("auth_host") {
            self.auth_host = host;
        }
        if let Some(port) = read("auth_port").and_then(|p| p.parse::<u16>().ok()) {
            self.auth_port = port;
        }
        if let Some(path) = read("auth_path") {
            self.auth_path = path;
        }
        if let Some(use_https) = read("auth_use_https") {
            self.auth_use_https = use_https.to_lowercase() == "true";
        }
        if let Some(login_path) = read("login_path") {
            self.login_path = login_path;
        }
        if let Some(token_key) = read("token_storage_key").filter(|k| !k.is_empty()) {
            self.token_storage_key = token_key;
        }
        if let Some(level) = read("log_level").as_deref().and_then(parse_level) {
            self.log_level = level;
        }
        if let Some(name) = read("admin_name") {
            self.admin_name = name;
        }
        if let Some(email) = read("admin_email") {
            self.admin_email = email;
        }
        if let Some(initial) = read("avatar_initial") {
            self.avatar_initial = initial;
        }
    }

    /// Get the base session service URL (protocol + host + port + path)
    pub fn auth_base_url(&self) -> String {
        let protocol = if self.auth_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.auth_host, self.auth_port, self.auth_path)
    }

    /// Get the full URL for a session endpoint
    pub fn auth_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.auth_base_url(), endpoint)
    }

    /// Letter drawn in the avatar
    pub fn admin_initial(&self) -> String {
        if !self.avatar_initial.is_empty() {
            return self.avatar_initial.clone();
        }
        self.admin_name.chars().next().map(String::from).unwrap_or_default()
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
