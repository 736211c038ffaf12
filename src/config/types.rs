use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote user service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST service (e.g., "http://localhost:4000/api").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Collection path appended to the base URL (default: "users").
    #[serde(default = "default_users_path")]
    pub users_path: String,
    /// Bound on a single fetch attempt in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Extra fetch attempts after a failure (default: 1).
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Delay before a retry in milliseconds (default: 0).
    #[serde(default)]
    pub retry_backoff_base_ms: u64,
    /// Bearer token sent with every request.
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Detail cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// How long a fetched record is reused without a network call (default: 300).
    #[serde(default = "default_stale_seconds")]
    pub stale_seconds: u64,
}

/// Terminal screen settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long a notification stays in the footer.
    #[serde(default = "default_toast_seconds")]
    pub toast_seconds: u64,
}

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

fn default_base_url() -> String {
    "http://127.0.0.1:4000/api".to_string()
}

fn default_users_path() -> String {
    "users".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_max_retries() -> u32 {
    1
}

fn default_stale_seconds() -> u64 {
    300
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_toast_seconds() -> u64 {
    4
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_base_ms)
    }

    /// Returns `None` when no key is configured or the key is blank.
    pub fn auth_header(&self) -> Option<AuthHeader> {
        let key = self.api_key.as_deref()?.trim();
        if key.is_empty() {
            return None;
        }
        Some(("Authorization".to_string(), format!("Bearer {}", key)))
    }
}

impl CacheConfig {
    pub fn stale_time(&self) -> Duration {
        Duration::from_secs(self.stale_seconds)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_seconds)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            users_path: default_users_path(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            max_retries: default_max_retries(),
            retry_backoff_base_ms: 0,
            api_key: None,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            stale_seconds: default_stale_seconds(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            toast_seconds: default_toast_seconds(),
        }
    }
}
