use serde::Deserialize;
use std::time::Duration;

/// Prefix for every environment variable read by [`Config::from_env`]
pub const ENV_PREFIX: &str = "REZKA_";

/// Plugin configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base address of the streaming site, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for a single search request, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// User-Agent sent with search requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://rezka-ua.pub".to_string()
}

fn default_request_timeout_secs() -> u64 {
    15
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Load configuration from `REZKA_*` environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::prefixed(ENV_PREFIX)
            .from_env::<Config>()
            .map(Config::normalized)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Overrides the base address, e.g. to point at a mirror or a test server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self.normalized()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.base_url.trim_end_matches('/').len();
        self.base_url.truncate(trimmed);
        self
    }
}
