use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Record store configuration
    #[serde(default)]
    pub state: StateConfig,

    /// Shared-secret authentication
    #[serde(default)]
    pub auth: AuthConfig,

    /// Sample data seeding
    #[serde(default)]
    pub seed: SeedConfig,

    /// Keyword search paging limits
    #[serde(default)]
    pub search: SearchConfig,

    /// Dashboard listing limits
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config/default.toml".to_string());

        config::Config::builder()
            // Start with default values
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ))
            // Override with config file if it exists
            .add_source(config::File::with_name(&config_path).required(false))
            // Override with environment variables (prefix: RESEARCH_PRO)
            .add_source(
                config::Environment::with_prefix("RESEARCH_PRO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map(Config::normalized)
    }

    /// Clamp settings that have hard upper bounds
    pub fn normalized(mut self) -> Self {
        self.search = self.search.normalized();
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// Request timeout (seconds)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    /// Store backend type
    #[serde(default)]
    pub backend: StateBackend,

    /// Path for embedded database (sled)
    pub path: Option<PathBuf>,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            backend: StateBackend::default(),
            path: Some(PathBuf::from("./data/research")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum StateBackend {
    #[default]
    Sled,
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Environment variable holding the expected `X-API-Token` value
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Token used when the environment variable is unset
    #[serde(default = "default_token")]
    pub default_token: String,
}

impl AuthConfig {
    /// Resolve the expected API token
    pub fn resolve_token(&self) -> String {
        std::env::var(&self.token_env).unwrap_or_else(|_| self.default_token.clone())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_env: default_token_env(),
            default_token: default_token(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Load sample data into an empty store at startup
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Page size when `limit` is omitted
    #[serde(default = "default_page_limit")]
    pub default_limit: usize,

    /// Largest accepted `limit`
    #[serde(default = "default_max_page_limit")]
    pub max_limit: usize,
}

/// Largest page any list or search request may ask for
pub const MAX_PAGE_LIMIT: usize = 200;

impl SearchConfig {
    /// Keep `max_limit` within `[1, MAX_PAGE_LIMIT]` and `default_limit` within `[1, max_limit]`
    pub fn normalized(mut self) -> Self {
        self.max_limit = self.max_limit.clamp(1, MAX_PAGE_LIMIT);
        self.default_limit = self.default_limit.clamp(1, self.max_limit);
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_page_limit(),
            max_limit: default_max_page_limit(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Number of most recent insights listed
    #[serde(default = "default_recent_insights_limit")]
    pub recent_insights_limit: usize,

    /// Number of unreviewed sources listed
    #[serde(default = "default_unreviewed_sources_limit")]
    pub unreviewed_sources_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_insights_limit: default_recent_insights_limit(),
            unreviewed_sources_limit: default_unreviewed_sources_limit(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub json_logs: bool,

    /// Service name
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
            service_name: default_service_name(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
    8000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_token_env() -> String {
    "GDEV_API_TOKEN".to_string()
}

fn default_token() -> String {
    "dev-token".to_string()
}

fn default_page_limit() -> usize {
    50
}

fn default_max_page_limit() -> usize {
    MAX_PAGE_LIMIT
}

fn default_recent_insights_limit() -> usize {
    5
}

fn default_unreviewed_sources_limit() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_service_name() -> String {
    "research-pro".to_string()
}

fn default_true() -> bool {
    true
}
