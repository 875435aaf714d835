// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub assets: AssetsConfig,
    pub cors: CorsConfig,
    pub fallback: FallbackConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8081,
            workers: None,
        }
    }
}

/// Static asset configuration
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory served as the asset root.
    /// When unset, the parent of the executable's directory is used.
    pub root: Option<String>,
    /// File names tried, in order, when a request resolves to a directory
    pub index_files: Vec<String>,
}

/// Cross-origin policy
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CorsConfig {
    pub allow_origin: String,
    pub allow_methods: String,
    /// Fixed `Access-Control-Allow-Headers` value for preflights.
    /// `None` reflects the request's `Access-Control-Request-Headers`.
    pub allow_headers: Option<String>,
    pub expose_headers: Option<String>,
    /// Preflight cache lifetime in seconds
    pub max_age: Option<u64>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origin: "*".to_string(),
            allow_methods: "GET,HEAD,PUT,PATCH,POST,DELETE".to_string(),
            allow_headers: None,
            expose_headers: None,
            max_age: None,
        }
    }
}

/// Response sent for every request that does not resolve to a file
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FallbackConfig {
    pub body: String,
    pub content_type: String,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            body: "handled".to_string(),
            content_type: "text/plain; charset=utf-8".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level written: error, warn or info
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    pub error_log_file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            access_log: false,
            access_log_format: "combined".to_string(),
            access_log_file: None,
            error_log_file: None,
        }
    }
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
    /// Upper bound in seconds on a connection's lifetime; unbounded if unset
    pub connection_timeout: Option<u64>,
    pub max_connections: Option<u64>,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            keep_alive: true,
            connection_timeout: None,
            max_connections: None,
        }
    }
}
