// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub translator: TranslatorConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Interface or hostname to bind, empty means all interfaces
    #[serde(default)]
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    pub access_log_file: Option<String>,
    pub error_log_file: Option<String>,
}

/// Connection handling configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
    /// Seconds; no timeout when unset
    pub connection_timeout: Option<u64>,
    pub max_connections: Option<u64>,
}

/// Translation endpoint configuration
#[derive(Debug, Deserialize, Clone)]
pub struct TranslatorConfig {
    pub max_body_size: u64,
    pub max_identifiers: Option<usize>,
    /// Fixed PRNG seed; seeded from OS entropy when unset
    pub seed: Option<u64>,
}
