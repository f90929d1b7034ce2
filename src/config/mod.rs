// Configuration module entry point
// Loads the service configuration once at startup and holds the shared runtime state

mod state;
mod types;

use std::net::{SocketAddr, ToSocketAddrs};

pub use state::AppState;
pub use types::Config;

/// Port used when `PORT` is unset or empty
pub const DEFAULT_PORT: u16 = 12000;

/// Config file looked up when `TRANSLATOR_CONFIG` is unset (extension optional)
const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("TRANSLATOR_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(
            &config_path,
            std::env::var("HOST").ok(),
            std::env::var("PORT").ok(),
        )
    }

    /// Load configuration from the given file path, with explicit `HOST`/`PORT` values.
    ///
    /// An empty host is kept (bind all interfaces), an empty port falls back to the default.
    pub fn load_from(
        config_path: &str,
        host: Option<String>,
        port: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let port = port.filter(|p| !p.is_empty());

        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("TRANSLATOR")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive", true)?
            .set_default("translator.max_body_size", 10_485_760)? // 10MB
            .set_override_option("server.host", host)?
            .set_override_option("server.port", port)?
            .build()?;

        settings.try_deserialize()
    }

    /// Address as written in the startup log line, e.g. `:12000`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Resolve the bind address; an empty host means every interface (`[::]`, dual-stack)
    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        let host = if self.server.host.is_empty() {
            "::"
        } else {
            self.server.host.as_str()
        };

        (host, self.server.port)
            .to_socket_addrs()
            .map_err(|e| format!("Invalid address '{}': {e}", self.bind_address()))?
            .next()
            .ok_or_else(|| format!("Address '{}' did not resolve", self.bind_address()))
    }
}
