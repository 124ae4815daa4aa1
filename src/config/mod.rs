// Configuration module entry point
// Loads layered settings (defaults < config file < environment) and holds runtime state

mod state;
mod types;

use std::net::SocketAddr;
use std::time::Duration;

// Re-export public types
pub use state::AppState;
pub use types::Config;

/// Config file used when no path is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

impl Config {
    /// Load configuration from specified file path
    /// A missing file is not an error; defaults and `CHATBOT_*` variables still apply
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("CHATBOT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let cfg: Self = Self::with_defaults(settings)?.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that deserialize fine but cannot be served
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.server.workers == Some(0) {
            return Err(config::ConfigError::Message(
                "server.workers must be at least 1".to_string(),
            ));
        }

        let path = &self.chatbot.path;
        if !path.starts_with('/') || path == "/" {
            return Err(config::ConfigError::Message(format!(
                "chatbot.path must be a non-root absolute path, got '{path}'"
            )));
        }
        Ok(())
    }

    /// Load using the path from the first CLI argument, or `config.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        let path = std::env::args()
            .nth(1)
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    fn with_defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("server.debug", false)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "EasyFly-Assistant/1.0")?
            .set_default("http.enable_cors", true)?
            .set_default("http.max_body_size", 65_536)? // 64KB
            .set_default("chatbot.path", "/chatbot")?
            .set_default("chatbot.response_delay_ms", 500)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    pub const fn response_delay(&self) -> Duration {
        Duration::from_millis(self.chatbot.response_delay_ms)
    }

    /// Connection deadline derived from read/write timeouts
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(std::cmp::max(
            self.performance.read_timeout,
            self.performance.write_timeout,
        ))
    }

    /// Whether info-level output (banner, access log) is enabled
    pub fn info_enabled(&self) -> bool {
        !matches!(
            self.logging.level.to_ascii_lowercase().as_str(),
            "error" | "warn" | "off"
        )
    }
}

#[cfg(test)]
impl Config {
    /// Defaults only, with no artificial delay
    pub fn for_tests() -> Self {
        Self::with_defaults(config::Config::builder())
            .and_then(|b| b.set_default("chatbot.response_delay_ms", 0))
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize())
            .expect("default config must deserialize")
    }
}
