//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `relayhub.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values. The result is read once at startup and
//! never changes afterwards.

use std::path::PathBuf;

use serde::Deserialize;

use relayhub_app::services::reachability_service::DEFAULT_PING;
use relayhub_app::services::relay_service::DEFAULT_COAP_CLIENT;
use relayhub_domain::relay::CoapTarget;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// The remote relay controller.
    pub device: DeviceConfig,
    /// External programs.
    pub tools: ToolsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Directory holding the web front-end.
    pub static_dir: PathBuf,
}

/// Remote device configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Device address in URL-literal form (IPv6 in brackets).
    pub host: String,
    /// CoAP UDP port.
    pub port: u16,
}

/// Names or paths of the external programs to run.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub coap_client: String,
    pub ping: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `relayhub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("relayhub.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("RELAYHUB_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("RELAYHUB_PORT").and_then(|v| v.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("RELAYHUB_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("RELAYHUB_STATIC_DIR") {
            self.server.static_dir = PathBuf::from(val);
        }
        if let Some(val) = var("RELAYHUB_DEVICE_HOST") {
            self.device.host = val;
        }
        if let Some(port) = var("RELAYHUB_DEVICE_PORT").and_then(|v| v.parse().ok()) {
            self.device.port = port;
        }
        if let Some(val) = var("RELAYHUB_COAP_CLIENT") {
            self.tools.coap_client = val;
        }
        if let Some(val) = var("RELAYHUB_PING") {
            self.tools.ping = val;
        }
        if let Some(val) = var("RELAYHUB_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.device.port == 0 {
            return Err(ConfigError::Validation(
                "device port must be non-zero".to_string(),
            ));
        }
        if self.device.host.trim().is_empty() {
            return Err(ConfigError::Validation(
                "device host must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the CoAP server of the device.
    #[must_use]
    pub fn coap_target(&self) -> CoapTarget {
        CoapTarget::new(self.device.host.clone(), self.device.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            host: "[fd12:3456::a66d:d4ff:fefc:b292]".to_string(),
            port: 5683,
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            coap_client: DEFAULT_COAP_CLIENT.to_string(),
            ping: DEFAULT_PING.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "relayhubd=info,relayhub=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
