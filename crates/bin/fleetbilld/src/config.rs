//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `fleetbill.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables (including
//! those loaded from a `.env` file) take precedence over file values.

use std::collections::HashSet;

use serde::Deserialize;

use fleetbill_domain::calculation::CalculationType;
use fleetbill_domain::utilization::SwitchDevice;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Billing query settings.
    pub billing: BillingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
    /// Create the billing tables on startup. Off when the schema is owned upstream.
    pub migrate: bool,
    /// Maximum pooled connections.
    pub max_connections: u32,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Billing query configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BillingConfig {
    /// Calculation type used when a request does not specify one.
    pub calculation_type: CalculationType,
    /// Switches reported by `/switchUtilizationStats`, in output order.
    pub switches: Vec<SwitchDevice>,
}

impl Config {
    /// Load configuration from `fleetbill.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("fleetbill.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
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

    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = lookup("FLEETBILL_HOST") {
            self.server.host = val;
        }
        // `FLEETBILL_PORT` wins over `PORT`
        for key in ["PORT", "FLEETBILL_PORT"] {
            if let Some(val) = lookup(key) {
                self.server.port = val
                    .parse()
                    .map_err(|_| ConfigError::Validation(format!("{key} must be a port number")))?;
            }
        }
        if let Some(val) = lookup("FLEETBILL_BIND") {
            let (host, port) = val.rsplit_once(':').ok_or_else(|| {
                ConfigError::Validation("FLEETBILL_BIND must be host:port".to_string())
            })?;
            self.server.host = host.to_string();
            self.server.port = port.parse().map_err(|_| {
                ConfigError::Validation("FLEETBILL_BIND must be host:port".to_string())
            })?;
        }
        for key in ["DATABASE_URL", "FLEETBILL_DATABASE_URL"] {
            if let Some(val) = lookup(key) {
                self.database.url = val;
            }
        }
        if let Some(val) = lookup("FLEETBILL_DATABASE_MIGRATE") {
            self.database.migrate = matches!(val.as_str(), "1" | "true" | "yes");
        }
        if let Some(val) = lookup("FLEETBILL_CALCULATION_TYPE") {
            self.billing.calculation_type = val
                .parse()
                .map_err(|err| ConfigError::Validation(format!("FLEETBILL_CALCULATION_TYPE: {err}")))?;
        }
        // `FLEETBILL_LOG` wins over `RUST_LOG`
        for key in ["RUST_LOG", "FLEETBILL_LOG"] {
            if let Some(val) = lookup(key) {
                self.logging.filter = val;
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "database.max_connections must be non-zero".to_string(),
            ));
        }
        if self.billing.switches.is_empty() {
            return Err(ConfigError::Validation(
                "billing.switches must list at least one switch".to_string(),
            ));
        }
        let mut keys = HashSet::new();
        for switch in &self.billing.switches {
            if switch.key.is_empty() || switch.key == "month" {
                return Err(ConfigError::Validation(format!(
                    "invalid switch key {:?}",
                    switch.key
                )));
            }
            if !keys.insert(switch.key.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate switch key {:?}",
                    switch.key
                )));
            }
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:fleetbill.db".to_string(),
            migrate: false,
            max_connections: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "fleetbilld=info,fleetbill=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            calculation_type: CalculationType::Group,
            switches: SwitchDevice::defaults(),
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
