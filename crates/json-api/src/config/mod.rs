//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

pub(crate) use observability::LogFormat;

/// Tiffin JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "tiffin-json", about = "Tiffin JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request logging and metrics settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_apply_when_only_the_database_is_given() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "tiffin-json",
            "--database-url",
            "postgres://localhost/tiffin",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8698");
        assert!(
            matches!(config.logging.log_format, LogFormat::Compact),
            "expected compact logs by default"
        );
        assert_eq!(config.observability.slow_request_threshold_ms, 1_000);
        assert_eq!(config.server.shutdown_grace().as_secs(), 30);

        Ok(())
    }

    #[test]
    fn json_logging_can_be_selected() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "tiffin-json",
            "--database-url",
            "postgres://localhost/tiffin",
            "--log-format",
            "json",
            "--port",
            "9000",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:9000");
        assert!(
            matches!(config.logging.log_format, LogFormat::Json),
            "expected json logs"
        );

        Ok(())
    }
}
