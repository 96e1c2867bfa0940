//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
    ui::UiConfig,
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod ui;

/// Stockroom JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "stockroom-json", about = "Stockroom JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces/metrics) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Inventory database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Dashboard asset settings.
    #[command(flatten)]
    pub ui: UiConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
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
    fn defaults_apply_when_only_database_is_given() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "stockroom-json",
            "--database-url",
            "postgres://localhost/stockroom",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:5001");
        assert_eq!(config.database.database_max_connections, 10);
        assert!(config.ui.ui_static_dir.is_none());

        Ok(())
    }

    #[test]
    fn static_dir_is_optional_path() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "stockroom-json",
            "--database-url",
            "postgres://localhost/stockroom",
            "--ui-static-dir",
            "crates/ui/dist",
            "--port",
            "8080",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
        assert_eq!(
            config.ui.ui_static_dir.as_deref(),
            Some(std::path::Path::new("crates/ui/dist"))
        );

        Ok(())
    }
}
