//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig,
    delivery::DeliveryConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod delivery;
pub(crate) mod observability;
pub(crate) mod server;

/// Waybill JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "waybill-json", about = "Waybill JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Delivery pricing policy settings.
    #[command(flatten)]
    pub delivery: DeliveryConfig,
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
    use std::path::Path;

    use super::*;

    #[test]
    fn parses_flattened_arguments() -> Result<(), clap::Error> {
        let config = ServerConfig::try_parse_from([
            "waybill-json",
            "--port",
            "9000",
            "--database-url",
            "postgres://localhost/waybill",
            "--delivery-policy",
            "/etc/waybill/policy.yaml",
            "--slow-request-threshold-ms",
            "250",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:9000");
        assert_eq!(config.database.database_url, "postgres://localhost/waybill");
        assert_eq!(
            config.delivery.delivery_policy.as_deref(),
            Some(Path::new("/etc/waybill/policy.yaml"))
        );
        assert_eq!(config.observability.slow_request_threshold_ms, 250);

        Ok(())
    }
}
