//! PostgreSQL session establishment, setup and teardown.
//!
//! # Security Features
//! - Read-only transaction mode by default
//! - Bounded connect time
//! - Passwords never appear in errors or logs

use super::{ConnectionConfig, PostgresCatalog};
use crate::{Result, adapters::RelationStrategy, error::DocError, security::Credentials};
use sqlx::Connection;
use sqlx::postgres::{PgConnectOptions, PgConnection};

/// Application name reported to the server for the session.
const APPLICATION_NAME: &str = "schemadoc";

impl PostgresCatalog {
    /// Opens the session described by `config`.
    ///
    /// # Security
    /// - Enables `default_transaction_read_only` when `config.read_only`
    /// - Sanitizes connection details in all error messages
    ///
    /// # Errors
    /// Returns error if:
    /// - The configuration is invalid
    /// - The server cannot be reached within `connect_timeout`
    /// - Authentication or session setup fails
    pub async fn connect(config: ConnectionConfig, credentials: &Credentials) -> Result<Self> {
        config.validate()?;

        let options = Self::connect_options(&config, credentials);

        tracing::debug!("Connecting to {}", config);
        let conn = tokio::time::timeout(config.connect_timeout, PgConnection::connect_with(&options))
            .await
            .map_err(|_| DocError::connection_timeout(&config, config.connect_timeout))?
            .map_err(DocError::connection_failed)?;

        let mut catalog = Self {
            conn,
            config,
            relation_strategy: RelationStrategy::default(),
        };
        catalog.setup_session().await?;

        tracing::info!("Connected to {}", catalog.config);
        Ok(catalog)
    }

    /// Builds driver options from the configuration and credentials.
    ///
    /// A username on the credentials takes precedence over the one in the
    /// configuration; when neither is set the driver's defaults apply.
    pub fn connect_options(config: &ConnectionConfig, credentials: &Credentials) -> PgConnectOptions {
        let mut options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port_or_default())
            .application_name(APPLICATION_NAME);

        if let Some(database) = &config.database {
            options = options.database(database);
        }

        if !credentials.username().is_empty() {
            options = options.username(credentials.username());
        } else if let Some(username) = &config.username {
            options = options.username(username);
        }

        if let Some(password) = credentials.password() {
            options = options.password(password);
        }

        options
    }

    /// Applies session-level settings.
    async fn setup_session(&mut self) -> Result<()> {
        if self.config.read_only {
            sqlx::query("SET default_transaction_read_only = on")
                .execute(&mut self.conn)
                .await
                .map_err(DocError::connection_failed)?;
        }
        Ok(())
    }

    /// Verifies the session is alive and can read `information_schema`.
    ///
    /// # Errors
    /// Returns error if the round trip fails or the catalog is not readable
    pub async fn test_connection(&mut self) -> Result<()> {
        let connectivity: i32 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&mut self.conn)
            .await
            .map_err(DocError::connection_failed)?;

        if connectivity != 1 {
            return Err(DocError::configuration(
                "Basic connectivity test failed: unexpected result",
            ));
        }

        let visible_tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM information_schema.tables WHERE table_schema = 'information_schema'",
        )
        .fetch_one(&mut self.conn)
        .await
        .map_err(|e| {
            DocError::insufficient_privileges(format!("Cannot access information_schema: {}", e))
        })?;

        if visible_tables == 0 {
            return Err(DocError::insufficient_privileges(
                "No access to information_schema tables",
            ));
        }

        tracing::info!("Connection to {} verified", self.config);
        Ok(())
    }

    /// Terminates the session.
    pub(crate) async fn disconnect(self) -> Result<()> {
        let target = self.config.to_string();
        self.conn.close().await.map_err(DocError::connection_failed)?;
        tracing::debug!("Closed session to {}", target);
        Ok(())
    }
}
