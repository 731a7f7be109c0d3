use log::{info, warn};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};

use crate::config::DatabaseSettings;
use crate::errors::StatsError;
use crate::retry::RetryPolicy;

pub type DbConn = MySqlConnection;

/// Opens game-database connections, retrying with a fixed delay
pub struct Connector {
    options: MySqlConnectOptions,
    policy: RetryPolicy,
}

impl Connector {
    pub fn new(settings: &DatabaseSettings, policy: RetryPolicy) -> Self {
        Self::with_options(build_options(settings), policy)
    }

    pub fn with_options(options: MySqlConnectOptions, policy: RetryPolicy) -> Self {
        Self { options, policy }
    }

    /// The returned connection must be handed back through [`release`].
    pub async fn acquire(&self) -> Result<DbConn, StatsError> {
        let conn = self
            .policy
            .run("Database connection failed", |_| self.options.connect())
            .await
            .map_err(|source| StatsError::Connection {
                attempts: self.policy.max_attempts(),
                source,
            })?;

        info!("Connected to database");
        Ok(conn)
    }
}

fn build_options(settings: &DatabaseSettings) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.user)
        .password(&settings.password)
        .database(&settings.database)
        .charset(&settings.charset)
}

/// Closes the connection; a failed close is logged, never raised.
pub async fn release(conn: DbConn) {
    if let Err(e) = conn.close().await {
        warn!("Failed to close database connection cleanly: {}", e);
    }
}
