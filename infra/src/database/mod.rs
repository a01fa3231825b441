//! Database module - MySQL implementations using SQLx
//!
//! Provides connection pool management and the repository pattern
//! implementations for accounts, profiles, feedback, and notifications.

pub mod mysql;

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use vc_core::errors::DomainError;
use vc_shared::config::DatabaseConfig;

pub use mysql::{
    MySqlAccountRepository, MySqlFeedbackRepository, MySqlNotificationRepository,
    MySqlProfileRepository,
};

/// Create the MySQL connection pool from configuration
///
/// Called once at startup; the resulting pool lives for the whole process
/// and is shared by every repository.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, DomainError> {
    tracing::info!(
        max_connections = config.max_connections,
        "Creating database connection pool"
    );

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .connect(&config.url)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create database pool: {}", e);
            DomainError::Internal {
                message: format!("Failed to connect to database: {}", e),
            }
        })?;

    tracing::info!("Database connection pool created");
    Ok(pool)
}
