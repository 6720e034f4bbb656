use std::time::Instant;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let started = Instant::now();

        self.db
            .execute(Statement::from_string(DbBackend::Postgres, "SELECT 1"))
            .await
            .map_err(|e| {
                error!("Database readiness probe failed: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(DatabaseHealthStatus {
            status: "ok".to_string(),
            latency_ms: started.elapsed().as_millis() as u64,
        })
    }
}
