use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::entities::{DatabaseHealthStatus, HealthStatus},
};

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckRepository: Send + Sync {
    /// Round-trips a trivial query and reports its latency.
    fn readness(&self) -> impl Future<Output = Result<DatabaseHealthStatus, CoreError>> + Send;
}

pub trait HealthCheckService: Send + Sync {
    fn readness(&self) -> impl Future<Output = Result<DatabaseHealthStatus, CoreError>> + Send;

    fn health(&self) -> impl Future<Output = Result<HealthStatus, CoreError>> + Send;
}
