use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, health::entities::HealthReport};

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckRepository: Send + Sync {
    fn backend(&self) -> &'static str;

    /// Returns the latency in milliseconds, `None` when no store is configured.
    fn ping(&self) -> impl Future<Output = Result<Option<u64>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckService: Send + Sync {
    fn health(&self) -> impl Future<Output = HealthReport> + Send;
}
