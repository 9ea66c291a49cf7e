//! Asynchronous cluster contract

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;

use crate::Error;

/// Asynchronous counterpart of [Cluster](crate::cluster::sync::Cluster).
///
/// Implementations are shared across tasks and synchronise their own state.
#[async_trait]
pub trait AsyncCluster: Debug + Send + Sync {
    /// Number of retries allowed after the first attempt.
    fn max_retries(&self) -> u32;

    /// Delay before each retry.
    fn retry_interval(&self) -> Duration;

    /// Re-discovers the cluster topology. Must be safe to call repeatedly.
    async fn refresh(&self) -> Result<(), Error>;

    /// Addresses of the current members.
    fn nodes(&self) -> Vec<String>;

    /// Addresses used to bootstrap discovery.
    fn seeds(&self) -> Vec<String>;

    /// Suspends the current task between attempts.
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await
    }
}
