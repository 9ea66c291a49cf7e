//! Asynchronous retry executor

use futures::Future;

use super::common::{classify, log_exhausted, log_fatal, log_retry, log_runner_dead, Classification};
use crate::cluster::AsyncCluster;
use crate::Error;

/// Executes `operation`, retrying up to the cluster's configured `max_retries`.
///
/// The operation is a closure returning a fresh future for every attempt.
pub async fn execute<C, T, F, Fut>(cluster: &C, operation: F) -> Result<T, Error>
where
    C: AsyncCluster + ?Sized,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    execute_with_retries(cluster, operation, cluster.max_retries()).await
}

/// Executes `operation`, retrying at most `max_retries` times.
///
/// The wait between attempts yields to the runtime. Cancellation is only
/// possible by dropping the returned future.
pub async fn execute_with_retries<C, T, F, Fut>(cluster: &C, mut operation: F, max_retries: u32) -> Result<T, Error>
where
    C: AsyncCluster + ?Sized,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    let mut retries = max_retries;
    loop {
        let error = match operation().await {
            Ok(result) => return Ok(result),
            Err(error) => error,
        };

        let classification = classify(&error);
        if !classification.is_retryable() {
            log_fatal(&error);
            return Err(error);
        }
        if classification == Classification::RetryWithWarning {
            log_runner_dead(&cluster.nodes(), retries);
        }

        if retries == 0 {
            log_exhausted(&error);
            return Err(error);
        }

        log_retry(retries, &cluster.nodes(), &cluster.seeds(), &cluster, &error);
        cluster.sleep(cluster.retry_interval()).await;
        cluster.refresh().await?;

        retries -= 1;
    }
}
