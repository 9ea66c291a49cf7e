//! Blocking retry executor

use super::common::{classify, log_exhausted, log_fatal, log_retry, log_runner_dead, Classification};
use crate::cluster::Cluster;
use crate::Error;

/// Executes `operation`, retrying up to the cluster's configured `max_retries`.
///
/// ```no_run
/// use cluster_retry::cluster::Cluster;
/// use cluster_retry::retry::blocking;
/// use cluster_retry::Error;
///
/// fn count_documents(cluster: &impl Cluster) -> Result<u64, Error> {
///     blocking::execute(cluster, || {
///         // send the command to the current primary
///         Ok(42)
///     })
/// }
/// ```
pub fn execute<C, T, F>(cluster: &C, operation: F) -> Result<T, Error>
where
    C: Cluster + ?Sized,
    F: FnMut() -> Result<T, Error>,
{
    execute_with_retries(cluster, operation, cluster.max_retries())
}

/// Executes `operation`, retrying at most `max_retries` times.
///
/// Before each retry the calling thread sleeps for the cluster's retry interval
/// and the cluster is refreshed. A refresh failure ends the loop and is returned
/// in place of the operation's error.
pub fn execute_with_retries<C, T, F>(cluster: &C, mut operation: F, max_retries: u32) -> Result<T, Error>
where
    C: Cluster + ?Sized,
    F: FnMut() -> Result<T, Error>,
{
    let mut retries = max_retries;
    loop {
        let error = match operation() {
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
        cluster.sleep(cluster.retry_interval());
        cluster.refresh()?;

        retries -= 1;
    }
}
