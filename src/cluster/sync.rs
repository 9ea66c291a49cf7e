//! Blocking cluster contract

use std::fmt::Debug;
use std::thread;
use std::time::Duration;

use crate::Error;

/// A replicated cluster the retry executor can query and refresh.
///
/// The `Debug` representation is included in retry diagnostics.
pub trait Cluster: Debug {
    /// Number of retries allowed after the first attempt.
    fn max_retries(&self) -> u32;

    /// Delay before each retry.
    fn retry_interval(&self) -> Duration;

    /// Re-discovers the cluster topology, e.g. to find a newly elected primary.
    ///
    /// May perform network I/O. Called repeatedly, so it must be safe to call
    /// more than once.
    fn refresh(&self) -> Result<(), Error>;

    /// Addresses of the current members.
    fn nodes(&self) -> Vec<String>;

    /// Addresses used to bootstrap discovery.
    fn seeds(&self) -> Vec<String>;

    /// Blocks the calling thread between attempts.
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration)
    }
}
