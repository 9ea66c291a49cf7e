//! Failure classification shared by the sync and async retry loops
//!
//! Retry eligibility is decided from the error kind and, for two kinds, from
//! literal substrings of the server message. The wording is an upstream
//! contract: if the server rephrases these messages the failures stop being
//! retried.

use std::fmt::Debug;

use log::{debug, info, warn};

use crate::Error;

/// Message fragments reported by a node that is no longer the primary
pub const MASTER_CHANGE_SIGNATURES: [&str; 2] = ["not master", "Not primary"];

/// Message fragment of a transient server-side cursor runner failure
pub const RUNNER_DEAD_SIGNATURE: &str = "RUNNER_DEAD";

/// How a failed attempt should be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Retry after refreshing the cluster.
    Retry,
    /// Retry after refreshing the cluster, reporting the failure as a warning.
    RetryWithWarning,
    /// Return the error to the caller.
    Fatal,
}

impl Classification {
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Classification::Fatal)
    }
}

/// Classifies a failed attempt.
///
/// Only the base `PotentialReconfiguration` kind is checked for a master change;
/// its specialisations such as `QueryFailure` are fatal.
pub fn classify(error: &Error) -> Classification {
    match error {
        Error::ConnectionFailure(_) => Classification::Retry,
        Error::PotentialReconfiguration(message) if is_master_change(message) => Classification::Retry,
        Error::OperationFailure(message) if message.contains(RUNNER_DEAD_SIGNATURE) => Classification::RetryWithWarning,
        _ => Classification::Fatal,
    }
}

fn is_master_change(message: &str) -> bool {
    MASTER_CHANGE_SIGNATURES.iter().any(|signature| message.contains(signature))
}

pub(crate) fn log_fatal(error: &Error) {
    debug!("not retrying {}: {error}", error.kind_name());
}

pub(crate) fn log_runner_dead(nodes: &[String], retries: u32) {
    warn!("got {RUNNER_DEAD_SIGNATURE} on {nodes:?}, retries is {retries}");
}

pub(crate) fn log_exhausted(error: &Error) {
    debug!("retries exhausted, giving up on {}: {error}", error.kind_name());
}

pub(crate) fn log_retry(retries: u32, nodes: &[String], seeds: &[String], cluster: &dyn Debug, error: &Error) {
    info!("retrying operation {retries} more time(s), nodes is {nodes:?}, seeds are {seeds:?}, cluster is {cluster:?}. error is {error:?}");
}
