//! Retry logic for operations executed against a reconfiguring cluster
//!
//! A failed attempt is retried when it indicates a lost connection or a
//! primary change. Between attempts the executor sleeps for the cluster's
//! retry interval and asks the cluster to refresh its topology. The error of
//! the last attempt is returned unchanged once retries run out.

pub mod common;

#[cfg(feature = "sync")]
pub mod sync;

#[cfg(feature = "async")]
pub mod r#async;

pub use common::{classify, Classification};

/// Blocking retry executor for synchronous workflows.
#[cfg(feature = "sync")]
pub mod blocking {
    pub use super::sync::{execute, execute_with_retries};
}

// Re-export the appropriate executor based on feature selection
#[cfg(feature = "async")]
pub use r#async::{execute, execute_with_retries};
#[cfg(all(feature = "sync", not(feature = "async")))]
pub use sync::{execute, execute_with_retries};
