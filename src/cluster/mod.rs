//! Cluster collaborator contracts with sync/async support
//!
//! A cluster owns its membership and topology discovery. The retry executor
//! only reads its retry settings, describes it in diagnostics and asks it to
//! refresh between attempts.

mod options;

pub use options::{ClusterOptions, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_INTERVAL};

#[cfg(feature = "sync")]
pub mod sync;

#[cfg(feature = "async")]
pub mod r#async;

#[cfg(feature = "sync")]
pub use sync::Cluster;

#[cfg(feature = "async")]
pub use r#async::AsyncCluster;
