//! Bounded retry-with-refresh for operations executed against a replicated cluster.
//!
//! Operations sent to a replica set can fail because a connection dropped or
//! because the node they targeted stepped down. This crate decides which of
//! those failures are worth another attempt, asks the cluster to rediscover
//! its topology between attempts, and returns the original error once the
//! configured number of retries is used up.
//!
//! Membership discovery, the wire protocol and connection pooling belong to the
//! cluster implementation; it is plugged in through the [Cluster](cluster::Cluster)
//! trait (or [AsyncCluster](cluster::AsyncCluster) with the `async` feature).
//!
//!```no_run
//!     use std::time::Duration;
//!
//!     use cluster_retry::cluster::{Cluster, ClusterOptions};
//!     use cluster_retry::retry::blocking;
//!     use cluster_retry::Error;
//!
//!     #[derive(Debug)]
//!     struct ReplicaSet {
//!         options: ClusterOptions,
//!     }
//!
//!     impl Cluster for ReplicaSet {
//!         fn max_retries(&self) -> u32 {
//!             self.options.max_retries
//!         }
//!         fn retry_interval(&self) -> Duration {
//!             self.options.retry_interval
//!         }
//!         fn refresh(&self) -> Result<(), Error> {
//!             // ask the seeds for the current primary
//!             Ok(())
//!         }
//!         fn nodes(&self) -> Vec<String> {
//!             self.options.seeds.clone()
//!         }
//!         fn seeds(&self) -> Vec<String> {
//!             self.options.seeds.clone()
//!         }
//!     }
//!
//!     fn main() -> Result<(), Error> {
//!         let cluster = ReplicaSet { options: ClusterOptions::from_env() };
//!         let count = blocking::execute(&cluster, || Ok(42))?;
//!         println!("count: {count}");
//!         Ok(())
//!     }
//!```
//!
//! ## Features
//!
//! - `sync` (default): blocking executor in [retry::blocking].
//! - `async`: executor driven by tokio. When enabled, [retry::execute] is the async flavour.

/// Cluster collaborator contracts and retry configuration.
pub mod cluster;

/// Error taxonomy shared with the connection layer.
pub mod errors;

/// Failure classification and the retry executors.
pub mod retry;

#[cfg(test)]
pub(crate) mod stubs;

pub use errors::Error;

pub use cluster::ClusterOptions;
#[cfg(feature = "async")]
pub use cluster::AsyncCluster;
#[cfg(feature = "sync")]
pub use cluster::Cluster;
