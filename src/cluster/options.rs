//! Retry configuration carried by a cluster.
//!
//! Values can be overridden from the environment:
//! CLUSTER_RETRY_MAX_RETRIES   number of retries after the first attempt, e.g. 5
//! CLUSTER_RETRY_INTERVAL_MS   delay between attempts in milliseconds, e.g. 500
//! CLUSTER_RETRY_SEEDS         comma separated seed addresses, e.g. 127.0.0.1:27017,127.0.0.1:27018

use std::env;
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Default number of retries after the first attempt
pub const DEFAULT_MAX_RETRIES: u32 = 20;

/// Default delay between attempts
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_millis(250);

pub(crate) const MAX_RETRIES_VAR: &str = "CLUSTER_RETRY_MAX_RETRIES";
pub(crate) const RETRY_INTERVAL_VAR: &str = "CLUSTER_RETRY_INTERVAL_MS";
pub(crate) const SEEDS_VAR: &str = "CLUSTER_RETRY_SEEDS";

/// Retry settings for operations executed against a cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterOptions {
    /// Number of retries after the first attempt.
    pub max_retries: u32,
    /// Delay before each retry.
    #[serde(rename = "retry_interval_ms", with = "duration_millis")]
    pub retry_interval: Duration,
    /// Addresses used to bootstrap topology discovery.
    pub seeds: Vec<String>,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            retry_interval: DEFAULT_RETRY_INTERVAL,
            seeds: Vec::new(),
        }
    }
}

impl ClusterOptions {
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_retry_interval(mut self, retry_interval: Duration) -> Self {
        self.retry_interval = retry_interval;
        self
    }

    pub fn with_seeds<I, S>(mut self, seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.seeds = seeds.into_iter().map(Into::into).collect();
        self
    }

    /// Defaults overlaid with the environment. Malformed values are logged and ignored.
    pub fn from_env() -> Self {
        let mut options = Self::default();

        match parse_var::<u32>(MAX_RETRIES_VAR) {
            Ok(Some(max_retries)) => options.max_retries = max_retries,
            Ok(None) => {}
            Err(err) => warn!("ignoring {MAX_RETRIES_VAR}: {err}"),
        }

        match parse_var::<u64>(RETRY_INTERVAL_VAR) {
            Ok(Some(millis)) => options.retry_interval = Duration::from_millis(millis),
            Ok(None) => {}
            Err(err) => warn!("ignoring {RETRY_INTERVAL_VAR}: {err}"),
        }

        if let Some(seeds) = seeds_var() {
            options.seeds = seeds;
        }

        options
    }

    /// Defaults overlaid with the environment, failing on malformed values.
    pub fn try_from_env() -> Result<Self, Error> {
        let mut options = Self::default();

        if let Some(max_retries) = parse_var::<u32>(MAX_RETRIES_VAR)? {
            options.max_retries = max_retries;
        }
        if let Some(millis) = parse_var::<u64>(RETRY_INTERVAL_VAR)? {
            options.retry_interval = Duration::from_millis(millis);
        }
        if let Some(seeds) = seeds_var() {
            options.seeds = seeds;
        }

        Ok(options)
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>, Error>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|err| Error::InvalidArgument(format!("{name}={value:?}: {err}"))),
        Err(_) => Ok(None),
    }
}

fn seeds_var() -> Option<Vec<String>> {
    let value = env::var(SEEDS_VAR).ok()?;
    let seeds: Vec<String> = value.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect();

    if seeds.is_empty() {
        None
    } else {
        Some(seeds)
    }
}

mod duration_millis {
    use std::time::Duration;

    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(duration.as_millis()).map_err(|_| S::Error::custom("retry interval exceeds u64 milliseconds"))?;
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
