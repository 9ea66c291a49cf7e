//! Test doubles for the cluster collaborator and the log sink

use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};
use std::time::Duration;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::cluster::ClusterOptions;
use crate::Error;

/// Records sleeps and refreshes instead of performing them.
#[derive(Debug, Default)]
pub(crate) struct ClusterStub {
    pub options: ClusterOptions,
    pub nodes: Vec<String>,
    pub refresh_count: AtomicUsize,
    pub sleeps: Mutex<Vec<Duration>>,
    /// When set, the refresh with this 1-based index fails with a connection failure.
    pub fail_refresh_at: Option<usize>,
}

impl ClusterStub {
    pub fn new(max_retries: u32, retry_interval: Duration) -> Self {
        Self {
            options: ClusterOptions::default()
                .with_max_retries(max_retries)
                .with_retry_interval(retry_interval)
                .with_seeds(["127.0.0.1:27017"]),
            nodes: vec!["127.0.0.1:27017".to_string(), "127.0.0.1:27018".to_string()],
            ..Default::default()
        }
    }

    pub fn failing_refresh_at(mut self, refresh: usize) -> Self {
        self.fail_refresh_at = Some(refresh);
        self
    }

    pub fn refreshes(&self) -> usize {
        self.refresh_count.load(Ordering::SeqCst)
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }

    fn record_refresh(&self) -> Result<(), Error> {
        let refresh = self.refresh_count.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_refresh_at == Some(refresh) {
            return Err(Error::ConnectionFailure("no seed reachable".to_string()));
        }
        Ok(())
    }

    fn record_sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}

#[cfg(feature = "sync")]
impl crate::cluster::Cluster for ClusterStub {
    fn max_retries(&self) -> u32 {
        self.options.max_retries
    }

    fn retry_interval(&self) -> Duration {
        self.options.retry_interval
    }

    fn refresh(&self) -> Result<(), Error> {
        self.record_refresh()
    }

    fn nodes(&self) -> Vec<String> {
        self.nodes.clone()
    }

    fn seeds(&self) -> Vec<String> {
        self.options.seeds.clone()
    }

    fn sleep(&self, duration: Duration) {
        self.record_sleep(duration)
    }
}

#[cfg(feature = "async")]
#[async_trait::async_trait]
impl crate::cluster::AsyncCluster for ClusterStub {
    fn max_retries(&self) -> u32 {
        self.options.max_retries
    }

    fn retry_interval(&self) -> Duration {
        self.options.retry_interval
    }

    async fn refresh(&self) -> Result<(), Error> {
        self.record_refresh()
    }

    fn nodes(&self) -> Vec<String> {
        self.nodes.clone()
    }

    fn seeds(&self) -> Vec<String> {
        self.options.seeds.clone()
    }

    async fn sleep(&self, duration: Duration) {
        self.record_sleep(duration)
    }
}

thread_local! {
    static LOG_RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

static LOGGER: CapturingLogger = CapturingLogger;
static LOGGER_INIT: Once = Once::new();

/// Records this crate's log output per thread so parallel tests do not interfere.
struct CapturingLogger;

impl Log for CapturingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            LOG_RECORDS.with(|records| records.borrow_mut().push((record.level(), record.args().to_string())));
        }
    }

    fn flush(&self) {}
}

/// Installs the capturing logger and clears records captured on this thread.
pub(crate) fn capture_logs() {
    LOGGER_INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });
    LOG_RECORDS.with(|records| records.borrow_mut().clear());
}

/// Messages captured on this thread at exactly `level`.
pub(crate) fn captured_logs(level: Level) -> Vec<String> {
    LOG_RECORDS.with(|records| {
        records
            .borrow()
            .iter()
            .filter(|(record_level, _)| *record_level == level)
            .map(|(_, message)| message.clone())
            .collect()
    })
}
