use chrono::{DateTime, Duration, Local};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Source of wall-clock timestamps for a typing session
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Production clock backed by the host wall clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same offset, so a host can keep one handle while the
/// session owns another.
#[derive(Clone, Debug)]
pub struct ManualClock {
    base: DateTime<Local>,
    offset_ms: Arc<AtomicI64>,
}

impl ManualClock {
    pub fn new(base: DateTime<Local>) -> Self {
        Self {
            base,
            offset_ms: Arc::new(AtomicI64::new(0)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset_ms
            .fetch_add(by.num_milliseconds(), Ordering::SeqCst);
    }

    pub fn advance_secs(&self, secs: i64) {
        self.advance(Duration::seconds(secs));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Local::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        self.base + Duration::milliseconds(self.offset_ms.load(Ordering::SeqCst))
    }
}
