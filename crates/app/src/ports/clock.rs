//! Clock port — where "now" comes from.

use growlight_domain::time::{self, Timestamp};

/// Supplies the current local date and time.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Wall clock of the machine running the daemon.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        time::now()
    }
}

impl<T: Clock> Clock for std::sync::Arc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
