//! The timestamp capability.
//!
//! Timestamps head every record but carry no global-ordering promise: two
//! records produced concurrently from different execution contexts may carry
//! timestamps in either order. "Distinct enough to be useful" is the contract.

use core::sync::atomic::{AtomicU64, Ordering};

/// A timestamp source for log records.
///
/// Implementations must be reentrant and lock-free: [`timestamp`](Self::timestamp)
/// is called from arbitrary execution contexts, including interrupt handlers
/// that may have preempted another call already inside it.
pub trait Clock {
    /// Returns the current timestamp value.
    fn timestamp(&self) -> u64;
}

/// A [`Clock`] backed by an atomic counter.
///
/// The simplest conforming source for targets without a usable hardware timer:
/// every record gets a distinct, monotonically assigned value whose unit is
/// "log records so far" rather than time.
///
/// # Examples
///
/// ```rust
/// use steno::time::{Clock, TickClock};
///
/// let clock = TickClock::new();
/// assert_ne!(clock.timestamp(), clock.timestamp());
/// ```
#[derive(Debug)]
pub struct TickClock {
    counter: AtomicU64,
}

impl TickClock {
    /// Creates a clock starting at zero.
    pub const fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TickClock {
    fn timestamp(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed)
    }
}
