//! Log severity levels and the atomic threshold cell.
//!
//! [`Level`] doubles as the runtime filter value and as the key that partitions
//! interned-text storage: each of the four loggable levels owns one `.steno.*`
//! link section (see [`crate::intern`]).

use core::sync::atomic::{AtomicU8, Ordering};

/// Log severity, ordered from most verbose to fully silent.
///
/// A call is emitted when its level is greater than or equal to the logger's
/// current threshold, so a threshold of [`Level::Debug`] shows everything and
/// [`Level::Off`] suppresses everything.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum Level {
    /// Detailed diagnostic output.
    Debug = 0,

    /// General operational information.
    Info = 1,

    /// Hazardous but recoverable situations.
    Warning = 2,

    /// Serious failures.
    Error = 3,

    /// Never the level of a record; as a threshold it suppresses all calls.
    Off = 4,
}

/// An atomically read and written [`Level`] cell.
///
/// Loads and stores are relaxed: a reader racing a [`store`](Self::store)
/// observes either the old or the new value, never a torn one. No stronger
/// ordering relative to in-flight log calls is provided or needed.
#[derive(Debug)]
pub struct AtomicLevel(AtomicU8);

impl AtomicLevel {
    /// Creates a cell holding `level`.
    pub const fn new(level: Level) -> Self {
        Self(AtomicU8::new(level as u8))
    }

    /// Returns the current level.
    pub fn load(&self) -> Level {
        from_u8(self.0.load(Ordering::Relaxed))
    }

    /// Replaces the current level.
    pub fn store(&self, level: Level) {
        self.0.store(level as u8, Ordering::Relaxed);
    }
}

/// Only fed from `Level as u8` stores, so every reachable value maps back.
const fn from_u8(value: u8) -> Level {
    match value {
        0 => Level::Debug,
        1 => Level::Info,
        2 => Level::Warning,
        3 => Level::Error,
        _ => Level::Off,
    }
}
