//! The logger facade: severity gate, encoder and capabilities composed.

use crate::argument::Argument;
use crate::encode::encode_record;
use crate::level::{AtomicLevel, Level};
use crate::time::Clock;
use crate::transport::Transport;

/// A logger composing the severity gate, a [`Clock`] and a [`Transport`].
///
/// The logger owns no buffers and no queues; its only mutable state is the
/// atomic severity threshold, so a `Logger` in a `static` is shared freely
/// between threads and interrupt handlers without further synchronization.
/// Per call it has exactly two observable outcomes: suppressed (no side
/// effects at all) or emitting (one encoded record on the transport).
///
/// The threshold starts at [`Level::Debug`], everything enabled.
///
/// # Examples
///
/// ```rust
/// use steno::time::TickClock;
/// use steno::{Level, Logger, Transport, Write};
///
/// struct Null;
/// struct NullWriter;
/// # impl Write for NullWriter { fn write(&mut self, _bytes: &[u8]) {} }
/// # impl Transport for Null {
/// #     type Writer<'a>
/// #         = NullWriter
/// #     where
/// #         Self: 'a;
/// #     fn writer(&self) -> Self::Writer<'_> { NullWriter }
/// # }
///
/// static LOGGER: Logger<TickClock, Null> = Logger::new(TickClock::new(), Null);
///
/// LOGGER.set_level(Level::Warning);
/// steno::error!(LOGGER, "Oh boy, error %d just happened", 234556);
/// steno::info!(LOGGER, "suppressed, below the threshold");
/// ```
#[derive(Debug)]
pub struct Logger<C, T> {
    level: AtomicLevel,
    clock: C,
    transport: T,
}

impl<C, T> Logger<C, T>
where
    C: Clock,
    T: Transport,
{
    /// Creates a logger over the given capabilities, threshold [`Level::Debug`].
    pub const fn new(clock: C, transport: T) -> Self {
        Self {
            level: AtomicLevel::new(Level::Debug),
            clock,
            transport,
        }
    }

    /// Replaces the severity threshold.
    ///
    /// Takes effect atomically but without ordering relative to in-flight
    /// calls: a call already past its gate is unaffected, and an unsynchronized
    /// concurrent call may observe either the old or the new value.
    pub fn set_level(&self, level: Level) {
        self.level.store(level);
    }

    /// Returns the current severity threshold.
    pub fn level(&self) -> Level {
        self.level.load()
    }

    /// Returns whether a call at `level` would currently be emitted.
    ///
    /// The call-site macros consult this before evaluating any argument
    /// expressions, so suppressed calls cost one atomic load and a compare.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level.load()
    }

    /// Emits one record, unless `level` is below the current threshold.
    ///
    /// Prefer the macros; they validate the format string at compile time,
    /// intern it, and prepend its reference to `arguments`. This method is the
    /// raw entry point they expand to: it re-checks the gate, reads the clock
    /// once, obtains a fresh writer from the transport, and performs exactly
    /// one write for the timestamp plus one per argument. It never blocks and
    /// reports nothing; `level` is never [`Level::Off`] for macro-generated
    /// calls.
    pub fn log(&self, level: Level, arguments: &[Argument<'_>]) {
        if !self.enabled(level) {
            return;
        }
        let timestamp = self.clock.timestamp();
        let mut writer = self.transport.writer();
        encode_record(&mut writer, timestamp, arguments);
    }
}
