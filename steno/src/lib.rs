//! # `steno`
//!
//! A deferred-formatting binary logging engine for resource-constrained firmware.
//!
//! Human-readable format text never exists on the device at runtime. Each call site's
//! format string is interned at build time into a dedicated link section that is kept
//! out of loadable memory, and only a pointer-sized reference to it crosses the wire,
//! followed by the raw bytes of the runtime arguments. An offline tool with access to
//! the built artifact's debug data reconstructs readable log lines later.
//!
//! ## Properties
//!
//! - **No runtime formatting**: a log call is a threshold check, one timestamp read and
//!   a handful of small writes to a transport.
//! - **No allocation, no locks**: the call path is a plain synchronous sequence of
//!   writes, safe to invoke from thread and interrupt contexts alike. The only shared
//!   mutable state is the severity threshold, an atomic byte.
//! - **Compile-time validation**: the call-site macros check every format string
//!   against its arguments during macro expansion; a mismatch never reaches runtime.
//!
//! ## Basic usage
//!
//! A logger composes a [`Clock`] (timestamp capability) and a [`Transport`] (byte sink
//! capability). Both are supplied by the surrounding system:
//!
//! ```rust
//! use steno::time::TickClock;
//! use steno::{Logger, Transport, Write};
//!
//! struct Probe;
//! struct ProbeWriter;
//!
//! impl Write for ProbeWriter {
//!     fn write(&mut self, bytes: &[u8]) {
//!         // Hand the bytes to a ring buffer, debug probe, UART, ...
//!         let _ = bytes;
//!     }
//! }
//!
//! impl Transport for Probe {
//!     type Writer<'a>
//!         = ProbeWriter
//!     where
//!         Self: 'a;
//!
//!     fn writer(&self) -> Self::Writer<'_> {
//!         ProbeWriter
//!     }
//! }
//!
//! static LOGGER: Logger<TickClock, Probe> = Logger::new(TickClock::new(), Probe);
//!
//! steno::info!(LOGGER, "I am %d years old...", 28);
//! steno::debug!(LOGGER, "Is this %s or what?!", c"nice");
//! ```
//!
//! ## Wire format
//!
//! Every accepted call emits one record: an 8-byte timestamp followed by one encoding
//! block per argument, in call order, each as a separate transport write. There is no
//! framing, no length prefix and no checksum; the first argument of a macro-generated
//! record is always the call site's interned-text reference. See [`argument`] for the
//! per-kind encodings and [`intern`](mod@intern) for how references map back to text.
//!
//! ## Severity filtering
//!
//! [`Logger::set_level`] atomically replaces the threshold; calls below it return
//! before doing any work, and the macros skip evaluation of the argument expressions
//! entirely. [`Level::Off`] suppresses everything.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod argument;
mod encode;
pub mod intern;
pub mod level;
pub mod logger;
pub mod time;
pub mod transport;

pub use argument::{Argument, IntWidth};
pub use intern::{InternedString, InternedText};
pub use level::Level;
pub use logger::Logger;
pub use steno_macros::{debug, error, info, intern, warning};
pub use time::Clock;
pub use transport::{Transport, Write};
