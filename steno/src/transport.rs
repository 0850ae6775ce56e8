//! The transport capability that moves record bytes off the device.
//!
//! The core is fire-and-forget by design: [`Write::write`] has no return value
//! and the logger never blocks, retries or reports on behalf of the transport.
//! A full or failing transport silently drops bytes; that tradeoff keeps every
//! call site non-blocking and is deliberate.
//!
//! Whether a transport is safe to use from multiple execution contexts, and
//! what ordering its writes provide beyond the per-record write order, is
//! entirely the transport's business.

/// A byte sink for the fields of a single record.
pub trait Write {
    /// Consumes one encoded field. Failures are absorbed, not reported.
    fn write(&mut self, bytes: &[u8]);
}

impl<W> Write for &mut W
where
    W: Write,
{
    fn write(&mut self, bytes: &[u8]) {
        (**self).write(bytes);
    }
}

/// A source of per-record writers.
///
/// The logger obtains a fresh writer for every accepted record, which lets a
/// transport hand out a guard, claim an internal channel, or emit framing per
/// record without the core knowing about any of it.
pub trait Transport {
    /// The writer handed out for one record.
    type Writer<'a>: Write
    where
        Self: 'a;

    /// Returns the writer for the next record.
    fn writer(&self) -> Self::Writer<'_>;
}
