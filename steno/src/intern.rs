//! Build-time interned text and the references that stand in for it.
//!
//! Each call site's format text, prefixed with its source location to form a
//! `file@line@format` key, is baked into a [`InternedText`] static placed in one
//! of five severity-partitioned link sections:
//!
//! - `.steno.debug`, `.steno.info`, `.steno.warning`, `.steno.error` for the
//!   four loggable levels, and
//! - `.steno.user` for text interned explicitly with [`intern!`](crate::intern!).
//!
//! The shipped `steno.x` linker fragment marks these sections as information-only,
//! so the text is present in the built artifact for offline inspection but never
//! loaded into device memory. What the runtime handles, and what appears on the
//! wire, is only the [`InternedString`] handle: the address of the interned bytes.
//!
//! Keying on source location as well as text means two call sites that share a
//! format string still produce distinct records, so the decoder can always
//! recover the origin of a record. Every expansion also creates its own static,
//! and distinct statics have distinct addresses, so uniqueness holds even for
//! two invocations on the same source line.

/// NUL-terminated interned text bytes, sized at the call site.
///
/// Constructed exclusively in const context by the call-site macros; the value
/// is immutable for the lifetime of the program and `N` is always the text
/// length plus the terminator.
#[derive(Debug)]
pub struct InternedText<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> InternedText<N> {
    /// Copies `text` and appends the NUL terminator.
    ///
    /// Fails the build if `N` is not `text.len() + 1`; the macros always
    /// compute `N` from the same text, so this cannot fire for generated code.
    pub const fn new(text: &str) -> Self {
        let source = text.as_bytes();
        assert!(
            source.len() + 1 == N,
            "interned text does not fit its storage"
        );
        let mut bytes = [0u8; N];
        let mut index = 0;
        while index < source.len() {
            bytes[index] = source[index];
            index += 1;
        }
        Self { bytes }
    }

    /// Returns the stored bytes, terminator included.
    pub const fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the fixed-size handle for this entry.
    pub fn reference(&'static self) -> InternedString {
        InternedString {
            address: self.bytes.as_ptr(),
        }
    }
}

/// A fixed-size reference to one interned-text entry.
///
/// The handle is the address of the entry's bytes within the artifact.
/// Equality is address identity: references from different call sites never
/// compare equal, even when their text does.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct InternedString {
    address: *const u8,
}

impl InternedString {
    /// Returns the handle as the raw value encoded on the wire.
    pub fn to_raw(self) -> usize {
        self.address as usize
    }
}

// SAFETY: the address points into an immutable static; sharing it between
// execution contexts cannot observe or cause a data race.
unsafe impl Send for InternedString {}

// SAFETY: see the `Send` impl above.
unsafe impl Sync for InternedString {}
