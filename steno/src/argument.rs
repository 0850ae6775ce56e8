//! The tagged runtime value model.
//!
//! Every value logged at a call site becomes one [`Argument`], drawn from a
//! closed set of categories. The tag determines the wire encoding but is not
//! itself transmitted: the offline decoder already knows the expected argument
//! sequence of every call site from its format string, so the wire carries
//! nothing but raw value bytes.
//!
//! Arguments are transient; they are constructed by the call-site macros (which
//! have already proven that each category matches its conversion specifier) and
//! consumed within the same call.

use core::ffi::CStr;

use crate::intern::InternedString;

/// The byte width of an encoded integer argument.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum IntWidth {
    /// One byte.
    W1 = 1,

    /// Two bytes.
    W2 = 2,

    /// Four bytes.
    W4 = 4,

    /// Eight bytes.
    W8 = 8,
}

impl IntWidth {
    /// Returns the width in bytes.
    pub const fn bytes(self) -> usize {
        self as usize
    }
}

/// One tagged value logged at a fixed position within a call.
///
/// | Variant | Bytes on the wire |
/// |---|---|
/// | `Str` | content plus the NUL terminator |
/// | `Unsigned` / `Signed` | exactly `width` bytes, native byte order |
/// | `Interned` | the handle, pointer-sized |
/// | `Pointer` | the address, pointer-sized |
#[derive(Copy, Clone, Debug)]
pub enum Argument<'a> {
    /// A NUL-terminated string valid for the duration of the call.
    Str(&'a CStr),

    /// An unsigned integer truncated to `width` bytes on the wire.
    Unsigned {
        /// The value, zero-extended.
        value: u64,
        /// The encoded width.
        width: IntWidth,
    },

    /// A signed integer truncated to `width` bytes on the wire.
    Signed {
        /// The value, sign-extended.
        value: i64,
        /// The encoded width.
        width: IntWidth,
    },

    /// A reference to build-time interned text.
    Interned(InternedString),

    /// An opaque address.
    Pointer(*const ()),
}

impl<'a> Argument<'a> {
    /// Tags a NUL-terminated string; encoded as content plus terminator.
    pub fn string(value: &'a CStr) -> Self {
        Argument::Str(value)
    }
}

impl Argument<'static> {
    /// Tags a one-byte unsigned integer.
    pub fn unsigned8(value: u8) -> Self {
        Argument::Unsigned {
            value: value as u64,
            width: IntWidth::W1,
        }
    }

    /// Tags a two-byte unsigned integer.
    pub fn unsigned16(value: u16) -> Self {
        Argument::Unsigned {
            value: value as u64,
            width: IntWidth::W2,
        }
    }

    /// Tags a four-byte unsigned integer.
    pub fn unsigned32(value: u32) -> Self {
        Argument::Unsigned {
            value: value as u64,
            width: IntWidth::W4,
        }
    }

    /// Tags an eight-byte unsigned integer.
    pub fn unsigned64(value: u64) -> Self {
        Argument::Unsigned {
            value,
            width: IntWidth::W8,
        }
    }

    /// Tags a one-byte signed integer.
    pub fn signed8(value: i8) -> Self {
        Argument::Signed {
            value: value as i64,
            width: IntWidth::W1,
        }
    }

    /// Tags a two-byte signed integer.
    pub fn signed16(value: i16) -> Self {
        Argument::Signed {
            value: value as i64,
            width: IntWidth::W2,
        }
    }

    /// Tags a four-byte signed integer.
    pub fn signed32(value: i32) -> Self {
        Argument::Signed {
            value: value as i64,
            width: IntWidth::W4,
        }
    }

    /// Tags an eight-byte signed integer.
    pub fn signed64(value: i64) -> Self {
        Argument::Signed {
            value,
            width: IntWidth::W8,
        }
    }

    /// Tags an interned-text reference.
    pub fn interned(value: InternedString) -> Self {
        Argument::Interned(value)
    }

    /// Tags a raw pointer; only the address is encoded.
    pub fn pointer<T>(value: *const T) -> Self {
        Argument::Pointer(value.cast())
    }
}

impl Argument<'_> {
    /// Returns the number of bytes this argument occupies on the wire.
    pub fn encoded_len(&self) -> usize {
        match self {
            Argument::Str(value) => value.to_bytes_with_nul().len(),
            Argument::Unsigned { width, .. } | Argument::Signed { width, .. } => width.bytes(),
            Argument::Interned(_) | Argument::Pointer(_) => size_of::<usize>(),
        }
    }
}
