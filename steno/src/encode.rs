//! The flat wire encoding of one log record.
//!
//! A record is `[timestamp: 8 bytes][arg_1]...[arg_n]` with no framing, no
//! length prefixes and no checksum; any framing belongs to the transport.
//! Each field is handed to the writer as one distinct write, so a record of
//! `n` arguments always performs exactly `n + 1` writes. Integers are encoded
//! in native byte order.

use crate::argument::{Argument, IntWidth};
use crate::transport::Write;

/// Serializes the timestamp and the arguments, in order, one write per field.
pub(crate) fn encode_record<W>(writer: &mut W, timestamp: u64, arguments: &[Argument<'_>])
where
    W: Write,
{
    writer.write(&timestamp.to_ne_bytes());
    for argument in arguments {
        encode_argument(writer, argument);
    }
}

fn encode_argument<W>(writer: &mut W, argument: &Argument<'_>)
where
    W: Write,
{
    match *argument {
        Argument::Str(value) => writer.write(value.to_bytes_with_nul()),
        Argument::Unsigned { value, width } => match width {
            IntWidth::W1 => writer.write(&(value as u8).to_ne_bytes()),
            IntWidth::W2 => writer.write(&(value as u16).to_ne_bytes()),
            IntWidth::W4 => writer.write(&(value as u32).to_ne_bytes()),
            IntWidth::W8 => writer.write(&value.to_ne_bytes()),
        },
        Argument::Signed { value, width } => match width {
            IntWidth::W1 => writer.write(&(value as i8).to_ne_bytes()),
            IntWidth::W2 => writer.write(&(value as i16).to_ne_bytes()),
            IntWidth::W4 => writer.write(&(value as i32).to_ne_bytes()),
            IntWidth::W8 => writer.write(&value.to_ne_bytes()),
        },
        Argument::Interned(reference) => writer.write(&reference.to_raw().to_ne_bytes()),
        Argument::Pointer(pointer) => writer.write(&(pointer as usize).to_ne_bytes()),
    }
}
