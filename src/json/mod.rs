//! Flat single-level JSON object encoder.
//!
//! Builds `{"k1":"v1","k2":"v2"}` style objects directly into a fixed buffer
//! from borrowed byte spans, with no intermediate allocation. Only
//! string-typed members are supported. Bytes that would require JSON escaping
//! are rejected rather than emitted verbatim, so the output is always valid
//! JSON.

use heapless::Vec;

use crate::transport::error::Error;

/// One key/value member of a JSON object, as borrowed byte spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member<'a> {
    /// Member key, without quotes.
    pub key: &'a [u8],
    /// Member value, without quotes.
    pub value: &'a [u8],
}

/// Encode `members` as a JSON object into `out`, in input order.
///
/// Emits the opening brace, each member as `"key":"value"` separated by
/// commas with no trailing comma, and the closing brace. Fails with
/// [`Error::BufferOverflow`] when `out` runs out of capacity and with
/// [`Error::InvalidCharacter`] when a key or value contains a quote, a
/// backslash, a control byte or a non-ASCII byte.
pub fn build_object<const N: usize>(members: &[Member<'_>], out: &mut Vec<u8, N>) -> Result<(), Error> {
    push(out, b'{')?;
    for (index, member) in members.iter().enumerate() {
        if index > 0 {
            push(out, b',')?;
        }
        append_string(out, member.key)?;
        push(out, b':')?;
        append_string(out, member.value)?;
    }
    push(out, b'}')
}

/// Append one quoted JSON string.
fn append_string<const N: usize>(out: &mut Vec<u8, N>, text: &[u8]) -> Result<(), Error> {
    for &byte in text {
        if !is_plain(byte) {
            return Err(Error::InvalidCharacter);
        }
    }
    push(out, b'"')?;
    out.extend_from_slice(text)
        .map_err(|_| Error::BufferOverflow)?;
    push(out, b'"')
}

/// Printable ASCII that needs no escaping inside a JSON string.
fn is_plain(byte: u8) -> bool {
    (0x20..0x7f).contains(&byte) && byte != b'"' && byte != b'\\'
}

fn push<const N: usize>(out: &mut Vec<u8, N>, byte: u8) -> Result<(), Error> {
    out.push(byte).map_err(|_| Error::BufferOverflow)
}
