//! Common error types for BIP transport operations

/// A common error type for BIP transport and message-building operations.
///
/// This enum defines the failures that can surface while opening a channel,
/// sending a request or assembling its bytes. It is designed to be simple and
/// portable for `no_std` environments.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The host refused to open a channel; carries the host's reason code.
    OpenRejected(u8),
    /// A SEND DATA frame was not performed. The channel has already been
    /// closed by the time this error is observed.
    SendFailed,
    /// A write would exceed the capacity of a fixed buffer.
    BufferOverflow,
    /// A JSON key or value contains a byte that would require escaping.
    InvalidCharacter,
}

impl Error {
    /// Diagnostic reason code reported alongside this error.
    ///
    /// Open rejections carry the host's own code; the remaining kinds map to
    /// fixed codes in the `0x7000` user-error range.
    pub fn reason(self) -> u16 {
        match self {
            Error::OpenRejected(code) => code as u16,
            Error::SendFailed => 0x7003,
            Error::BufferOverflow => 0x7004,
            Error::InvalidCharacter => 0x7005,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::OpenRejected(code) => defmt::write!(f, "OpenRejected({=u8})", code),
            Error::SendFailed => defmt::write!(f, "SendFailed"),
            Error::BufferOverflow => defmt::write!(f, "BufferOverflow"),
            Error::InvalidCharacter => defmt::write!(f, "InvalidCharacter"),
        }
    }
}
