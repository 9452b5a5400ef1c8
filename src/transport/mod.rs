//! Host transport seam for Bearer Independent Protocol (BIP) operations.
//!
//! The physical link is owned by the host platform. Every interaction with it
//! is one blocking command/response round trip: a structured request goes out,
//! control returns only once the host has answered with a general result code.
//! This module defines the trait at that seam plus the wire-level types shared
//! by the channel manager, the chunked stream writer/reader and the event
//! dispatcher.

#![allow(missing_docs)]
#![deny(unsafe_code)]

/// Common error type for transport operations
pub mod error;

/// Channel open/close round trips
pub mod channel;

/// Chunked send and drain over an open channel
pub mod stream;

/// Asynchronous channel notifications
pub mod event;

/// Largest payload carried by a single SEND DATA round trip, in bytes.
pub const MAX_FRAME: usize = 160;

/// Largest fragment requested by a single RECEIVE DATA round trip, in bytes.
pub const MAX_READ: usize = 160;

/// Channel buffer size hint passed to the host when opening a channel.
pub const BUFFER_SIZE_HINT: u16 = 1500;

/// Identifier of a host-managed bearer channel.
///
/// The host assigns identifiers in `1..=255`; zero means "no open channel"
/// and is used by the session to track the idle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelId(pub u8);

impl ChannelId {
    /// The reserved "no channel" identifier.
    pub const NONE: ChannelId = ChannelId(0);

    /// Whether this identifier refers to an open channel.
    pub fn is_open(self) -> bool {
        self.0 != 0
    }
}

/// General result code of one command/response exchange.
///
/// `0x00` means the host performed the command; any other value is a
/// host-specific reason code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneralResult(pub u8);

impl GeneralResult {
    /// Command performed successfully.
    pub const PERFORMED: GeneralResult = GeneralResult(0x00);

    /// Whether the host performed the command.
    pub fn is_performed(self) -> bool {
        self == Self::PERFORMED
    }
}

/// Bearer selected when opening a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BearerKind {
    /// Datagram transport (UDP).
    Datagram,
    /// Stream transport (TCP).
    Stream,
}

/// Structured OPEN CHANNEL request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenRequest {
    /// Requested bearer.
    pub bearer: BearerKind,
    /// Channel buffer size hint.
    pub buffer_size: u16,
    /// Raw 4-byte destination address.
    pub address: [u8; 4],
    /// Transport-level destination port.
    pub port: u16,
}

/// Host response to an OPEN CHANNEL request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenResponse {
    /// General result of the exchange.
    pub result: GeneralResult,
    /// Channel identifier assigned by the host; meaningful only when the
    /// command was performed.
    pub channel: ChannelId,
}

/// Host response to a RECEIVE DATA request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Received {
    /// General result of the exchange.
    pub result: GeneralResult,
    /// Number of fragment bytes the host copied into the caller's buffer.
    pub len: usize,
    /// Host-reported hint of how many bytes remain queued on the channel.
    pub remaining: usize,
}

/// One blocking command/response exchange per method with the host platform.
///
/// Implementations wrap whatever mechanism reaches the host (proactive
/// command handlers on a UICC, an IPC bridge in a simulator, a scripted mock
/// in tests). Methods never fail at the Rust level: every exchange completes
/// with a [`GeneralResult`] and the caller interprets non-performed codes.
/// Timeouts are the host's responsibility.
pub trait HostTransport {
    /// Issue an OPEN CHANNEL command and block for the host's response.
    fn open_channel(&mut self, request: &OpenRequest) -> OpenResponse;

    /// Issue a CLOSE CHANNEL command for `channel`.
    fn close_channel(&mut self, channel: ChannelId) -> GeneralResult;

    /// Issue a SEND DATA command carrying exactly one frame.
    ///
    /// The frame is at most [`MAX_FRAME`] bytes; callers must not issue the
    /// next frame before this exchange has returned.
    fn send_data(&mut self, channel: ChannelId, frame: &[u8]) -> GeneralResult;

    /// Issue a RECEIVE DATA command for up to `requested` bytes.
    ///
    /// The host copies the returned fragment into `out` and reports how many
    /// bytes remain queued. `out` is at least [`MAX_READ`] bytes.
    fn receive_data(&mut self, channel: ChannelId, requested: usize, out: &mut [u8]) -> Received;
}
