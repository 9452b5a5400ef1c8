//! Asynchronous channel notifications.
//!
//! The host delivers two kinds of unsolicited notifications about a channel:
//! data has arrived, or the channel status changed. Both share the channel
//! identifier as their only correlation key, so they are one tagged type that
//! the session matches against its single tracked channel.

use crate::transport::ChannelId;

/// Bit set in a channel status word while the link is established.
///
/// A status notification with this bit clear means the channel has gone
/// inactive on the host side.
pub const LINK_ESTABLISHED: u16 = 0x8000;

/// An unsolicited channel notification from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelEvent {
    /// Inbound data is queued on the channel.
    DataAvailable {
        /// Channel the data arrived on.
        channel: ChannelId,
        /// Number of queued bytes the host announced.
        available: usize,
    },
    /// The channel status word changed.
    StatusChanged {
        /// Channel the status refers to.
        channel: ChannelId,
        /// New status word; see [`LINK_ESTABLISHED`].
        status: u16,
    },
}
