//! Channel lifecycle round trips.
//!
//! A channel is opened with a single structured request and closed with a
//! best-effort request. There is no retry path: a rejected open surfaces the
//! host's reason code and the caller decides what to do.

use crate::transport::error::Error;
use crate::transport::{BUFFER_SIZE_HINT, BearerKind, ChannelId, HostTransport, OpenRequest};

/// Open a bearer channel to `address:port`.
///
/// Issues one OPEN CHANNEL exchange with the standard buffer size hint and
/// returns the host-assigned identifier. A non-performed result, or a
/// performed result without a usable identifier, is [`Error::OpenRejected`]
/// with the host's reason code.
pub fn open<T: HostTransport>(
    transport: &mut T,
    bearer: BearerKind,
    address: [u8; 4],
    port: u16,
) -> Result<ChannelId, Error> {
    let response = transport.open_channel(&OpenRequest {
        bearer,
        buffer_size: BUFFER_SIZE_HINT,
        address,
        port,
    });

    if response.result.is_performed() && response.channel.is_open() {
        Ok(response.channel)
    } else {
        Err(Error::OpenRejected(response.result.0))
    }
}

/// Close a bearer channel, best effort.
///
/// A no-op for [`ChannelId::NONE`]; the host's result is deliberately
/// ignored, closing never surfaces an error.
pub fn close<T: HostTransport>(transport: &mut T, channel: ChannelId) {
    if channel.is_open() {
        let _ = transport.close_channel(channel);
    }
}
