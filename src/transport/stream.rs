//! Chunked data transfer over an open channel.
//!
//! The host accepts one bounded frame per round trip in either direction, so
//! a payload longer than [`MAX_FRAME`] is split across multiple strictly
//! sequential exchanges. There is no pipelining: each frame's result is
//! observed before the next frame is issued.

use heapless::Vec;

use crate::transport::error::Error;
use crate::transport::{ChannelId, HostTransport, MAX_FRAME, MAX_READ, channel};

/// Send `data` over `channel` in frames of at most [`MAX_FRAME`] bytes.
///
/// Frames go out in increasing offset order; the cursor advances only after
/// the host confirms the frame. On the first non-performed frame the channel
/// is closed immediately and the call fails with [`Error::SendFailed`], so a
/// session never survives a partial, unacknowledged write.
pub fn send_all<T: HostTransport>(
    transport: &mut T,
    channel: ChannelId,
    data: &[u8],
) -> Result<(), Error> {
    for frame in data.chunks(MAX_FRAME) {
        if !transport.send_data(channel, frame).is_performed() {
            channel::close(transport, channel);
            return Err(Error::SendFailed);
        }
    }
    Ok(())
}

/// Drain inbound data announced on `channel` into `dest`.
///
/// Requests fragments of at most [`MAX_READ`] bytes, starting from the
/// `announced` length of the notification and following the host's
/// remaining-length hint after every fragment. A fragment that would exceed
/// the capacity of `dest` is [`Error::BufferOverflow`] and is not written,
/// even partially. A non-performed receive ends the drain without error: the
/// host has terminated the exchange and what was copied is all there is.
pub fn drain<T: HostTransport, const N: usize>(
    transport: &mut T,
    channel: ChannelId,
    announced: usize,
    dest: &mut Vec<u8, N>,
) -> Result<(), Error> {
    let mut frame = [0u8; MAX_READ];
    let mut remaining = announced;

    while remaining > 0 {
        let requested = remaining.min(MAX_READ);
        let received = transport.receive_data(channel, requested, &mut frame);
        if !received.result.is_performed() {
            break;
        }
        dest.extend_from_slice(&frame[..received.len])
            .map_err(|_| Error::BufferOverflow)?;
        remaining = received.remaining;
    }
    Ok(())
}
