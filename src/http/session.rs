//! Request/response session over a single BIP channel.
//!
//! A [`Session`] owns the host transport, the diagnostics sink and the one
//! channel this protocol allows. [`Session::post`] performs the synchronous
//! half of an exchange (open the channel, write header then body); the
//! asynchronous half arrives later as [`ChannelEvent`]s that an external
//! event loop feeds into [`Session::handle_event`], which drains the single
//! response and releases the channel. Each opened channel carries exactly one
//! exchange; there is no reopen-without-close path.

use heapless::Vec;

use crate::diag::Diagnostics;
use crate::http::request::{self, HEADER_CAPACITY, Method};
use crate::identity::DeviceIdentity;
use crate::json::{self, Member};
use crate::transport::error::Error;
use crate::transport::event::{ChannelEvent, LINK_ESTABLISHED};
use crate::transport::{BearerKind, ChannelId, HostTransport, channel, stream};

/// Capacity of the JSON body buffer used by [`Session::post_report`].
pub const BODY_CAPACITY: usize = 320;

/// Capacity of the response accumulator.
pub const RESPONSE_CAPACITY: usize = 320;

/// How many leading response bytes are reported as diagnostics text.
pub const RESPONSE_PREVIEW: usize = 32;

const LINK_TAG: &str = "ERR_BIP_LINK";
const RESPONSE_TAG: &str = "ERR_BIP_RSP";

/// Fixed destination of a session, injected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint<'a> {
    /// Raw 4-byte destination address.
    pub address: [u8; 4],
    /// Destination port.
    pub port: u16,
    /// Optional Host header override; dotted-decimal `address` otherwise.
    pub host: Option<&'a str>,
    /// Request path.
    pub path: &'a str,
}

/// The single tracked HTTP-over-BIP session.
pub struct Session<'a, T: HostTransport, D: Diagnostics> {
    transport: T,
    diag: D,
    endpoint: Endpoint<'a>,
    channel: ChannelId,
    response: Vec<u8, RESPONSE_CAPACITY>,
}

impl<'a, T: HostTransport, D: Diagnostics> Session<'a, T, D> {
    /// Create an idle session for `endpoint`.
    pub fn new(transport: T, diag: D, endpoint: Endpoint<'a>) -> Self {
        Self {
            transport,
            diag,
            endpoint,
            channel: ChannelId::NONE,
            response: Vec::new(),
        }
    }

    /// Channel currently owned by this session; [`ChannelId::NONE`] when idle.
    pub fn channel(&self) -> ChannelId {
        self.channel
    }

    /// Bytes drained from the last completed response.
    pub fn response(&self) -> &[u8] {
        &self.response
    }

    /// Shared access to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Shared access to the diagnostics sink.
    pub fn diagnostics(&self) -> &D {
        &self.diag
    }

    /// Send one HTTP POST with `body` as its `application/json` payload.
    ///
    /// Builds the header block, opens a stream-bearer channel and writes the
    /// header and the body as two sequential chunked writes. On any failure
    /// the channel is closed and the session returns to idle before the error
    /// propagates, so a later `post` starts from a clean slate. The response
    /// arrives asynchronously through [`Session::handle_event`].
    pub fn post(&mut self, body: &[u8]) -> Result<(), Error> {
        // A channel still open here belongs to an exchange whose response
        // never arrived; abandon it rather than leak it.
        if self.channel.is_open() {
            channel::close(&mut self.transport, self.channel);
            self.channel = ChannelId::NONE;
        }

        let mut header: Vec<u8, HEADER_CAPACITY> = Vec::new();
        request::build_request_header(
            Method::Post,
            self.endpoint.address,
            self.endpoint.host,
            self.endpoint.port,
            self.endpoint.path,
            body.len(),
            &mut header,
        )?;

        let opened = channel::open(
            &mut self.transport,
            BearerKind::Stream,
            self.endpoint.address,
            self.endpoint.port,
        )?;
        self.channel = opened;
        self.response.clear();

        let written = stream::send_all(&mut self.transport, opened, &header)
            .and_then(|()| stream::send_all(&mut self.transport, opened, body));
        if let Err(error) = written {
            // The writer has already closed the channel.
            self.channel = ChannelId::NONE;
            return Err(error);
        }
        Ok(())
    }

    /// Build the identity report body and POST it.
    ///
    /// The body is a flat JSON object with the four fields of the report,
    /// keyed `iccid`, `imei`, `mcc` and `mnc`, in that order.
    pub fn post_report<I: DeviceIdentity>(&mut self, identity: &mut I) -> Result<(), Error> {
        identity.load();
        let members = [
            Member {
                key: b"iccid",
                value: identity.serial_id(),
            },
            Member {
                key: b"imei",
                value: identity.equipment_id(),
            },
            Member {
                key: b"mcc",
                value: identity.country_code(),
            },
            Member {
                key: b"mnc",
                value: identity.network_code(),
            },
        ];

        let mut body: Vec<u8, BODY_CAPACITY> = Vec::new();
        json::build_object(&members, &mut body)?;
        self.post(&body)
    }

    /// React to an asynchronous channel notification.
    ///
    /// Data available on the tracked channel drains exactly one response,
    /// closes the channel and reports the head of the response (or the drain
    /// failure) to diagnostics. A status change reporting the tracked channel
    /// inactive closes it and reports the status code. Notifications for any
    /// other channel, or while idle, are ignored without a state change.
    pub fn handle_event(&mut self, event: ChannelEvent) {
        match event {
            ChannelEvent::DataAvailable { channel, available }
                if self.channel.is_open() && channel == self.channel =>
            {
                let drained =
                    stream::drain(&mut self.transport, channel, available, &mut self.response);
                channel::close(&mut self.transport, channel);
                self.channel = ChannelId::NONE;
                match drained {
                    Ok(()) => {
                        let preview = self.response.len().min(RESPONSE_PREVIEW);
                        self.diag.report_text(&self.response[..preview]);
                    }
                    Err(error) => self.diag.report_error(RESPONSE_TAG, error.reason()),
                }
            }
            ChannelEvent::StatusChanged { channel, status }
                if self.channel.is_open()
                    && channel == self.channel
                    && status & LINK_ESTABLISHED == 0 =>
            {
                self.channel = ChannelId::NONE;
                channel::close(&mut self.transport, channel);
                self.diag.report_error(LINK_TAG, status);
            }
            _ => {}
        }
    }
}
