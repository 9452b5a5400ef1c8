//! Scripted mock host transport and collaborator fakes shared by the tests

// not every test crate uses every fake
#![allow(dead_code)]

use libbip::diag::Diagnostics;
use libbip::identity::DeviceIdentity;
use libbip::transport::{
    ChannelId, GeneralResult, HostTransport, OpenRequest, OpenResponse, Received,
};

/// Mock host platform: answers each command/response exchange from a script
/// and records everything the core issued.
pub struct MockTransport {
    /// Result returned to OPEN CHANNEL requests.
    pub open_result: GeneralResult,
    /// Channel identifier assigned on a successful open.
    pub assigned_channel: ChannelId,
    /// Every OPEN CHANNEL request received.
    pub open_requests: Vec<OpenRequest>,
    /// Scripted per-frame SEND DATA results, consumed front to back;
    /// exhausted entries answer `PERFORMED`.
    pub send_results: Vec<GeneralResult>,
    /// Every frame received through SEND DATA, in order.
    pub frames: Vec<Vec<u8>>,
    /// Body served to RECEIVE DATA requests.
    pub inbound: Vec<u8>,
    /// Zero-based index of the RECEIVE DATA exchange that should fail.
    pub fail_receive_at: Option<usize>,
    /// Sizes requested by each RECEIVE DATA exchange.
    pub receive_requests: Vec<usize>,
    /// Channels closed through CLOSE CHANNEL, in order.
    pub closed: Vec<ChannelId>,
    served: usize,
    receives: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            open_result: GeneralResult::PERFORMED,
            assigned_channel: ChannelId(3),
            open_requests: Vec::new(),
            send_results: Vec::new(),
            frames: Vec::new(),
            inbound: Vec::new(),
            fail_receive_at: None,
            receive_requests: Vec::new(),
            closed: Vec::new(),
            served: 0,
            receives: 0,
        }
    }

    /// Total payload bytes received across all frames.
    pub fn sent_len(&self) -> usize {
        self.frames.iter().map(|frame| frame.len()).sum()
    }
}

impl HostTransport for MockTransport {
    fn open_channel(&mut self, request: &OpenRequest) -> OpenResponse {
        self.open_requests.push(*request);
        OpenResponse {
            result: self.open_result,
            channel: if self.open_result.is_performed() {
                self.assigned_channel
            } else {
                ChannelId::NONE
            },
        }
    }

    fn close_channel(&mut self, channel: ChannelId) -> GeneralResult {
        self.closed.push(channel);
        GeneralResult::PERFORMED
    }

    fn send_data(&mut self, _channel: ChannelId, frame: &[u8]) -> GeneralResult {
        let result = if self.frames.len() < self.send_results.len() {
            self.send_results[self.frames.len()]
        } else {
            GeneralResult::PERFORMED
        };
        self.frames.push(frame.to_vec());
        result
    }

    fn receive_data(&mut self, _channel: ChannelId, requested: usize, out: &mut [u8]) -> Received {
        let exchange = self.receives;
        self.receives += 1;
        self.receive_requests.push(requested);

        if self.fail_receive_at == Some(exchange) {
            return Received {
                result: GeneralResult(0x20),
                len: 0,
                remaining: self.inbound.len() - self.served,
            };
        }

        let queued = self.inbound.len() - self.served;
        let len = requested.min(queued).min(out.len());
        out[..len].copy_from_slice(&self.inbound[self.served..self.served + len]);
        self.served += len;
        Received {
            result: GeneralResult::PERFORMED,
            len,
            remaining: self.inbound.len() - self.served,
        }
    }
}

/// Diagnostics sink that records every report.
pub struct RecordingDiagnostics {
    pub texts: Vec<Vec<u8>>,
    pub errors: Vec<(String, u16)>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self {
            texts: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn report_text(&mut self, text: &[u8]) {
        self.texts.push(text.to_vec());
    }

    fn report_error(&mut self, tag: &str, reason: u16) {
        self.errors.push((tag.to_string(), reason));
    }
}

/// Identity provider with canned fields; getters insist on a prior `load`.
pub struct FakeIdentity {
    pub loaded: bool,
}

impl FakeIdentity {
    pub fn new() -> Self {
        Self { loaded: false }
    }
}

impl DeviceIdentity for FakeIdentity {
    fn load(&mut self) {
        self.loaded = true;
    }

    fn serial_id(&self) -> &[u8] {
        assert!(self.loaded);
        b"8944500110290437123"
    }

    fn equipment_id(&self) -> &[u8] {
        assert!(self.loaded);
        b"490154203237518"
    }

    fn country_code(&self) -> &[u8] {
        assert!(self.loaded);
        b"244"
    }

    fn network_code(&self) -> &[u8] {
        assert!(self.loaded);
        b"05"
    }
}
