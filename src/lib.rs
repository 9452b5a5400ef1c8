//! # libbip - BIP-HTTP core for UICC-class devices
//!
//! A small, allocation-free core that moves a JSON document from a
//! memory-constrained device to a remote HTTP endpoint over a Bearer
//! Independent Protocol (BIP) channel owned by the host platform. The host
//! speaks a synchronous command/response protocol with a bounded payload per
//! round trip, so the core splits arbitrarily long requests into confirmed
//! frames, correlates the host's asynchronous notifications against the one
//! tracked channel, and guarantees the channel is released on every path.
//!
//! ## Components
//!
//! - [`transport`]: the [`HostTransport`](transport::HostTransport) seam,
//!   channel open/close, chunked send and drain, and channel notifications
//! - [`http`]: fixed-buffer request header assembly and the single-shot POST
//!   session with its event dispatcher
//! - [`json`]: flat single-level JSON object encoder over borrowed byte spans
//! - [`identity`] and [`diag`]: interfaces of the external field-data and
//!   diagnostics collaborators
//!
//! ## Example
//!
//! ```rust,no_run
//! use libbip::diag::NullDiagnostics;
//! use libbip::http::session::{Endpoint, Session};
//! # use libbip::transport::{
//! #     ChannelId, GeneralResult, HostTransport, OpenRequest, OpenResponse, Received,
//! # };
//! # struct MockTransport;
//! # impl HostTransport for MockTransport {
//! #     fn open_channel(&mut self, _request: &OpenRequest) -> OpenResponse {
//! #         OpenResponse { result: GeneralResult::PERFORMED, channel: ChannelId(1) }
//! #     }
//! #     fn close_channel(&mut self, _channel: ChannelId) -> GeneralResult {
//! #         GeneralResult::PERFORMED
//! #     }
//! #     fn send_data(&mut self, _channel: ChannelId, _frame: &[u8]) -> GeneralResult {
//! #         GeneralResult::PERFORMED
//! #     }
//! #     fn receive_data(&mut self, _c: ChannelId, _n: usize, _out: &mut [u8]) -> Received {
//! #         Received { result: GeneralResult::PERFORMED, len: 0, remaining: 0 }
//! #     }
//! # }
//!
//! let endpoint = Endpoint {
//!     address: [178, 63, 67, 106],
//!     port: 80,
//!     host: Some("webhook.site"),
//!     path: "/report",
//! };
//! let mut session = Session::new(MockTransport, NullDiagnostics, endpoint);
//! session.post(br#"{"hello":"world"}"#).unwrap();
//! // later, the external event loop feeds notifications into
//! // session.handle_event(..) to drain the response and release the channel
//! ```
//!
//! ## Platform Support
//!
//! The crate is `no_std` by default and holds no dynamic allocations; all
//! buffers are fixed-capacity [`heapless`] containers. It runs anywhere a
//! [`transport::HostTransport`] implementation can reach the host platform:
//! UICC toolkit runtimes, modem-adjacent firmware, or a plain mock in tests.
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt formatting of errors for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Host transport seam, channel lifecycle, chunked transfer and notifications.
pub mod transport;

/// Fixed-buffer HTTP request assembly and the single-shot POST session.
pub mod http;

/// Flat single-level JSON object encoder.
pub mod json;

/// Interface of the external field-data collaborator.
pub mod identity;

/// Interface of the external diagnostics collaborator.
pub mod diag;
