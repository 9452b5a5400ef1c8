//! Single-shot HTTP/1.1 POST over a BIP channel.
//!
//! This is deliberately not a general HTTP client: one request is built into
//! a fixed buffer, written through the chunked stream writer, and exactly one
//! response is drained and discarded to release the channel. There are no
//! redirects, no transfer encodings and no TLS.

#![deny(unsafe_code)]

/// Request line and header block assembly
pub mod request;

/// Request/response session tracking and event dispatch
pub mod session;
