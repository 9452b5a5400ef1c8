//! HTTP request header assembly into a fixed buffer.

use core::fmt::Write as _;

use heapless::{String, Vec};

use crate::transport::error::Error;

/// Capacity of the header block buffer, in bytes.
pub const HEADER_CAPACITY: usize = 320;

/// Fixed User-Agent token sent with every request.
pub const USER_AGENT: &str = "libbip/0.1";

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET request.
    Get,
    /// POST request.
    Post,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Build a complete request line and header block into `out`.
///
/// The layout is fixed:
///
/// ```text
/// <METHOD> <path> HTTP/1.1
/// Host: <host | dotted-decimal address>[:<port>]
/// Connection: close
/// Content-Type: application/json
/// Content-Length: <body_length>        (only when body_length > 0)
/// User-Agent: <token>
/// ```
///
/// each line CRLF-terminated and followed by the empty line. The `Host`
/// value falls back to the dotted-decimal rendering of `address` when no
/// `host` override is given, and the `:port` suffix appears only for a
/// non-default port. `out` is cleared first; the header length is returned.
/// Running out of capacity is [`Error::BufferOverflow`].
pub fn build_request_header<const N: usize>(
    method: Method,
    address: [u8; 4],
    host: Option<&str>,
    port: u16,
    path: &str,
    body_length: usize,
    out: &mut Vec<u8, N>,
) -> Result<usize, Error> {
    out.clear();

    put(out, method.as_str().as_bytes())?;
    put(out, b" ")?;
    put(out, path.as_bytes())?;
    put(out, b" HTTP/1.1\r\n")?;

    put(out, b"Host: ")?;
    match host {
        Some(name) => put(out, name.as_bytes())?,
        None => {
            let mut dotted: String<15> = String::new();
            write!(
                dotted,
                "{}.{}.{}.{}",
                address[0], address[1], address[2], address[3]
            )
            .map_err(|_| Error::BufferOverflow)?;
            put(out, dotted.as_bytes())?;
        }
    }
    if port != 80 {
        let mut digits: String<5> = String::new();
        write!(digits, "{}", port).map_err(|_| Error::BufferOverflow)?;
        put(out, b":")?;
        put(out, digits.as_bytes())?;
    }
    put(out, b"\r\n")?;

    put(out, b"Connection: close\r\n")?;
    put(out, b"Content-Type: application/json\r\n")?;

    if body_length > 0 {
        let mut digits: String<20> = String::new();
        write!(digits, "{}", body_length).map_err(|_| Error::BufferOverflow)?;
        put(out, b"Content-Length: ")?;
        put(out, digits.as_bytes())?;
        put(out, b"\r\n")?;
    }

    put(out, b"User-Agent: ")?;
    put(out, USER_AGENT.as_bytes())?;
    put(out, b"\r\n\r\n")?;

    Ok(out.len())
}

fn put<const N: usize>(out: &mut Vec<u8, N>, bytes: &[u8]) -> Result<(), Error> {
    out.extend_from_slice(bytes).map_err(|_| Error::BufferOverflow)
}
