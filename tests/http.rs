use heapless::Vec;
use libbip::http::request::{HEADER_CAPACITY, Method, USER_AGENT, build_request_header};
use libbip::transport::error::Error;

fn build(
    host: Option<&str>,
    port: u16,
    body_length: usize,
) -> (Vec<u8, HEADER_CAPACITY>, usize) {
    let mut out: Vec<u8, HEADER_CAPACITY> = Vec::new();
    let len = build_request_header(
        Method::Post,
        [178, 63, 67, 106],
        host,
        port,
        "/abc",
        body_length,
        &mut out,
    )
    .unwrap();
    (out, len)
}

#[test]
fn default_port_header_block_is_exact() {
    let (out, len) = build(Some("h.test"), 80, 10);

    let expected = format!(
        "POST /abc HTTP/1.1\r\nHost: h.test\r\nConnection: close\r\n\
         Content-Type: application/json\r\nContent-Length: 10\r\n\
         User-Agent: {USER_AGENT}\r\n\r\n"
    );
    assert_eq!(&out[..], expected.as_bytes());
    assert_eq!(len, out.len());
}

#[test]
fn non_default_port_gets_host_suffix() {
    let (out, _) = build(Some("h.test"), 8080, 10);

    let text = core::str::from_utf8(&out).unwrap();
    assert!(text.contains("Host: h.test:8080\r\n"));
}

#[test]
fn host_falls_back_to_dotted_decimal_address() {
    let (out, _) = build(None, 80, 0);

    let text = core::str::from_utf8(&out).unwrap();
    assert!(text.contains("Host: 178.63.67.106\r\n"));
}

#[test]
fn zero_body_length_omits_content_length() {
    let (out, _) = build(Some("h.test"), 80, 0);

    let text = core::str::from_utf8(&out).unwrap();
    assert!(!text.contains("Content-Length"));
    assert!(text.ends_with("\r\n\r\n"));
}

#[test]
fn get_uses_its_method_token() {
    let mut out: Vec<u8, HEADER_CAPACITY> = Vec::new();
    build_request_header(Method::Get, [10, 0, 0, 1], None, 80, "/ping", 0, &mut out).unwrap();

    assert!(out.starts_with(b"GET /ping HTTP/1.1\r\n"));
}

#[test]
fn overflow_is_an_error_not_a_truncation() {
    let mut out: Vec<u8, 32> = Vec::new();
    let result =
        build_request_header(Method::Post, [10, 0, 0, 1], None, 80, "/abc", 10, &mut out);

    assert_eq!(result, Err(Error::BufferOverflow));
}

#[test]
fn builder_clears_previous_contents() {
    let mut out: Vec<u8, HEADER_CAPACITY> = Vec::new();
    out.extend_from_slice(b"stale").unwrap();

    build_request_header(Method::Post, [10, 0, 0, 1], None, 80, "/abc", 0, &mut out).unwrap();

    assert!(out.starts_with(b"POST /abc HTTP/1.1\r\n"));
}
