use criterion::{criterion_group, criterion_main};


criterion_group!(
    benches,
    http::bench_build_request_header,
    json::bench_build_object
);
criterion_main!(benches);
