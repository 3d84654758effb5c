use criterion::{Criterion, criterion_group, criterion_main};
use hls_m3u8_parser::parse_str;

const MEDIA_PLAYLIST: &str = include_str!("fixtures/media_playlist.m3u8");

pub fn criterion_benchmark(c: &mut Criterion) {
    assert!(parse_str(MEDIA_PLAYLIST).is_ok());
    c.bench_function("parse media playlist", |b| {
        b.iter(|| parse_str(MEDIA_PLAYLIST));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
