use criterion::{criterion_group, criterion_main, Criterion};
use geoip_core::{codec, resolve, BuildCodec, Codec, GeoIpDb, EMBEDDED_DB};
use std::hint::black_box;
use std::net::IpAddr;

fn bench_bootstrap(c: &mut Criterion) {
    c.bench_function(&format!("inflate/{}", BuildCodec::NAME), |b| {
        b.iter(|| codec::decompress::<BuildCodec>(black_box(EMBEDDED_DB)).unwrap())
    });

    c.bench_function("open_embedded", |b| {
        b.iter(|| GeoIpDb::embedded().unwrap())
    });
}

fn bench_resolve(c: &mut Criterion) {
    let db = GeoIpDb::embedded().unwrap();
    let ip: IpAddr = "194.60.38.225".parse().unwrap();

    c.bench_function("resolve/en", |b| {
        b.iter(|| resolve(black_box(ip), &db, black_box("en")).unwrap())
    });
}

criterion_group!(benches, bench_bootstrap, bench_resolve);
criterion_main!(benches);
