// crates/geoip-core/build.rs
//
// Prepares the compressed GeoLite2-City image that `src/embedded.rs` bakes
// into the binary. The source is always a gzip'd `.mmdb`; the `lz4` build
// re-encodes it as an LZ4 frame so startup only pays for the faster decoder.

use std::env;
use std::fs;
use std::path::PathBuf;

const DEFAULT_SOURCE: &str = "data/GeoLite2-City.mmdb.gz";

fn main() {
    println!("cargo:rerun-if-env-changed=GEOIP_CITY_DB");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR"));
    let source = env::var_os("GEOIP_CITY_DB")
        .map(PathBuf::from)
        .unwrap_or_else(|| manifest_dir.join(DEFAULT_SOURCE));
    println!("cargo:rerun-if-changed={}", source.display());

    let gzipped = fs::read(&source).unwrap_or_else(|e| {
        panic!("GeoIP database not found at {}: {e}", source.display())
    });

    let (file_name, asset) = encode(gzipped);

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR"));
    let asset_path = out_dir.join(file_name);
    fs::write(&asset_path, asset)
        .unwrap_or_else(|e| panic!("cannot write {}: {e}", asset_path.display()));

    // Absolute path consumed by include_bytes!(env!("GEOIP_ASSET_PATH"))
    println!("cargo:rustc-env=GEOIP_ASSET_PATH={}", asset_path.display());
}

#[cfg(feature = "lz4")]
fn encode(gzipped: Vec<u8>) -> (&'static str, Vec<u8>) {
    use std::io::{Read, Write};

    let mut raw = Vec::new();
    flate2::read::GzDecoder::new(gzipped.as_slice())
        .read_to_end(&mut raw)
        .expect("source database is not valid gzip");

    let mut encoder = lz4_flex::frame::FrameEncoder::new(Vec::with_capacity(raw.len() / 2));
    encoder.write_all(&raw).expect("lz4 encode");
    let lz4 = encoder.finish().expect("lz4 finish");

    ("GeoLite2-City.mmdb.lz4", lz4)
}

#[cfg(not(feature = "lz4"))]
fn encode(gzipped: Vec<u8>) -> (&'static str, Vec<u8>) {
    ("GeoLite2-City.mmdb.gz", gzipped)
}
