// crates/geoip-core/src/codec.rs

//! # Asset Codecs
//!
//! The embedded database is stored compressed. Which format is used is a
//! build decision (cargo features), exposed here as the [`Codec`] strategy
//! with [`BuildCodec`] pointing at the one compiled in.
//!
//! - `gzip`: smaller binary, slower inflate.
//! - `lz4`: a few more megabytes, but decompression stops dominating startup.

use crate::error::BootstrapError;
use std::io::{self, Read};

/// A streaming decompressor for one fixed format.
pub trait Codec {
    /// Short name used in logs and error messages.
    const NAME: &'static str;

    fn decoder<'a>(input: &'a [u8]) -> Box<dyn Read + 'a>;
}

#[cfg(feature = "gzip")]
#[derive(Debug, Clone, Copy)]
pub struct Gzip;

#[cfg(feature = "gzip")]
impl Codec for Gzip {
    const NAME: &'static str = "gzip";

    fn decoder<'a>(input: &'a [u8]) -> Box<dyn Read + 'a> {
        Box::new(flate2::read::GzDecoder::new(input))
    }
}

#[cfg(feature = "lz4")]
#[derive(Debug, Clone, Copy)]
pub struct Lz4;

#[cfg(feature = "lz4")]
impl Codec for Lz4 {
    const NAME: &'static str = "lz4";

    fn decoder<'a>(input: &'a [u8]) -> Box<dyn Read + 'a> {
        Box::new(lz4_flex::frame::FrameDecoder::new(input))
    }
}

// ⚠️ BUILD SWITCH ⚠️
// build.rs encodes the asset with the same rule, keep them in sync.
#[cfg(feature = "lz4")]
pub type BuildCodec = Lz4;
#[cfg(all(feature = "gzip", not(feature = "lz4")))]
pub type BuildCodec = Gzip;

#[cfg(not(any(feature = "gzip", feature = "lz4")))]
compile_error!("geoip-core needs a compression feature: enable `gzip` or `lz4`");

/// Inflates `input` completely into a fresh buffer.
///
/// An empty input is rejected up front: some decoders treat it as an empty
/// stream, which would only surface later as a confusing parse error.
pub fn decompress<C: Codec>(input: &[u8]) -> Result<Vec<u8>, BootstrapError> {
    let fail = |source: io::Error| BootstrapError::DecompressionFailed {
        codec: C::NAME,
        source,
    };

    if input.is_empty() {
        return Err(fail(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "compressed asset is empty",
        )));
    }

    // Databases compress roughly 2-4x; start near the low end.
    let mut out = Vec::with_capacity(input.len().saturating_mul(2));
    C::decoder(input).read_to_end(&mut out).map_err(fail)?;
    Ok(out)
}
