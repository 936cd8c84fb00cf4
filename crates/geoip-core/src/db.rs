// crates/geoip-core/src/db.rs

//! # Database Bootstrap
//!
//! Inflates a compressed MMDB image and hands it to `maxminddb`. A
//! [`GeoIpDb`] only exists once both steps have succeeded.

use crate::codec::{self, BuildCodec, Codec};
use crate::embedded::EMBEDDED_DB;
use crate::error::{BootstrapError, ResolveError};
use crate::locale::SupportedLocales;
use crate::model::{DatabaseInfo, LocationRecord};
use crate::resolve::CityLookup;
use maxminddb::Reader;
use std::net::IpAddr;
use std::time::Instant;
use tracing::debug;

/// A ready-to-query GeoLite2 City database held entirely in memory.
pub struct GeoIpDb {
    reader: Reader<Vec<u8>>,
}

impl GeoIpDb {
    /// Opens the database compiled into this binary.
    pub fn embedded() -> Result<Self, BootstrapError> {
        Self::open(EMBEDDED_DB)
    }

    /// Opens a compressed image using the codec selected for this build.
    pub fn open(asset: &[u8]) -> Result<Self, BootstrapError> {
        Self::open_with::<BuildCodec>(asset)
    }

    /// Opens a compressed image with an explicit codec.
    pub fn open_with<C: Codec>(asset: &[u8]) -> Result<Self, BootstrapError> {
        let started = Instant::now();

        // 1. Inflate (dominates startup)
        let image = codec::decompress::<C>(asset)?;
        let inflated = image.len();

        // 2. Parse metadata + search tree
        let reader = Reader::from_source(image).map_err(BootstrapError::ParseFailed)?;

        let db = GeoIpDb { reader };
        let info = db.info();
        debug!(
            codec = C::NAME,
            compressed = asset.len(),
            inflated,
            elapsed = ?started.elapsed(),
            database_type = %info.database_type,
            build_epoch = info.build_epoch,
            "GeoIP database loaded"
        );
        Ok(db)
    }

    /// Locales the database carries names for.
    pub fn supported_locales(&self) -> SupportedLocales {
        SupportedLocales::new(self.reader.metadata.languages.clone())
    }

    pub fn info(&self) -> DatabaseInfo {
        let meta = &self.reader.metadata;
        DatabaseInfo {
            database_type: meta.database_type.clone(),
            build_epoch: meta.build_epoch,
            ip_version: meta.ip_version,
            node_count: meta.node_count,
        }
    }
}

impl CityLookup for GeoIpDb {
    fn lookup_city(&self, ip: IpAddr) -> Result<LocationRecord, ResolveError> {
        let result = self.reader.lookup(ip)?;
        let record: Option<LocationRecord> = result.decode()?;
        record.ok_or_else(|| {
            ResolveError::LookupFailed(format!("the address {ip} is not in the database"))
        })
    }
}

impl std::fmt::Debug for GeoIpDb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeoIpDb").field("info", &self.info()).finish()
    }
}

#[cfg(all(test, feature = "gzip"))]
mod tests {
    use super::*;
    use crate::codec::Gzip;
    use std::io::Write;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut enc = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::best());
        enc.write_all(data).unwrap();
        enc.finish().unwrap()
    }

    #[test]
    fn valid_stream_that_is_not_a_database_fails_to_parse() {
        let asset = gzip(b"definitely not an MMDB image");
        let err = GeoIpDb::open_with::<Gzip>(&asset).unwrap_err();
        assert!(matches!(err, BootstrapError::ParseFailed(_)), "{err:?}");
    }

    #[test]
    fn truncated_asset_fails_to_decompress() {
        let asset = gzip(&[0x5a; 4096]);
        let err = GeoIpDb::open_with::<Gzip>(&asset[..asset.len() - 12]).unwrap_err();
        assert!(matches!(err, BootstrapError::DecompressionFailed { .. }), "{err:?}");
    }
}
