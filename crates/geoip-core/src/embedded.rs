// crates/geoip-core/src/embedded.rs

// The compressed GeoLite2-City image, prepared by build.rs for the codec
// selected in this build (see `codec::BuildCodec`). Rebuild the crate to
// refresh it after replacing `data/GeoLite2-City.mmdb.gz` or pointing
// `GEOIP_CITY_DB` at another database.
pub static EMBEDDED_DB: &[u8] = include_bytes!(env!("GEOIP_ASSET_PATH"));
