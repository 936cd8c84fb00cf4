// crates/geoip-core/src/error.rs
use thiserror::Error;

/// Failure to bring the embedded database up.
///
/// The asset is fixed at build time, so either variant points at a
/// packaging defect rather than something a retry could fix.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("error decompressing {codec} GeoLite2-City image")]
    DecompressionFailed {
        codec: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to load GeoLite2 DB")]
    ParseFailed(#[source] maxminddb::MaxMindDbError),
}

/// Failure to locate a single address.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The query engine's message, unchanged.
    #[error("{0}")]
    LookupFailed(String),
}

impl From<maxminddb::MaxMindDbError> for ResolveError {
    fn from(err: maxminddb::MaxMindDbError) -> Self {
        ResolveError::LookupFailed(err.to_string())
    }
}
