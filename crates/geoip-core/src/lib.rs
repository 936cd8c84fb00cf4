//! geoip-core
//! ==========
//!
//! Offline "where is this IP" for a single binary: a GeoLite2 City database
//! is compiled in compressed, inflated once at startup, and queried to build
//! a locale-aware place name such as
//! `"Kensington, England, Royal Kensington and Chelsea, United Kingdom"`.
//!
//! Quick start
//! -----------
//!
//! ```no_run
//! use geoip_core::{is_valid_locale, resolve, GeoIpDb};
//!
//! let db = GeoIpDb::embedded()?;
//! assert!(is_valid_locale("ru", &db.supported_locales()));
//!
//! let place = resolve("194.60.38.225".parse().unwrap(), &db, "ru")?;
//! println!("{place}"); // Кенсингтон, Англия, Великобритания
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Compression
//! -----------
//!
//! The embedded image is gzip by default (`gzip` feature). Building with the
//! `lz4` feature stores it as an LZ4 frame instead, trading binary size for
//! a much cheaper inflate at startup.

pub mod codec;
pub mod db;
mod embedded;
pub mod error;
pub mod locale;
pub mod model;
pub mod resolve;

// Re-exports
pub use crate::codec::{BuildCodec, Codec};
pub use crate::db::GeoIpDb;
pub use crate::embedded::EMBEDDED_DB;
pub use crate::error::{BootstrapError, ResolveError};
pub use crate::locale::{is_valid_locale, SupportedLocales, DEFAULT_LOCALE};
pub use crate::model::{DatabaseInfo, LocationRecord, Place};
pub use crate::resolve::{format_place, place_names, resolve, CityLookup, SEPARATOR};
