// crates/geoip-core/src/model.rs
use serde::Deserialize;
use std::collections::BTreeMap;

/// A named region in a GeoIP2 City record (city, subdivision or country).
///
/// Only the translated names are kept; codes, geoname ids and the rest of
/// the record are skipped during decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub names: BTreeMap<String, String>,
}

impl Place {
    /// Display name for `locale`, or `""` when the database has none.
    pub fn name(&self, locale: &str) -> &str {
        self.names.get(locale).map(String::as_str).unwrap_or("")
    }
}

/// The subset of a GeoIP2 City record needed to build a place name.
///
/// Mirrors the MMDB layout:
/// ```text
/// {
///   "city":         { "names": { "en": "Kensington", ... } },
///   "subdivisions": [ { "names": { ... } }, ... ],
///   "country":      { "names": { "en": "United Kingdom", ... } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LocationRecord {
    #[serde(default)]
    pub city: Option<Place>,
    /// As stored in the database, outermost first.
    #[serde(default)]
    pub subdivisions: Vec<Place>,
    #[serde(default)]
    pub country: Place,
}

/// Database facts read from the MMDB metadata section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseInfo {
    pub database_type: String,
    pub build_epoch: u64,
    pub ip_version: u16,
    pub node_count: u32,
}

#[cfg(test)]
impl Place {
    pub(crate) fn named(pairs: &[(&str, &str)]) -> Self {
        Place {
            names: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_locale_reads_as_empty_name() {
        let place = Place::named(&[("en", "England"), ("ru", "Англия")]);
        assert_eq!(place.name("ru"), "Англия");
        assert_eq!(place.name("fr"), "");
        assert_eq!(Place::default().name("en"), "");
    }
}
