// crates/geoip-core/src/resolve.rs

//! # Place Resolution
//!
//! Turns a [`LocationRecord`] into `"City, Subdivision, ..., Country"` for
//! one locale.

use crate::error::ResolveError;
use crate::model::LocationRecord;
use std::net::IpAddr;
use tracing::trace;

/// Separator between place name segments.
pub const SEPARATOR: &str = ", ";

/// Anything that can answer "which city record covers this address".
///
/// [`GeoIpDb`](crate::GeoIpDb) is the real implementation; tests plug in
/// in-memory tables.
pub trait CityLookup {
    fn lookup_city(&self, ip: IpAddr) -> Result<LocationRecord, ResolveError>;
}

/// Ordered name segments of `record` in `locale`.
///
/// 1. the city, if it has a name in `locale`
/// 2. every subdivision with a name in `locale`, in record order
/// 3. the country, always, even when its name is empty
pub fn place_names<'r>(record: &'r LocationRecord, locale: &str) -> Vec<&'r str> {
    let mut names = Vec::with_capacity(record.subdivisions.len() + 2);

    if let Some(city) = &record.city {
        let name = city.name(locale);
        if !name.is_empty() {
            names.push(name);
        }
    }

    names.extend(
        record
            .subdivisions
            .iter()
            .map(|sub| sub.name(locale))
            .filter(|name| !name.is_empty()),
    );

    // No fallback for a missing country name: an empty final segment is kept.
    names.push(record.country.name(locale));
    names
}

/// [`place_names`] joined with [`SEPARATOR`].
pub fn format_place(record: &LocationRecord, locale: &str) -> String {
    place_names(record, locale).join(SEPARATOR)
}

/// Looks `ip` up in `db` and formats its place name in `locale`.
///
/// `locale` is not validated here; see [`is_valid_locale`](crate::is_valid_locale).
///
/// # Examples
/// ```no_run
/// use geoip_core::{resolve, GeoIpDb};
///
/// let db = GeoIpDb::embedded().unwrap();
/// let place = resolve("8.8.8.8".parse().unwrap(), &db, "fr").unwrap();
/// assert_eq!(place, "États-Unis");
/// ```
pub fn resolve<L>(ip: IpAddr, db: &L, locale: &str) -> Result<String, ResolveError>
where
    L: CityLookup + ?Sized,
{
    let record = db.lookup_city(ip)?;
    let names = place_names(&record, locale);
    trace!(%ip, locale, segments = names.len(), "resolved place");
    Ok(names.join(SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Place;
    use std::collections::HashMap;

    struct Table(HashMap<IpAddr, LocationRecord>);

    impl CityLookup for Table {
        fn lookup_city(&self, ip: IpAddr) -> Result<LocationRecord, ResolveError> {
            self.0
                .get(&ip)
                .cloned()
                .ok_or_else(|| ResolveError::LookupFailed(format!("no record for {ip}")))
        }
    }

    fn kensington() -> LocationRecord {
        LocationRecord {
            city: Some(Place::named(&[("en", "Kensington"), ("ru", "Кенсингтон")])),
            subdivisions: vec![
                Place::named(&[("en", "England"), ("ru", "Англия")]),
                Place::named(&[("en", "Royal Kensington and Chelsea")]),
            ],
            country: Place::named(&[("en", "United Kingdom"), ("ru", "Великобритания")]),
        }
    }

    fn table() -> Table {
        let mut map = HashMap::new();
        map.insert("194.60.38.225".parse().unwrap(), kensington());
        map.insert(
            "8.8.8.8".parse().unwrap(),
            LocationRecord {
                country: Place::named(&[("en", "United States"), ("fr", "États-Unis")]),
                ..Default::default()
            },
        );
        Table(map)
    }

    #[test]
    fn city_then_subdivisions_then_country() {
        assert_eq!(
            format_place(&kensington(), "en"),
            "Kensington, England, Royal Kensington and Chelsea, United Kingdom"
        );
    }

    #[test]
    fn unnamed_subdivision_leaves_no_gap() {
        let out = format_place(&kensington(), "ru");
        assert_eq!(out, "Кенсингтон, Англия, Великобритания");
        assert!(!out.contains(", , "));
    }

    #[test]
    fn unnamed_city_is_skipped() {
        let mut record = kensington();
        record.city = Some(Place::named(&[("ru", "Кенсингтон")]));
        assert_eq!(
            place_names(&record, "en"),
            ["England", "Royal Kensington and Chelsea", "United Kingdom"]
        );
    }

    #[test]
    fn empty_country_name_is_still_appended() {
        let record = kensington();
        assert_eq!(format_place(&record, "ja"), "");
        assert_eq!(place_names(&record, "ja"), [""]);

        let mut record = kensington();
        record.city = Some(Place::named(&[("de", "Kensington")]));
        assert_eq!(format_place(&record, "de"), "Kensington, ");
    }

    #[test]
    fn country_only_record() {
        let db = table();
        let ip = "8.8.8.8".parse().unwrap();
        assert_eq!(resolve(ip, &db, "en").unwrap(), "United States");
        assert_eq!(resolve(ip, &db, "fr").unwrap(), "États-Unis");
    }

    #[test]
    fn repeated_resolution_is_identical() {
        let db = table();
        let ip = "194.60.38.225".parse().unwrap();
        let first = resolve(ip, &db, "en").unwrap();
        for _ in 0..5 {
            assert_eq!(resolve(ip, &db, "en").unwrap(), first);
        }
    }

    #[test]
    fn equal_name_coverage_gives_equal_segment_count() {
        let record = LocationRecord {
            city: Some(Place::named(&[("en", "Munich"), ("de", "München")])),
            subdivisions: vec![Place::named(&[("en", "Bavaria"), ("de", "Bayern")])],
            country: Place::named(&[("en", "Germany"), ("de", "Deutschland")]),
        };
        let en = place_names(&record, "en");
        let de = place_names(&record, "de");
        assert_ne!(en, de);
        assert_eq!(en.len(), de.len());
    }

    #[test]
    fn lookup_error_is_passed_through() {
        let db = table();
        let err = resolve("10.0.0.1".parse().unwrap(), &db, "en").unwrap_err();
        assert_eq!(err.to_string(), "no record for 10.0.0.1");
    }
}
