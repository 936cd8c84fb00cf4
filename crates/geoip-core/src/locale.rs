// crates/geoip-core/src/locale.rs
use std::fmt;

/// Locale used when the caller does not pick one.
pub const DEFAULT_LOCALE: &str = "en";

/// The language codes a database carries names for, in metadata order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLocales(Vec<String>);

impl SupportedLocales {
    pub fn new(locales: Vec<String>) -> Self {
        SupportedLocales(locales)
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, locale: &str) -> bool {
        self.0.iter().any(|l| l == locale)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for SupportedLocales {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

/// Returns `true` if `locale` is one of `supported`, spelled exactly.
///
/// There is no fallback chain: `en-US` is not accepted because `en` is.
///
/// # Examples
/// ```rust
/// use geoip_core::{is_valid_locale, SupportedLocales};
///
/// let supported = SupportedLocales::new(vec!["en".into(), "pt-BR".into()]);
/// assert!(is_valid_locale("pt-BR", &supported));
/// assert!(!is_valid_locale("pt-br", &supported));
/// assert!(!is_valid_locale("xx", &supported));
/// ```
pub fn is_valid_locale(locale: &str, supported: &SupportedLocales) -> bool {
    supported.contains(locale)
}
