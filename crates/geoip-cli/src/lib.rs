//! geoip-cli
//! =========
//!
//! Command-line front end for [`geoip_core`]: one IP address in, one place
//! name out.
//!
//! ```text
//! $ geoip 194.60.38.225
//! Kensington, England, Royal Kensington and Chelsea, United Kingdom
//! $ geoip --locale ru 194.60.38.225
//! Кенсингтон, Англия, Великобритания
//! $ geoip --list-locales
//! ```
//!
//! Every failure (bad address, unknown locale, database or lookup error)
//! goes to stderr with exit status 1 and nothing on stdout.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
pub mod logging;

use anyhow::Result;
use geoip_core::{is_valid_locale, resolve, CityLookup, SupportedLocales};
use std::net::IpAddr;
use thiserror::Error;

/// Mistakes in what the user typed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Unable to parse {0:?} as an IP address")]
    InvalidIp(String),

    #[error("Unsupported locale {locale:?}; valid locales are: {supported}")]
    UnsupportedLocale { locale: String, supported: String },
}

/// One lookup request, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub ip: IpAddr,
    pub locale: String,
}

impl Config {
    pub fn new(ip: &str, locale: impl Into<String>) -> Result<Self, InputError> {
        let ip = ip
            .parse()
            .map_err(|_| InputError::InvalidIp(ip.to_string()))?;
        Ok(Config {
            ip,
            locale: locale.into(),
        })
    }

    /// Rejects a locale the database has no names for.
    pub fn check_locale(&self, supported: &SupportedLocales) -> Result<(), InputError> {
        if is_valid_locale(&self.locale, supported) {
            return Ok(());
        }
        Err(InputError::UnsupportedLocale {
            locale: self.locale.clone(),
            supported: supported.to_string(),
        })
    }
}

/// Validates the locale and resolves the configured address.
pub fn locate<L>(config: &Config, db: &L, supported: &SupportedLocales) -> Result<String>
where
    L: CityLookup + ?Sized,
{
    config.check_locale(supported)?;
    Ok(resolve(config.ip, db, &config.locale)?)
}
