use clap::{ArgAction, Parser};
use geoip_core::DEFAULT_LOCALE;

/// CLI arguments for geoip
#[derive(Debug, Parser)]
#[command(
    name = "geoip",
    version,
    about = "Print the city, subdivisions and country of an IP address using the bundled GeoLite2 City database"
)]
pub struct CliArgs {
    /// IPv4 or IPv6 address to locate (e.g. 8.8.8.8)
    #[arg(required_unless_present = "list_locales")]
    pub ip: Option<String>,

    /// Language code for place names (see --list-locales)
    #[arg(short = 'l', long = "locale", default_value = DEFAULT_LOCALE)]
    pub locale: String,

    /// Print the locales supported by the bundled database and exit
    #[arg(long = "list-locales")]
    pub list_locales: bool,

    /// Log to stderr: -v for debug, -vv for trace
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}
