//! geoip — where is this IP address?
//!
//! Prints `City, Subdivision, ..., Country` for one IPv4 or IPv6 address,
//! using the GeoLite2 City database compiled into the binary. No network
//! access, no files read at runtime.
//!
//! Usage
//! -----
//!
//! ```text
//! geoip 8.8.8.8                  # United States
//! geoip --locale fr 8.8.8.8      # États-Unis
//! geoip --list-locales           # de, en, es, fr, ja, pt-BR, ru, zh-CN
//! ```
use clap::Parser;
use geoip_cli::args::CliArgs;
use geoip_cli::{locate, logging, Config};
use geoip_core::GeoIpDb;
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help / --version land here too, on stdout. If the stream is
            // gone there is nowhere left to report a failed write.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    logging::init(args.verbose);

    match run(args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> anyhow::Result<String> {
    // Validate the address before paying for the bootstrap.
    let config = match &args.ip {
        Some(ip) => Some(Config::new(ip, args.locale)?),
        None => None,
    };
    if let Some(config) = &config {
        debug!(ip = %config.ip, locale = %config.locale, "locating address");
    }

    let db = GeoIpDb::embedded()?;
    let supported = db.supported_locales();

    if args.list_locales {
        return Ok(supported.iter().collect::<Vec<_>>().join("\n"));
    }

    match config {
        Some(config) => locate(&config, &db, &supported),
        None => anyhow::bail!("Usage: geoip <IP ADDRESS>"),
    }
}
