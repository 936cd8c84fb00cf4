use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. Stdout is reserved for the result.
///
/// The level comes from `-v` only; the environment is not consulted.
pub fn init(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(level))
        .with_target(false)
        .with_level(true)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}
