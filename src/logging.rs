use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PACKWRIGHT_LOG";

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    }
}

/// Logs go to stderr; stdout belongs to the command output. Expected step
/// failures log at `warn`, hidden by default.
/// `PACKWRIGHT_LOG` takes precedence over `-v`.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
