//! Logging bootstrap.
//!
//! Library code only talks to the `log` facade. The binary calls
//! [`init_logging`] once at startup to install a `flexi_logger` backend that
//! writes to stderr, so log lines never mix with rendered output on stdout.
//!
//! `RUST_LOG`, when set, takes precedence over the level passed in.

use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

pub const DEFAULT_LEVEL: &str = "warn";
pub const VERBOSE_LEVEL: &str = "debug";

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Returns the level for the given verbosity flag.
pub fn level_for(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LEVEL
    } else {
        DEFAULT_LEVEL
    }
}

/// Starts the stderr logger. Calling it again is a no-op.
///
/// # Errors
/// Returns a human-readable message when `level` is not a valid log spec or
/// the backend cannot start.
pub fn init_logging(level: &str) -> Result<(), String> {
    LOGGER
        .get_or_try_init(|| {
            Logger::try_with_env_or_str(level)
                .map_err(|err| format!("invalid log level `{level}`: {err}"))?
                .log_to_stderr()
                .format_for_stderr(flexi_logger::default_format)
                .start()
                .map_err(|err| format!("failed to start logger: {err}"))
        })
        .map(|_| ())
}
