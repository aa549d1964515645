//! Logging bootstrap for the `todos` binary
//!
//! Library code only talks to the `log` facade. The binary installs
//! `env_logger`, reading its filter from `TODOS_LOG` (same syntax as
//! `RUST_LOG`) and writing to stderr so command output stays clean.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "TODOS_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Map the number of `-v` flags to a level. `None` keeps the env/default filter.
pub fn level_for_verbosity(verbosity: u8) -> Option<LevelFilter> {
    match verbosity {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

/// Initialize logging once per process. Repeated calls are ignored.
pub fn init_logging(verbosity: u8) {
    let mut builder = Builder::from_env(Env::new().filter_or(LOG_ENV_VAR, DEFAULT_FILTER));
    if let Some(level) = level_for_verbosity(verbosity) {
        builder.filter_module(env!("CARGO_CRATE_NAME"), level);
    }
    builder.format_timestamp_millis();

    // A logger may already be installed (tests, embedding); that is fine.
    let _ = builder.try_init();
}
