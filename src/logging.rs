//! Logger initialisation for the simulation binary and tests.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// When `verbose` is `true`, debug output is shown: each `go_to`
/// command, arrivals, expired strategies and the simulation's frame log.
/// Otherwise only info level and above (such as the run summary) are
/// shown. `RUST_LOG` overrides either default.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);

    // A logger may already be installed by an earlier call; keep it.
    if builder.try_init().is_err() {
        log::trace!("logger already initialised");
    }
}
