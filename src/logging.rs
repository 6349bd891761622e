//! Logger setup
//!
//! Log records go through the `log` facade; the binary installs `env_logger`
//! as the backend. `RUST_LOG` always wins over the defaults chosen here.

use env_logger::Env;

/// Install the global logger
///
/// Defaults to `warn`, or `debug` for this crate when `verbose` is set. Calling
/// it more than once is harmless.
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "warn,vocab_jumble=debug"
    } else {
        "warn"
    };

    // A second init (e.g. from tests) keeps the first logger
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}
