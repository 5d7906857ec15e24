//! Logging initialisation for the cssfilter binary.
//!
//! Logs go to stderr. The level comes from `CSSFILTER_LOG` (an `EnvFilter`
//! directive such as `debug` or `cssfilter=trace`), defaulting to `error`.
//! `--verbose` forces `debug`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_ENV: &str = "CSSFILTER_LOG";

pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("error"))
    };

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
    if let Err(e) = result {
        eprintln!("Warning: logging not initialised: {}", e);
    }
}
