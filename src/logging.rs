//! Log setup for the binary.
//!
//! `VSHELL_LOG` takes an `EnvFilter` directive (e.g. `vshell=debug`); when
//! unset the configured level applies. Logs go to stderr so they never mix
//! with command output.

use std::io;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub const LOG_ENV: &str = "VSHELL_LOG";

pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_writer(io::stderr)
        .with_filter(filter);

    // a second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}
