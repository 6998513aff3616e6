//! Log subscriber setup
//!
//! Logs go to stderr so stdout carries only displays and JSON. `RUST_LOG`
//! takes precedence over the `-v`/`-q` flags:
//!
//! ```bash
//! RUST_LOG=keycalc=debug keycalc 5 + 3 =
//! ```

use crate::config::Verbosity;
use std::sync::Once;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

/// Builds the filter for a verbosity level, honoring `RUST_LOG`
#[must_use]
pub fn build_filter(verbosity: Verbosity) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(verbosity.filter_directive())
    }
}

/// Installs the global subscriber.
///
/// Only the first call takes effect.
pub fn init(verbosity: Verbosity, color: bool) {
    INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_ansi(color)
            .without_time()
            .with_filter(build_filter(verbosity));

        // A subscriber installed elsewhere (tests) wins
        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}
