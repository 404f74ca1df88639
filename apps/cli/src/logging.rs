//! Subscriber setup. Logs go to stderr so stdout carries only results.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbosity` picks the level
/// (`-1` error, `0` warn, `1` info, `2` debug, higher trace).
pub fn init(verbosity: i8) -> Result<()> {
    let level = match verbosity {
        i8::MIN..=-1 => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = match std::env::var("RUST_LOG") {
        Ok(spec) if !spec.trim().is_empty() => {
            EnvFilter::try_new(&spec).with_context(|| format!("invalid RUST_LOG filter '{spec}'"))?
        }
        _ => EnvFilter::try_new(level).context("invalid log level")?,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("failed to install log subscriber")
}
