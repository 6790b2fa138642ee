//! Structured logging bootstrap using `tracing`.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Directive used when `RUST_LOG` is unset: crate events at info, dependencies at warn.
pub const DEFAULT_DIRECTIVE: &str = "clinical_assertion=info,warn";

/// Install the global subscriber once; later calls are no-ops.
///
/// Events go to stderr so annotated documents can be piped from stdout.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(DEFAULT_DIRECTIVE).context("default log directive")?,
    };

    let events = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(events)
        .try_init()
        .context("install tracing subscriber")?;

    tracing::debug!(directive = DEFAULT_DIRECTIVE, "tracing initialised");
    Ok(())
}
