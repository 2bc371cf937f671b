use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::errors::{CfgLineError, Result};

/// Initializes the tracing subscriber used by the CfgLine binaries.
///
/// Events go to stderr so that rendered grammars on stdout stay pipeable.
/// The default is `warn` so a successful run prints nothing but the grammar;
/// the first invalid line is logged at that level. `RUST_LOG` takes
/// precedence over `level`.
pub fn init_tracing(level: Option<&str>) -> Result<()> {
    let default_level = level.unwrap_or("warn");
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init()
        .map_err(|err| CfgLineError::Logging(err.to_string()))?;

    Ok(())
}
