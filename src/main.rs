//! Console entry point for the media suite.
//!
//! Answers are read from stdin and the transcript goes to stdout. Diagnostics
//! go to stderr; set `RUST_LOG=core_service=debug` to see them.

use std::io;

use anyhow::Context;
use core_runtime::config::SuiteConfig;
use core_runtime::logging::init_logging;
use core_service::MediaSuite;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let config = SuiteConfig::builder()
        .build()
        .context("invalid suite configuration")?;
    init_logging(config.logging.clone()).context("failed to initialize logging")?;

    let suite = MediaSuite::new(config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();

    match suite.run(stdin.lock(), stdout.lock()) {
        Ok(report) => {
            debug!(session = %report.session_id, "Exiting");
            Ok(())
        }
        // Reader went away (e.g. piped into `head`); nothing left to report
        Err(err) if err.is_broken_pipe() => Ok(()),
        Err(err) => Err(err).context("media suite session failed"),
    }
}
