//! Driver for strafe movement scripts.
//!
//! Ties the pipeline together for the `strafe` binary:
//!
//! ```text
//! source ──► strafe_lexer ──► strafe_parse ──► strafe_eval ──► output
//!                                                  │
//!                                                  ▼
//!                                            strafe_physics
//! ```
//!
//! Command-line flags become a [`RunOptions`], which configures the
//! interpreter and the strategy finder.

pub mod commands;
mod options;

use std::sync::Once;

use strafe_eval::{EvalError, SharedPrintHandler};
use strafe_parse::ParseError;
use strafe_physics::StratError;
use thiserror::Error;

pub use options::{parse_options, OptionError, RunOptions};

/// Script run by `strafe demo`.
pub const DEMO_SCRIPT: &str = "facing 30.3 stopjump walkair.s 0 sneak.s 4 stop stopjump outvz \
sprintair outz outvz sprintair 10 sprint 1 outz 1 outx -0.4 | sprintjump 9 outz -0.6 outx 0.6";

/// Any fatal failure of a command.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("runtime error: {0}")]
    Eval(#[from] EvalError),
    #[error(transparent)]
    Strat(#[from] StratError),
    #[error(transparent)]
    Options(#[from] OptionError),
}

/// Parse and evaluate `source`, sending output to `print`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn run_source(
    source: &str,
    options: &RunOptions,
    print: SharedPrintHandler,
) -> Result<(), RunError> {
    let script = strafe_parse::parse(source)?;
    let mut interpreter = options.interpreter().print_handler(print).build();
    interpreter.run(&script)?;
    Ok(())
}

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call has any effect.
/// Without `RUST_LOG` nothing is installed and no log output is produced.
///
/// ```bash
/// RUST_LOG=strafe_eval=debug strafe run route.strafe
/// RUST_LOG=strafe_physics=trace strafe eval "sprintjump 3"
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
