//! Script execution commands: `run`, `eval` and `demo`.

use strafe_eval::stdout_handler;
use tracing::debug;

use super::read_file;
use crate::{run_source, RunError, RunOptions, DEMO_SCRIPT};

/// Run the script stored at `path`.
pub fn run_file(path: &str, options: &RunOptions) -> Result<(), RunError> {
    let source = read_file(path)?;
    debug!(path, "running script file");
    run_source(&source, options, stdout_handler())
}

/// Run a script given inline on the command line.
pub fn eval_script(script: &str, options: &RunOptions) -> Result<(), RunError> {
    run_source(script, options, stdout_handler())
}

pub fn run_demo(options: &RunOptions) -> Result<(), RunError> {
    eval_script(DEMO_SCRIPT, options)
}
