//! Command handlers for the `strafe` binary.
//!
//! Each submodule implements one group of commands. Handlers return a
//! [`RunError`] instead of exiting so the binary owns the exit status.

mod debug;
mod find;
mod run;

pub use debug::{dump_ast, dump_tokens, lex_file, parse_file};
pub use find::{find_strategy, format_strategy};
pub use run::{eval_script, run_demo, run_file};

use crate::RunError;

/// Read a script, turning I/O failures into a readable message.
fn read_file(path: &str) -> Result<String, RunError> {
    std::fs::read_to_string(path).map_err(|source| {
        let message = match source.kind() {
            std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
            std::io::ErrorKind::PermissionDenied => {
                format!("permission denied reading '{path}'")
            }
            std::io::ErrorKind::InvalidData => {
                format!("'{path}' contains invalid UTF-8 data")
            }
            _ => format!("error reading '{path}': {source}"),
        };
        RunError::Io { message, source }
    })
}
