//! The five demo programs. Each binary in `src/bin` is a thin wrapper around one `run` function
//! here.

use std::process::ExitCode;

use crate::error::{Result, report};

pub mod lit;
pub mod raw;
pub mod spinning;

/// Reports a failed run on stderr and maps it to the process exit status.
pub fn exit_code(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}
