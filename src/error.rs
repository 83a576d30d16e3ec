//! Error types surfaced at the boundary of the interpreter.
//!
//! A malformed or adversarial *UM program* is never expected to reach these
//! paths: dividing by zero, writing an out-of-range output value, or
//! exhausting memory are all explicitly fatal. Anything considered
//! "undefined behavior" (an out-of-bounds segment access, an unmapped
//! identifier) is left to surface as an ordinary Rust panic rather than
//! being caught here, since converting it to a typed error would make a bug
//! in this interpreter look like a legitimate UM-level fault.

use std::path::PathBuf;

/// Errors that can terminate the interpreter before or during execution.
#[derive(Debug, thiserror::Error)]
pub enum UmError {
    /// The program file could not be opened or read.
    #[error("failed to read program file {path}: {source}")]
    ProgramRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The program file's length was not a multiple of 4 bytes.
    #[error(
        "program file {path} has length {len} bytes, which is not a multiple of 4"
    )]
    MalformedProgram { path: PathBuf, len: u64 },

    /// Opcode 5 (Division) was executed with a zero divisor.
    #[error("division by zero at pc={pc}")]
    DivisionByZero { pc: u32 },

    /// Opcode 10 (Output) was asked to emit a value outside 0..=255.
    #[error("output value {value} at pc={pc} does not fit in a byte")]
    OutputOutOfRange { value: u32, pc: u32 },

    /// A new segment could not be allocated (host memory exhausted).
    #[error("failed to allocate a segment of {words} words: {source}")]
    AllocationFailed {
        words: u32,
        #[source]
        source: std::collections::TryReserveError,
    },
}

impl UmError {
    /// A stable, small process exit code for each error family, so callers
    /// (shell scripts, test harnesses) can distinguish a startup failure
    /// from a runtime fault without parsing the message.
    pub fn exit_code(&self) -> i32 {
        match self {
            UmError::ProgramRead { .. } => 2,
            UmError::MalformedProgram { .. } => 3,
            UmError::DivisionByZero { .. } => 4,
            UmError::OutputOutOfRange { .. } => 5,
            UmError::AllocationFailed { .. } => 6,
        }
    }
}
