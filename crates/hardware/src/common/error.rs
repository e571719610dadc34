//! Error types for program loading.
//!
//! Runtime misbehavior inside the pipeline (division by zero, out-of-range
//! addresses, invalid branch targets) is never an error at this level: each
//! has a defined fallback and is logged where it happens. `SimError` covers
//! only the failures that prevent a simulation from starting at all.

use std::io;

use thiserror::Error;

/// Errors raised while turning an input file into code memory.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program file could not be read.
    #[error("failed to read program `{path}`: {source}")]
    Io {
        /// Path of the file that could not be read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The program file contained no instructions.
    #[error("program `{path}` contains no instructions")]
    EmptyProgram {
        /// Path of the offending file.
        path: String,
    },
}
