//! Program loading.
//!
//! Reads an assembly file and produces code memory. Malformed lines are
//! logged and degrade to NOP so one bad line never aborts a run; a file
//! that cannot be read, or that yields no instructions at all, is a
//! configuration error.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::common::SimError;
use crate::config::Config;
use crate::core::memory::CodeMemory;
use crate::isa::decode::parse_instruction;
use crate::isa::Instruction;

/// Assembles program text into instruction records, one per line.
///
/// Lines that fail to decode become NOPs with a warning.
pub fn assemble(source: &str) -> Vec<Instruction> {
    source
        .lines()
        .enumerate()
        .map(|(index, line)| match parse_instruction(line) {
            Ok(inst) => inst,
            Err(error) => {
                warn!(line = index + 1, %error, "substituting NOP for malformed instruction");
                Instruction::nop()
            }
        })
        .collect()
}

/// Loads a program file into code memory.
///
/// # Errors
///
/// Returns [`SimError`] if the file cannot be read or decodes to an empty
/// program.
pub fn load_program(path: &Path, config: &Config) -> Result<CodeMemory, SimError> {
    let source = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let instructions = assemble(&source);
    if instructions.is_empty() {
        return Err(SimError::EmptyProgram {
            path: path.display().to_string(),
        });
    }
    Ok(CodeMemory::new(config.general.start_pc, instructions))
}
