//! Code and data memories.
//!
//! Code memory is a read-only array of decoded instructions addressed by
//! program counter. Data memory is a flat array of signed 32-bit words
//! addressed byte-as-word, exactly as the architecture defines it: the
//! address is used as an index without scaling. Out-of-range accesses are
//! logged and skipped; they never stop the simulation.

use tracing::error;

use crate::common::constants::INSTRUCTION_BYTES;
use crate::isa::Instruction;

/// Read-only instruction storage addressed by program counter.
#[derive(Debug, Clone)]
pub struct CodeMemory {
    base_pc: i32,
    instructions: Vec<Instruction>,
}

impl CodeMemory {
    /// Wraps a decoded program starting at `base_pc`.
    pub fn new(base_pc: i32, instructions: Vec<Instruction>) -> Self {
        Self {
            base_pc,
            instructions,
        }
    }

    /// Returns the instruction at `pc`, or `None` past the end of the
    /// program (or for any address outside the code region).
    pub fn fetch(&self, pc: i32) -> Option<Instruction> {
        let offset = pc.wrapping_sub(self.base_pc);
        if offset < 0 || offset % INSTRUCTION_BYTES != 0 {
            return None;
        }
        self.instructions
            .get((offset / INSTRUCTION_BYTES) as usize)
            .copied()
    }

    /// Number of instructions in the program.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the program is empty.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// Flat data memory of signed 32-bit words.
#[derive(Debug, Clone)]
pub struct DataMemory {
    words: Vec<i32>,
}

impl DataMemory {
    /// Creates a zero-filled memory of `words` entries.
    pub fn new(words: usize) -> Self {
        Self {
            words: vec![0; words],
        }
    }

    /// Reads the word at `address`. Out-of-range addresses are logged and
    /// read as `None`.
    pub fn read(&self, address: i32) -> Option<i32> {
        if address < 0 {
            error!(address, "memory read out of range");
            return None;
        }
        match self.words.get(address as usize) {
            Some(word) => Some(*word),
            None => {
                error!(address, "memory read out of range");
                None
            }
        }
    }

    /// Writes the word at `address`. Out-of-range addresses are logged and
    /// the memory is not touched.
    pub fn write(&mut self, address: i32, value: i32) -> bool {
        if address < 0 {
            error!(address, "memory write out of range");
            return false;
        }
        match self.words.get_mut(address as usize) {
            Some(word) => {
                *word = value;
                true
            }
            None => {
                error!(address, "memory write out of range");
                false
            }
        }
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the memory has zero capacity.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
