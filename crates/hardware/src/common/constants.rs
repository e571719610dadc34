//! Common constants used throughout the simulator.

/// Byte address of the first instruction in the code region.
pub const START_PC: i32 = 4000;

/// Size of one instruction slot in bytes; the program counter advances by
/// this much per fetch.
pub const INSTRUCTION_BYTES: i32 = 4;

/// Number of 32-bit words in the flat data memory.
pub const DATA_MEMORY_WORDS: usize = 4096;

/// Number of architectural integer registers.
pub const REGISTER_FILE_SIZE: usize = 32;

/// Number of pipeline stage slots (Fetch through Writeback).
pub const NUM_STAGES: usize = 7;
