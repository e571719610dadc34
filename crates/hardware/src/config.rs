//! Simulator configuration.
//!
//! Defaults match the reference machine: code region at 4000, 4096 words of
//! data memory, per-cycle trace on. Configuration deserializes from JSON;
//! the CLI uses `Config::default()` unless an override file is given.

use serde::Deserialize;

use crate::common::constants;

/// Root configuration for a simulation run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Data-memory sizing.
    #[serde(default)]
    pub memory: MemoryConfig,
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Print the per-cycle stage trace to stdout.
    #[serde(default = "GeneralConfig::default_trace_pipeline")]
    pub trace_pipeline: bool,

    /// Byte address of the first instruction.
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: i32,
}

impl GeneralConfig {
    /// The trace is on by default; it is the simulator's primary output.
    fn default_trace_pipeline() -> bool {
        true
    }

    /// Returns the default code-region base address.
    fn default_start_pc() -> i32 {
        constants::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_pipeline: true,
            start_pc: constants::START_PC,
        }
    }
}

/// Data-memory sizing.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Number of 32-bit words in the data memory.
    #[serde(default = "MemoryConfig::default_data_words")]
    pub data_words: usize,
}

impl MemoryConfig {
    /// Returns the default data-memory size in words.
    fn default_data_words() -> usize {
        constants::DATA_MEMORY_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            data_words: constants::DATA_MEMORY_WORDS,
        }
    }
}
