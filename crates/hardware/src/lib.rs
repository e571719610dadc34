//! APEX in-order pipeline simulator library.
//!
//! This crate implements a cycle-accurate simulator for the APEX
//! instructional processor with the following:
//! 1. **Core:** Seven-stage pipeline (Fetch, Decode/RF, Execute-1/2,
//!    Memory-1/2, Writeback), architectural registers, condition flags, and
//!    a flat data memory.
//! 2. **Hazards:** A per-register validity scoreboard resolves RAW hazards
//!    by stalling; taken branches flush upstream stages and redirect fetch.
//! 3. **ISA:** Decoding and per-opcode descriptors for the APEX assembly
//!    instruction set.
//! 4. **Simulation:** `Simulator` (owns CPU + pipeline), loader,
//!    configuration, per-cycle trace, and statistics.

/// Common types and constants (flags, registers, errors).
pub mod common;
/// Simulator configuration (defaults, serde structures).
pub mod config;
/// CPU architectural state, memories, and the pipeline.
pub mod core;
/// Instruction set (records, decoder, disassembler).
pub mod isa;
/// Simulation: `Simulator` and the program loader.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Architectural state; owned by the simulator.
pub use crate::core::Cpu;
/// Top-level simulator; owns the CPU and pipeline side-by-side.
pub use crate::sim::simulator::Simulator;
