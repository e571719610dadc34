//! Common utilities and types used throughout the APEX simulator.
//!
//! This module provides fundamental building blocks shared across all
//! components of the simulator. It includes:
//! 1. **Constants:** System-wide constants for the code region, memory, and
//!    register file.
//! 2. **Error Handling:** The loader-level error type.
//! 3. **Flags:** The architectural condition flag set.
//! 4. **Registers:** The architectural register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for program loading.
pub mod error;

/// Architectural condition flags.
pub mod flags;

/// Register file implementation.
pub mod reg;

pub use error::SimError;
pub use flags::Flags;
pub use reg::RegisterFile;
