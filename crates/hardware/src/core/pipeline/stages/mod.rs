//! The seven pipeline stage functions.
//!
//! One module per stage. All stages share the same gate: the body runs only
//! when the stage's latch is neither busy nor stalled. Each stage clears its
//! own executed bit on entry and sets it when the body completes, which is
//! how the push phase tells fresh results from stale bubbles.

/// Decode / register-file read stage.
pub mod decode;

/// Execute-1 stage (scoreboard claim).
pub mod execute_one;

/// Execute-2 stage (ALU, addresses, branch resolution).
pub mod execute_two;

/// Fetch stage.
pub mod fetch;

/// Memory-1 stage (latency slot).
pub mod memory_one;

/// Memory-2 stage (data-memory access).
pub mod memory_two;

/// Writeback stage.
pub mod writeback;
