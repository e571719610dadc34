//! Simulation: the top-level [`Simulator`](simulator::Simulator) and the
//! program loader.

/// Program loading.
pub mod loader;

/// Top-level simulator and run loop.
pub mod simulator;
