//! Shared test infrastructure.

use apex_core::config::Config;
use apex_core::core::memory::CodeMemory;
use apex_core::sim::loader;
use apex_core::sim::simulator::{ExitReason, Simulator};

/// A simulator wired up from assembly source, with the per-cycle trace off.
pub struct TestBench {
    /// The simulator under test.
    pub sim: Simulator,
}

impl TestBench {
    /// Assembles `source` and builds a simulator at reset.
    pub fn program(source: &str) -> Self {
        let mut config = Config::default();
        config.general.trace_pipeline = false;
        let code = CodeMemory::new(config.general.start_pc, loader::assemble(source));
        Self {
            sim: Simulator::new(code, &config),
        }
    }

    /// Runs to a terminal condition.
    pub fn run(&mut self) -> ExitReason {
        self.sim.run(0)
    }

    /// Runs with a cycle budget.
    pub fn run_cycles(&mut self, budget: u64) -> ExitReason {
        self.sim.run(budget)
    }

    /// Final value of a register.
    pub fn reg(&self, r: usize) -> i32 {
        self.sim.cpu.regs.read(r)
    }

    /// Final value of a data-memory word.
    pub fn mem(&self, address: i32) -> i32 {
        self.sim.cpu.data_memory.read(address).unwrap_or(0)
    }

    /// Clock cycles elapsed.
    pub fn cycles(&self) -> u64 {
        self.sim.cpu.clock
    }

    /// Whether any register still has an in-flight producer.
    pub fn any_pending(&self) -> bool {
        self.sim.cpu.scoreboard.pending_mask() != 0
    }
}
