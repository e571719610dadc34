//! Memory-1 stage.
//!
//! First half of the two-cycle data-memory access. The access itself
//! happens once, in Memory-2, so memory order stays deterministic; this
//! slot models the latency.

use crate::core::pipeline::{trace, Pipeline, StageId};
use crate::core::Cpu;

/// Executes the Memory-1 stage.
pub fn memory_one_stage(cpu: &mut Cpu, pipe: &mut Pipeline) {
    let slot = pipe.latch_mut(StageId::MemoryOne);
    slot.executed = false;

    if slot.runnable() {
        slot.executed = true;
    }

    if cpu.trace {
        trace::print_stage("Memory One", pipe.latch(StageId::MemoryOne));
    }
}
