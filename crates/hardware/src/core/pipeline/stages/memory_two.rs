//! Memory-2 stage.
//!
//! Performs the data-memory access: loads read into `rd_value`, stores
//! write `rd_value` out. Out-of-range addresses are logged inside the
//! memory and the access is skipped.

use crate::core::pipeline::{trace, Pipeline, StageId};
use crate::core::Cpu;
use crate::isa::ExecClass;

/// Executes the Memory-2 stage.
pub fn memory_two_stage(cpu: &mut Cpu, pipe: &mut Pipeline) {
    let slot = pipe.latch_mut(StageId::MemoryTwo);
    slot.executed = false;

    if slot.runnable() {
        if let Some(opcode) = slot.opcode {
            match opcode.class() {
                ExecClass::LoadImm | ExecClass::LoadReg => {
                    if let Some(value) = cpu.data_memory.read(slot.mem_address) {
                        slot.rd_value = value;
                    }
                }
                ExecClass::StoreImm | ExecClass::StoreReg => {
                    let _ = cpu.data_memory.write(slot.mem_address, slot.rd_value);
                }
                _ => {}
            }
        }
        slot.executed = true;
    }

    if cpu.trace {
        trace::print_stage("Memory Two", pipe.latch(StageId::MemoryTwo));
    }
}
