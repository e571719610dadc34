//! Fetch stage.
//!
//! Reads the instruction addressed by the program counter into the fetch
//! latch and advances the counter. Running past the end of the program
//! leaves the latch vacant; the vacancy drains down the pipe and ends the
//! simulation at writeback.

use crate::common::constants::INSTRUCTION_BYTES;
use crate::core::pipeline::{trace, Pipeline, StageId};
use crate::core::Cpu;
use crate::isa::Opcode;

/// Executes the fetch stage.
pub fn fetch_stage(cpu: &mut Cpu, pipe: &mut Pipeline) {
    let decode_holds_halt = pipe.latch(StageId::Decode).opcode == Some(Opcode::Halt);

    let slot = pipe.latch_mut(StageId::Fetch);
    slot.executed = false;

    if slot.runnable() {
        slot.pc = cpu.pc;
        match cpu.code.fetch(cpu.pc) {
            Some(inst) => {
                slot.load(cpu.pc, &inst);
                slot.executed = true;
                slot.empty = false;
                cpu.pc = cpu.pc.wrapping_add(INSTRUCTION_BYTES);
            }
            None => {
                // Instruction stream exhausted: stop advancing and let the
                // vacancy drain toward writeback.
                slot.opcode = None;
                slot.executed = true;
                slot.stalled = false;
                slot.empty = true;
            }
        }
    } else if slot.stalled && decode_holds_halt {
        // HALT is occupying decode this cycle. Park the following
        // instruction in the fetch latch so the slot is not lost; the drain
        // keeps it from ever entering decode.
        if let Some(inst) = cpu.code.fetch(cpu.pc) {
            slot.load(cpu.pc, &inst);
        }
    }

    if cpu.trace {
        trace::print_stage("Fetch", pipe.latch(StageId::Fetch));
    }
}
