//! Decode / register-file read stage.
//!
//! Resolves source operands against the scoreboard. If any needed register
//! has an in-flight producer, decode stalls itself and fetch until the
//! producer's writeback; operand values are only read once every source is
//! valid. Conditional branches additionally wait for every arithmetic
//! instruction ahead of them, since the zero flag they test is written at
//! writeback.

use crate::core::pipeline::{hazards, trace, Pipeline, StageId, StallKind};
use crate::core::Cpu;
use crate::isa::{ExecClass, Opcode};

/// Executes the decode stage.
pub fn decode_stage(cpu: &mut Cpu, pipe: &mut Pipeline) {
    pipe.latch_mut(StageId::Decode).executed = false;

    if pipe.latch(StageId::Decode).runnable() {
        let snapshot = *pipe.latch(StageId::Decode);
        match snapshot.opcode {
            None | Some(Opcode::Nop) => {
                pipe.latch_mut(StageId::Decode).executed = true;
            }
            Some(Opcode::Halt) => {
                // Fetch stops here; everything already past decode drains.
                cpu.flags.interrupt = true;
                pipe.latch_mut(StageId::Fetch).stalled = true;
                pipe.latch_mut(StageId::Decode).executed = true;
            }
            Some(opcode) if opcode.class() == ExecClass::Branch => {
                if hazards::arithmetic_in_flight(pipe.slots()) {
                    pipe.stall_decode(StallKind::Control);
                } else {
                    let latch = pipe.latch_mut(StageId::Decode);
                    latch.buffer = latch.imm;
                    latch.executed = true;
                }
            }
            Some(opcode) => {
                let needed = hazards::required_sources(&snapshot);
                if cpu.scoreboard.any_pending(needed) {
                    pipe.stall_decode(StallKind::Data);
                } else {
                    read_operands(cpu, pipe, opcode.class());
                }
            }
        }
    }

    if cpu.trace {
        trace::print_stage("Decode/RF", pipe.latch(StageId::Decode));
    }
}

/// Reads the register file into the latch's value fields per operand format
/// and marks the stage executed.
fn read_operands(cpu: &Cpu, pipe: &mut Pipeline, class: ExecClass) {
    let latch = pipe.latch_mut(StageId::Decode);
    match class {
        ExecClass::AluReg | ExecClass::LoadReg => {
            latch.rs1_value = cpu.regs.read(latch.rs1);
            latch.rs2_value = cpu.regs.read(latch.rs2);
        }
        ExecClass::AluImm | ExecClass::LoadImm => {
            latch.rs1_value = cpu.regs.read(latch.rs1);
            latch.buffer = latch.imm;
        }
        ExecClass::MoveImm => {
            latch.buffer = latch.imm;
        }
        ExecClass::MoveReg => {
            latch.rs1_value = cpu.regs.read(latch.rs1);
        }
        ExecClass::StoreImm => {
            // The stored value rides in rd_value so the memory stage writes
            // one field for both store forms.
            latch.rd_value = cpu.regs.read(latch.rs1);
            latch.rs2_value = cpu.regs.read(latch.rs2);
            latch.buffer = latch.imm;
        }
        ExecClass::StoreReg => {
            latch.rd_value = cpu.regs.read(latch.rd);
            latch.rs1_value = cpu.regs.read(latch.rs1);
            latch.rs2_value = cpu.regs.read(latch.rs2);
        }
        ExecClass::Jump => {
            latch.rs1_value = cpu.regs.read(latch.rs1);
            latch.buffer = latch.imm;
        }
        ExecClass::Branch | ExecClass::Halt | ExecClass::Nop => {}
    }
    latch.executed = true;
}
