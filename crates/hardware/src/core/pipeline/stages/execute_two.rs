//! Execute-2 stage.
//!
//! The working stage: ALU results, effective addresses, and branch
//! resolution. A taken branch flushes everything upstream (Execute-1,
//! decode, fetch) with bubbles, releases any stall those stages held, and
//! redirects the program counter. Carry and overflow are written here; the
//! zero flag is not (it commits with the result at writeback).

use tracing::warn;

use crate::common::constants::START_PC;
use crate::core::pipeline::{trace, Pipeline, StageId};
use crate::core::Cpu;
use crate::isa::{ExecClass, Opcode};

/// Executes the Execute-2 stage.
pub fn execute_two_stage(cpu: &mut Cpu, pipe: &mut Pipeline) {
    pipe.latch_mut(StageId::ExecuteTwo).executed = false;

    if pipe.latch(StageId::ExecuteTwo).runnable() {
        if let Some(opcode) = pipe.latch(StageId::ExecuteTwo).opcode {
            match opcode.class() {
                ExecClass::StoreImm => {
                    let latch = pipe.latch_mut(StageId::ExecuteTwo);
                    latch.mem_address = latch.rs2_value.wrapping_add(latch.buffer);
                }
                ExecClass::StoreReg | ExecClass::LoadReg => {
                    let latch = pipe.latch_mut(StageId::ExecuteTwo);
                    latch.mem_address = latch.rs1_value.wrapping_add(latch.rs2_value);
                }
                ExecClass::LoadImm => {
                    let latch = pipe.latch_mut(StageId::ExecuteTwo);
                    latch.mem_address = latch.rs1_value.wrapping_add(latch.buffer);
                }
                ExecClass::MoveImm => {
                    let latch = pipe.latch_mut(StageId::ExecuteTwo);
                    latch.rd_value = latch.buffer;
                }
                ExecClass::MoveReg => {
                    let latch = pipe.latch_mut(StageId::ExecuteTwo);
                    latch.rd_value = latch.rs1_value;
                }
                ExecClass::AluReg | ExecClass::AluImm => {
                    alu(cpu, pipe, opcode);
                }
                ExecClass::Branch | ExecClass::Jump => {
                    resolve_branch(cpu, pipe, opcode);
                }
                ExecClass::Halt | ExecClass::Nop => {}
            }
        }
        pipe.latch_mut(StageId::ExecuteTwo).executed = true;
    }

    if cpu.trace {
        trace::print_stage("Execute Two", pipe.latch(StageId::ExecuteTwo));
    }
}

/// Arithmetic and logic operations, with carry/overflow updates.
fn alu(cpu: &mut Cpu, pipe: &mut Pipeline, opcode: Opcode) {
    let latch = pipe.latch_mut(StageId::ExecuteTwo);
    let a = latch.rs1_value;
    let b = if opcode.class() == ExecClass::AluImm {
        latch.buffer
    } else {
        latch.rs2_value
    };
    match opcode {
        Opcode::Add | Opcode::Addl => match a.checked_add(b) {
            Some(sum) => {
                latch.rd_value = sum;
                cpu.flags.overflow = false;
            }
            None => cpu.flags.overflow = true,
        },
        Opcode::Sub | Opcode::Subl => {
            latch.rd_value = a.wrapping_sub(b);
            cpu.flags.carry = b > a;
        }
        Opcode::Mul => {
            latch.rd_value = a.wrapping_mul(b);
            cpu.flags.overflow = false;
            cpu.flags.carry = false;
        }
        Opcode::Div => {
            if b == 0 {
                warn!(pc = latch.pc, "division by zero, producing zero");
                latch.rd_value = 0;
            } else {
                latch.rd_value = a.wrapping_div(b);
            }
        }
        Opcode::And => latch.rd_value = a & b,
        Opcode::Or => latch.rd_value = a | b,
        Opcode::Exor => latch.rd_value = a ^ b,
        _ => {}
    }
}

/// Branch and jump resolution, with upstream flush on a taken transfer.
fn resolve_branch(cpu: &mut Cpu, pipe: &mut Pipeline, opcode: Opcode) {
    {
        let latch = pipe.latch_mut(StageId::ExecuteTwo);
        latch.mem_address = match opcode {
            Opcode::Jump => latch.rs1_value.wrapping_add(latch.buffer),
            _ => latch.buffer,
        };
    }

    let taken = match opcode {
        Opcode::Bz => cpu.flags.zero,
        Opcode::Bnz => !cpu.flags.zero,
        _ => true,
    };
    if !taken {
        return;
    }

    let branch = *pipe.latch(StageId::ExecuteTwo);
    let target = branch.pc.wrapping_add(branch.mem_address);
    if target % 4 != 0 || target < START_PC {
        warn!(
            pc = branch.pc,
            target,
            opcode = opcode.mnemonic(),
            "invalid branch target, branch not taken"
        );
        return;
    }

    // Release any destination claim the Execute-1 occupant holds; it is
    // about to be squashed and will never reach writeback.
    let upstream = *pipe.latch(StageId::ExecuteOne);
    if let Some(op) = upstream.opcode {
        if op.writes_rd() {
            cpu.scoreboard.clear(upstream.rd);
        }
    }

    for id in [StageId::ExecuteOne, StageId::Decode, StageId::Fetch] {
        let victim = pipe.latch_mut(id);
        if victim.opcode.is_some_and(|op| op != Opcode::Nop) {
            cpu.stats.squashed += 1;
        }
        victim.squash();
    }
    pipe.release_stall();
    cpu.pc = target;
    cpu.stats.branches_taken += 1;
}
