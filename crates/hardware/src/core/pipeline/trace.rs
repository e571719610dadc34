//! Per-cycle trace formatting.
//!
//! One line per stage per cycle:
//!
//! ```text
//! Decode/RF      : 1: pc(4004) ADD,R2,R1,R1 ---> STALLED
//! ```
//!
//! The leading number is the executed bit; the trailing status is `EMPTY`,
//! `STALLED`, `BUSY`, or absent for a stage that ran normally.

use crate::core::pipeline::latches::StageLatch;
use crate::isa::disasm;

/// Prints the cycle banner preceding the seven stage lines.
pub fn cycle_header(clock: u64) {
    println!("\n--------------------------------");
    println!("Clock Cycle #: {clock}");
    println!("{:<15}: Executed: Instruction", "Stage");
    println!("--------------------------------");
}

/// Formats one stage line.
pub fn stage_line(name: &str, latch: &StageLatch) -> String {
    let mut line = format!(
        "{:<15}: {}: pc({}) ",
        name,
        u8::from(latch.executed),
        latch.pc
    );
    if let Some(opcode) = latch.opcode {
        line.push_str(&disasm::render(
            opcode,
            latch.rd,
            latch.rs1,
            latch.rs2,
            latch.imm,
        ));
        line.push(' ');
    }
    if latch.empty {
        line.push_str("---> EMPTY");
    } else if latch.stalled {
        line.push_str("---> STALLED");
    } else if latch.busy {
        line.push_str("---> BUSY");
    }
    line.trim_end().to_string()
}

/// Prints one stage line.
pub fn print_stage(name: &str, latch: &StageLatch) {
    println!("{}", stage_line(name, latch));
}
