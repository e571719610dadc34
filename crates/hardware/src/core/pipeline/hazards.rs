//! Data and control hazard predicates.
//!
//! Decode consults these before reading the register file:
//! 1. **Operand dependencies:** the set of source registers an instruction
//!    needs, expressed as a scoreboard mask.
//! 2. **Branch ordering:** a conditional branch must not read the zero flag
//!    while any arithmetic instruction is still in flight ahead of it.

use crate::core::pipeline::latches::StageLatch;
use crate::core::pipeline::StageId;
use crate::isa::instruction::reg_bit;
use crate::isa::ExecClass;

/// Scoreboard mask of the source registers a latch's instruction reads.
///
/// Stores read their to-be-stored register as a source: `rs1` for the
/// literal-offset form, `rd` for the register-offset form.
pub fn required_sources(latch: &StageLatch) -> u32 {
    let Some(opcode) = latch.opcode else {
        return 0;
    };
    match opcode.class() {
        ExecClass::AluReg | ExecClass::LoadReg => reg_bit(latch.rs1) | reg_bit(latch.rs2),
        ExecClass::AluImm | ExecClass::LoadImm | ExecClass::MoveReg | ExecClass::Jump => {
            reg_bit(latch.rs1)
        }
        ExecClass::StoreImm => reg_bit(latch.rs1) | reg_bit(latch.rs2),
        ExecClass::StoreReg => reg_bit(latch.rd) | reg_bit(latch.rs1) | reg_bit(latch.rs2),
        ExecClass::MoveImm
        | ExecClass::Branch
        | ExecClass::Halt
        | ExecClass::Nop => 0,
    }
}

/// Whether any arithmetic instruction occupies a slot between Execute-1 and
/// Memory-2. A conditional branch in decode must wait for those to commit
/// before the zero flag is trustworthy.
pub fn arithmetic_in_flight(slots: &[StageLatch]) -> bool {
    [
        StageId::ExecuteOne,
        StageId::ExecuteTwo,
        StageId::MemoryOne,
        StageId::MemoryTwo,
    ]
    .into_iter()
    .any(|id| slots[id.index()].opcode.is_some_and(|op| op.is_arithmetic()))
}
