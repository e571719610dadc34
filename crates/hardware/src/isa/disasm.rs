//! Instruction rendering for the per-cycle trace.
//!
//! Produces the comma-separated operand text shown next to each pipeline
//! stage, e.g. `ADD,R3,R1,R2` or `STORE,R1,R2,#16`.

use crate::isa::instruction::{ExecClass, Opcode};

/// Renders an instruction's mnemonic and operands from latch fields.
pub fn render(opcode: Opcode, rd: usize, rs1: usize, rs2: usize, imm: i32) -> String {
    let m = opcode.mnemonic();
    match opcode.class() {
        ExecClass::AluReg | ExecClass::LoadReg | ExecClass::StoreReg => {
            format!("{m},R{rd},R{rs1},R{rs2}")
        }
        ExecClass::AluImm | ExecClass::LoadImm => format!("{m},R{rd},R{rs1},#{imm}"),
        ExecClass::MoveImm => format!("{m},R{rd},#{imm}"),
        ExecClass::MoveReg => format!("{m},R{rd},R{rs1}"),
        ExecClass::StoreImm => format!("{m},R{rs1},R{rs2},#{imm}"),
        ExecClass::Branch => format!("{m},#{imm}"),
        ExecClass::Jump => format!("{m},R{rs1},#{imm}"),
        ExecClass::Halt | ExecClass::Nop => m.to_string(),
    }
}
