//! Assembly text decoder.
//!
//! Turns one line of APEX assembly into an [`Instruction`] record. The line
//! format is comma-separated fields with no whitespace inside a field:
//! register operands are written `Rn`, literals `#k` with `k` a possibly
//! negative decimal integer. Operand orderings are per-opcode; the decoder
//! owns them so the pipeline never has to.

use thiserror::Error;

use crate::common::constants::REGISTER_FILE_SIZE;
use crate::isa::instruction::{Instruction, Opcode};

/// Reasons a line of assembly fails to decode.
///
/// The loader downgrades every one of these to a NOP with a warning; they
/// are surfaced as a typed error so tests and tooling can tell them apart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The line was blank.
    #[error("blank line")]
    Blank,

    /// The mnemonic is not part of the instruction set.
    #[error("unknown mnemonic `{0}`")]
    UnknownMnemonic(String),

    /// The line carried the wrong number of operands for its mnemonic.
    #[error("expected {expected} operands, found {found}")]
    OperandCount {
        /// Operands the mnemonic requires.
        expected: usize,
        /// Operands present on the line.
        found: usize,
    },

    /// A register operand was not of the form `Rn`.
    #[error("malformed register operand `{0}`")]
    BadRegister(String),

    /// A register index fell outside the register file.
    #[error("register R{0} out of range")]
    RegisterRange(usize),

    /// A literal operand was not of the form `#k`.
    #[error("malformed literal operand `{0}`")]
    BadLiteral(String),
}

/// Decodes a register operand of the form `Rn`.
fn register(token: &str) -> Result<usize, DecodeError> {
    let digits = token
        .strip_prefix('R')
        .ok_or_else(|| DecodeError::BadRegister(token.to_string()))?;
    let idx: usize = digits
        .parse()
        .map_err(|_| DecodeError::BadRegister(token.to_string()))?;
    if idx >= REGISTER_FILE_SIZE {
        return Err(DecodeError::RegisterRange(idx));
    }
    Ok(idx)
}

/// Decodes a literal operand of the form `#k`.
fn literal(token: &str) -> Result<i32, DecodeError> {
    let digits = token
        .strip_prefix('#')
        .ok_or_else(|| DecodeError::BadLiteral(token.to_string()))?;
    digits
        .parse()
        .map_err(|_| DecodeError::BadLiteral(token.to_string()))
}

/// Pulls exactly `N` operand tokens out of the field list.
fn take<'a, const N: usize>(fields: &[&'a str]) -> Result<[&'a str; N], DecodeError> {
    <[&'a str; N]>::try_from(fields).map_err(|_| DecodeError::OperandCount {
        expected: N,
        found: fields.len(),
    })
}

/// Decodes one line of assembly into an instruction record.
///
/// # Errors
///
/// Returns a [`DecodeError`] describing the first problem found; the caller
/// decides whether that degrades to a NOP or aborts.
pub fn parse_instruction(line: &str) -> Result<Instruction, DecodeError> {
    let mut fields = line.trim().split(',').map(str::trim);
    let mnemonic = fields.next().filter(|m| !m.is_empty()).ok_or(DecodeError::Blank)?;
    let ops: Vec<&str> = fields.collect();

    let mut inst = Instruction::nop();
    match mnemonic {
        "MOVC" => {
            let [rd, imm] = take::<2>(&ops)?;
            inst.opcode = Opcode::Movc;
            inst.rd = register(rd)?;
            inst.imm = literal(imm)?;
        }
        "MOV" => {
            let [rd, rs1] = take::<2>(&ops)?;
            inst.opcode = Opcode::Mov;
            inst.rd = register(rd)?;
            inst.rs1 = register(rs1)?;
        }
        "ADD" | "SUB" | "MUL" | "DIV" | "AND" | "OR" | "EX-OR" => {
            let [rd, rs1, rs2] = take::<3>(&ops)?;
            inst.opcode = match mnemonic {
                "ADD" => Opcode::Add,
                "SUB" => Opcode::Sub,
                "MUL" => Opcode::Mul,
                "DIV" => Opcode::Div,
                "AND" => Opcode::And,
                "OR" => Opcode::Or,
                _ => Opcode::Exor,
            };
            inst.rd = register(rd)?;
            inst.rs1 = register(rs1)?;
            inst.rs2 = register(rs2)?;
        }
        "ADDL" | "SUBL" => {
            let [rd, rs1, imm] = take::<3>(&ops)?;
            inst.opcode = if mnemonic == "ADDL" {
                Opcode::Addl
            } else {
                Opcode::Subl
            };
            inst.rd = register(rd)?;
            inst.rs1 = register(rs1)?;
            inst.imm = literal(imm)?;
        }
        "LOAD" => {
            let [rd, rs1, imm] = take::<3>(&ops)?;
            inst.opcode = Opcode::Load;
            inst.rd = register(rd)?;
            inst.rs1 = register(rs1)?;
            inst.imm = literal(imm)?;
        }
        "LDR" => {
            let [rd, rs1, rs2] = take::<3>(&ops)?;
            inst.opcode = Opcode::Ldr;
            inst.rd = register(rd)?;
            inst.rs1 = register(rs1)?;
            inst.rs2 = register(rs2)?;
        }
        "STORE" => {
            // Source value in rs1, base in rs2.
            let [rs1, rs2, imm] = take::<3>(&ops)?;
            inst.opcode = Opcode::Store;
            inst.rs1 = register(rs1)?;
            inst.rs2 = register(rs2)?;
            inst.imm = literal(imm)?;
        }
        "STR" => {
            // Source value in rd, base registers in rs1 and rs2.
            let [rd, rs1, rs2] = take::<3>(&ops)?;
            inst.opcode = Opcode::Str;
            inst.rd = register(rd)?;
            inst.rs1 = register(rs1)?;
            inst.rs2 = register(rs2)?;
        }
        "BZ" | "BNZ" => {
            let [imm] = take::<1>(&ops)?;
            inst.opcode = if mnemonic == "BZ" {
                Opcode::Bz
            } else {
                Opcode::Bnz
            };
            inst.imm = literal(imm)?;
        }
        "JUMP" => {
            let [rs1, imm] = take::<2>(&ops)?;
            inst.opcode = Opcode::Jump;
            inst.rs1 = register(rs1)?;
            inst.imm = literal(imm)?;
        }
        "HALT" => {
            let [] = take::<0>(&ops)?;
            inst.opcode = Opcode::Halt;
        }
        "NOP" => {
            let [] = take::<0>(&ops)?;
            inst.opcode = Opcode::Nop;
        }
        other => return Err(DecodeError::UnknownMnemonic(other.to_string())),
    }
    Ok(inst)
}
