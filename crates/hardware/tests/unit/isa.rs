//! Assembly decode and trace rendering.

use rstest::rstest;

use apex_core::isa::decode::{parse_instruction, DecodeError};
use apex_core::isa::{disasm, Opcode};

#[rstest]
#[case("MOVC,R1,#7", Opcode::Movc)]
#[case("MOV,R2,R1", Opcode::Mov)]
#[case("ADD,R3,R1,R2", Opcode::Add)]
#[case("ADDL,R3,R1,#4", Opcode::Addl)]
#[case("SUB,R3,R1,R2", Opcode::Sub)]
#[case("SUBL,R3,R1,#4", Opcode::Subl)]
#[case("MUL,R3,R1,R2", Opcode::Mul)]
#[case("DIV,R3,R1,R2", Opcode::Div)]
#[case("AND,R3,R1,R2", Opcode::And)]
#[case("OR,R3,R1,R2", Opcode::Or)]
#[case("EX-OR,R3,R1,R2", Opcode::Exor)]
#[case("LOAD,R3,R1,#8", Opcode::Load)]
#[case("LDR,R3,R1,R2", Opcode::Ldr)]
#[case("STORE,R1,R2,#8", Opcode::Store)]
#[case("STR,R1,R2,R3", Opcode::Str)]
#[case("BZ,#8", Opcode::Bz)]
#[case("BNZ,#-8", Opcode::Bnz)]
#[case("JUMP,R1,#0", Opcode::Jump)]
#[case("HALT", Opcode::Halt)]
#[case("NOP", Opcode::Nop)]
fn test_every_mnemonic_decodes(#[case] line: &str, #[case] expected: Opcode) {
    let inst = parse_instruction(line).expect(line);
    assert_eq!(inst.opcode, expected, "{line}");
}

#[test]
fn test_decode_then_render_round_trips() {
    for line in ["ADD,R3,R1,R2", "MOVC,R1,#7", "STORE,R1,R2,#16", "BZ,#8"] {
        let inst = parse_instruction(line).expect(line);
        let text = disasm::render(inst.opcode, inst.rd, inst.rs1, inst.rs2, inst.imm);
        assert_eq!(text, line);
    }
}

#[rstest]
#[case("ADD,R3,R1", DecodeError::OperandCount { expected: 3, found: 2 })]
#[case("MOVC,R1,#7,#8", DecodeError::OperandCount { expected: 2, found: 3 })]
#[case("MOV,R1,R99", DecodeError::RegisterRange(99))]
#[case("MOVC,R1,7", DecodeError::BadLiteral("7".into()))]
#[case("MOVC,x1,#7", DecodeError::BadRegister("x1".into()))]
fn test_malformed_lines_are_typed_errors(#[case] line: &str, #[case] expected: DecodeError) {
    assert_eq!(parse_instruction(line).unwrap_err(), expected, "{line}");
}
