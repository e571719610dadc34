//! Program file loading.

use std::path::Path;

use apex_core::common::SimError;
use apex_core::config::Config;
use apex_core::isa::Opcode;
use apex_core::sim::loader;

#[test]
fn test_load_program_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("prog.asm");
    std::fs::write(&path, "MOVC,R1,#7\nADD,R2,R1,R1\n").expect("write");

    let config = Config::default();
    let code = loader::load_program(&path, &config).expect("load");
    assert_eq!(code.len(), 2);
    assert_eq!(code.fetch(4000).map(|i| i.opcode), Some(Opcode::Movc));
    assert_eq!(code.fetch(4004).map(|i| i.opcode), Some(Opcode::Add));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let config = Config::default();
    let result = loader::load_program(Path::new("/nonexistent/prog.asm"), &config);
    assert!(matches!(result, Err(SimError::Io { .. })));
}

#[test]
fn test_empty_file_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("empty.asm");
    std::fs::write(&path, "").expect("write");

    let config = Config::default();
    let result = loader::load_program(&path, &config);
    assert!(matches!(result, Err(SimError::EmptyProgram { .. })));
}

#[test]
fn test_bad_lines_become_nops() {
    let code = loader::assemble("MOVC,R1,#7\nnot an instruction\n\nHALT");
    assert_eq!(code.len(), 4);
    assert_eq!(code[1].opcode, Opcode::Nop);
    assert_eq!(code[2].opcode, Opcode::Nop);
    assert_eq!(code[3].opcode, Opcode::Halt);
}
