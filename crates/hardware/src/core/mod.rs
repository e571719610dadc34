//! CPU architectural state and the pipeline.
//!
//! [`Cpu`] owns everything the ISA defines as observable: the program
//! counter, register file, validity scoreboard, condition flags, code and
//! data memories, the clock, and run statistics. The pipeline mutates this
//! state through the stage functions; nothing else writes it.

/// Code and data memories.
pub mod memory;

/// The seven-stage in-order pipeline.
pub mod pipeline;

use crate::common::{Flags, RegisterFile};
use crate::config::Config;
use crate::stats::SimStats;
use memory::{CodeMemory, DataMemory};
use pipeline::scoreboard::Scoreboard;

/// Architectural state of the simulated processor.
#[derive(Debug)]
pub struct Cpu {
    /// Program counter, a byte address in the code region.
    pub pc: i32,
    /// Clock cycles elapsed.
    pub clock: u64,
    /// Integer register file.
    pub regs: RegisterFile,
    /// Per-register pending-writer bits.
    pub scoreboard: Scoreboard,
    /// Condition flags.
    pub flags: Flags,
    /// Decoded program.
    pub code: CodeMemory,
    /// Flat data memory.
    pub data_memory: DataMemory,
    /// Run statistics.
    pub stats: SimStats,
    /// Per-cycle stage trace on stdout.
    pub trace: bool,
}

impl Cpu {
    /// Creates a CPU at reset holding the given program.
    pub fn new(code: CodeMemory, config: &Config) -> Self {
        Self {
            pc: config.general.start_pc,
            clock: 0,
            regs: RegisterFile::new(),
            scoreboard: Scoreboard::new(),
            flags: Flags::new(),
            code,
            data_memory: DataMemory::new(config.memory.data_words),
            stats: SimStats::default(),
            trace: config.general.trace_pipeline,
        }
    }

    /// Prints the architectural state: flags, the register file with
    /// validity bits, and the first hundred data-memory words.
    pub fn dump_state(&self) {
        println!("============ STATE OF CPU FLAGS ============");
        println!("Flags::  ZeroFlag, CarryFlag, OverflowFlag, InterruptFlag");
        println!(
            "Values:: {},\t|\t{},\t|\t{},\t|\t{}",
            u8::from(self.flags.zero),
            u8::from(self.flags.carry),
            u8::from(self.flags.overflow),
            u8::from(self.flags.interrupt)
        );

        println!("============ STATE OF ARCHITECTURAL REGISTER FILE ============");
        println!("NOTE :: 0 Means Valid & 1 Means Invalid");
        println!("Registers, Values, Invalid");
        for r in 0..crate::common::constants::REGISTER_FILE_SIZE {
            println!(
                "R{:02},\t|\t{:02},\t|\t{}",
                r,
                self.regs.read(r),
                u8::from(self.scoreboard.is_pending(r))
            );
        }

        println!("============ STATE OF DATA MEMORY ============");
        println!("Mem Location, Values");
        for address in 0..100 {
            let word = self.data_memory.read(address).unwrap_or(0);
            println!("M{address:02},\t|\t{word:02}");
        }
        println!();
    }
}
