//! Simulation statistics collection and reporting.
//!
//! Tracks the metrics the pipeline produces as a side effect of running:
//! 1. **Cycles and completion:** clock cycles and committed instructions.
//! 2. **Instruction mix:** counts by execution category.
//! 3. **Hazards:** stall cycles split by cause, taken branches, and
//!    flush-squashed instructions.

use std::time::Instant;

use crate::isa::{ExecClass, Opcode};

/// Counters accumulated over one simulation run.
#[derive(Debug, Clone)]
pub struct SimStats {
    start_time: Instant,
    /// Clock cycles elapsed.
    pub cycles: u64,
    /// Instructions committed at writeback (bubbles excluded).
    pub instructions_retired: u64,

    /// ALU instructions committed.
    pub inst_alu: u64,
    /// Register and literal moves committed.
    pub inst_mov: u64,
    /// Loads committed.
    pub inst_load: u64,
    /// Stores committed.
    pub inst_store: u64,
    /// Branches and jumps committed.
    pub inst_branch: u64,
    /// System instructions committed (HALT).
    pub inst_system: u64,

    /// Cycles decode spent stalled on an in-flight source register.
    pub stalls_data: u64,
    /// Cycles decode spent holding a branch for the zero flag.
    pub stalls_control: u64,
    /// Taken control transfers.
    pub branches_taken: u64,
    /// Instructions squashed by branch flushes.
    pub squashed: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_mov: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_system: 0,
            stalls_data: 0,
            stalls_control: 0,
            branches_taken: 0,
            squashed: 0,
        }
    }
}

impl SimStats {
    /// Records one committed instruction in the mix counters.
    pub fn retire(&mut self, opcode: Opcode) {
        self.instructions_retired += 1;
        match opcode.class() {
            ExecClass::AluReg | ExecClass::AluImm => self.inst_alu += 1,
            ExecClass::MoveImm | ExecClass::MoveReg => self.inst_mov += 1,
            ExecClass::LoadImm | ExecClass::LoadReg => self.inst_load += 1,
            ExecClass::StoreImm | ExecClass::StoreReg => self.inst_store += 1,
            ExecClass::Branch | ExecClass::Jump => self.inst_branch += 1,
            ExecClass::Halt => self.inst_system += 1,
            ExecClass::Nop => {}
        }
    }

    /// Prints the run report to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = if self.cycles == 0 { 1 } else { self.cycles };
        let instr = if self.instructions_retired == 0 {
            1
        } else {
            self.instructions_retired
        };
        let ipc = self.instructions_retired as f64 / cyc as f64;
        let cpi = cyc as f64 / instr as f64;

        println!("\n==========================================================");
        println!("APEX SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_ipc                  {ipc:.4}");
        println!("sim_cpi                  {cpi:.4}");
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        let share = |n: u64| (n as f64 / instr as f64) * 100.0;
        println!("  op.alu                 {} ({:.2}%)", self.inst_alu, share(self.inst_alu));
        println!("  op.mov                 {} ({:.2}%)", self.inst_mov, share(self.inst_mov));
        println!("  op.load                {} ({:.2}%)", self.inst_load, share(self.inst_load));
        println!("  op.store               {} ({:.2}%)", self.inst_store, share(self.inst_store));
        println!("  op.branch              {} ({:.2}%)", self.inst_branch, share(self.inst_branch));
        println!("  op.system              {} ({:.2}%)", self.inst_system, share(self.inst_system));
        println!("----------------------------------------------------------");
        println!("HAZARDS");
        println!(
            "  stalls.data            {} ({:.2}%)",
            self.stalls_data,
            (self.stalls_data as f64 / cyc as f64) * 100.0
        );
        println!(
            "  stalls.control         {} ({:.2}%)",
            self.stalls_control,
            (self.stalls_control as f64 / cyc as f64) * 100.0
        );
        println!("  branches.taken         {}", self.branches_taken);
        println!("  flush.squashed         {}", self.squashed);
        println!("==========================================================");
    }
}
