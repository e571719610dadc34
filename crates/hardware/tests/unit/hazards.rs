//! Stall and flush interactions observed through whole-program runs.

use pretty_assertions::assert_eq;

use apex_core::sim::simulator::ExitReason;

use crate::common::TestBench;

#[test]
fn test_dependent_chain_commits_in_order() {
    let mut bench = TestBench::program(
        "MOVC,R1,#1\n\
         ADD,R2,R1,R1\n\
         ADD,R3,R2,R2",
    );
    bench.run();
    assert_eq!(bench.reg(2), 2);
    assert_eq!(bench.reg(3), 4);
    assert!(!bench.any_pending());
}

#[test]
fn test_branch_waits_for_arithmetic_ahead() {
    let mut bench = TestBench::program(
        "MOVC,R1,#1\n\
         ADD,R2,R1,R1\n\
         BNZ,#8\n\
         MOVC,R3,#5\n\
         MOVC,R4,#6",
    );
    bench.run();
    // The ADD enters Execute-1 on the cycle the branch first decodes; the
    // branch then holds decode until the ADD's writeback commits the flag.
    assert_eq!(bench.sim.cpu.stats.stalls_control, 4);
    // R2 = 2, so BNZ is taken and the MOVC of R3 is squashed.
    assert_eq!(bench.reg(3), 0);
    assert_eq!(bench.reg(4), 6);
}

#[test]
fn test_branch_does_not_wait_for_moves() {
    let mut bench = TestBench::program(
        "MOVC,R1,#1\n\
         SUB,R2,R1,R1\n\
         MOV,R5,R1\n\
         BZ,#8\n\
         MOVC,R3,#5\n\
         MOVC,R4,#6",
    );
    bench.run();
    // The SUB committed long before; the MOV between it and the branch is
    // not arithmetic and must not hold the branch.
    assert_eq!(bench.reg(3), 0);
    assert_eq!(bench.reg(4), 6);
    assert_eq!(bench.sim.cpu.stats.branches_taken, 1);
}

#[test]
fn test_flush_clears_upstream_scoreboard_claim() {
    // The squashed MOVC of R3 must not leave R3 permanently pending, or the
    // MOVC at the branch target could never commit.
    let mut bench = TestBench::program(
        "MOVC,R1,#0\n\
         ADD,R2,R1,R1\n\
         BZ,#8\n\
         MOVC,R3,#99\n\
         MOVC,R3,#7",
    );
    let exit = bench.run();
    assert_eq!(exit, ExitReason::Drained);
    assert_eq!(bench.reg(3), 7);
    assert!(!bench.any_pending());
}

#[test]
fn test_store_waits_for_both_value_and_base() {
    let mut bench = TestBench::program(
        "MOVC,R1,#11\n\
         MOVC,R2,#8\n\
         STORE,R1,R2,#4",
    );
    bench.run();
    assert_eq!(bench.mem(12), 11);
    assert!(bench.sim.cpu.stats.stalls_data > 0);
}

#[test]
fn test_backward_branch_loops() {
    // Counts R1 down from 2. The SUBL is the last arithmetic op before the
    // branch, so the zero flag the BNZ tests is the committed difference.
    let mut bench = TestBench::program(
        "MOVC,R1,#2\n\
         MOVC,R2,#0\n\
         ADDL,R2,R2,#1\n\
         SUBL,R1,R1,#1\n\
         BNZ,#-8",
    );
    let exit = bench.run();
    assert_eq!(exit, ExitReason::Drained);
    assert_eq!(bench.reg(1), 0);
    assert_eq!(bench.reg(2), 2);
    assert_eq!(bench.sim.cpu.stats.branches_taken, 1);
}
