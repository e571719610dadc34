//! APEX cycle-accurate simulator CLI.
//!
//! This binary is the single entry point for running APEX assembly programs:
//! 1. **Simulate:** run a program and print the per-cycle stage trace.
//! 2. **Display:** same, plus a dump of flags, registers, and data memory
//!    after termination.
//! 3. **Budgeted runs:** an optional cycle budget bounds long programs.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use apex_core::config::Config;
use apex_core::sim::loader;
use apex_core::sim::simulator::{ExitReason, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "apex",
    author,
    version,
    about = "APEX cycle-accurate pipeline simulator",
    long_about = "Run an APEX assembly program clock cycle by clock cycle through the\n\
        seven-stage in-order pipeline.\n\n\
        Examples:\n  \
        apex programs/input.asm simulate 0\n  \
        apex programs/input.asm display 50"
)]
struct Cli {
    /// Assembly program, one instruction per line.
    input: PathBuf,

    /// Output mode.
    #[arg(value_enum)]
    mode: Mode,

    /// Cycle budget; 0 runs until HALT commits or the program drains.
    #[arg(default_value_t = 0)]
    cycles: u64,

    /// Optional JSON configuration override.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Per-cycle stage trace only.
    Simulate,
    /// Trace plus the final architectural state.
    Display,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => match load_config(path) {
            Ok(config) => config,
            Err(message) => {
                eprintln!("apex: {message}");
                process::exit(1);
            }
        },
        None => Config::default(),
    };

    let code = match loader::load_program(&cli.input, &config) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("apex: {error}");
            process::exit(1);
        }
    };
    eprintln!("APEX: loaded {} instructions", code.len());

    let mut sim = Simulator::new(code, &config);
    match sim.run(cli.cycles) {
        ExitReason::Halted | ExitReason::Drained | ExitReason::BudgetExhausted => {
            println!("(apex) >> Simulation Complete");
        }
    }

    if cli.mode == Mode::Display {
        sim.cpu.dump_state();
    }
    sim.cpu.stats.print();
}

/// Reads and deserializes a JSON configuration file.
fn load_config(path: &PathBuf) -> Result<Config, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config `{}`: {e}", path.display()))?;
    serde_json::from_str(&text)
        .map_err(|e| format!("failed to parse config `{}`: {e}", path.display()))
}
