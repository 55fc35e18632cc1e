//! RISC-V instruction-level emulator CLI.
//!
//! This binary drives the `riscemu-core` library. It provides:
//! 1. **Run:** Load a JSON program, place it in a fresh address space, and run
//!    it on a CPU wired to the host's stdio. The process exits with the
//!    program's exit code.
//! 2. **Instructions:** List every mnemonic the engine has a handler for.

use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use riscemu_core::core::Cpu;
use riscemu_core::isa::Mnemonic;
use riscemu_core::sim::{Executable, SyscallInterface, TraceDebugger};
use riscemu_core::soc::Memory;
use riscemu_core::{Mmu, RunConfig};

#[derive(Parser, Debug)]
#[command(
    name = "riscemu",
    author,
    version,
    about = "Instruction-level RISC-V (RV32I) emulator",
    long_about = "Run pre-decoded RV32I programs.\n\nPrograms are JSON files listing decoded instructions, initial data and symbols.\n\nExamples:\n  riscemu run hello.json\n  riscemu run -v --debug-on-exception hello.json\n  riscemu instructions"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program until it exits or faults.
    Run {
        /// Program to execute (JSON).
        program: PathBuf,

        /// Run configuration (JSON); missing fields take their defaults.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Launch the debug session when a fault ends the run.
        #[arg(long)]
        debug_on_exception: bool,

        /// Do not publish syscall symbols into the global symbol table.
        #[arg(long)]
        no_scall_symbols: bool,
    },

    /// List the supported instructions.
    Instructions,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            program,
            config,
            debug_on_exception,
            no_scall_symbols,
        } => {
            let code = cmd_run(&program, config, debug_on_exception, no_scall_symbols);
            process::exit(code);
        }
        Commands::Instructions => {
            let names: Vec<_> = Cpu::all_instructions().map(Mnemonic::name).collect();
            println!("{}", names.join(" "));
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Loads and runs `program`, returning the process exit code.
///
/// Load and configuration errors exit with 1; an engine defect exits with 2.
fn cmd_run(
    program: &Path,
    config: Option<PathBuf>,
    debug_on_exception: bool,
    no_scall_symbols: bool,
) -> i32 {
    let mut conf = match config.map(RunConfig::from_path).transpose() {
        Ok(conf) => conf.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };
    conf.debug_on_exception |= debug_on_exception;
    conf.include_scall_symbols &= !no_scall_symbols;

    let exe = match Executable::from_path(program) {
        Ok(exe) => exe,
        Err(e) => {
            eprintln!("Error: {}: {e}", program.display());
            return 1;
        }
    };

    let mut mmu = Mmu::new(&conf);
    let loaded = match mmu.load_bin(&exe) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}: {e}", program.display());
            return 1;
        }
    };
    for section in mmu.sections() {
        tracing::debug!(
            base = format_args!("0x{:08X}", section.base),
            "mapped {}",
            section.name
        );
    }
    tracing::debug!(symbols = mmu.global_symbols().len(), "address space ready");

    let mut cpu = Cpu::new(
        conf,
        Box::new(mmu),
        Box::new(SyscallInterface::stdio()),
        Box::new(TraceDebugger),
    );
    match cpu.run_loaded(loaded) {
        Ok(outcome) => {
            tracing::debug!(cycles = outcome.cycles, "{cpu}");
            outcome.exit_code
        }
        Err(e) => {
            eprintln!("Internal error: {e}");
            2
        }
    }
}
