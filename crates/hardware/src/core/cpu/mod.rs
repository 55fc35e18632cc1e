//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the execution
//! state and the collaborators it drives. It coordinates the following:
//! 1. **State Management:** Program counter, cycle counter and exit status.
//! 2. **Register File:** The 32 general-purpose registers.
//! 3. **Collaborators:** Memory, the syscall handler and the debug session,
//!    injected at construction.
//! 4. **Introspection:** The set of supported instructions, read from the
//!    static handler registry.

/// Control transfer: branches and jumps.
pub mod control;

/// Static mnemonic → handler registry.
pub mod dispatch;

/// Fetch/advance/dispatch loop and fault reporting.
pub mod execution;

/// Register-register and register-immediate arithmetic.
pub mod integer;

/// Loads and stores.
pub mod memory;

/// Syscall and debugger handoff.
pub mod system;

use std::fmt;

use crate::common::reg::{Reg, RegisterFile};
use crate::config::RunConfig;
use crate::isa::Mnemonic;
use crate::sim::debug::{DebugSession, DebugView};
use crate::sim::syscall::SyscallHandler;

use self::dispatch::HandlerTable;
use crate::soc::traits::Memory;

pub use self::execution::RunOutcome;

/// Mutable execution state of the CPU.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecState {
    /// Address of the next instruction to fetch.
    pub pc: u32,
    /// Instructions fetched so far, including one that faulted.
    pub cycle: u64,
    /// Set by the `exit` syscall; checked between instructions.
    pub exit: bool,
    /// Exit code reported when the run ends.
    pub exit_code: i32,
}

/// Main CPU structure.
///
/// The CPU fetches pre-decoded instructions from [`Memory`], advances the pc,
/// and dispatches each instruction to its handler. Syscalls and debug
/// sessions are delegated to the injected collaborators.
pub struct Cpu {
    /// pc, cycle and exit state.
    pub state: ExecState,
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Address space.
    pub memory: Box<dyn Memory>,
    syscalls: Box<dyn SyscallHandler>,
    debugger: Box<dyn DebugSession>,
    conf: RunConfig,
    handlers: &'static HandlerTable,
}

impl Cpu {
    /// Creates a CPU around the given collaborators.
    ///
    /// When `include_scall_symbols` is set, the syscall handler's symbol names
    /// are published into the memory's global symbol table.
    pub fn new(
        conf: RunConfig,
        mut memory: Box<dyn Memory>,
        syscalls: Box<dyn SyscallHandler>,
        debugger: Box<dyn DebugSession>,
    ) -> Self {
        if conf.include_scall_symbols {
            let symbols = memory.global_symbols_mut();
            for &(name, id) in syscalls.symbols() {
                let _ = symbols.insert(name.to_owned(), id);
            }
        }
        Self {
            state: ExecState::default(),
            regs: RegisterFile::new(),
            memory,
            syscalls,
            debugger,
            conf,
            handlers: &dispatch::TABLE,
        }
    }

    /// Configuration captured at construction.
    pub const fn config(&self) -> &RunConfig {
        &self.conf
    }

    /// Every instruction this CPU can execute, in registry order.
    pub fn all_instructions() -> impl Iterator<Item = Mnemonic> {
        dispatch::HANDLERS.iter().map(|&(mnemonic, _)| mnemonic)
    }

    /// Returns true if `name` is a mnemonic with a registered handler.
    pub fn supports(name: &str) -> bool {
        name.parse::<Mnemonic>()
            .is_ok_and(|mnemonic| dispatch::lookup(mnemonic).is_some())
    }

    /// Suspends execution and hands the full state to the debug session.
    fn launch_debugger(&mut self, message: &str) {
        let view = DebugView {
            state: &self.state,
            memory: &mut *self.memory,
            regs: &mut self.regs,
        };
        self.debugger.launch(view, message);
    }

    fn link(&mut self, rd: Reg, target: u32) {
        self.regs.set(rd, self.state.pc as i32);
        self.state.pc = target;
    }
}

impl fmt::Display for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU(pc=0x{:08X}, cycle={})",
            self.state.pc, self.state.cycle
        )
    }
}

impl fmt::Debug for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("state", &self.state)
            .field("regs", &self.regs)
            .field("conf", &self.conf)
            .finish_non_exhaustive()
    }
}
