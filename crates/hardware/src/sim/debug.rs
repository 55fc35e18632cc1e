//! Debug session contract.
//!
//! The CPU suspends itself and hands its full state to a [`DebugSession`] on
//! `ebreak`/`sbreak`, and on a caught fault when `debug_on_exception` is set.
//! The call blocks until the session returns; execution then resumes (or, after
//! a fault, the run ends).

use std::fmt;

use crate::common::reg::RegisterFile;
use crate::core::cpu::ExecState;
use crate::soc::traits::Memory;

/// Everything a debug session may inspect or modify.
pub struct DebugView<'a> {
    /// pc, cycle and exit state.
    pub state: &'a ExecState,
    /// Address space.
    pub memory: &'a mut dyn Memory,
    /// Register file.
    pub regs: &'a mut RegisterFile,
}

impl fmt::Debug for DebugView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugView")
            .field("state", &self.state)
            .field("regs", &self.regs)
            .finish_non_exhaustive()
    }
}

/// Interactive inspection of a suspended CPU.
pub trait DebugSession {
    /// Runs the session; returns when the operator resumes.
    fn launch(&mut self, view: DebugView<'_>, message: &str);
}

/// Non-interactive session that logs the message and a register dump.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceDebugger;

impl DebugSession for TraceDebugger {
    fn launch(&mut self, view: DebugView<'_>, message: &str) {
        tracing::warn!(
            pc = format_args!("0x{:08X}", view.state.pc),
            cycle = view.state.cycle,
            "{message}"
        );
        for line in view.regs.dump().lines() {
            tracing::warn!("  {line}");
        }
    }
}
