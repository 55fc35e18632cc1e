//! Main Execution Loop.
//!
//! This module implements the fetch/advance/dispatch cycle of the CPU. It
//! performs the following:
//! 1. **Startup:** Seeds pc, `sp` and `a0` from a loaded executable.
//! 2. **Stepping:** Counts the cycle, fetches at pc, advances pc by one
//!    instruction, then runs the handler registered for the mnemonic.
//! 3. **Fault Boundary:** Catches every [`Fault`](crate::common::Fault),
//!    reports it, optionally escalates to the debug session, and ends the run.
//!    A missing handler is an [`EngineError`] and propagates instead.
//! 4. **Exit Reporting:** Logs the final exit code when the loop ends.

use super::{Cpu, dispatch};
use crate::common::error::{EngineError, ExecError, FaultReport};
use crate::common::reg::Reg;
use crate::sim::loader::LoadedExecutable;

/// How a run ended.
#[derive(Debug)]
pub struct RunOutcome {
    /// Last exit code set by the program (0 if it never exited explicitly).
    pub exit_code: i32,
    /// Cycle counter at the end of the run.
    pub cycles: u64,
    /// The fault that ended the run, if any.
    pub fault: Option<FaultReport>,
}

impl Cpu {
    /// Starts a loaded executable.
    ///
    /// Sets pc to the entry address, `sp` to the initial stack pointer and
    /// `a0` to the heap pointer, then runs until exit or a fault.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] if an instruction without a registered
    /// handler reaches dispatch.
    pub fn run_loaded(&mut self, loaded: LoadedExecutable) -> Result<RunOutcome, EngineError> {
        let (sp, hp) = loaded.stack_heap;
        self.regs.set(Reg::SP, sp as i32);
        self.regs.set(Reg::A0, hp as i32);
        self.run_from(loaded.run_ptr)
    }

    /// Sets pc to `pc` and runs.
    ///
    /// # Errors
    ///
    /// See [`Cpu::run`].
    pub fn run_from(&mut self, pc: u32) -> Result<RunOutcome, EngineError> {
        self.state.pc = pc;
        self.run()
    }

    /// Runs from the current pc until the exit flag is set or a fault is caught.
    ///
    /// A pc of zero means there is nothing to run; the loop body never executes.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] if an instruction without a registered
    /// handler reaches dispatch. Emulation faults are not errors: they end the
    /// run and are returned in [`RunOutcome::fault`].
    pub fn run(&mut self) -> Result<RunOutcome, EngineError> {
        let mut fault = None;
        if self.state.pc != 0 {
            while !self.state.exit {
                match self.step() {
                    Ok(()) => {}
                    Err(ExecError::Fault(report)) => {
                        self.report_fault(&report);
                        fault = Some(*report);
                        break;
                    }
                    Err(ExecError::Internal(err)) => return Err(err),
                }
            }
        }

        tracing::info!("Program exited with code {}", self.state.exit_code);
        Ok(RunOutcome {
            exit_code: self.state.exit_code,
            cycles: self.state.cycle,
            fault,
        })
    }

    /// Executes exactly one instruction.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::Fault`] if the fetch or the instruction faulted,
    /// and [`ExecError::Internal`] if the mnemonic has no handler.
    pub fn step(&mut self) -> Result<(), ExecError> {
        self.state.cycle += 1;
        let pc = self.state.pc;
        let ins = self
            .memory
            .read_instruction(pc)
            .map_err(|e| ExecError::fault(pc, None, e))?;
        self.state.pc = pc.wrapping_add(1);

        tracing::trace!(
            pc = format_args!("0x{pc:08X}"),
            cycle = self.state.cycle,
            "{ins}"
        );

        let handler = dispatch::lookup_in(self.handlers, ins.mnemonic)
            .ok_or(EngineError::UnregisteredInstruction(ins.mnemonic))?;
        handler(self, &ins).map_err(|fault| ExecError::fault(pc, Some(ins), fault))
    }

    fn report_fault(&mut self, report: &FaultReport) {
        tracing::error!("[CPU] {report}");
        tracing::error!("      {}", report.fault);
        if self.conf.debug_on_exception {
            self.launch_debugger("Exception encountered, launching debug:");
        }
    }
}
