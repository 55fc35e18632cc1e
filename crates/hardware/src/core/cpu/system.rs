//! System Instructions.
//!
//! `ecall`/`scall` hand a [`Syscall`] request to the syscall handler, which
//! reads its own arguments and writes its own results. `ebreak`/`sbreak`
//! suspend the CPU in the debug session and resume at the unchanged pc.

use super::Cpu;
use crate::common::error::Fault;
use crate::common::reg::Reg;
use crate::isa::Instruction;
use crate::sim::syscall::Syscall;

impl Cpu {
    pub(super) fn exec_scall(&mut self, ins: &Instruction) -> Result<(), Fault> {
        ins.expect_arity(0)?;
        let call = Syscall {
            id: self.regs.get(Reg::A7) as u32,
            regs: &mut self.regs,
            memory: &mut *self.memory,
            state: &mut self.state,
        };
        self.syscalls.handle(call)?;
        Ok(())
    }

    pub(super) fn exec_sbreak(&mut self, ins: &Instruction) -> Result<(), Fault> {
        ins.expect_arity(0)?;
        let message = format!("Debug instruction encountered at 0x{:08X}", self.state.pc);
        self.launch_debugger(&message);
        Ok(())
    }

    #[allow(clippy::unused_self)]
    pub(super) fn exec_nop(&mut self, ins: &Instruction) -> Result<(), Fault> {
        ins.expect_arity(0)
    }
}
