//! Load and Store Instructions.
//!
//! Both operand shapes are accepted and resolve through one shared routine:
//! 1. **Explicit:** `rd, rs1, imm` (three operands).
//! 2. **Offset-register:** `rd, imm(rs1)` (two operands).
//!
//! The effective address is `rs1 + imm`, wrapping at 32 bits. Width handling
//! and sign extension are done by the [`Lsu`].

use super::Cpu;
use crate::common::data::Width;
use crate::common::error::{Fault, MemoryFault};
use crate::common::reg::Reg;
use crate::core::units::lsu::Lsu;
use crate::isa::Instruction;

impl Cpu {
    /// Resolves the register operand and effective address of a memory instruction.
    fn mem_operands(&self, ins: &Instruction) -> Result<(Reg, u32), Fault> {
        let (offset, base) = if ins.args.len() == 3 {
            (ins.imm(2)?, ins.reg(1)?)
        } else {
            ins.expect_arity(2)?;
            ins.mem(1)?
        };
        let rd = ins.reg(0)?;
        let addr = self.regs.get(base).wrapping_add(offset) as u32;
        Ok((rd, addr))
    }

    fn load(&mut self, ins: &Instruction, width: Width, signed: bool) -> Result<(), Fault> {
        let (rd, addr) = self.mem_operands(ins)?;
        let bytes = self.memory.read(addr, width)?;
        if bytes.len() != width.bytes() {
            return Err(MemoryFault::WidthMismatch {
                expected: width,
                found: bytes.len(),
            }
            .into());
        }
        self.regs.set(rd, Lsu::load_value(&bytes, width, signed));
        Ok(())
    }

    fn store(&mut self, ins: &Instruction, width: Width) -> Result<(), Fault> {
        let (rs, addr) = self.mem_operands(ins)?;
        let bytes = Lsu::store_bytes(self.regs.get(rs), width);
        self.memory.write(addr, width, &bytes)?;
        Ok(())
    }

    pub(super) fn exec_lb(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.load(ins, Width::Byte, true)
    }

    pub(super) fn exec_lh(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.load(ins, Width::Half, true)
    }

    pub(super) fn exec_lw(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.load(ins, Width::Word, true)
    }

    pub(super) fn exec_lbu(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.load(ins, Width::Byte, false)
    }

    pub(super) fn exec_lhu(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.load(ins, Width::Half, false)
    }

    pub(super) fn exec_sb(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.store(ins, Width::Byte)
    }

    pub(super) fn exec_sh(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.store(ins, Width::Half)
    }

    pub(super) fn exec_sw(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.store(ins, Width::Word)
    }
}
