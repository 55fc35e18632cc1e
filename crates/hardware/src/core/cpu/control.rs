//! Branch and Jump Instructions.
//!
//! Targets are absolute instruction addresses. Handlers run after the pc has
//! been advanced, so a link register receives the address of the instruction
//! following the jump.

use super::Cpu;
use crate::common::error::Fault;
use crate::common::reg::Reg;
use crate::core::units::bru::BranchCond;
use crate::isa::Instruction;

impl Cpu {
    /// `rs1, rs2, target`: jumps to `target` if `cond` holds.
    fn branch(&mut self, ins: &Instruction, cond: BranchCond) -> Result<(), Fault> {
        ins.expect_arity(3)?;
        let (rs1, rs2, target) = (ins.reg(0)?, ins.reg(1)?, ins.imm(2)?);
        if cond.taken(self.regs.get(rs1), self.regs.get(rs2)) {
            self.state.pc = target as u32;
        }
        Ok(())
    }

    pub(super) fn exec_beq(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.branch(ins, BranchCond::Eq)
    }

    pub(super) fn exec_bne(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.branch(ins, BranchCond::Ne)
    }

    pub(super) fn exec_blt(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.branch(ins, BranchCond::Lt)
    }

    pub(super) fn exec_bge(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.branch(ins, BranchCond::Ge)
    }

    pub(super) fn exec_bltu(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.branch(ins, BranchCond::Ltu)
    }

    pub(super) fn exec_bgeu(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.branch(ins, BranchCond::Geu)
    }

    pub(super) fn exec_j(&mut self, ins: &Instruction) -> Result<(), Fault> {
        ins.expect_arity(1)?;
        self.state.pc = ins.imm(0)? as u32;
        Ok(())
    }

    /// `jal target` links `ra`; `jal rd, target` links `rd`.
    pub(super) fn exec_jal(&mut self, ins: &Instruction) -> Result<(), Fault> {
        let (rd, target) = if ins.args.len() == 1 {
            (Reg::RA, ins.imm(0)?)
        } else {
            ins.expect_arity(2)?;
            (ins.reg(0)?, ins.imm(1)?)
        };
        self.link(rd, target as u32);
        Ok(())
    }

    pub(super) fn exec_jalr(&mut self, ins: &Instruction) -> Result<(), Fault> {
        ins.expect_arity(2)?;
        let (rd, target) = (ins.reg(0)?, ins.imm(1)?);
        self.link(rd, target as u32);
        Ok(())
    }

    pub(super) fn exec_ret(&mut self, ins: &Instruction) -> Result<(), Fault> {
        ins.expect_arity(0)?;
        self.state.pc = self.regs.get(Reg::RA) as u32;
        Ok(())
    }
}
