//! Integer Arithmetic, Logic and Shift Instructions.
//!
//! Register-register forms take `rd, rs1, rs2`; register-immediate forms take
//! `rd, rs1, imm`. The actual computation happens in the [`Alu`]; this module
//! only pulls operands out of the instruction and writes the result back.
//!
//! `lui`, `auipc`, `xori`, `ori`, `andi`, `slti` and `sltiu` are decoded but
//! not executed: they raise [`Fault::Unimplemented`].

use super::Cpu;
use crate::common::error::Fault;
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::Instruction;

impl Cpu {
    fn reg_reg(&mut self, ins: &Instruction, op: AluOp) -> Result<(), Fault> {
        ins.expect_arity(3)?;
        let (rd, rs1, rs2) = (ins.reg(0)?, ins.reg(1)?, ins.reg(2)?);
        let val = Alu::execute(op, self.regs.get(rs1), self.regs.get(rs2));
        self.regs.set(rd, val);
        Ok(())
    }

    fn reg_imm(&mut self, ins: &Instruction, op: AluOp) -> Result<(), Fault> {
        ins.expect_arity(3)?;
        let (rd, rs1, imm) = (ins.reg(0)?, ins.reg(1)?, ins.imm(2)?);
        let val = Alu::execute(op, self.regs.get(rs1), imm);
        self.regs.set(rd, val);
        Ok(())
    }

    pub(super) fn exec_add(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.reg_reg(ins, AluOp::Add)
    }

    pub(super) fn exec_addi(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.reg_imm(ins, AluOp::Add)
    }

    pub(super) fn exec_sub(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.reg_reg(ins, AluOp::Sub)
    }

    pub(super) fn exec_and(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.reg_reg(ins, AluOp::And)
    }

    pub(super) fn exec_or(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.reg_reg(ins, AluOp::Or)
    }

    pub(super) fn exec_xor(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.reg_reg(ins, AluOp::Xor)
    }

    pub(super) fn exec_slt(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.reg_reg(ins, AluOp::Slt)
    }

    pub(super) fn exec_sltu(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.reg_reg(ins, AluOp::Sltu)
    }

    pub(super) fn exec_sll(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.reg_reg(ins, AluOp::Sll)
    }

    pub(super) fn exec_slli(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.reg_imm(ins, AluOp::Sll)
    }

    pub(super) fn exec_srl(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.reg_reg(ins, AluOp::Srl)
    }

    pub(super) fn exec_srli(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.reg_imm(ins, AluOp::Srl)
    }

    pub(super) fn exec_sra(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.reg_reg(ins, AluOp::Sra)
    }

    pub(super) fn exec_srai(&mut self, ins: &Instruction) -> Result<(), Fault> {
        self.reg_imm(ins, AluOp::Sra)
    }

    /// Shared handler for decoded-but-unexecuted instructions.
    #[allow(clippy::unused_self)]
    pub(super) const fn exec_unimplemented(&mut self, ins: &Instruction) -> Result<(), Fault> {
        Err(Fault::Unimplemented(ins.mnemonic))
    }
}
