//! Decoded instructions.
//!
//! An [`Instruction`] is an immutable mnemonic plus an ordered operand list, as
//! produced by a decoder. Handlers pull typed operands out of it through the
//! accessors below, which turn shape mismatches into malformed-instruction
//! faults.

use std::fmt;

use serde::Deserialize;

use super::mnemonic::Mnemonic;
use crate::common::error::Fault;
use crate::common::reg::Reg;

/// One operand of a decoded instruction.
///
/// Serialized form (JSON): `{"reg": "a0"}`, `{"imm": -4}`,
/// `{"mem": {"offset": 8, "base": "sp"}}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operand {
    /// Register reference.
    Reg(Reg),
    /// Immediate constant. Branch and jump targets are absolute instruction addresses.
    Imm(i32),
    /// `offset(base)` memory operand.
    Mem {
        /// Signed byte offset.
        offset: i32,
        /// Base register.
        base: Reg,
    },
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reg(reg) => write!(f, "{reg}"),
            Self::Imm(imm) => write!(f, "{imm}"),
            Self::Mem { offset, base } => write!(f, "{offset}({base})"),
        }
    }
}

/// A decoded instruction.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Instruction {
    /// Opcode.
    #[serde(rename = "op")]
    pub mnemonic: Mnemonic,
    /// Operands in assembly order.
    #[serde(default)]
    pub args: Vec<Operand>,
}

impl Instruction {
    /// Creates an instruction from a mnemonic and operands.
    pub fn new(mnemonic: Mnemonic, args: impl Into<Vec<Operand>>) -> Self {
        Self {
            mnemonic,
            args: args.into(),
        }
    }

    /// Checks that exactly `expected` operands are present.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::Arity`] on a count mismatch.
    pub fn expect_arity(&self, expected: usize) -> Result<(), Fault> {
        if self.args.len() == expected {
            Ok(())
        } else {
            Err(Fault::Arity {
                mnemonic: self.mnemonic,
                expected,
                found: self.args.len(),
            })
        }
    }

    /// Register operand at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::OperandKind`] if the operand is missing or not a register.
    pub fn reg(&self, index: usize) -> Result<Reg, Fault> {
        match self.args.get(index) {
            Some(Operand::Reg(reg)) => Ok(*reg),
            _ => Err(self.kind_fault(index, "a register")),
        }
    }

    /// Immediate operand at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::OperandKind`] if the operand is missing or not an immediate.
    pub fn imm(&self, index: usize) -> Result<i32, Fault> {
        match self.args.get(index) {
            Some(Operand::Imm(imm)) => Ok(*imm),
            _ => Err(self.kind_fault(index, "an immediate")),
        }
    }

    /// `offset(base)` operand at `index`, returned as `(offset, base)`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::OperandKind`] if the operand is missing or not a memory operand.
    pub fn mem(&self, index: usize) -> Result<(i32, Reg), Fault> {
        match self.args.get(index) {
            Some(Operand::Mem { offset, base }) => Ok((*offset, *base)),
            _ => Err(self.kind_fault(index, "an offset(register) operand")),
        }
    }

    const fn kind_fault(&self, index: usize, expected: &'static str) -> Fault {
        Fault::OperandKind {
            mnemonic: self.mnemonic,
            index,
            expected,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic)?;
        for (i, arg) in self.args.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{arg}")?;
        }
        Ok(())
    }
}
