//! Integer Register File.
//!
//! This module provides the register reference type and the register file. It provides:
//! 1. **Addressing:** [`Reg`] names a register by index, ABI name or `xN` name.
//! 2. **Storage:** 32 word-sized registers holding two's-complement `i32` values.
//! 3. **Invariant Enforcement:** Register `zero` is hardwired to zero.
//! 4. **Observability:** A formatted dump of every register for debug sessions.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::Deserialize;

use super::error::ParseError;
use crate::isa::abi;

/// Reference to one integer register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct Reg(u8);

impl Reg {
    /// `zero` (x0).
    pub const ZERO: Self = Self(abi::REG_ZERO as u8);
    /// `ra` (x1), the default link register.
    pub const RA: Self = Self(abi::REG_RA as u8);
    /// `sp` (x2).
    pub const SP: Self = Self(abi::REG_SP as u8);
    /// `a0` (x10), first argument and return value.
    pub const A0: Self = Self(abi::REG_A0 as u8);
    /// `a1` (x11).
    pub const A1: Self = Self(abi::REG_A1 as u8);
    /// `a2` (x12).
    pub const A2: Self = Self(abi::REG_A2 as u8);
    /// `a7` (x17), the syscall number register.
    pub const A7: Self = Self(abi::REG_A7 as u8);

    /// Returns the register with index `idx`, or `None` if `idx >= 32`.
    pub const fn new(idx: usize) -> Option<Self> {
        if idx < abi::NUM_REGS {
            Some(Self(idx as u8))
        } else {
            None
        }
    }

    /// Register index (0-31).
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Canonical ABI name.
    pub const fn name(self) -> &'static str {
        abi::REG_NAMES[self.0 as usize]
    }
}

impl FromStr for Reg {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        abi::lookup(s)
            .and_then(Self::new)
            .ok_or_else(|| ParseError::UnknownRegister(s.to_owned()))
    }
}

impl TryFrom<String> for Reg {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Integer register file.
///
/// Values are stored as signed two's-complement words; instructions that need
/// the unsigned view reinterpret them with `as u32`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i32; abi::NUM_REGS],
}

impl RegisterFile {
    /// Creates a register file with every register set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register. `zero` always reads as 0.
    pub fn get(&self, reg: Reg) -> i32 {
        self.regs[reg.index()]
    }

    /// Writes a register. Writes to `zero` are ignored.
    pub fn set(&mut self, reg: Reg, val: i32) {
        if reg == Reg::ZERO {
            if val != 0 {
                tracing::warn!(val, "ignored write to register zero");
            }
            return;
        }
        self.regs[reg.index()] = val;
    }

    /// Renders every register as `name=0xVALUE`, four registers per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (idx, val) in self.regs.iter().enumerate() {
            let sep = if idx % 4 == 3 { "\n" } else { "  " };
            let _ = write!(out, "{:>4}=0x{:08X}{sep}", abi::REG_NAMES[idx], *val as u32);
        }
        out
    }
}
