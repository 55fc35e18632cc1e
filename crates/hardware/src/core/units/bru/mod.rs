//! Branch Resolution Unit (BRU).
//!
//! Evaluates conditional-branch comparisons. The `u`-suffixed conditions
//! compare the unsigned reinterpretation of both register words.

/// Condition tested by a conditional branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchCond {
    /// `beq`: equal.
    Eq,
    /// `bne`: not equal.
    Ne,
    /// `blt`: less than, signed.
    Lt,
    /// `bge`: greater or equal, signed.
    Ge,
    /// `bltu`: less than, unsigned.
    Ltu,
    /// `bgeu`: greater or equal, unsigned.
    Geu,
}

impl BranchCond {
    /// Returns true if the branch is taken for operands `a` and `b`.
    pub const fn taken(self, a: i32, b: i32) -> bool {
        match self {
            Self::Eq => a == b,
            Self::Ne => a != b,
            Self::Lt => a < b,
            Self::Ge => a >= b,
            Self::Ltu => (a as u32) < (b as u32),
            Self::Geu => (a as u32) >= (b as u32),
        }
    }
}
