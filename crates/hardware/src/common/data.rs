//! Memory Access Types.
//!
//! This module defines how memory accesses are classified. The types are used for:
//! 1. **Width Selection:** Byte, halfword and word loads/stores.
//! 2. **Fault Generation:** Reporting whether a data read or write went wrong.

use std::fmt;

/// Width of a data memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    /// One byte (`lb`, `lbu`, `sb`).
    Byte,
    /// Two bytes (`lh`, `lhu`, `sh`).
    Half,
    /// Four bytes (`lw`, `sw`).
    Word,
}

impl Width {
    /// Number of bytes moved by an access of this width.
    pub const fn bytes(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }

    /// Number of bits moved by an access of this width.
    pub const fn bits(self) -> u32 {
        self.bytes() as u32 * 8
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bytes())
    }
}

/// Type of memory access operation.
///
/// Carried by data-access faults. Instruction fetches report
/// [`MemoryFault::UnmappedInstruction`](crate::common::MemoryFault::UnmappedInstruction) instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Data read (loads, syscall buffers).
    Read,

    /// Data write (stores, syscall buffers).
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Read => "read",
            Self::Write => "write",
        })
    }
}
