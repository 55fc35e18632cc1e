//! Faults and engine errors.
//!
//! This module defines the error handling of the emulator. It provides:
//! 1. **Faults:** Recoverable emulation-time conditions (memory, malformed
//!    instruction, unimplemented instruction, syscall). The dispatch loop catches
//!    these, reports them and ends the run cleanly.
//! 2. **Engine errors:** Internal defects, such as an instruction that reached
//!    dispatch without a registered handler. These escape the loop.
//! 3. **Parse errors:** Unknown mnemonic or register names handed in by a decoder.

use std::fmt;
use std::io;

use thiserror::Error;

use super::data::{AccessType, Width};
use crate::isa::{Instruction, Mnemonic};

/// Fault raised by a [`Memory`](crate::soc::Memory) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryFault {
    /// No text section contains the requested program counter.
    #[error("no instruction at address 0x{0:08X}")]
    UnmappedInstruction(u32),

    /// A data access touched bytes outside every data section.
    #[error("{access} of {width} byte(s) at unmapped address 0x{addr:08X}")]
    Unmapped {
        /// First byte of the access.
        addr: u32,
        /// Access width.
        width: Width,
        /// Read or write.
        access: AccessType,
    },

    /// The bytes moved by a read or write do not match the access width.
    #[error("access of {found} byte(s) does not match access width {expected}")]
    WidthMismatch {
        /// Declared access width.
        expected: Width,
        /// Bytes actually supplied.
        found: usize,
    },

    /// Loading an executable would run past the end of the 32-bit address space.
    #[error("address space exhausted placing section `{0}`")]
    AddressSpaceExhausted(String),
}

/// Fault raised by a syscall handler while performing an effect.
#[derive(Debug, Error)]
pub enum SyscallFault {
    /// The number in `a7` does not name a known syscall.
    #[error("unknown syscall number {0}")]
    Unknown(u32),

    /// The syscall touched memory it could not access.
    #[error(transparent)]
    Memory(#[from] MemoryFault),

    /// The host stream backing the syscall failed.
    #[error("host i/o failed: {0}")]
    Io(#[from] io::Error),
}

/// Recoverable emulation fault.
///
/// Every variant is caught at the dispatch-loop boundary: it is reported with
/// the faulting pc and instruction, optionally escalated to the debug session,
/// and then the run ends.
#[derive(Debug, Error)]
pub enum Fault {
    /// Bad address or width, raised during fetch or a data access.
    #[error("memory fault: {0}")]
    Memory(#[from] MemoryFault),

    /// Operand count does not match the handler's fixed arity.
    #[error("{mnemonic} expects {expected} operand(s), got {found}")]
    Arity {
        /// Instruction being executed.
        mnemonic: Mnemonic,
        /// Operand count required.
        expected: usize,
        /// Operand count supplied.
        found: usize,
    },

    /// An operand has the wrong kind (register, immediate, memory) for its slot.
    #[error("{mnemonic} operand {index} must be {expected}")]
    OperandKind {
        /// Instruction being executed.
        mnemonic: Mnemonic,
        /// Zero-based operand position.
        index: usize,
        /// Kind the handler expected.
        expected: &'static str,
    },

    /// Recognised but intentionally unimplemented instruction.
    #[error("instruction {0} is not implemented")]
    Unimplemented(Mnemonic),

    /// Raised by the syscall handler.
    #[error("syscall failed: {0}")]
    Syscall(#[from] SyscallFault),
}

impl Fault {
    /// Returns true for operand arity or operand kind mismatches.
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Arity { .. } | Self::OperandKind { .. })
    }
}

/// Internal defect that must not be swallowed by the dispatch loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// An instruction reached dispatch without a registered handler.
    ///
    /// This signals a decoder/engine mismatch, not an emulation fault.
    #[error("no handler registered for instruction `{0}`")]
    UnregisteredInstruction(Mnemonic),
}

/// A caught fault together with where it happened.
#[derive(Debug)]
pub struct FaultReport {
    /// Address of the instruction being fetched or executed.
    pub pc: u32,
    /// The instruction, or `None` when the fetch itself faulted.
    pub instruction: Option<Instruction>,
    /// The fault.
    pub fault: Fault,
}

impl fmt::Display for FaultReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exception caught at 0x{:08X}: ", self.pc)?;
        match &self.instruction {
            Some(ins) => write!(f, "{ins}"),
            None => f.write_str("<fetch>"),
        }
    }
}

/// Result type of a single fetch/dispatch/execute step.
#[derive(Debug, Error)]
pub enum ExecError {
    /// A recoverable fault; the dispatch loop reports it and stops.
    #[error("{0}")]
    Fault(Box<FaultReport>),

    /// An internal defect; propagated out of the run loop unhandled.
    #[error(transparent)]
    Internal(#[from] EngineError),
}

impl ExecError {
    /// Wraps `fault` with the pc and instruction it occurred at.
    pub fn fault(pc: u32, instruction: Option<Instruction>, fault: impl Into<Fault>) -> Self {
        Self::Fault(Box::new(FaultReport {
            pc,
            instruction,
            fault: fault.into(),
        }))
    }
}

/// Failure to resolve a textual name handed over by a decoder or program file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not a mnemonic of the instruction set.
    #[error("unknown instruction `{0}`")]
    UnknownMnemonic(String),

    /// Not an ABI or `xN` register name.
    #[error("unknown register `{0}`")]
    UnknownRegister(String),
}
