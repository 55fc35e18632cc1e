//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the vocabulary shared between a decoder and the execution engine:
//! mnemonics, operands, decoded instructions and ABI register names. Decoding
//! from assembly text or machine code happens outside this crate; the engine
//! only consumes [`Instruction`] values.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Decoded instructions and their operands.
pub mod instruction;

/// Instruction mnemonics (RV32I base subset plus pseudo-instructions).
pub mod mnemonic;

pub use instruction::{Instruction, Operand};
pub use mnemonic::Mnemonic;
