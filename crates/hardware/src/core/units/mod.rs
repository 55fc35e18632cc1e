//! Execution units.
//!
//! Pure functions implementing the numeric semantics of the instruction set:
//! the integer ALU, the load/store unit's extension and truncation rules, and
//! branch condition evaluation. Instruction handlers in [`crate::core::cpu`]
//! read operands, call into these units, and write the results back.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit (condition evaluation).
pub mod bru;

/// Load/Store Unit (sign/zero extension and store truncation).
pub mod lsu;
