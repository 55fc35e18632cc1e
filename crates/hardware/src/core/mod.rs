//! Core processor implementation.
//!
//! This module contains the CPU (execution state, the dispatch loop and the
//! per-opcode handlers) and the stateless execution units the handlers use.

/// CPU state, dispatch loop and instruction semantics.
pub mod cpu;

/// Execution units (ALU, LSU, branch comparison).
pub mod units;

pub use self::cpu::{Cpu, ExecState, RunOutcome};
