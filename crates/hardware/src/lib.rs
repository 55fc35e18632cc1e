//! Instruction-level RISC-V emulator library.
//!
//! This crate implements an RV32I-style software CPU that executes pre-decoded
//! instructions one at a time. It is organised as follows:
//! 1. **Core:** Execution state, the fetch/advance/dispatch loop, the opcode
//!    registry, and per-opcode semantics (ALU, load/store, branch, jump, system).
//! 2. **ISA:** Mnemonics, operands, decoded instructions, and ABI register names.
//! 3. **SoC:** The `Memory` contract and a flat, section-based address space.
//! 4. **Simulation:** Executable loading, the syscall interface, and debug sessions.
//! 5. **Configuration:** Run-time options captured when the CPU is constructed.

/// Common types (registers, access widths, faults).
pub mod common;
/// Run configuration (defaults and JSON loading).
pub mod config;
/// CPU core (execution state, dispatch loop, instruction semantics).
pub mod core;
/// Instruction set (mnemonics, operands, ABI register names).
pub mod isa;
/// Executable loader, syscall interface and debug sessions.
pub mod sim;
/// Address space (memory trait and flat memory implementation).
pub mod soc;

/// Run configuration; use `RunConfig::default()` or load it from JSON.
pub use crate::config::RunConfig;
/// Main CPU type; owns execution state, registers and collaborators.
pub use crate::core::Cpu;
/// Section-based memory implementing [`soc::Memory`].
pub use crate::soc::memory::Mmu;
