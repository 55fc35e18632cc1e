//! Common utilities and types used throughout the emulator.
//!
//! This module provides fundamental building blocks shared by every component:
//! 1. **Memory Access:** Access widths and access kinds for loads, stores and fetches.
//! 2. **Error Handling:** The fault taxonomy caught by the dispatch loop and the
//!    internal errors that escape it.
//! 3. **Register Management:** Register references and the integer register file.

/// Memory access width and kind definitions.
pub mod data;

/// Fault and error types.
pub mod error;

/// Register references and the register file.
pub mod reg;

pub use data::{AccessType, Width};
pub use error::{EngineError, ExecError, Fault, FaultReport, MemoryFault, ParseError, SyscallFault};
pub use reg::{Reg, RegisterFile};
