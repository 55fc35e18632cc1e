//! Simulation collaborators.
//!
//! Provides the executable format and loader result, the syscall interface the
//! CPU hands `ecall` requests to, and the debug session contract.

/// Debug session contract and a logging implementation.
pub mod debug;
/// Executable format and loader result.
pub mod loader;
/// Syscall request, handler trait and the default syscall interface.
pub mod syscall;

pub use debug::{DebugSession, DebugView, TraceDebugger};
pub use loader::{Executable, LoadedExecutable};
pub use syscall::{Syscall, SyscallHandler, SyscallInterface};
