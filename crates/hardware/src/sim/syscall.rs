//! Syscall interface.
//!
//! This module provides the handoff between `ecall`/`scall` and the host:
//! 1. **Request:** [`Syscall`] bundles the number from `a7` with access to the
//!    registers, memory and execution state. It is built fresh for every call.
//! 2. **Contract:** [`SyscallHandler`] performs the effect and writes results
//!    back into registers itself.
//! 3. **Default handler:** [`SyscallInterface`] implements `read`, `write` and
//!    `exit` over injectable host streams.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::common::error::SyscallFault;
use crate::common::reg::{Reg, RegisterFile};
use crate::core::cpu::ExecState;
use crate::soc::traits::Memory;

/// `read(fd, buf, len)`.
pub const SYSCALL_READ: u32 = 63;
/// `write(fd, buf, len)`.
pub const SYSCALL_WRITE: u32 = 64;
/// `exit(code)`.
pub const SYSCALL_EXIT: u32 = 93;

/// Symbol names published into the global symbol table.
pub const SYSCALL_SYMBOLS: &[(&str, u32)] = &[
    ("SCALL_READ", SYSCALL_READ),
    ("SCALL_WRITE", SYSCALL_WRITE),
    ("SCALL_EXIT", SYSCALL_EXIT),
];

/// One syscall request.
pub struct Syscall<'a> {
    /// Syscall number, read from `a7`.
    pub id: u32,
    /// Register file, for arguments and results.
    pub regs: &'a mut RegisterFile,
    /// Address space, for buffers.
    pub memory: &'a mut dyn Memory,
    /// Execution state, for `exit`.
    pub state: &'a mut ExecState,
}

impl Syscall<'_> {
    /// Argument register `a0`..`a7` by position.
    pub fn arg(&self, n: usize) -> i32 {
        Reg::new(Reg::A0.index() + n).map_or(0, |reg| self.regs.get(reg))
    }

    /// Writes the result into `a0`.
    pub fn ret(&mut self, val: i32) {
        self.regs.set(Reg::A0, val);
    }
}

impl fmt::Debug for Syscall<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Syscall")
            .field("id", &self.id)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Performs syscall effects on behalf of the CPU.
pub trait SyscallHandler {
    /// Handles one request.
    ///
    /// # Errors
    ///
    /// Returns a [`SyscallFault`] if the number is unknown or the effect fails;
    /// the CPU reports it as a recoverable fault.
    fn handle(&mut self, call: Syscall<'_>) -> Result<(), SyscallFault>;

    /// Name → number pairs to publish in the global symbol table.
    fn symbols(&self) -> &'static [(&'static str, u32)] {
        &[]
    }
}

/// Default syscall handler: `read`, `write` and `exit`.
///
/// `read` supports fd 0, `write` supports fds 1 and 2; other descriptors
/// return -1 in `a0`.
pub struct SyscallInterface {
    input: Box<dyn BufRead>,
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
}

impl SyscallInterface {
    /// Handler bound to the host's stdin, stdout and stderr.
    pub fn stdio() -> Self {
        Self::with_streams(
            Box::new(io::stdin().lock()),
            Box::new(io::stdout()),
            Box::new(io::stderr()),
        )
    }

    /// Handler bound to the given streams.
    pub fn with_streams(
        input: Box<dyn BufRead>,
        stdout: Box<dyn Write>,
        stderr: Box<dyn Write>,
    ) -> Self {
        Self {
            input,
            stdout,
            stderr,
        }
    }

    fn read(&mut self, call: &mut Syscall<'_>) -> Result<(), SyscallFault> {
        let (fd, addr, len) = (call.arg(0), call.arg(1) as u32, call.arg(2));
        if fd != 0 || len < 0 {
            call.ret(-1);
            return Ok(());
        }
        let chunk = {
            let buf = self.input.fill_buf()?;
            buf[..buf.len().min(len as usize)].to_vec()
        };
        // input stays buffered if the guest buffer is unmapped
        call.memory.write_bytes(addr, &chunk)?;
        self.input.consume(chunk.len());
        call.ret(chunk.len() as i32);
        Ok(())
    }

    fn write(&mut self, call: &mut Syscall<'_>) -> Result<(), SyscallFault> {
        let (fd, addr, len) = (call.arg(0), call.arg(1) as u32, call.arg(2));
        let stream = match fd {
            1 => &mut self.stdout,
            2 => &mut self.stderr,
            _ => {
                call.ret(-1);
                return Ok(());
            }
        };
        if len < 0 {
            call.ret(-1);
            return Ok(());
        }
        let data = call.memory.read_bytes(addr, len as u32)?;
        stream.write_all(&data)?;
        stream.flush()?;
        call.ret(len);
        Ok(())
    }
}

impl fmt::Debug for SyscallInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyscallInterface").finish_non_exhaustive()
    }
}

impl SyscallHandler for SyscallInterface {
    fn handle(&mut self, mut call: Syscall<'_>) -> Result<(), SyscallFault> {
        tracing::debug!(id = call.id, a0 = call.arg(0), a1 = call.arg(1), a2 = call.arg(2), "syscall");
        match call.id {
            SYSCALL_READ => self.read(&mut call),
            SYSCALL_WRITE => self.write(&mut call),
            SYSCALL_EXIT => {
                call.state.exit = true;
                call.state.exit_code = call.arg(0);
                Ok(())
            }
            other => Err(SyscallFault::Unknown(other)),
        }
    }

    fn symbols(&self) -> &'static [(&'static str, u32)] {
        SYSCALL_SYMBOLS
    }
}
