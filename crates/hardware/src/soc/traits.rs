//! Memory trait for the CPU's address space.
//!
//! This module defines the `Memory` trait the execution engine talks to. It provides:
//! 1. **Fetch:** Decoded instructions addressed by program counter.
//! 2. **Access:** Width-parameterised byte reads and writes; the caller decides
//!    whether loaded bytes are sign- or zero-extended.
//! 3. **Symbols:** A global symbol table the CPU may populate at construction.

use std::collections::BTreeMap;

use crate::common::data::Width;
use crate::common::error::MemoryFault;
use crate::isa::Instruction;

/// Address space consulted by the CPU for every fetch and data access.
///
/// Byte order is little-endian. Implementations report bad addresses through
/// [`MemoryFault`]; the CPU turns those into recoverable faults.
pub trait Memory {
    /// Returns the decoded instruction at `pc`.
    ///
    /// # Errors
    ///
    /// Returns a fault if no instruction is mapped at `pc`.
    fn read_instruction(&self, pc: u32) -> Result<Instruction, MemoryFault>;

    /// Reads `width` bytes starting at `addr`.
    ///
    /// # Errors
    ///
    /// Returns a fault if any of the bytes is unmapped.
    fn read(&self, addr: u32, width: Width) -> Result<Vec<u8>, MemoryFault>;

    /// Writes `bytes` (exactly `width` of them) starting at `addr`.
    ///
    /// # Errors
    ///
    /// Returns a fault if any of the bytes is unmapped or `bytes` does not
    /// match `width`.
    fn write(&mut self, addr: u32, width: Width, bytes: &[u8]) -> Result<(), MemoryFault>;

    /// Global symbol table (name → address).
    fn global_symbols(&self) -> &BTreeMap<String, u32>;

    /// Mutable global symbol table.
    fn global_symbols_mut(&mut self) -> &mut BTreeMap<String, u32>;

    /// Reads `len` contiguous bytes starting at `addr` (default: byte-by-byte).
    ///
    /// # Errors
    ///
    /// Returns the first fault encountered.
    fn read_bytes(&self, addr: u32, len: u32) -> Result<Vec<u8>, MemoryFault> {
        (0..len)
            .map(|i| {
                let byte = self.read(addr.wrapping_add(i), Width::Byte)?;
                Ok(byte.first().copied().unwrap_or_default())
            })
            .collect()
    }

    /// Writes a contiguous byte slice starting at `addr` (default: byte-by-byte).
    ///
    /// # Errors
    ///
    /// Returns the first fault encountered; earlier bytes stay written.
    fn write_bytes(&mut self, addr: u32, data: &[u8]) -> Result<(), MemoryFault> {
        for (i, byte) in (0u32..).zip(data) {
            self.write(addr.wrapping_add(i), Width::Byte, std::slice::from_ref(byte))?;
        }
        Ok(())
    }
}
