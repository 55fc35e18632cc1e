//! Section-based memory.
//!
//! This module implements [`Memory`] as a list of non-overlapping sections. It
//! provides:
//! 1. **Placement:** Sections are laid out consecutively from the configured
//!    text base, each starting on a word boundary.
//! 2. **Text:** One address unit per decoded instruction; the pc indexes it.
//! 3. **Data:** Byte-addressed little-endian storage for data, stack and heap.
//! 4. **Loading:** [`Mmu::load_bin`] places an [`Executable`] and computes the
//!    entry point and the initial stack and heap pointers.

use std::collections::BTreeMap;

use crate::common::data::{AccessType, Width};
use crate::common::error::MemoryFault;
use crate::config::RunConfig;
use crate::isa::Instruction;
use crate::sim::loader::{Executable, LoadedExecutable};
use crate::soc::traits::Memory;

/// Alignment of every section base.
const SECTION_ALIGN: u32 = 4;

/// Contents of one section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Contents {
    /// Decoded instructions; one address per instruction.
    Text(Vec<Instruction>),
    /// Raw bytes.
    Data(Vec<u8>),
}

impl Contents {
    fn len(&self) -> usize {
        match self {
            Self::Text(ins) => ins.len(),
            Self::Data(bytes) => bytes.len(),
        }
    }
}

/// A contiguous mapped region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Section name, e.g. `main.text` or `.stack`.
    pub name: String,
    /// First address.
    pub base: u32,
    /// Contents.
    pub contents: Contents,
}

impl Section {
    /// Returns the offset of `[addr, addr + len)` inside this section, if it fits entirely.
    fn offset_of(&self, addr: u32, len: usize) -> Option<usize> {
        let offset = addr.checked_sub(self.base)? as usize;
        (offset + len <= self.contents.len()).then_some(offset)
    }
}

/// Flat address space made of sections.
#[derive(Clone, Debug)]
pub struct Mmu {
    sections: Vec<Section>,
    first_free_addr: u32,
    stack_size: u32,
    heap_size: u32,
    global_symbols: BTreeMap<String, u32>,
}

impl Mmu {
    /// Creates an empty address space laid out according to `conf`.
    pub fn new(conf: &RunConfig) -> Self {
        Self {
            sections: Vec::new(),
            first_free_addr: conf.text_base,
            stack_size: conf.stack_size,
            heap_size: conf.heap_size,
            global_symbols: BTreeMap::new(),
        }
    }

    /// Mapped sections in placement order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Loads an executable: text, data, then fresh stack and heap sections.
    ///
    /// Executable symbols are text-relative and are published into the global
    /// symbol table as absolute addresses.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryFault::AddressSpaceExhausted`] if the sections do not fit
    /// below 4 GiB.
    pub fn load_bin(&mut self, exe: &Executable) -> Result<LoadedExecutable, MemoryFault> {
        let text_base = self.place(format!("{}.text", exe.name), Contents::Text(exe.text.clone()))?;
        if !exe.data.is_empty() {
            let _ = self.place(format!("{}.data", exe.name), Contents::Data(exe.data.clone()))?;
        }
        let stack_base = self.place(
            String::from(".stack"),
            Contents::Data(vec![0; self.stack_size as usize]),
        )?;
        let heap_base = self.place(
            String::from(".heap"),
            Contents::Data(vec![0; self.heap_size as usize]),
        )?;

        for (name, offset) in &exe.symbols {
            let _ = self
                .global_symbols
                .insert(name.clone(), text_base.wrapping_add(*offset));
        }

        let loaded = LoadedExecutable {
            run_ptr: text_base.wrapping_add(exe.entry),
            stack_heap: (stack_base.wrapping_add(self.stack_size), heap_base),
        };
        tracing::debug!(
            name = %exe.name,
            text_base = format_args!("0x{text_base:08X}"),
            run_ptr = format_args!("0x{:08X}", loaded.run_ptr),
            sp = format_args!("0x{:08X}", loaded.stack_heap.0),
            hp = format_args!("0x{:08X}", loaded.stack_heap.1),
            "loaded executable"
        );
        Ok(loaded)
    }

    /// Maps `contents` at the next free, aligned address and returns its base.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryFault::AddressSpaceExhausted`] if the section does not fit.
    pub fn place(&mut self, name: String, contents: Contents) -> Result<u32, MemoryFault> {
        let base = self.first_free_addr;
        let next = u32::try_from(contents.len())
            .ok()
            .and_then(|len| base.checked_add(len))
            .and_then(|end| end.checked_next_multiple_of(SECTION_ALIGN));
        let Some(next) = next else {
            return Err(MemoryFault::AddressSpaceExhausted(name));
        };
        self.first_free_addr = next;
        self.sections.push(Section {
            name,
            base,
            contents,
        });
        Ok(base)
    }

    fn data_slice(&self, addr: u32, len: usize) -> Option<&[u8]> {
        self.sections.iter().find_map(|s| match &s.contents {
            Contents::Data(bytes) => s.offset_of(addr, len).map(|o| &bytes[o..o + len]),
            Contents::Text(_) => None,
        })
    }

    fn data_slice_mut(&mut self, addr: u32, len: usize) -> Option<&mut [u8]> {
        self.sections.iter_mut().find_map(|s| {
            let offset = s.offset_of(addr, len)?;
            match &mut s.contents {
                Contents::Data(bytes) => Some(&mut bytes[offset..offset + len]),
                Contents::Text(_) => None,
            }
        })
    }
}

impl Memory for Mmu {
    fn read_instruction(&self, pc: u32) -> Result<Instruction, MemoryFault> {
        self.sections
            .iter()
            .find_map(|s| match &s.contents {
                Contents::Text(ins) => s.offset_of(pc, 1).map(|o| ins[o].clone()),
                Contents::Data(_) => None,
            })
            .ok_or(MemoryFault::UnmappedInstruction(pc))
    }

    fn read(&self, addr: u32, width: Width) -> Result<Vec<u8>, MemoryFault> {
        self.data_slice(addr, width.bytes())
            .map(<[u8]>::to_vec)
            .ok_or(MemoryFault::Unmapped {
                addr,
                width,
                access: AccessType::Read,
            })
    }

    fn write(&mut self, addr: u32, width: Width, bytes: &[u8]) -> Result<(), MemoryFault> {
        if bytes.len() != width.bytes() {
            return Err(MemoryFault::WidthMismatch {
                expected: width,
                found: bytes.len(),
            });
        }
        let dst = self
            .data_slice_mut(addr, width.bytes())
            .ok_or(MemoryFault::Unmapped {
                addr,
                width,
                access: AccessType::Write,
            })?;
        dst.copy_from_slice(bytes);
        Ok(())
    }

    fn global_symbols(&self) -> &BTreeMap<String, u32> {
        &self.global_symbols
    }

    fn global_symbols_mut(&mut self) -> &mut BTreeMap<String, u32> {
        &mut self.global_symbols
    }
}
