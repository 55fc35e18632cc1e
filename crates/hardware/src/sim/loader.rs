//! Executable format and loading.
//!
//! This module describes what the loader consumes and produces:
//! 1. **Executable:** Pre-decoded text, initial data and text-relative symbols,
//!    readable from JSON so programs can be run without an assembler.
//! 2. **Loaded executable:** The entry pc and initial stack/heap pointers the
//!    CPU seeds itself with. Placement is done by [`Mmu::load_bin`](crate::Mmu::load_bin).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::isa::Instruction;

/// Error reading an executable.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("could not read program: {0}")]
    Io(#[from] std::io::Error),
    /// The JSON was malformed, or named an unknown instruction or register.
    #[error("invalid program: {0}")]
    Json(#[from] serde_json::Error),
}

/// A program ready to be placed in memory.
///
/// # Examples
///
/// ```
/// use riscemu_core::sim::Executable;
///
/// let exe = Executable::from_json(r#"{
///     "text": [
///         { "op": "addi", "args": [{"reg": "a0"}, {"reg": "zero"}, {"imm": 7}] },
///         { "op": "ret" }
///     ]
/// }"#).unwrap();
/// assert_eq!(exe.text.len(), 2);
/// assert_eq!(exe.entry, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Executable {
    /// Name used to label sections.
    #[serde(default = "Executable::default_name")]
    pub name: String,
    /// Decoded instructions. Branch and jump targets are absolute addresses.
    pub text: Vec<Instruction>,
    /// Initial contents of the data section.
    #[serde(default)]
    pub data: Vec<u8>,
    /// Text-relative symbol offsets.
    #[serde(default)]
    pub symbols: BTreeMap<String, u32>,
    /// Text-relative index of the first instruction to run.
    #[serde(default)]
    pub entry: u32,
}

impl Executable {
    fn default_name() -> String {
        String::from("main")
    }

    /// Creates an executable with the given text and no data or symbols.
    pub fn from_text(text: Vec<Instruction>) -> Self {
        Self {
            name: Self::default_name(),
            text,
            data: Vec::new(),
            symbols: BTreeMap::new(),
            entry: 0,
        }
    }

    /// Parses an executable from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Json`] on malformed input, unknown mnemonics or
    /// unknown register names.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses an executable file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read, or
    /// [`LoadError::Json`] if it does not parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// Result of placing an executable in memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadedExecutable {
    /// Address of the first instruction to execute.
    pub run_ptr: u32,
    /// Initial `(stack pointer, heap pointer)`.
    pub stack_heap: (u32, u32),
}
