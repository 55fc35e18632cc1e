//! Run configuration for the emulator.
//!
//! This module defines the options captured when a [`Cpu`](crate::Cpu) is
//! constructed. It provides:
//! 1. **Defaults:** Baseline constants for section placement and sizes.
//! 2. **Structure:** The flat [`RunConfig`] with per-field serde defaults.
//! 3. **Loading:** JSON parsing from a string or a file.
//!
//! The configuration is passed by value into the CPU and by reference into the
//! memory it is built with; nothing reads it from global state.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Default configuration constants.
mod defaults {
    /// Address of the first loaded section.
    ///
    /// Nonzero so that a zero entry point can mean "nothing to run".
    pub const TEXT_BASE: u32 = 0x100;

    /// Size of the stack section placed after the program (8 KiB).
    pub const STACK_SIZE: u32 = 8 * 1024;

    /// Size of the heap section placed after the stack (64 KiB).
    pub const HEAP_SIZE: u32 = 64 * 1024;
}

/// Error loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
    /// The JSON was malformed or contained unknown fields.
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Emulator run configuration.
///
/// # Examples
///
/// ```
/// use riscemu_core::config::RunConfig;
///
/// let config = RunConfig::default();
/// assert!(config.include_scall_symbols);
/// assert!(!config.debug_on_exception);
///
/// let config = RunConfig::from_json(r#"{ "debug_on_exception": true }"#).unwrap();
/// assert!(config.debug_on_exception);
/// assert_eq!(config.stack_size, 8 * 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Insert syscall name → number entries into the memory's global symbol table.
    #[serde(default = "RunConfig::default_include_scall_symbols")]
    pub include_scall_symbols: bool,

    /// Launch the debug session when a fault ends the run.
    #[serde(default)]
    pub debug_on_exception: bool,

    /// Address of the first section the loader places.
    #[serde(default = "RunConfig::default_text_base")]
    pub text_base: u32,

    /// Stack section size in bytes.
    #[serde(default = "RunConfig::default_stack_size")]
    pub stack_size: u32,

    /// Heap section size in bytes.
    #[serde(default = "RunConfig::default_heap_size")]
    pub heap_size: u32,
}

impl RunConfig {
    const fn default_include_scall_symbols() -> bool {
        true
    }

    const fn default_text_base() -> u32 {
        defaults::TEXT_BASE
    }

    const fn default_stack_size() -> u32 {
        defaults::STACK_SIZE
    }

    const fn default_heap_size() -> u32 {
        defaults::HEAP_SIZE
    }

    /// Parses a configuration from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on malformed input or unknown fields.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Json`] if it does not parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            include_scall_symbols: true,
            debug_on_exception: false,
            text_base: defaults::TEXT_BASE,
            stack_size: defaults::STACK_SIZE,
            heap_size: defaults::HEAP_SIZE,
        }
    }
}
