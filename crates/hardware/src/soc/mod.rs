//! Address space.
//!
//! This module defines the memory contract the CPU depends on and ships a flat,
//! section-based implementation of it.

/// Section-based memory with an executable loader.
pub mod memory;

/// The `Memory` trait.
pub mod traits;

pub use traits::Memory;
