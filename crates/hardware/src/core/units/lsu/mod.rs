//! Load/Store Unit (LSU).
//!
//! Converts between register words and the little-endian byte strings moved by
//! the [`Memory`](crate::soc::Memory) contract:
//! - loads sign-extend (`lb`, `lh`) or zero-extend (`lbu`, `lhu`) to 32 bits;
//! - stores keep only the low `width` bytes of the source register.

use crate::common::data::Width;

/// Load/Store Unit (LSU) for memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Assembles a loaded value from little-endian `bytes`.
    ///
    /// # Arguments
    ///
    /// * `bytes`  - The bytes returned by memory; the caller checks there are `width` of them
    /// * `width`  - Access width
    /// * `signed` - Sign-extend from the top bit of `width` if true, zero-extend otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use riscemu_core::common::Width;
    /// use riscemu_core::core::units::lsu::Lsu;
    ///
    /// assert_eq!(Lsu::load_value(&[0x80], Width::Byte, true), -128);
    /// assert_eq!(Lsu::load_value(&[0x80], Width::Byte, false), 128);
    /// ```
    pub fn load_value(bytes: &[u8], width: Width, signed: bool) -> i32 {
        let raw = bytes
            .iter()
            .take(width.bytes())
            .rev()
            .fold(0u32, |acc, &b| (acc << 8) | u32::from(b));
        let unused = 32 - width.bits();
        if signed && unused > 0 {
            ((raw << unused) as i32) >> unused
        } else {
            raw as i32
        }
    }

    /// Truncates `val` to `width` and returns its little-endian bytes.
    pub fn store_bytes(val: i32, width: Width) -> Vec<u8> {
        val.to_le_bytes()[..width.bytes()].to_vec()
    }
}
