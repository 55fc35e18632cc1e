//! RISC-V Application Binary Interface (ABI) register names.
//!
//! Defines the standard ABI names and their register indices, used to resolve
//! register operands by name and to label register dumps.

/// Register x0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register x1 (return address, ra).
pub const REG_RA: usize = 1;
/// Register x2 (stack pointer, sp).
pub const REG_SP: usize = 2;
/// Register x8 (frame pointer, s0/fp).
pub const REG_FP: usize = 8;
/// Register x10 (first argument/return value, a0).
pub const REG_A0: usize = 10;
/// Register x11 (second argument, a1).
pub const REG_A1: usize = 11;
/// Register x12 (third argument, a2).
pub const REG_A2: usize = 12;
/// Register x17 (system call number, a7).
pub const REG_A7: usize = 17;

/// Number of integer registers.
pub const NUM_REGS: usize = 32;

/// Canonical ABI name of each integer register, indexed by register number.
pub const REG_NAMES: [&str; NUM_REGS] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Resolves an ABI name (`a0`, `fp`, ...) or architectural name (`x10`) to its index.
pub fn lookup(name: &str) -> Option<usize> {
    if name == "fp" {
        return Some(REG_FP);
    }
    if let Some(idx) = REG_NAMES.iter().position(|&n| n == name) {
        return Some(idx);
    }
    let digits = name.strip_prefix('x')?;
    // Reject "x01" and friends so every register has exactly one numeric spelling.
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    digits.parse::<usize>().ok().filter(|&idx| idx < NUM_REGS)
}
