//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL), and
//! shift-right arithmetic (SRA) on 32-bit words.
//!
//! The shift amount is masked to its low 5 bits (0-31) whether it comes from a
//! register or an immediate. SLL and SRL operate on the unsigned view and
//! zero-fill; SRA operates on the signed view and replicates the sign bit.

use super::AluOp;

/// Bit mask for the shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount (only the low 5 bits are used).
///
/// Returns `0` for non-shift opcodes.
pub const fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    let shamt = b as u32 & SHAMT_MASK;
    match op {
        AluOp::Sll => ((a as u32) << shamt) as i32,
        AluOp::Srl => ((a as u32) >> shamt) as i32,
        AluOp::Sra => a >> shamt,
        _ => 0,
    }
}
