//! ALU logical and comparison operations.
//!
//! Implements bitwise OR, AND, XOR, and set-less-than. `Slt` compares the
//! signed words; `Sltu` compares their unsigned reinterpretations. The
//! comparison result is always 0 or 1.

use super::AluOp;

/// Executes a logical or comparison operation.
///
/// Returns `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    match op {
        AluOp::Or => a | b,
        AluOp::And => a & b,
        AluOp::Xor => a ^ b,
        AluOp::Slt => (a < b) as i32,
        AluOp::Sltu => ((a as u32) < (b as u32)) as i32,
        _ => 0,
    }
}
