//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 32-bit integer ALU. Operands and results are
//! register words in their signed two's-complement form; operations that need
//! the unsigned view reinterpret them internally.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Or, And, Xor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical and comparison operations (or, and, xor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

/// Integer ALU operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Bitwise or.
    Or,
    /// Bitwise and.
    And,
    /// Bitwise exclusive or.
    Xor,
    /// Set if less than, signed.
    Slt,
    /// Set if less than, unsigned.
    Sltu,
    /// Shift left logical.
    Sll,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
}

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand (also the shift amount; only its low 5 bits are used)
    ///
    /// # Examples
    ///
    /// ```
    /// use riscemu_core::core::units::alu::{Alu, AluOp};
    ///
    /// // Two's-complement wraparound
    /// assert_eq!(Alu::execute(AluOp::Add, i32::MAX, 1), i32::MIN);
    ///
    /// // Shift amount is taken modulo 32
    /// assert_eq!(Alu::execute(AluOp::Sll, 1, 33), 2);
    ///
    /// // Signed vs unsigned comparison
    /// assert_eq!(Alu::execute(AluOp::Slt, -1, 0), 1);
    /// assert_eq!(Alu::execute(AluOp::Sltu, -1, 0), 0);
    /// ```
    pub const fn execute(op: AluOp, a: i32, b: i32) -> i32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::Or | AluOp::And | AluOp::Xor | AluOp::Slt | AluOp::Sltu => {
                logic::execute(op, a, b)
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),
        }
    }
}
