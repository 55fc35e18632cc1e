//! Instruction mnemonics.
//!
//! [`Mnemonic`] is the closed set of opcode names a decoder may produce. Each
//! variant maps to exactly one textual name; parsing an unknown name fails at
//! the decoder boundary instead of at dispatch.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::common::error::ParseError;

macro_rules! mnemonics {
    ($($variant:ident => $name:literal,)*) => {
        /// Textual opcode of a decoded instruction.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
        #[serde(try_from = "String")]
        pub enum Mnemonic {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )*
        }

        impl Mnemonic {
            /// Every mnemonic, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Number of mnemonics.
            pub const COUNT: usize = Self::ALL.len();

            /// Lower-case assembly name.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
        }
    };
}

mnemonics! {
    // Loads and stores
    Lb => "lb",
    Lh => "lh",
    Lw => "lw",
    Lbu => "lbu",
    Lhu => "lhu",
    Sb => "sb",
    Sh => "sh",
    Sw => "sw",
    // Shifts
    Sll => "sll",
    Slli => "slli",
    Srl => "srl",
    Srli => "srli",
    Sra => "sra",
    Srai => "srai",
    // Arithmetic and logic
    Add => "add",
    Addi => "addi",
    Sub => "sub",
    Lui => "lui",
    Auipc => "auipc",
    Xor => "xor",
    Xori => "xori",
    Or => "or",
    Ori => "ori",
    And => "and",
    Andi => "andi",
    Slt => "slt",
    Slti => "slti",
    Sltu => "sltu",
    Sltiu => "sltiu",
    // Branches
    Beq => "beq",
    Bne => "bne",
    Blt => "blt",
    Bge => "bge",
    Bltu => "bltu",
    Bgeu => "bgeu",
    // Jumps
    J => "j",
    Jal => "jal",
    Jalr => "jalr",
    Ret => "ret",
    // System
    Ecall => "ecall",
    Ebreak => "ebreak",
    Scall => "scall",
    Sbreak => "sbreak",
    Nop => "nop",
}

impl FromStr for Mnemonic {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name() == s)
            .ok_or_else(|| ParseError::UnknownMnemonic(s.to_owned()))
    }
}

impl TryFrom<String> for Mnemonic {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
