
pub use instruction::*;
