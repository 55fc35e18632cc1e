//! Instruction Handler Registry.
//!
//! [`HANDLERS`] is the single, static list of mnemonic → handler pairs. It is
//! the source of truth for both dispatch and introspection: the set of
//! supported instructions is exactly the set of registered mnemonics.
//!
//! The lookup table indexed by mnemonic is built at compile time; registering
//! the same mnemonic twice fails the build.

use super::Cpu;
use crate::common::error::Fault;
use crate::isa::{Instruction, Mnemonic};

/// Semantic handler for one mnemonic.
///
/// Runs after the pc has been advanced past the instruction.
pub type Handler = fn(&mut Cpu, &Instruction) -> Result<(), Fault>;

/// Handler slots indexed by mnemonic; `None` marks an unregistered mnemonic.
pub type HandlerTable = [Option<Handler>; Mnemonic::COUNT];

/// Every registered mnemonic and its handler.
pub const HANDLERS: &[(Mnemonic, Handler)] = &[
    // Loads and stores
    (Mnemonic::Lb, Cpu::exec_lb),
    (Mnemonic::Lh, Cpu::exec_lh),
    (Mnemonic::Lw, Cpu::exec_lw),
    (Mnemonic::Lbu, Cpu::exec_lbu),
    (Mnemonic::Lhu, Cpu::exec_lhu),
    (Mnemonic::Sb, Cpu::exec_sb),
    (Mnemonic::Sh, Cpu::exec_sh),
    (Mnemonic::Sw, Cpu::exec_sw),
    // Shifts
    (Mnemonic::Sll, Cpu::exec_sll),
    (Mnemonic::Slli, Cpu::exec_slli),
    (Mnemonic::Srl, Cpu::exec_srl),
    (Mnemonic::Srli, Cpu::exec_srli),
    (Mnemonic::Sra, Cpu::exec_sra),
    (Mnemonic::Srai, Cpu::exec_srai),
    // Arithmetic and logic
    (Mnemonic::Add, Cpu::exec_add),
    (Mnemonic::Addi, Cpu::exec_addi),
    (Mnemonic::Sub, Cpu::exec_sub),
    (Mnemonic::Lui, Cpu::exec_unimplemented),
    (Mnemonic::Auipc, Cpu::exec_unimplemented),
    (Mnemonic::Xor, Cpu::exec_xor),
    (Mnemonic::Xori, Cpu::exec_unimplemented),
    (Mnemonic::Or, Cpu::exec_or),
    (Mnemonic::Ori, Cpu::exec_unimplemented),
    (Mnemonic::And, Cpu::exec_and),
    (Mnemonic::Andi, Cpu::exec_unimplemented),
    (Mnemonic::Slt, Cpu::exec_slt),
    (Mnemonic::Slti, Cpu::exec_unimplemented),
    (Mnemonic::Sltu, Cpu::exec_sltu),
    (Mnemonic::Sltiu, Cpu::exec_unimplemented),
    // Branches
    (Mnemonic::Beq, Cpu::exec_beq),
    (Mnemonic::Bne, Cpu::exec_bne),
    (Mnemonic::Blt, Cpu::exec_blt),
    (Mnemonic::Bge, Cpu::exec_bge),
    (Mnemonic::Bltu, Cpu::exec_bltu),
    (Mnemonic::Bgeu, Cpu::exec_bgeu),
    // Jumps
    (Mnemonic::J, Cpu::exec_j),
    (Mnemonic::Jal, Cpu::exec_jal),
    (Mnemonic::Jalr, Cpu::exec_jalr),
    (Mnemonic::Ret, Cpu::exec_ret),
    // System
    (Mnemonic::Ecall, Cpu::exec_scall),
    (Mnemonic::Ebreak, Cpu::exec_sbreak),
    (Mnemonic::Scall, Cpu::exec_scall),
    (Mnemonic::Sbreak, Cpu::exec_sbreak),
    (Mnemonic::Nop, Cpu::exec_nop),
];

/// [`HANDLERS`] indexed by mnemonic. This is the table every CPU dispatches through.
pub const TABLE: HandlerTable = build_table(HANDLERS);

/// Indexes `handlers` by mnemonic. Panics at compile time on a duplicate entry.
pub(super) const fn build_table(handlers: &[(Mnemonic, Handler)]) -> HandlerTable {
    let mut table: HandlerTable = [None; Mnemonic::COUNT];
    let mut i = 0;
    while i < handlers.len() {
        let (mnemonic, handler) = handlers[i];
        assert!(table[mnemonic as usize].is_none(), "mnemonic registered twice");
        table[mnemonic as usize] = Some(handler);
        i += 1;
    }
    table
}

/// Returns the handler registered for `mnemonic`.
///
/// `None` means the decoder produced an instruction this engine does not
/// execute; the caller treats that as an internal defect.
pub const fn lookup(mnemonic: Mnemonic) -> Option<Handler> {
    lookup_in(&TABLE, mnemonic)
}

/// Returns the handler `table` holds for `mnemonic`.
pub const fn lookup_in(table: &HandlerTable, mnemonic: Mnemonic) -> Option<Handler> {
    table[mnemonic as usize]
}
