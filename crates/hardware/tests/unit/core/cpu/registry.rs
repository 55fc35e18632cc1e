use std::collections::BTreeSet;

use riscemu_core::core::Cpu;
use riscemu_core::isa::Mnemonic;

#[test]
fn every_mnemonic_is_supported() {
    let supported: BTreeSet<_> = Cpu::all_instructions().collect();
    let declared: BTreeSet<_> = Mnemonic::ALL.iter().copied().collect();

    assert_eq!(supported, declared);
    assert_eq!(Cpu::all_instructions().count(), Mnemonic::COUNT);
}

#[test]
fn supports_checks_textual_names() {
    assert!(Cpu::supports("addi"));
    assert!(Cpu::supports("sbreak"));
    assert!(Cpu::supports("lui"));
    assert!(!Cpu::supports("mul"));
    assert!(!Cpu::supports("ADDI"));
    assert!(!Cpu::supports(""));
}
