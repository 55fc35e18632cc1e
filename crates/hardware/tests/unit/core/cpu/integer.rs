//! Arithmetic, logic and shift instructions executed end-to-end.

use pretty_assertions::assert_eq;
use riscemu_core::common::{Fault, Reg};
use riscemu_core::isa::Mnemonic;
use rstest::rstest;

use crate::common::builder::*;
use crate::common::harness::{TestContext, run_and_read};

/// `addi` takes a full 32-bit immediate, so `li` can seed any word.
fn reg_reg(mnemonic: Mnemonic, a: i32, b: i32) -> i32 {
    run_and_read(
        vec![
            li("t0", a),
            li("t1", b),
            ins(mnemonic, [reg("t2"), reg("t0"), reg("t1")]),
        ],
        r("t2"),
    )
}

#[rstest]
#[case(Mnemonic::Add, i32::MAX, 1, i32::MIN)]
#[case(Mnemonic::Sub, i32::MIN, 1, i32::MAX)]
#[case(Mnemonic::And, 0x00FF_00FF, 0x0F0F_0F0F, 0x000F_000F)]
#[case(Mnemonic::Or, 0x00FF_0000, 0x0000_00FF, 0x00FF_00FF)]
#[case(Mnemonic::Xor, -1, 0x1234_5678, !0x1234_5678)]
#[case(Mnemonic::Slt, -5, 3, 1)]
#[case(Mnemonic::Sltu, -5, 3, 0)]
#[case(Mnemonic::Sll, 3, 33, 6)]
#[case(Mnemonic::Srl, -1, 31, 1)]
#[case(Mnemonic::Sra, -1, 31, -1)]
fn register_register(#[case] m: Mnemonic, #[case] a: i32, #[case] b: i32, #[case] expected: i32) {
    assert_eq!(reg_reg(m, a, b), expected);
}

#[rstest]
#[case(Mnemonic::Addi, -7, 2, -5)]
#[case(Mnemonic::Slli, 1, 4, 16)]
#[case(Mnemonic::Slli, 1, 36, 16)]
#[case(Mnemonic::Srli, -16, 2, 0x3FFF_FFFC)]
#[case(Mnemonic::Srai, -16, 2, -4)]
fn register_immediate(#[case] m: Mnemonic, #[case] a: i32, #[case] b: i32, #[case] expected: i32) {
    let got = run_and_read(
        vec![li("t0", a), ins(m, [reg("t1"), reg("t0"), imm(b)])],
        r("t1"),
    );
    assert_eq!(got, expected);
}

#[test]
fn writes_to_zero_are_discarded() {
    let got = run_and_read(vec![li("zero", 9)], Reg::ZERO);
    assert_eq!(got, 0);
}

#[rstest]
#[case(Mnemonic::Lui)]
#[case(Mnemonic::Auipc)]
#[case(Mnemonic::Xori)]
#[case(Mnemonic::Ori)]
#[case(Mnemonic::Andi)]
#[case(Mnemonic::Slti)]
#[case(Mnemonic::Sltiu)]
fn unimplemented_instructions_fault_without_side_effects(#[case] m: Mnemonic) {
    let mut program = vec![
        li("t1", 77),
        ins(m, [reg("t1"), reg("zero"), imm(1)]),
    ];
    program.extend(exit());
    let mut ctx = TestContext::new(program);

    let outcome = ctx.run();

    let report = outcome.fault.expect("should fault");
    assert!(matches!(report.fault, Fault::Unimplemented(got) if got == m));
    assert_eq!(report.pc, ctx.text_addr(1));
    assert_eq!(ctx.reg("t1"), 77);
    assert_eq!(outcome.exit_code, 0);
}

#[test]
fn register_register_arity_is_checked() {
    let mut ctx = TestContext::new(vec![ins(Mnemonic::Add, [reg("a0"), reg("a1")])]);

    let report = ctx.run().fault.expect("should fault");

    assert!(matches!(
        report.fault,
        Fault::Arity { mnemonic: Mnemonic::Add, expected: 3, found: 2 }
    ));
    assert!(report.fault.is_malformed());
}

#[test]
fn immediate_in_register_slot_is_malformed() {
    let mut ctx = TestContext::new(vec![ins(Mnemonic::Add, [reg("a0"), reg("a1"), imm(1)])]);

    let report = ctx.run().fault.expect("should fault");

    assert!(matches!(
        report.fault,
        Fault::OperandKind { mnemonic: Mnemonic::Add, index: 2, .. }
    ));
}
