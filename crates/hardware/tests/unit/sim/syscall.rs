//! The default syscall interface, driven through real programs.

use pretty_assertions::assert_eq;
use riscemu_core::common::{Fault, SyscallFault};
use riscemu_core::isa::{Instruction, Mnemonic};

use crate::common::builder::*;
use crate::common::harness::TestContext;

fn syscall(id: i32) -> [Instruction; 2] {
    [li("a7", id), op(Mnemonic::Ecall)]
}

#[test]
fn write_copies_guest_bytes_to_stdout() {
    // data section holds "hi\n"; it is placed right after the 9-instruction text
    let data_addr = TEXT_BASE + 12;
    let mut program = vec![
        li("a0", 1),
        li("a1", data_addr),
        li("a2", 3),
    ];
    program.extend(syscall(64));
    program.push(ins(Mnemonic::Add, [reg("s1"), reg("a0"), reg("zero")]));
    program.push(li("a0", 0));
    program.extend(exit());
    let mut ctx = TestContext::builder(program).data(b"hi\n").build();

    let outcome = ctx.run();

    assert!(outcome.fault.is_none());
    assert_eq!(ctx.stdout.text(), "hi\n");
    assert!(ctx.stderr.contents().is_empty());
    assert_eq!(ctx.reg("s1"), 3);
}

#[test]
fn write_to_fd_two_goes_to_stderr() {
    let mut program = vec![
        li("t0", 0x21),
        ins(Mnemonic::Sb, [reg("t0"), mem(0, "a0")]),
        ins(Mnemonic::Add, [reg("a1"), reg("a0"), reg("zero")]),
        li("a0", 2),
        li("a2", 1),
    ];
    program.extend(syscall(64));
    program.extend(exit());
    let mut ctx = TestContext::new(program);

    let _ = ctx.run();

    assert_eq!(ctx.stderr.text(), "!");
    assert!(ctx.stdout.contents().is_empty());
}

#[test]
fn write_to_unknown_fd_returns_minus_one() {
    let mut program = vec![li("a0", 7), ins(Mnemonic::Add, [reg("a1"), reg("sp"), reg("zero")]), li("a2", 1)];
    program.extend(syscall(64));
    program.extend(exit());
    let mut ctx = TestContext::new(program);

    let outcome = ctx.run();

    assert_eq!(outcome.exit_code, -1);
}

#[test]
fn read_fills_guest_memory_from_stdin() {
    let mut program = vec![
        ins(Mnemonic::Add, [reg("s1"), reg("a0"), reg("zero")]),
        li("a0", 0),
        ins(Mnemonic::Add, [reg("a1"), reg("s1"), reg("zero")]),
        li("a2", 16),
    ];
    program.extend(syscall(63));
    program.push(ins(Mnemonic::Add, [reg("s2"), reg("a0"), reg("zero")]));
    program.push(ins(Mnemonic::Lbu, [reg("s3"), mem(0, "s1")]));
    program.push(ins(Mnemonic::Lbu, [reg("s4"), mem(3, "s1")]));
    program.push(li("a0", 0));
    program.extend(exit());
    let mut ctx = TestContext::builder(program).input(b"ping").build();

    let outcome = ctx.run();

    assert!(outcome.fault.is_none());
    assert_eq!(ctx.reg("s2"), 4);
    assert_eq!(ctx.reg("s3"), i32::from(b'p'));
    assert_eq!(ctx.reg("s4"), i32::from(b'g'));
}

#[test]
fn unknown_syscall_is_a_caught_fault() {
    let mut program = vec![li("a0", 12)];
    program.extend(syscall(999));
    let mut ctx = TestContext::new(program);

    let outcome = ctx.run();

    let report = outcome.fault.expect("should fault");
    assert!(matches!(report.fault, Fault::Syscall(SyscallFault::Unknown(999))));
    assert_eq!(report.pc, ctx.text_addr(2));
    assert_eq!(outcome.exit_code, 0);
}

#[test]
fn write_from_unmapped_buffer_is_a_caught_fault() {
    let mut program = vec![li("a0", 1), li("a1", 0), li("a2", 4)];
    program.extend(syscall(64));
    let mut ctx = TestContext::new(program);

    let report = ctx.run().fault.expect("should fault");

    assert!(matches!(report.fault, Fault::Syscall(SyscallFault::Memory(_))));
}

#[test]
fn read_into_unmapped_buffer_leaves_input_unconsumed() {
    let mut program = vec![
        ins(Mnemonic::Add, [reg("s1"), reg("a0"), reg("zero")]),
        li("a0", 0),
        li("a1", 0),
        li("a2", 16),
    ];
    program.extend(syscall(63)); // 4, 5: faults on the unmapped buffer
    program.push(li("a0", 0)); // 6: resumed here
    program.push(ins(Mnemonic::Add, [reg("a1"), reg("s1"), reg("zero")]));
    program.push(li("a2", 16));
    program.extend(syscall(63));
    program.push(ins(Mnemonic::Add, [reg("s2"), reg("a0"), reg("zero")]));
    program.push(ins(Mnemonic::Lbu, [reg("s3"), mem(0, "s1")]));
    program.push(li("a0", 0));
    program.extend(exit());
    let mut ctx = TestContext::builder(program).input(b"ping").build();

    let report = ctx.run().fault.expect("should fault");
    assert!(matches!(report.fault, Fault::Syscall(SyscallFault::Memory(_))));
    assert_eq!(report.pc, ctx.text_addr(5));

    let resume = ctx.text_addr(6);
    let outcome = ctx.cpu.run_from(resume).unwrap();

    assert!(outcome.fault.is_none());
    assert_eq!(ctx.reg("s2"), 4);
    assert_eq!(ctx.reg("s3"), i32::from(b'p'));
}
