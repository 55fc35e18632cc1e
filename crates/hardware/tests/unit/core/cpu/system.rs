//! Syscall and debugger handoff.

use pretty_assertions::assert_eq;
use riscemu_core::{Mmu, RunConfig};
use riscemu_core::core::Cpu;
use riscemu_core::isa::{Instruction, Mnemonic};
use riscemu_core::soc::Memory;
use rstest::rstest;

use crate::common::builder::*;
use crate::common::harness::TestContext;
use crate::common::mocks::debugger::RecordingDebugger;
use crate::common::mocks::memory::MockAddressSpace;
use crate::common::mocks::syscall::{RecordedCall, RecordingSyscalls};

fn cpu_with(
    syscalls: RecordingSyscalls,
    debugger: RecordingDebugger,
    program: Vec<Instruction>,
) -> Cpu {
    let conf = RunConfig {
        include_scall_symbols: false,
        ..RunConfig::default()
    };
    Cpu::new(
        conf,
        Box::new(MockAddressSpace::with_program(0x10, program)),
        Box::new(syscalls),
        Box::new(debugger),
    )
}

#[rstest]
#[case(Mnemonic::Ecall)]
#[case(Mnemonic::Scall)]
fn syscall_handoff_passes_the_number_and_shares_registers(#[case] m: Mnemonic) {
    let syscalls = RecordingSyscalls::new(-5, 93);
    let mut cpu = cpu_with(
        syscalls.clone(),
        RecordingDebugger::default(),
        vec![
            li("a7", 1234),
            li("a0", 6),
            op(m),
            ins(Mnemonic::Add, [reg("s0"), reg("a0"), reg("zero")]),
            li("a7", 93),
            op(m),
        ],
    );

    let outcome = cpu.run_from(0x10).unwrap();

    assert!(outcome.fault.is_none());
    assert_eq!(
        syscalls.recorded(),
        vec![
            RecordedCall { id: 1234, a0: 6, pc: 0x13 },
            RecordedCall { id: 93, a0: -5, pc: 0x16 },
        ]
    );
    // the handler's write to a0 is visible to the next instruction
    assert_eq!(cpu.regs.get(r("s0")), -5);
    assert_eq!(outcome.exit_code, -5);
}

#[rstest]
#[case(Mnemonic::Ebreak)]
#[case(Mnemonic::Sbreak)]
fn breakpoint_launches_the_debugger_and_resumes(#[case] m: Mnemonic) {
    let debugger = RecordingDebugger {
        poke_a1: Some(31),
        ..RecordingDebugger::default()
    };
    let mut cpu = cpu_with(
        RecordingSyscalls::new(0, 93),
        debugger.clone(),
        vec![
            li("a0", 4),
            op(m),
            ins(Mnemonic::Add, [reg("a0"), reg("a0"), reg("a1")]),
            li("a7", 93),
            op(Mnemonic::Ecall),
        ],
    );

    let outcome = cpu.run_from(0x10).unwrap();

    let launches = debugger.recorded();
    assert_eq!(launches.len(), 1);
    assert_eq!(launches[0].message, "Debug instruction encountered at 0x00000012");
    assert_eq!(launches[0].pc, 0x12);
    assert_eq!(launches[0].cycle, 2);
    // execution continued after the session and saw its edit
    assert_eq!(outcome.exit_code, 35);
}

#[test]
fn nop_changes_nothing_but_pc_and_cycle() {
    let mut ctx = TestContext::new(vec![op(Mnemonic::Nop)]);
    ctx.cpu.state.pc = ctx.loaded.run_ptr;
    let regs_before = ctx.cpu.regs.clone();

    ctx.cpu.step().unwrap();

    assert_eq!(ctx.cpu.regs, regs_before);
    assert_eq!(ctx.cpu.state.pc, ctx.text_addr(1));
    assert_eq!(ctx.cpu.state.cycle, 1);
}

#[test]
fn syscall_with_operands_is_malformed() {
    let mut ctx = TestContext::new(vec![ins(Mnemonic::Ecall, [imm(93)])]);

    let report = ctx.run().fault.expect("should fault");

    assert!(report.fault.is_malformed());
}

#[test]
fn handler_symbols_are_published_when_enabled() {
    let conf = RunConfig::default();
    let cpu = Cpu::new(
        conf.clone(),
        Box::new(Mmu::new(&conf)),
        Box::new(RecordingSyscalls::new(0, 93)),
        Box::new(RecordingDebugger::default()),
    );

    assert!(cpu.config().include_scall_symbols);
    assert_eq!(cpu.memory.global_symbols().get("SCALL_TEST"), Some(&7));
}

#[test]
fn syscall_symbols_land_in_the_real_symbol_table() {
    let ctx = TestContext::new(vec![op(Mnemonic::Nop)]);

    let symbols = ctx.cpu.memory.global_symbols();

    assert_eq!(symbols.get("SCALL_READ"), Some(&63));
    assert_eq!(symbols.get("SCALL_WRITE"), Some(&64));
    assert_eq!(symbols.get("SCALL_EXIT"), Some(&93));
}

#[test]
fn syscall_symbols_are_skipped_when_disabled() {
    let conf = RunConfig {
        include_scall_symbols: false,
        ..RunConfig::default()
    };
    let ctx = TestContext::builder(vec![op(Mnemonic::Nop)]).config(conf).build();

    assert!(ctx.cpu.memory.global_symbols().is_empty());
}
