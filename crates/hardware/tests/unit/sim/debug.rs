//! The logging debug session shipped with the library.

use riscemu_core::common::{Reg, RegisterFile};
use riscemu_core::core::ExecState;
use riscemu_core::sim::{DebugSession, DebugView, TraceDebugger};
use riscemu_core::{Mmu, RunConfig};

#[test]
fn trace_debugger_returns_without_touching_state() {
    let mut regs = RegisterFile::new();
    regs.set(Reg::A0, 5);
    let before = regs.clone();
    let state = ExecState {
        pc: 0x104,
        cycle: 3,
        ..ExecState::default()
    };
    let mut memory = Mmu::new(&RunConfig::default());

    TraceDebugger.launch(
        DebugView {
            state: &state,
            memory: &mut memory,
            regs: &mut regs,
        },
        "Debug instruction encountered at 0x00000104",
    );

    assert_eq!(regs, before);
}
