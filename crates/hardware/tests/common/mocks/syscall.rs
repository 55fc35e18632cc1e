use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use riscemu_core::common::{Reg, SyscallFault};
use riscemu_core::sim::{Syscall, SyscallHandler};

/// Cloneable in-memory output stream.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> Vec<u8> {
        self.0.lock().unwrap().clone()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.contents()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// One handed-off request as seen by the handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedCall {
    pub id: u32,
    pub a0: i32,
    pub pc: u32,
}

/// Syscall handler that records every request.
///
/// It writes `reply` into `a0` and ends the run when it sees `exit_id`.
#[derive(Clone)]
pub struct RecordingSyscalls {
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
    pub reply: i32,
    pub exit_id: u32,
}

impl RecordingSyscalls {
    pub fn new(reply: i32, exit_id: u32) -> Self {
        Self {
            calls: Arc::default(),
            reply,
            exit_id,
        }
    }

    pub fn recorded(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl SyscallHandler for RecordingSyscalls {
    fn handle(&mut self, mut call: Syscall<'_>) -> Result<(), SyscallFault> {
        self.calls.lock().unwrap().push(RecordedCall {
            id: call.id,
            a0: call.regs.get(Reg::A0),
            pc: call.state.pc,
        });
        if call.id == self.exit_id {
            call.state.exit = true;
            call.state.exit_code = call.arg(0);
        } else {
            call.ret(self.reply);
        }
        Ok(())
    }

    fn symbols(&self) -> &'static [(&'static str, u32)] {
        &[("SCALL_TEST", 7)]
    }
}
