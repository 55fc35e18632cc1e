/// Recording syscall handler and shared output buffers.
pub mod syscall;
