//! Snapshot of EVM execution state at a single traced step.

use alloy::primitives::B256;

/// One step of a traced execution.
///
/// Frames are produced by the EVM inspector in execution order. Only the
/// state needed to format trace actions is kept: call depth, program
/// counter, gas left before the step, and an optional memory snapshot.
/// Memory is absent when the tracer was configured without memory capture.
///
/// Fields are read through accessors and set through the `with_*` methods.
///
/// ```compile_fail
/// # use signet_trace_types::TraceFrame;
/// let frame = TraceFrame::new(21_000);
/// let _ = frame.gas_remaining;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceFrame {
    depth: u16,
    pc: u64,
    gas_remaining: u64,
    memory: Option<Vec<B256>>,
}

impl TraceFrame {
    /// Create a depth-0 frame with no memory.
    pub const fn new(gas_remaining: u64) -> Self {
        Self { depth: 0, pc: 0, gas_remaining, memory: None }
    }

    /// Set the call depth.
    pub const fn with_depth(mut self, depth: u16) -> Self {
        self.depth = depth;
        self
    }

    /// Set the program counter.
    pub const fn with_pc(mut self, pc: u64) -> Self {
        self.pc = pc;
        self
    }

    /// Attach a memory snapshot.
    pub fn with_memory(mut self, memory: Vec<B256>) -> Self {
        self.memory = Some(memory);
        self
    }

    /// Returns the call depth. The outermost call has depth 0.
    pub const fn depth(&self) -> u16 {
        self.depth
    }

    /// Returns the program counter.
    pub const fn pc(&self) -> u64 {
        self.pc
    }

    /// Returns the gas remaining before the step executed.
    pub const fn gas_remaining(&self) -> u64 {
        self.gas_remaining
    }

    /// Returns the memory snapshot, if captured.
    pub fn memory(&self) -> Option<&[B256]> {
        self.memory.as_deref()
    }
}
