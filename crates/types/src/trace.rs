//! A traced transaction with its ordered execution frames.

use crate::{TraceFrame, TracedTransaction};

/// A transaction paired with the frames recorded while executing it.
///
/// # Example
///
/// ```
/// # use alloy::{consensus::{TxLegacy, transaction::Recovered}, primitives::Address};
/// # use signet_trace_types::{TraceFrame, TransactionTrace};
/// let tx = Recovered::new_unchecked(TxLegacy::default(), Address::ZERO);
/// let trace = TransactionTrace::new(tx, vec![TraceFrame::new(79_000), TraceFrame::new(78_997)]);
/// assert_eq!(trace.len(), 2);
/// assert_eq!(trace.first_frame().map(TraceFrame::gas_remaining), Some(79_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionTrace<T> {
    transaction: T,
    frames: Vec<TraceFrame>,
}

impl<T: TracedTransaction> TransactionTrace<T> {
    /// Create a new trace.
    pub const fn new(transaction: T, frames: Vec<TraceFrame>) -> Self {
        Self { transaction, frames }
    }

    /// Returns the traced transaction.
    pub const fn transaction(&self) -> &T {
        &self.transaction
    }

    /// Returns the frames in execution order.
    pub const fn frames(&self) -> &[TraceFrame] {
        self.frames.as_slice()
    }

    /// Returns the first frame, or `None` if nothing was recorded.
    pub const fn first_frame(&self) -> Option<&TraceFrame> {
        self.frames.as_slice().first()
    }

    /// Number of recorded frames.
    pub const fn len(&self) -> usize {
        self.frames.len()
    }

    /// True if no frames were recorded.
    pub const fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Consume the trace, returning the transaction and its frames.
    pub fn into_parts(self) -> (T, Vec<TraceFrame>) {
        (self.transaction, self.frames)
    }
}
