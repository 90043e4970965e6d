//! Types consumed when building Signet trace actions.
//!
//! These are the low-level inputs shared by the trace formatting crates:
//! traced transactions, per-step execution frames, whole-transaction traces,
//! and the hex formatting rules of the parity-style `trace_*` RPC namespace.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod alloy;
pub use alloy::{RecoveredTx, TransactionSigned};

mod error;
pub use error::MemoryDumpError;

mod format;
pub use format::{dump_memory, format_address, format_bytes, parse_memory, quantity, short_hex};

mod frame;
pub use frame::TraceFrame;

mod trace;
pub use trace::TransactionTrace;

mod tx;
pub use tx::TracedTransaction;
