//! Trace action records for the parity-style `trace_*` RPC namespace.
//!
//! A trace action describes what one call-stack frame did while a
//! transaction executed: a message call, a contract creation, or a
//! self-destruct. This crate provides the record and the recipes that build
//! it from execution frames. Assembling actions into a trace tree is left to
//! the caller.
//!
//! # Quick Start
//!
//! ```
//! use alloy::{
//!     consensus::{TxLegacy, transaction::Recovered},
//!     primitives::{U256, address},
//! };
//! use signet_trace_action::ActionBuilder;
//! use signet_trace_types::TraceFrame;
//!
//! let sender = address!("0x1111111111111111111111111111111111111111");
//! let callee = address!("0x2222222222222222222222222222222222222222");
//! let tx = Recovered::new_unchecked(TxLegacy { value: U256::from(10u64), ..Default::default() }, sender);
//! let frame = TraceFrame::new(50_000);
//!
//! let action = ActionBuilder::call(&tx, sender, callee, &frame, 45_000).build();
//! assert_eq!(action.call_type(), Some("call"));
//! assert_eq!(action.gas(), Some("0xafc8"));
//! assert_eq!(action.value(), Some("0xa"));
//! assert_eq!(action.input(), Some(""));
//! ```
//!
//! # Representation
//!
//! Two types model an action:
//!
//! - [`Action`] is a sum type with one variant per action kind, each carrying
//!   only its own typed fields. It cannot mix fields of two kinds.
//! - [`FlatAction`] is the wire record: every field is an optional string and
//!   absent fields are omitted from JSON. It is what [`ActionBuilder`]
//!   produces and what the RPC layer serializes.
//!
//! [`Action`] converts into [`FlatAction`] infallibly. The reverse conversion
//! classifies the flat record and rejects mixed or incomplete ones.

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

mod action;
pub use action::{Action, ActionType, CallAction, CreateAction, SelfDestructAction};

mod builder;
pub use builder::{ActionBuilder, FieldValue};

mod call_type;
pub use call_type::CallType;

pub mod config;
pub use config::{ConfigError, TraceTypes};

mod error;
pub use error::{ActionError, ActionResult};

mod flat;
pub use flat::FlatAction;
