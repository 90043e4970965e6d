//! Builder and construction recipes for [`FlatAction`].

use crate::{ActionError, ActionResult, CallType, FlatAction, TraceTypes};
use alloy::primitives::{Address, U256};
use signet_trace_types::{
    TraceFrame, TracedTransaction, TransactionTrace, dump_memory, format_address, quantity,
    short_hex,
};
use tracing::{debug, trace};

/// A value accepted by the [`ActionBuilder`] setters.
///
/// Strings set the field. `None` clears it.
pub trait FieldValue {
    /// Convert into the stored field value.
    fn into_field(self) -> Option<String>;
}

impl FieldValue for String {
    fn into_field(self) -> Option<String> {
        Some(self)
    }
}

impl FieldValue for &str {
    fn into_field(self) -> Option<String> {
        Some(self.to_owned())
    }
}

impl FieldValue for &String {
    fn into_field(self) -> Option<String> {
        Some(self.clone())
    }
}

impl FieldValue for Option<String> {
    fn into_field(self) -> Option<String> {
        self
    }
}

impl FieldValue for Option<&str> {
    fn into_field(self) -> Option<String> {
        self.map(ToOwned::to_owned)
    }
}

/// Builder for [`FlatAction`].
///
/// Start from [`ActionBuilder::new`], from an existing action with
/// [`ActionBuilder::from_action`], or from one of the recipes
/// ([`call`], [`self_destruct`], [`trace_root`]). Setters may be applied in
/// any order and the last write to a field wins, including over values set
/// by a recipe.
///
/// [`build`] snapshots the current fields. It may be called any number of
/// times and each result is independent of the builder.
///
/// # Example
///
/// ```
/// # use signet_trace_action::ActionBuilder;
/// let builder = ActionBuilder::new().value("0x1").value("0x2").input(None::<String>);
/// let action = builder.build();
/// assert_eq!(action.value(), Some("0x2"));
/// assert_eq!(action.input(), None);
/// assert_eq!(builder.build(), action);
/// ```
///
/// [`call`]: ActionBuilder::call
/// [`self_destruct`]: ActionBuilder::self_destruct
/// [`trace_root`]: ActionBuilder::trace_root
/// [`build`]: ActionBuilder::build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionBuilder {
    fields: FlatAction,
}

impl ActionBuilder {
    /// Create a builder with all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder holding a copy of every field of `action`.
    pub fn from_action(action: &FlatAction) -> Self {
        Self { fields: action.clone() }
    }

    /// Start a call action.
    ///
    /// - `from` is the address that initiated the call
    /// - `to` is the callee
    /// - `input` is the memory dump of `frame`
    /// - `gas` is `gas_remaining` at the calling step
    /// - `value` is the value of the outer transaction, not of the frame
    pub fn call<T>(
        tx: &T,
        from: Address,
        to: Address,
        frame: &TraceFrame,
        gas_remaining: u64,
    ) -> Self
    where
        T: TracedTransaction + ?Sized,
    {
        trace!(%from, %to, gas_remaining, depth = frame.depth(), "building call action");
        Self::new()
            .from(format_address(from))
            .to(format_address(to))
            .input(dump_memory(frame.memory()))
            .gas(quantity(U256::from(gas_remaining)))
            .call_type(CallType::Call.as_str())
            .value(quantity(tx.value()))
    }

    /// Start a self-destruct action moving `balance` from `address` to
    /// `refund_address`.
    pub fn self_destruct(address: Address, refund_address: Address, balance: U256) -> Self {
        trace!(%address, %refund_address, %balance, "building self-destruct action");
        Self::new()
            .address(format_address(address))
            .refund_address(format_address(refund_address))
            .balance(short_hex(balance))
    }

    /// Start the root action of a transaction's trace tree.
    ///
    /// `gas` is taken from the first frame of the trace.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::EmptyTrace`] if the trace has no frames.
    pub fn trace_root<T: TracedTransaction>(trace: &TransactionTrace<T>) -> ActionResult<Self> {
        let Some(first) = trace.first_frame() else {
            debug!("refusing to build trace-root action from a trace with no frames");
            return Err(ActionError::EmptyTrace);
        };

        let tx = trace.transaction();
        trace!(
            sender = %tx.sender(),
            gas_remaining = first.gas_remaining(),
            frames = trace.len(),
            "building trace-root action"
        );
        Ok(Self::new()
            .from(format_address(tx.sender()))
            .gas(quantity(U256::from(first.gas_remaining())))
            .value(quantity(tx.value())))
    }

    /// Start the trace-root action if `types` requests action records.
    ///
    /// Returns `Ok(None)` when only `vmTrace` or `stateDiff` output was
    /// requested. The frames are not inspected in that case.
    ///
    /// # Errors
    ///
    /// Same as [`ActionBuilder::trace_root`].
    pub fn trace_root_for<T: TracedTransaction>(
        types: TraceTypes,
        trace: &TransactionTrace<T>,
    ) -> ActionResult<Option<Self>> {
        if !types.includes_actions() {
            trace!(%types, "action records not requested");
            return Ok(None);
        }
        Self::trace_root(trace).map(Some)
    }

    /// Set the call type.
    pub fn call_type(mut self, call_type: impl FieldValue) -> Self {
        self.fields.call_type = call_type.into_field();
        self
    }

    /// Set the caller address.
    pub fn from(mut self, from: impl FieldValue) -> Self {
        self.fields.from = from.into_field();
        self
    }

    /// Set the gas quantity.
    pub fn gas(mut self, gas: impl FieldValue) -> Self {
        self.fields.gas = gas.into_field();
        self
    }

    /// Set the input.
    pub fn input(mut self, input: impl FieldValue) -> Self {
        self.fields.input = input.into_field();
        self
    }

    /// Set the callee or created address.
    pub fn to(mut self, to: impl FieldValue) -> Self {
        self.fields.to = to.into_field();
        self
    }

    /// Set the contract init code.
    pub fn init(mut self, init: impl FieldValue) -> Self {
        self.fields.init = init.into_field();
        self
    }

    /// Set the transferred value.
    pub fn value(mut self, value: impl FieldValue) -> Self {
        self.fields.value = value.into_field();
        self
    }

    /// Set the self-destructing address.
    pub fn address(mut self, address: impl FieldValue) -> Self {
        self.fields.address = address.into_field();
        self
    }

    /// Set the self-destructed balance.
    pub fn balance(mut self, balance: impl FieldValue) -> Self {
        self.fields.balance = balance.into_field();
        self
    }

    /// Set the refund address.
    pub fn refund_address(mut self, refund_address: impl FieldValue) -> Self {
        self.fields.refund_address = refund_address.into_field();
        self
    }

    /// Returns the gas currently set, if any.
    pub fn get_gas(&self) -> Option<&str> {
        self.fields.gas()
    }

    /// Build the [`FlatAction`].
    pub fn build(&self) -> FlatAction {
        self.fields.clone()
    }
}
