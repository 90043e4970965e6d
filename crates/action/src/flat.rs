//! The flat wire record of a trace action.

use crate::ActionBuilder;
use serde::{Deserialize, Serialize};

/// RPC representation of a trace action.
///
/// Every field is optional. Absent fields are omitted from serialized output,
/// which lets consumers tell "not applicable to this kind of action" apart
/// from an explicitly empty value such as an `input` of `""`.
///
/// A `FlatAction` is immutable once built. Use [`ActionBuilder`] to create
/// one, or [`FlatAction::to_builder`] to derive a modified copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) call_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) gas: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) init: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) balance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) refund_address: Option<String>,
}

impl FlatAction {
    /// Create a builder with all fields unset.
    pub fn builder() -> ActionBuilder {
        ActionBuilder::new()
    }

    /// Create a builder pre-populated with a copy of this action's fields.
    pub fn to_builder(&self) -> ActionBuilder {
        ActionBuilder::from_action(self)
    }

    /// The kind of call, for call actions.
    pub fn call_type(&self) -> Option<&str> {
        self.call_type.as_deref()
    }

    /// The caller address.
    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }

    /// Gas available to the frame, as a hex quantity.
    pub fn gas(&self) -> Option<&str> {
        self.gas.as_deref()
    }

    /// Memory dump of the calling frame. May be an empty string.
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    /// The callee, or the created contract for create actions.
    pub fn to(&self) -> Option<&str> {
        self.to.as_deref()
    }

    /// Contract init code, for create actions.
    pub fn init(&self) -> Option<&str> {
        self.init.as_deref()
    }

    /// Value transferred, as a hex quantity.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Address of the self-destructing contract.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Balance moved by a self-destruct, as a hex quantity.
    pub fn balance(&self) -> Option<&str> {
        self.balance.as_deref()
    }

    /// Address receiving the self-destructed balance.
    pub fn refund_address(&self) -> Option<&str> {
        self.refund_address.as_deref()
    }

    /// True if no field is set.
    pub const fn is_empty(&self) -> bool {
        self.call_type.is_none()
            && self.from.is_none()
            && self.gas.is_none()
            && self.input.is_none()
            && self.to.is_none()
            && self.init.is_none()
            && self.value.is_none()
            && self.address.is_none()
            && self.balance.is_none()
            && self.refund_address.is_none()
    }
}

impl From<&FlatAction> for ActionBuilder {
    fn from(action: &FlatAction) -> Self {
        Self::from_action(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_action_serializes_to_empty_object() {
        let action = FlatAction::default();
        assert!(action.is_empty());
        assert_eq!(serde_json::to_string(&action).unwrap(), "{}");
    }

    #[test]
    fn empty_string_is_kept() {
        let action = FlatAction::builder().input("").build();
        assert_eq!(action.input(), Some(""));
        assert_eq!(serde_json::to_string(&action).unwrap(), r#"{"input":""}"#);
    }

    #[test]
    fn camel_case_field_names() {
        let action = FlatAction::builder().call_type("call").refund_address("0x01").build();
        let json = serde_json::to_value(&action).unwrap();

        assert_eq!(json["callType"], "call");
        assert_eq!(json["refundAddress"], "0x01");
        assert!(json.get("call_type").is_none());
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let action: FlatAction = serde_json::from_str(r#"{"balance":"0x1"}"#).unwrap();
        assert_eq!(action.balance(), Some("0x1"));
        assert_eq!(action.address(), None);
        assert_eq!(action.call_type(), None);
    }

    #[test]
    fn to_builder_copies_fields() {
        let original = FlatAction::builder().from("0xaa").gas("0x10").value("0x0").build();
        let derived = original.to_builder().gas("0x20").build();

        assert_eq!(original.gas(), Some("0x10"));
        assert_eq!(derived.gas(), Some("0x20"));
        assert_eq!(derived.from(), original.from());
        assert_eq!(derived.value(), original.value());

        let copied: ActionBuilder = (&original).into();
        assert_eq!(copied.build(), original);
    }
}
