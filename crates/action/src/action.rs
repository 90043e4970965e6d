//! Typed trace actions.

use crate::{ActionError, ActionResult, CallType, FlatAction};
use alloy::primitives::{Address, B256, Bytes, U256, hex};
use serde::{Deserialize, Serialize};
use signet_trace_types::{
    dump_memory, format_address, format_bytes, parse_memory, quantity, short_hex,
};

/// A message call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallAction {
    /// The kind of call.
    pub call_type: CallType,
    /// The address that initiated the call.
    pub from: Address,
    /// The callee.
    pub to: Address,
    /// Gas available to the call.
    pub gas: u64,
    /// Value of the enclosing transaction.
    pub value: U256,
    /// Memory of the calling frame, if captured.
    pub input: Option<Vec<B256>>,
}

/// A contract creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAction {
    /// The creator.
    pub from: Address,
    /// Gas available to the creation.
    pub gas: u64,
    /// Value endowed to the new contract.
    pub value: U256,
    /// Init code.
    pub init: Bytes,
    /// Address of the created contract, once known.
    pub to: Option<Address>,
}

/// A contract self-destruct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfDestructAction {
    /// The self-destructing contract.
    pub address: Address,
    /// Receiver of the remaining balance.
    pub refund_address: Address,
    /// Balance moved to `refund_address`.
    pub balance: U256,
}

/// The kind of a trace action, as reported in a trace's `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    /// Message call.
    Call,
    /// Contract creation.
    Create,
    /// Self-destruct.
    #[serde(rename = "suicide", alias = "selfdestruct")]
    SelfDestruct,
}

impl ActionType {
    /// The wire name, also used in error messages.
    const fn name(self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Create => "create",
            Self::SelfDestruct => "suicide",
        }
    }
}

/// A trace action.
///
/// Each variant carries only the fields of its kind. Serialization goes
/// through [`FlatAction`], so the JSON form is the flat record with absent
/// fields omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "FlatAction", try_from = "FlatAction")]
pub enum Action {
    /// A message call.
    Call(CallAction),
    /// A contract creation.
    Create(CreateAction),
    /// A self-destruct.
    SelfDestruct(SelfDestructAction),
}

impl Action {
    /// Returns the kind of this action.
    pub const fn action_type(&self) -> ActionType {
        match self {
            Self::Call(_) => ActionType::Call,
            Self::Create(_) => ActionType::Create,
            Self::SelfDestruct(_) => ActionType::SelfDestruct,
        }
    }

    /// Convert to the flat wire record, populating only this variant's
    /// fields.
    pub fn to_flat(&self) -> FlatAction {
        match self {
            Self::Call(call) => FlatAction::builder()
                .call_type(call.call_type.as_str())
                .from(format_address(call.from))
                .to(format_address(call.to))
                .gas(quantity(U256::from(call.gas)))
                .value(quantity(call.value))
                .input(dump_memory(call.input.as_deref()))
                .build(),
            Self::Create(create) => FlatAction::builder()
                .from(format_address(create.from))
                .gas(quantity(U256::from(create.gas)))
                .value(quantity(create.value))
                .init(format_bytes(&create.init))
                .to(create.to.map(format_address))
                .build(),
            Self::SelfDestruct(sd) => FlatAction::builder()
                .address(format_address(sd.address))
                .refund_address(format_address(sd.refund_address))
                .balance(short_hex(sd.balance))
                .build(),
        }
    }
}

impl From<CallAction> for Action {
    fn from(call: CallAction) -> Self {
        Self::Call(call)
    }
}

impl From<CreateAction> for Action {
    fn from(create: CreateAction) -> Self {
        Self::Create(create)
    }
}

impl From<SelfDestructAction> for Action {
    fn from(sd: SelfDestructAction) -> Self {
        Self::SelfDestruct(sd)
    }
}

impl From<Action> for FlatAction {
    fn from(action: Action) -> Self {
        action.to_flat()
    }
}

impl From<&Action> for FlatAction {
    fn from(action: &Action) -> Self {
        action.to_flat()
    }
}

impl TryFrom<&FlatAction> for Action {
    type Error = ActionError;

    fn try_from(flat: &FlatAction) -> Result<Self, Self::Error> {
        match classify(flat)? {
            ActionType::Call => {
                let kind = ActionType::Call.name();
                Ok(Self::Call(CallAction {
                    call_type: required(kind, "callType", flat.call_type())?.parse()?,
                    from: parse_address("from", required(kind, "from", flat.from())?)?,
                    to: parse_address("to", required(kind, "to", flat.to())?)?,
                    gas: parse_gas(required(kind, "gas", flat.gas())?)?,
                    value: parse_quantity("value", required(kind, "value", flat.value())?)?,
                    input: parse_memory(required(kind, "input", flat.input())?)?,
                }))
            }
            ActionType::Create => {
                let kind = ActionType::Create.name();
                Ok(Self::Create(CreateAction {
                    from: parse_address("from", required(kind, "from", flat.from())?)?,
                    gas: parse_gas(required(kind, "gas", flat.gas())?)?,
                    value: parse_quantity("value", required(kind, "value", flat.value())?)?,
                    init: parse_bytes("init", required(kind, "init", flat.init())?)?,
                    to: flat.to().map(|to| parse_address("to", to)).transpose()?,
                }))
            }
            ActionType::SelfDestruct => {
                let kind = ActionType::SelfDestruct.name();
                Ok(Self::SelfDestruct(SelfDestructAction {
                    address: parse_address("address", required(kind, "address", flat.address())?)?,
                    refund_address: parse_address(
                        "refundAddress",
                        required(kind, "refundAddress", flat.refund_address())?,
                    )?,
                    balance: parse_quantity(
                        "balance",
                        required(kind, "balance", flat.balance())?,
                    )?,
                }))
            }
        }
    }
}

impl TryFrom<FlatAction> for Action {
    type Error = ActionError;

    fn try_from(flat: FlatAction) -> Result<Self, Self::Error> {
        Self::try_from(&flat)
    }
}

/// Determine which kind of action a flat record holds.
///
/// `callType` and `input` mark a call, `init` marks a create, and any of
/// `address`, `refundAddress` or `balance` mark a self-destruct. A
/// self-destruct may not carry any call or create field.
fn classify(flat: &FlatAction) -> ActionResult<ActionType> {
    let call = flat.call_type.is_some() || flat.input.is_some();
    let create = flat.init.is_some();
    let self_destruct =
        flat.address.is_some() || flat.refund_address.is_some() || flat.balance.is_some();
    let shared =
        flat.from.is_some() || flat.to.is_some() || flat.gas.is_some() || flat.value.is_some();

    let mixed = |first: ActionType, second: ActionType| ActionError::MixedVariants {
        first: first.name(),
        second: second.name(),
    };

    match (call, create, self_destruct) {
        (true, true, _) => Err(mixed(ActionType::Call, ActionType::Create)),
        (true, false, true) => Err(mixed(ActionType::Call, ActionType::SelfDestruct)),
        (false, true, true) => Err(mixed(ActionType::Create, ActionType::SelfDestruct)),
        (false, false, true) if shared => Err(mixed(ActionType::SelfDestruct, ActionType::Call)),
        (true, false, false) => Ok(ActionType::Call),
        (false, true, false) => Ok(ActionType::Create),
        (false, false, true) => Ok(ActionType::SelfDestruct),
        (false, false, false) => Err(ActionError::Unclassified),
    }
}

fn required<'a>(
    kind: &'static str,
    field: &'static str,
    value: Option<&'a str>,
) -> ActionResult<&'a str> {
    value.ok_or(ActionError::MissingField { kind, field })
}

fn parse_address(field: &'static str, value: &str) -> ActionResult<Address> {
    value.parse().map_err(|_| ActionError::invalid_field(field, value))
}

fn strip_quantity<'a>(field: &'static str, value: &'a str) -> ActionResult<&'a str> {
    value
        .strip_prefix("0x")
        .filter(|digits| !digits.is_empty())
        .ok_or_else(|| ActionError::invalid_field(field, value))
}

fn parse_gas(value: &str) -> ActionResult<u64> {
    let digits = strip_quantity("gas", value)?;
    u64::from_str_radix(digits, 16).map_err(|_| ActionError::invalid_field("gas", value))
}

fn parse_quantity(field: &'static str, value: &str) -> ActionResult<U256> {
    let digits = strip_quantity(field, value)?;
    U256::from_str_radix(digits, 16).map_err(|_| ActionError::invalid_field(field, value))
}

fn parse_bytes(field: &'static str, value: &str) -> ActionResult<Bytes> {
    hex::decode(value).map(Bytes::from).map_err(|_| ActionError::invalid_field(field, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, bytes};

    const FROM: Address = address!("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
    const TO: Address = address!("0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");

    fn call() -> CallAction {
        CallAction {
            call_type: CallType::StaticCall,
            from: FROM,
            to: TO,
            gas: 0x2710,
            value: U256::ZERO,
            input: Some(vec![B256::repeat_byte(0x0f)]),
        }
    }

    #[test]
    fn call_to_flat() {
        let flat = Action::from(call()).to_flat();

        assert_eq!(flat.call_type(), Some("staticcall"));
        assert_eq!(flat.from(), Some("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"));
        assert_eq!(flat.to(), Some("0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"));
        assert_eq!(flat.gas(), Some("0x2710"));
        assert_eq!(flat.value(), Some("0x0"));
        assert_eq!(flat.input().map(str::len), Some(66));
        assert_eq!(flat.init(), None);
        assert_eq!(flat.address(), None);
    }

    #[test]
    fn self_destruct_to_flat() {
        let action = Action::from(SelfDestructAction {
            address: FROM,
            refund_address: TO,
            balance: U256::from(255u64),
        });
        let flat: FlatAction = (&action).into();

        assert_eq!(action.action_type(), ActionType::SelfDestruct);
        assert_eq!(flat.balance(), Some("0xff"));
        assert_eq!(flat.call_type(), None);
        assert_eq!(flat.from(), None);
        assert_eq!(flat.to(), None);
    }

    #[test]
    fn create_to_flat() {
        let create = CreateAction {
            from: FROM,
            gas: 1,
            value: U256::from(2u64),
            init: bytes!("6080604052"),
            to: None,
        };
        let flat = Action::from(create).to_flat();

        assert_eq!(flat.init(), Some("0x6080604052"));
        assert_eq!(flat.to(), None);
        assert_eq!(flat.call_type(), None);
        assert_eq!(flat.input(), None);
    }

    #[test]
    fn typed_round_trip() {
        let actions = [
            Action::from(call()),
            Action::from(CallAction { input: None, ..call() }),
            Action::from(CreateAction {
                from: FROM,
                gas: 0,
                value: U256::MAX,
                init: bytes!("00"),
                to: Some(TO),
            }),
            Action::from(SelfDestructAction {
                address: FROM,
                refund_address: TO,
                balance: U256::ZERO,
            }),
        ];

        for action in actions {
            let flat = action.to_flat();
            assert_eq!(Action::try_from(&flat).unwrap(), action);
        }
    }

    #[test]
    fn mixed_fields_are_rejected() {
        let flat = FlatAction::builder().call_type("call").balance("0x1").build();
        assert_eq!(
            Action::try_from(&flat).unwrap_err(),
            ActionError::MixedVariants { first: "call", second: "suicide" }
        );

        let flat = FlatAction::builder().address("0x01").from("0x02").build();
        assert!(matches!(
            Action::try_from(&flat).unwrap_err(),
            ActionError::MixedVariants { first: "suicide", .. }
        ));

        let flat = FlatAction::builder().input("").init("0x00").build();
        assert!(matches!(Action::try_from(&flat).unwrap_err(), ActionError::MixedVariants { .. }));
    }

    #[test]
    fn call_requires_input() {
        let flat = Action::from(call()).to_flat().to_builder().input(None::<String>).build();
        assert_eq!(
            Action::try_from(&flat).unwrap_err(),
            ActionError::MissingField { kind: "call", field: "input" }
        );

        let flat = flat.to_builder().input("").build();
        let action = Action::try_from(&flat).unwrap();
        assert!(matches!(&action, Action::Call(inner) if inner.input.is_none()));
        assert_eq!(action.to_flat(), flat);
    }

    #[test]
    fn trace_root_is_unclassified() {
        let flat = FlatAction::builder().from("0x01").gas("0x1").value("0x0").build();
        assert_eq!(Action::try_from(&flat).unwrap_err(), ActionError::Unclassified);
    }

    #[test]
    fn missing_and_invalid_fields() {
        let flat = FlatAction::builder().call_type("call").build();
        assert_eq!(
            Action::try_from(&flat).unwrap_err(),
            ActionError::MissingField { kind: "call", field: "from" }
        );

        let flat = Action::from(call()).to_flat().to_builder().gas("10").build();
        assert_eq!(Action::try_from(&flat).unwrap_err(), ActionError::invalid_field("gas", "10"));

        let flat = Action::from(call()).to_flat().to_builder().call_type("jump").build();
        assert_eq!(
            Action::try_from(&flat).unwrap_err(),
            ActionError::UnknownCallType("jump".to_owned())
        );
    }

    #[test]
    fn action_type_names_match_wire() {
        for ty in [ActionType::Call, ActionType::Create, ActionType::SelfDestruct] {
            let wire = serde_json::to_string(&ty).unwrap();
            assert_eq!(wire.trim_matches('"'), ty.name());
        }
    }

    #[test]
    fn action_type_wire_names() {
        assert_eq!(serde_json::to_string(&ActionType::Call).unwrap(), r#""call""#);
        assert_eq!(serde_json::to_string(&ActionType::Create).unwrap(), r#""create""#);
        assert_eq!(serde_json::to_string(&ActionType::SelfDestruct).unwrap(), r#""suicide""#);
        assert_eq!(
            serde_json::from_str::<ActionType>(r#""selfdestruct""#).unwrap(),
            ActionType::SelfDestruct
        );
    }
}
