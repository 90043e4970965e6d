//! Call kinds recorded in the `callType` field of a call action.

use crate::ActionError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The kind of message call a call action performed.
///
/// Serialized as the lowercase opcode name, e.g. `"delegatecall"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallType {
    /// `CALL`
    #[default]
    Call,
    /// `CALLCODE`
    CallCode,
    /// `DELEGATECALL`
    DelegateCall,
    /// `STATICCALL`
    StaticCall,
}

impl CallType {
    /// Returns the wire string of this call type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::CallCode => "callcode",
            Self::DelegateCall => "delegatecall",
            Self::StaticCall => "staticcall",
        }
    }
}

impl FromStr for CallType {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "call" => Ok(Self::Call),
            "callcode" => Ok(Self::CallCode),
            "delegatecall" => Ok(Self::DelegateCall),
            "staticcall" => Ok(Self::StaticCall),
            _ => Err(ActionError::UnknownCallType(s.to_owned())),
        }
    }
}

impl fmt::Display for CallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
