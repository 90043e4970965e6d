//! Error types for trace action construction and classification.

use signet_trace_types::MemoryDumpError;

/// Result type alias for trace action operations.
pub type ActionResult<T, E = ActionError> = Result<T, E>;

/// Error type for trace action operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// The trace-root recipe was given a trace with no frames.
    #[error("transaction trace has no frames")]
    EmptyTrace,

    /// A `callType` string is not one of the known call kinds.
    #[error("unknown call type: {0}")]
    UnknownCallType(String),

    /// A flat record carries fields of more than one action kind.
    #[error("action mixes fields of {first} and {second} actions")]
    MixedVariants {
        /// The first action kind detected.
        first: &'static str,
        /// The conflicting action kind.
        second: &'static str,
    },

    /// A flat record has no fields identifying its action kind.
    #[error("action has no fields identifying its kind")]
    Unclassified,

    /// A field required by the detected action kind is absent.
    #[error("{kind} action is missing required field `{field}`")]
    MissingField {
        /// The detected action kind.
        kind: &'static str,
        /// The wire name of the missing field.
        field: &'static str,
    },

    /// A field value could not be parsed.
    #[error("invalid value for field `{field}`: {value:?}")]
    InvalidField {
        /// The wire name of the field.
        field: &'static str,
        /// The offending value.
        value: String,
    },

    /// The `input` field is not a valid memory dump.
    #[error("invalid input field: {0}")]
    InvalidInput(#[from] MemoryDumpError),
}

impl ActionError {
    /// Create an [`ActionError::InvalidField`].
    pub fn invalid_field(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidField { field, value: value.into() }
    }
}
