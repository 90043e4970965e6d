//! Error types for parsing formatted trace values.

use alloy::primitives::hex::FromHexError;

/// Error returned when a memory dump string cannot be decoded back into
/// 32-byte words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MemoryDumpError {
    /// A non-empty dump did not start with `0x`.
    #[error("memory dump is missing the 0x prefix")]
    MissingPrefix,

    /// The dump body is not valid hex.
    #[error("invalid hex in memory dump: {0}")]
    InvalidHex(#[from] FromHexError),

    /// The dump body does not split into whole 32-byte words.
    #[error("memory dump of {len} hex digits is not a whole number of 32-byte words")]
    PartialWord {
        /// Number of hex digits after the prefix.
        len: usize,
    },
}
