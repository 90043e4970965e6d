//! Trace type selection and environment parsing.
//!
//! The `trace_*` RPC methods take a list of requested output kinds. Action
//! records are only produced when `trace` is among them.
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `SIGNET_TRACE_TYPES` | Comma-separated trace types (`trace`, `vmTrace`, `stateDiff`) | `trace` |
//!
//! # Example
//!
//! ```rust
//! use signet_trace_action::config::TraceTypes;
//! use std::env;
//!
//! // Parse from string
//! let types: TraceTypes = "trace,stateDiff".parse().unwrap();
//! assert!(types.includes_actions());
//! assert!(types.contains(TraceTypes::STATE_DIFF));
//!
//! // Parse from environment
//! unsafe {
//!     env::set_var("SIGNET_TRACE_TYPES", "vmTrace");
//! }
//! let types = TraceTypes::from_env().unwrap();
//! assert!(!types.includes_actions());
//! # unsafe { env::remove_var("SIGNET_TRACE_TYPES"); }
//! ```

use bitflags::bitflags;
use std::{
    env::{self, VarError},
    fmt,
    str::FromStr,
};
use thiserror::Error;

/// Environment variable name for the requested trace types.
pub const ENV_TRACE_TYPES: &str = "SIGNET_TRACE_TYPES";

bitflags! {
    #[doc = "The set of trace outputs requested from a `trace_*` call."]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[repr(transparent)]
    pub struct TraceTypes: u8 {
        /// Call-tree trace with an action per frame.
        const TRACE = 1 << 0;
        /// Full VM execution trace.
        const VM_TRACE = 1 << 1;
        /// State difference produced by the transaction.
        const STATE_DIFF = 1 << 2;
    }
}

impl Default for TraceTypes {
    fn default() -> Self {
        Self::TRACE
    }
}

impl TraceTypes {
    const NAMES: [(Self, &'static str); 3] =
        [(Self::TRACE, "trace"), (Self::VM_TRACE, "vmTrace"), (Self::STATE_DIFF, "stateDiff")];

    /// Load the requested trace types from the environment.
    ///
    /// Reads `SIGNET_TRACE_TYPES`. An unset variable yields
    /// [`TraceTypes::TRACE`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotUnicode`] if the variable is not valid
    /// unicode, or any error from parsing its value.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(ENV_TRACE_TYPES) {
            Ok(value) => value.parse(),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(ENV_TRACE_TYPES)),
        }
    }

    /// True if action records should be produced.
    pub const fn includes_actions(&self) -> bool {
        self.contains(Self::TRACE)
    }
}

impl FromStr for TraceTypes {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut types = Self::empty();
        for name in s.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            let (flag, _) = Self::NAMES
                .iter()
                .find(|(_, known)| *known == name)
                .ok_or_else(|| ConfigError::InvalidTraceType(name.to_owned()))?;
            types |= *flag;
        }

        if types.is_empty() {
            return Err(ConfigError::Empty);
        }
        Ok(types)
    }
}

impl fmt::Display for TraceTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(",")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Environment variable is set but is not valid unicode.
    #[error("environment variable {0} is not valid unicode")]
    NotUnicode(&'static str),

    /// Unknown trace type name.
    #[error("invalid trace type: {0} (expected: trace, vmTrace, stateDiff)")]
    InvalidTraceType(String),

    /// No trace type was requested.
    #[error("at least one trace type must be requested")]
    Empty,
}
