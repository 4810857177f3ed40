use alloc::string::String;
use core::num::ParseFloatError;

use crate::Kind;

/// Errors raised when a value's kind does not support the requested operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindError {
    /// An operand resolved to an absent or uninitialized value where a
    /// concrete kind was required.
    InvalidValue,

    /// Two values whose kinds have no defined equality (mismatched
    /// non-numeric kinds, or collections, which are never deep-compared).
    Incomparable {
        /// Kind of the left operand.
        left: Kind,
        /// Kind of the right operand.
        right: Kind,
    },

    /// An aggregation operand that is neither numeric nor a string.
    NotNumeric {
        /// Kind of the offending operand.
        actual: Kind,
    },

    /// A string aggregation operand that is not a numeric literal.
    Parse {
        /// The literal as supplied.
        literal: String,
        /// Why parsing failed.
        source: ParseFloatError,
    },
}

impl KindError {
    /// Whether the error is a kind mismatch, as opposed to a bad value or a bad literal.
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(
            self,
            KindError::Incomparable { .. } | KindError::NotNumeric { .. }
        )
    }
}

impl core::fmt::Display for KindError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            KindError::InvalidValue => write!(f, "invalid value"),
            KindError::Incomparable { left, right } => {
                write!(f, "cannot compare {left} with {right}")
            }
            KindError::NotNumeric { actual } => {
                write!(f, "value must be numeric, got {actual}")
            }
            KindError::Parse { literal, source } => {
                write!(f, "cannot parse {literal:?} as a number: {source}")
            }
        }
    }
}

impl core::error::Error for KindError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            KindError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}
