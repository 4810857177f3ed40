use alloc::string::String;
use core::fmt;

use kindred::KindError;

/// How many arguments a helper accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many.
    Exactly(usize),
    /// This many or more.
    AtLeast(usize),
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// Errors raised while calling a helper.
#[derive(Debug, Clone, PartialEq)]
pub enum FuncError {
    /// No helper is registered under this name.
    UnknownFunction {
        /// The name that was looked up.
        name: String,
    },

    /// The helper was called with the wrong number of arguments.
    Arity {
        /// The helper's name.
        func: &'static str,
        /// What it accepts.
        expected: Arity,
        /// What it got.
        got: usize,
    },

    /// An argument has the right position but an unusable value.
    Argument {
        /// The helper's name.
        func: &'static str,
        /// Zero-based position of the argument.
        index: usize,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// The kernel rejected an operand.
    Kind(KindError),
}

impl fmt::Display for FuncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FuncError::UnknownFunction { name } => write!(f, "function {name:?} not defined"),
            FuncError::Arity {
                func,
                expected,
                got,
            } => write!(f, "{func}: expected {expected} arguments, got {got}"),
            FuncError::Argument {
                func,
                index,
                reason,
            } => write!(f, "{func}: argument {index}: {reason}"),
            FuncError::Kind(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for FuncError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            FuncError::Kind(err) => Some(err),
            _ => None,
        }
    }
}

impl From<KindError> for FuncError {
    fn from(err: KindError) -> Self {
        FuncError::Kind(err)
    }
}
