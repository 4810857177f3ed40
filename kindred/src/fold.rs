//! Numeric coercion and left-to-right aggregation.

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::{Dynamic, KindError, debug, resolve, trace};

/// A binary operator the aggregation engine folds with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `acc * v`
    Mul,
    /// `acc + v`
    Add,
    /// `acc / v`; dividing by zero yields an infinity or NaN, never an error
    Div,
    /// `acc - v`
    Sub,
    /// `acc ^ v`
    Pow,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: [Operator; 5] = [
        Operator::Mul,
        Operator::Add,
        Operator::Div,
        Operator::Sub,
        Operator::Pow,
    ];

    /// Combines the accumulator with the next operand.
    #[must_use]
    pub fn apply(self, acc: f64, rhs: f64) -> f64 {
        match self {
            Operator::Mul => acc * rhs,
            Operator::Add => acc + rhs,
            Operator::Div => acc / rhs,
            Operator::Sub => acc - rhs,
            Operator::Pow => acc.powf(rhs),
        }
    }

    /// What [`fold`] returns for an empty operand list: `0` for the additive
    /// operators, `1` for the multiplicative ones.
    #[must_use]
    pub const fn seed(self) -> f64 {
        match self {
            Operator::Add | Operator::Sub => 0.0,
            Operator::Mul | Operator::Div | Operator::Pow => 1.0,
        }
    }

    /// The operator's template name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Operator::Mul => "mul",
            Operator::Add => "add",
            Operator::Div => "div",
            Operator::Sub => "sub",
            Operator::Pow => "pow",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name does not denote an [`Operator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperator;

impl fmt::Display for UnknownOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown operator")
    }
}

impl core::error::Error for UnknownOperator {}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or(UnknownOperator)
    }
}

/// Coerces one value to `f64` for aggregation.
///
/// Numbers of every width convert directly; strings must be numeric
/// literals; absent or uninitialized values yield
/// [`KindError::InvalidValue`]; every other kind yields
/// [`KindError::NotNumeric`].
pub fn coerce_f64(value: &Dynamic) -> Result<f64, KindError> {
    let resolved = resolve(value);
    match resolved.value() {
        Dynamic::Number(n) => Ok(n.to_f64()),
        Dynamic::String(s) => s.parse::<f64>().map_err(|source| KindError::Parse {
            literal: s.to_string(),
            source,
        }),
        Dynamic::Invalid | Dynamic::Ref(_) | Dynamic::Boxed(_) => Err(KindError::InvalidValue),
        _ => Err(KindError::NotNumeric {
            actual: resolved.kind(),
        }),
    }
}

/// Folds `values` left to right through `op`.
///
/// The first value is the starting accumulator; each following value is
/// combined into it. There is no precedence or reassociation: `sub` over
/// `[1, 2, 3]` is `(1 - 2) - 3`. An empty list yields [`Operator::seed`].
/// The first coercion error aborts the whole fold.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn fold(op: Operator, values: &[Dynamic]) -> Result<f64, KindError> {
    let mut operands = values.iter().enumerate().map(|(index, value)| {
        coerce_f64(value).inspect_err(|err| {
            debug!(%op, index, %err, "fold aborted");
        })
    });

    let Some(first) = operands.next() else {
        return Ok(op.seed());
    };

    let mut acc = first?;
    for operand in operands {
        let rhs = operand?;
        let next = op.apply(acc, rhs);
        trace!(%op, acc, rhs, next, "fold step");
        acc = next;
    }
    Ok(acc)
}
