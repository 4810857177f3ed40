//! Arithmetic helpers, each a left fold over its operands.

use kindred::{Dynamic, KindError, Operator, fold};

macro_rules! arithmetic {
    ($($(#[$meta:meta])* $name:ident => $op:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(values: &[Dynamic]) -> Result<f64, KindError> {
                fold(Operator::$op, values)
            }
        )*
    };
}

arithmetic! {
    /// Product of `values`, left to right.
    mul => Mul,
    /// Sum of `values`, left to right.
    add => Add,
    /// Alias of [`add`].
    sum => Add,
    /// Successive quotients: `div [1, 2, 2]` is `0.25`.
    div => Div,
    /// Successive differences: `sub [1, 2, 3]` is `-4`.
    sub => Sub,
    /// Successive powers: `pow [2, 2, 2]` is `16`.
    pow => Pow,
}
