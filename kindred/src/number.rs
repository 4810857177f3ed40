//! Numeric payloads that remember the width they were produced with.

use core::fmt::{self, Display, Formatter};

use crate::Kind;

/// A number as handed over by the host, tagged with its concrete width.
///
/// The width is kept so that [`classify`](crate::classify) can report the
/// numeric family and so that floats print in the shortest form that
/// round-trips *at their own precision* (`4.1f32` prints as `4.1`, not as
/// `4.099999904632568`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// `i8`
    I8(i8),
    /// `i16`
    I16(i16),
    /// `i32`
    I32(i32),
    /// `i64`
    I64(i64),
    /// `i128`
    I128(i128),
    /// `isize`
    ISize(isize),
    /// `u8`
    U8(u8),
    /// `u16`
    U16(u16),
    /// `u32`
    U32(u32),
    /// `u64`
    U64(u64),
    /// `u128`
    U128(u128),
    /// `usize`
    USize(usize),
    /// `f32`
    F32(f32),
    /// `f64`
    F64(f64),
}

impl Number {
    /// The numeric family this width belongs to.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Number::I8(_)
            | Number::I16(_)
            | Number::I32(_)
            | Number::I64(_)
            | Number::I128(_)
            | Number::ISize(_) => Kind::SignedInt,
            Number::U8(_)
            | Number::U16(_)
            | Number::U32(_)
            | Number::U64(_)
            | Number::U128(_)
            | Number::USize(_) => Kind::UnsignedInt,
            Number::F32(_) | Number::F64(_) => Kind::Float,
        }
    }

    /// Promotes the number to double precision.
    ///
    /// Wide integers round to the nearest representable double, which is
    /// exactly the promotion equality and aggregation rely on.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match *self {
            Number::I8(v) => f64::from(v),
            Number::I16(v) => f64::from(v),
            Number::I32(v) => f64::from(v),
            Number::I64(v) => v as f64,
            Number::I128(v) => v as f64,
            Number::ISize(v) => v as f64,
            Number::U8(v) => f64::from(v),
            Number::U16(v) => f64::from(v),
            Number::U32(v) => f64::from(v),
            Number::U64(v) => v as f64,
            Number::U128(v) => v as f64,
            Number::USize(v) => v as f64,
            Number::F32(v) => f64::from(v),
            Number::F64(v) => v,
        }
    }

    /// Whether this is the zero value of its width. `-0.0` counts as zero, `NaN` does not.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match *self {
            Number::I8(v) => v == 0,
            Number::I16(v) => v == 0,
            Number::I32(v) => v == 0,
            Number::I64(v) => v == 0,
            Number::I128(v) => v == 0,
            Number::ISize(v) => v == 0,
            Number::U8(v) => v == 0,
            Number::U16(v) => v == 0,
            Number::U32(v) => v == 0,
            Number::U64(v) => v == 0,
            Number::U128(v) => v == 0,
            Number::USize(v) => v == 0,
            Number::F32(v) => v == 0.0,
            Number::F64(v) => v == 0.0,
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Number::I8(v) => write!(f, "{v}"),
            Number::I16(v) => write!(f, "{v}"),
            Number::I32(v) => write!(f, "{v}"),
            Number::I64(v) => write!(f, "{v}"),
            Number::I128(v) => write!(f, "{v}"),
            Number::ISize(v) => write!(f, "{v}"),
            Number::U8(v) => write!(f, "{v}"),
            Number::U16(v) => write!(f, "{v}"),
            Number::U32(v) => write!(f, "{v}"),
            Number::U64(v) => write!(f, "{v}"),
            Number::U128(v) => write!(f, "{v}"),
            Number::USize(v) => write!(f, "{v}"),
            Number::F32(v) => write_float(f, v.is_nan(), v.is_infinite(), v.is_sign_negative(), v),
            Number::F64(v) => write_float(f, v.is_nan(), v.is_infinite(), v.is_sign_negative(), v),
        }
    }
}

/// Finite floats use the shortest round-trip form; non-finite ones print as
/// `NaN`, `+Inf` and `-Inf`.
fn write_float(
    f: &mut Formatter<'_>,
    nan: bool,
    infinite: bool,
    negative: bool,
    v: impl Display,
) -> fmt::Result {
    if nan {
        f.write_str("NaN")
    } else if infinite {
        f.write_str(if negative { "-Inf" } else { "+Inf" })
    } else {
        write!(f, "{v}")
    }
}

macro_rules! impl_from_number {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(v: $ty) -> Self {
                    Number::$variant(v)
                }
            }
        )*
    };
}

impl_from_number! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => ISize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => USize,
    f32 => F32,
    f64 => F64,
}
