//! Cross-kind equality between resolved values.

use crate::{Dynamic, KindError, Resolved, resolve};

/// Decides whether two resolved values are equal.
///
/// Rules, first match wins:
///
/// 1. both absent: equal;
/// 2. exactly one absent: not equal;
/// 3. two strings: equal iff the bytes match;
/// 4. two numbers of any width: both are promoted to `f64` and compared, so
///    `1i32`, `1u64` and `1.0f64` are all equal;
/// 5. two booleans: equal iff identical.
///
/// Anything else is an error: [`KindError::InvalidValue`] if either side is
/// uninitialized, [`KindError::Incomparable`] otherwise. Sequences and
/// mappings are never deep-compared.
pub fn equal(a: Resolved<'_>, b: Resolved<'_>) -> Result<bool, KindError> {
    match (a.is_absent(), b.is_absent()) {
        (true, true) => return Ok(true),
        (true, false) | (false, true) => return Ok(false),
        (false, false) => {}
    }

    match (a.value(), b.value()) {
        (Dynamic::String(x), Dynamic::String(y)) => Ok(x == y),
        (Dynamic::Number(x), Dynamic::Number(y)) => Ok(x.to_f64() == y.to_f64()),
        (Dynamic::Bool(x), Dynamic::Bool(y)) => Ok(x == y),
        (Dynamic::Invalid, _) | (_, Dynamic::Invalid) => Err(KindError::InvalidValue),
        _ => Err(KindError::Incomparable {
            left: a.kind(),
            right: b.kind(),
        }),
    }
}

/// [`equal`] on two unresolved values.
pub fn equal_dynamic(a: &Dynamic, b: &Dynamic) -> Result<bool, KindError> {
    equal(resolve(a), resolve(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kind;

    fn eq(a: impl Into<Dynamic>, b: impl Into<Dynamic>) -> Result<bool, KindError> {
        equal_dynamic(&a.into(), &b.into())
    }

    #[test]
    fn numeric_equality_ignores_width() {
        assert_eq!(eq(2i8, 2.0f64), Ok(true));
        assert_eq!(eq(2u64, 2i32), Ok(true));
        assert_eq!(eq(1.5f32, 1.5f64), Ok(true));
        assert_eq!(eq(-1i64, u64::MAX), Ok(false));
        assert_eq!(eq(3usize, 3.0001f64), Ok(false));
    }

    #[test]
    fn promotion_rounding_is_preserved() {
        // both sides round to 2^53
        assert_eq!(eq(9007199254740993i64, 9007199254740992.0f64), Ok(true));
        // 0.1f32 widened is not 0.1f64
        assert_eq!(eq(0.1f32, 0.1f64), Ok(false));
    }

    #[test]
    fn nan_is_never_equal() {
        assert_eq!(eq(f64::NAN, f64::NAN), Ok(false));
    }

    #[test]
    fn absent_symmetry() {
        assert_eq!(eq(Dynamic::nil(), Dynamic::nil_ref()), Ok(true));
        assert_eq!(eq(Dynamic::nil(), 0), Ok(false));
        assert_eq!(eq("", Dynamic::pointer_to(Dynamic::nil())), Ok(false));
    }

    #[test]
    fn strings_and_bools() {
        assert_eq!(eq("abc", "abc"), Ok(true));
        assert_eq!(eq("abc", "abd"), Ok(false));
        assert_eq!(eq(true, Dynamic::boxed(true)), Ok(true));
        assert_eq!(eq(true, false), Ok(false));
    }

    #[test]
    fn mismatched_kinds_are_errors() {
        assert_eq!(
            eq("1", 1),
            Err(KindError::Incomparable {
                left: Kind::String,
                right: Kind::SignedInt,
            })
        );
        assert_eq!(
            eq(true, 1u8),
            Err(KindError::Incomparable {
                left: Kind::Bool,
                right: Kind::UnsignedInt,
            })
        );
        assert_eq!(
            eq(vec![1], vec![1]),
            Err(KindError::Incomparable {
                left: Kind::Sequence,
                right: Kind::Sequence,
            })
        );
        assert_eq!(eq(Dynamic::Invalid, 1), Err(KindError::InvalidValue));
        assert_eq!(
            eq(Dynamic::opaque("fn()"), Dynamic::opaque("fn()")),
            Err(KindError::Incomparable {
                left: Kind::Invalid,
                right: Kind::Invalid,
            })
        );
    }
}
