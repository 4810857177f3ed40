use crate::{Dynamic, resolve};

/// Reports whether a value is "meaningful", i.e. not the zero value of its kind.
///
/// Absent and uninitialized values are false; strings, sequences and
/// mappings are true when non-empty; numbers when non-zero; booleans are
/// themselves. Any other present value (an opaque host value) is true.
///
/// This is the one truth predicate every conditional helper builds on.
pub fn is_true(value: &Dynamic) -> bool {
    let resolved = resolve(value);
    match resolved.value() {
        Dynamic::String(s) => !s.is_empty(),
        Dynamic::Number(n) => !n.is_zero(),
        Dynamic::Bool(b) => *b,
        Dynamic::Seq(items) => !items.is_empty(),
        Dynamic::Map(entries) => !entries.is_empty(),
        Dynamic::Opaque(_) => true,
        Dynamic::Invalid | Dynamic::Ref(_) | Dynamic::Boxed(_) => false,
    }
}

/// Exactly `!is_true(value)`.
pub fn is_empty(value: &Dynamic) -> bool {
    !is_true(value)
}
