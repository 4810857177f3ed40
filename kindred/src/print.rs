//! Canonical display strings and flattening for joinable output.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter, Write};

use crate::{Dynamic, MapKey, resolve};

/// The canonical display string of a value, after resolution.
///
/// Numbers print in their shortest round-trip form, booleans as
/// `true`/`false`, strings verbatim. Sequences print as `[a b c]` and
/// mappings as `map[k:v ...]` with keys in sorted order. Absent values
/// print as `<nil>`, uninitialized ones as `<invalid>`.
pub fn printable(value: &Dynamic) -> String {
    value.to_string()
}

/// Turns a value into a list of display strings, one per element.
///
/// A string stays whole; a sequence yields one entry per element in order;
/// a mapping yields one entry per value, in the mapping's iteration order;
/// anything else yields its own printable form.
pub fn flatten(value: &Dynamic) -> Vec<String> {
    match resolve(value).value() {
        Dynamic::Seq(items) => items.iter().map(printable).collect(),
        Dynamic::Map(entries) => entries.values().map(printable).collect(),
        _ => vec![printable(value)],
    }
}

impl Display for Dynamic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match resolve(self).value() {
            Dynamic::Invalid => f.write_str("<invalid>"),
            Dynamic::Bool(b) => write!(f, "{b}"),
            Dynamic::Number(n) => write!(f, "{n}"),
            Dynamic::String(s) => f.write_str(s),
            Dynamic::Seq(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(']')
            }
            Dynamic::Map(entries) => {
                let mut sorted: Vec<_> = entries.iter().collect();
                sorted.sort_by(|(a, _), (b, _)| a.cmp(b));
                f.write_str("map[")?;
                for (i, (key, value)) in sorted.into_iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    write!(f, "{key}:{value}")?;
                }
                f.write_char(']')
            }
            Dynamic::Opaque(opaque) => write!(f, "<{}>", opaque.type_name()),
            Dynamic::Ref(_) | Dynamic::Boxed(_) => f.write_str("<nil>"),
        }
    }
}

impl Display for MapKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MapKey::Bool(b) => write!(f, "{b}"),
            MapKey::Int(i) => write!(f, "{i}"),
            MapKey::Uint(u) => write!(f, "{u}"),
            MapKey::String(s) => f.write_str(s),
        }
    }
}
