use core::fmt;

use crate::{Dynamic, Resolved};

/// The closed set of kinds a resolved value can have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Any signed integer width.
    SignedInt,
    /// Any unsigned integer width.
    UnsignedInt,
    /// Any floating-point width.
    Float,
    /// A string.
    String,
    /// A boolean.
    Bool,
    /// An ordered collection.
    Sequence,
    /// A keyed collection.
    Mapping,
    /// Absent, uninitialized, or a value with no comparison or iteration semantics.
    Invalid,
}

impl Kind {
    /// Whether this is one of the three numeric families.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Kind::SignedInt | Kind::UnsignedInt | Kind::Float)
    }

    /// Whether values of this kind can be iterated element by element.
    #[must_use]
    pub const fn is_collection(self) -> bool {
        matches!(self, Kind::Sequence | Kind::Mapping)
    }

    /// A short lowercase name, as used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Kind::SignedInt => "signed integer",
            Kind::UnsignedInt => "unsigned integer",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Bool => "bool",
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
            Kind::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies a resolved value. Every value maps to exactly one [`Kind`].
#[must_use]
pub fn classify(value: Resolved<'_>) -> Kind {
    match value.value() {
        Dynamic::Number(n) => n.kind(),
        Dynamic::String(_) => Kind::String,
        Dynamic::Bool(_) => Kind::Bool,
        Dynamic::Seq(_) => Kind::Sequence,
        Dynamic::Map(_) => Kind::Mapping,
        Dynamic::Invalid | Dynamic::Opaque(_) | Dynamic::Ref(_) | Dynamic::Boxed(_) => {
            Kind::Invalid
        }
    }
}
