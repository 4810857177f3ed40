//! Indirection resolution: stripping pointer and boxed layers.

use crate::{Dynamic, Kind, classify};

/// A [`Dynamic`] with every pointer and boxed layer stripped.
///
/// The wrapped value is the terminal of the indirection chain: either a
/// concrete value, or the nil layer that ended the chain. Resolving it again
/// yields the same terminal.
#[derive(Clone, Copy, Debug)]
pub struct Resolved<'a> {
    terminal: &'a Dynamic,
}

impl<'a> Resolved<'a> {
    /// The terminal value. For an absent chain this is the nil layer itself.
    #[must_use]
    pub const fn value(&self) -> &'a Dynamic {
        self.terminal
    }

    /// Whether the chain ended in a nil pointer or a nil box.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self.terminal, Dynamic::Ref(None) | Dynamic::Boxed(None))
    }

    /// Whether the chain ended in an uninitialized value.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self.terminal, Dynamic::Invalid)
    }

    /// Shorthand for [`classify`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        classify(*self)
    }

    /// Whether `self` and `other` ended on the very same terminal.
    #[must_use]
    pub fn same_terminal(&self, other: &Resolved<'_>) -> bool {
        core::ptr::eq(self.terminal, other.terminal)
    }
}

/// Follows pointer and boxed layers until reaching a concrete value or a nil layer.
///
/// Chains may be arbitrarily deep; only the terminal state matters. A value
/// with no layers resolves to itself.
pub fn resolve(value: &Dynamic) -> Resolved<'_> {
    let mut current = value;
    loop {
        match current {
            Dynamic::Ref(Some(inner)) => current = &**inner,
            Dynamic::Boxed(Some(inner)) => current = &**inner,
            _ => return Resolved { terminal: current },
        }
    }
}
