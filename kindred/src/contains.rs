//! Containment search over strings, sequences and mappings.

use crate::{Dynamic, Resolved, debug, equal, printable, resolve, trace};

/// Whether every one of `targets` occurs in `source`.
///
/// An empty target list is trivially contained.
pub fn contains_all(source: &Dynamic, targets: &[Dynamic]) -> bool {
    let source = resolve(source);
    targets.iter().all(|target| contains_resolved(source, target))
}

/// Whether at least one of `targets` occurs in `source`.
///
/// An empty target list is never contained.
pub fn contains_any(source: &Dynamic, targets: &[Dynamic]) -> bool {
    let source = resolve(source);
    targets.iter().any(|target| contains_resolved(source, target))
}

/// Whether `target` occurs in `source`.
///
/// - In a string, a target occurs if its printed form is a substring.
/// - In a sequence, a target occurs if it [`equal`]s some element.
/// - In a mapping, only the values are searched, never the keys.
///
/// An absent source behaves as an empty container, and a source of any
/// other kind contains nothing. Elements that cannot be compared with the
/// target are skipped rather than failing the whole search.
pub fn contains(source: &Dynamic, target: &Dynamic) -> bool {
    contains_resolved(resolve(source), target)
}

fn contains_resolved(source: Resolved<'_>, target: &Dynamic) -> bool {
    let needle = resolve(target);
    match source.value() {
        Dynamic::String(haystack) => {
            // an absent or uninitialized needle has no printed form to search for
            if needle.is_absent() || needle.is_invalid() {
                return false;
            }
            haystack.contains(printable(needle.value()).as_str())
        }
        Dynamic::Seq(items) => items.iter().any(|item| element_matches(needle, item)),
        Dynamic::Map(entries) => entries.values().any(|item| element_matches(needle, item)),
        _ => {
            trace!(kind = %source.kind(), "contains: source is not a container");
            false
        }
    }
}

/// Two absent values match each other, which `equal` already guarantees.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn element_matches(needle: Resolved<'_>, element: &Dynamic) -> bool {
    match equal(needle, resolve(element)) {
        Ok(matched) => matched,
        Err(err) => {
            debug!(%err, "contains: skipping element that cannot be compared");
            false
        }
    }
}
