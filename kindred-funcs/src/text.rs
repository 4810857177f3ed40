//! String rendering helpers.

use alloc::string::String;
use alloc::vec::Vec;

use kindred::{Dynamic, flatten, printable};

/// The printed form of `value`, e.g. `[1 2]` for a sequence.
pub fn to_string(value: &Dynamic) -> String {
    printable(value)
}

/// Flattens every value and joins the pieces with `separator`.
///
/// Sequences and mappings contribute one piece per element, so
/// `join(",", [1, [2, 3]])` is `1,2,3`.
pub fn join(separator: &str, values: &[Dynamic]) -> String {
    values
        .iter()
        .flat_map(flatten)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Longest string [`repeat`] will build, in bytes.
pub const MAX_REPEAT_LEN: usize = 64 << 20;

/// The printed form of `value`, `count` times over.
///
/// `None` when the result would exceed [`MAX_REPEAT_LEN`] bytes.
pub fn repeat(count: usize, value: &Dynamic) -> Option<String> {
    let piece = printable(value);
    piece
        .len()
        .checked_mul(count)
        .filter(|&len| len <= MAX_REPEAT_LEN)?;
    Some(piece.repeat(count))
}
