#![warn(missing_docs)]
#![forbid(unsafe_code)]
//! Test setup and fixtures shared by the kindred test suites.
//!
//! Import the attribute as `use kindred_testhelpers::test;` and keep writing
//! `#[test]`: every test then starts with [`setup`], so kernel events show up
//! on stderr. Filter them with `KINDRED_LOG`, e.g. `KINDRED_LOG=kindred=debug`.

pub use kindred_testhelpers_macros::test;

use std::sync::LazyLock;

use indexmap::IndexMap;
use kindred::{Dynamic, MapKey};
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static SUBSCRIBER_INIT: LazyLock<()> = LazyLock::new(|| {
    let filter = std::env::var("KINDRED_LOG")
        .ok()
        .and_then(|s| s.parse::<Targets>().ok())
        .unwrap_or_else(|| {
            Targets::new()
                .with_target("kindred", tracing::Level::TRACE)
                .with_target("kindred_funcs", tracing::Level::TRACE)
        });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_test_writer()
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .ok();
});

/// Installs the tracing subscriber, once per process.
pub fn setup() {
    #[allow(clippy::let_unit_value)]
    let _ = *SUBSCRIBER_INIT;
}

/// `value` behind one pointer layer.
pub fn ptr(value: impl Into<Dynamic>) -> Dynamic {
    Dynamic::pointer_to(value)
}

/// `value` behind `depth` alternating pointer and boxed layers, innermost first.
pub fn layered(depth: usize, value: impl Into<Dynamic>) -> Dynamic {
    (0..depth).fold(value.into(), |acc, i| {
        if i % 2 == 0 {
            Dynamic::pointer_to(acc)
        } else {
            Dynamic::boxed(acc)
        }
    })
}

/// A mapping from each integer to itself, like `{0: 0, 1: 1, ..}`.
pub fn int_map(keys: impl IntoIterator<Item = i64>) -> Dynamic {
    let entries: IndexMap<MapKey, Dynamic> = keys
        .into_iter()
        .map(|k| (MapKey::Int(k), Dynamic::from(k)))
        .collect();
    Dynamic::Map(entries)
}

/// Converts a list of host values into the argument slice helpers expect.
pub fn args<T: Into<Dynamic>>(values: impl IntoIterator<Item = T>) -> Vec<Dynamic> {
    values.into_iter().map(Into::into).collect()
}

/// Sorts a list of display strings so mapping output can be compared as a multiset.
pub fn sorted(mut items: Vec<String>) -> Vec<String> {
    items.sort();
    items
}
