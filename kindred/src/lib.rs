#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod value;
pub use value::*;

mod number;
pub use number::*;

mod error;
pub use error::*;

mod resolve;
pub use resolve::*;

mod kind;
pub use kind::*;

mod eq;
pub use eq::*;

mod truth;
pub use truth::*;

mod contains;
pub use contains::*;

mod fold;
pub use fold::*;

mod print;
pub use print::*;

#[cfg(feature = "serde_json")]
mod json;

#[cfg(feature = "tracing")]
#[allow(unused_imports)]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
#[macro_export]
/// Forwards to tracing::trace when the tracing feature is enabled
macro_rules! trace {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
#[macro_export]
/// Forwards to tracing::debug when the tracing feature is enabled
macro_rules! debug {
    ($($tt:tt)*) => {};
}
