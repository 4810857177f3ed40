//! The [`Dynamic`] value that crosses the boundary between a template host and the kernel.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::hash::BuildHasher;
use std::collections::HashMap;

use indexmap::IndexMap;

use crate::Number;

/// A run-time typed value handed to the kernel by a template host.
///
/// Besides plain data, a `Dynamic` can carry any number of indirection
/// layers: [`Dynamic::Ref`] models a pointer or shared reference, and
/// [`Dynamic::Boxed`] models a value stored behind an interface/any box.
/// Either layer may be nil. Use [`resolve`](crate::resolve) to strip them.
#[derive(Clone, Debug, Default)]
pub enum Dynamic {
    /// An uninitialized value: the host had nothing at all to hand over.
    #[default]
    Invalid,

    /// A boolean.
    Bool(bool),

    /// A number of any width.
    Number(Number),

    /// A string.
    String(String),

    /// An ordered collection, fixed-size or growable.
    Seq(Vec<Dynamic>),

    /// A keyed collection with unique keys.
    Map(IndexMap<MapKey, Dynamic>),

    /// A pointer layer. `None` is a nil pointer.
    Ref(Option<Arc<Dynamic>>),

    /// A boxed/interface layer. `None` is a nil box.
    Boxed(Option<Box<Dynamic>>),

    /// A host value with no comparison or iteration semantics (a function,
    /// a channel, a handle...).
    Opaque(Opaque),
}

impl Dynamic {
    /// A nil boxed value: what an empty interface slot holds.
    #[must_use]
    pub const fn nil() -> Self {
        Dynamic::Boxed(None)
    }

    /// A nil pointer.
    #[must_use]
    pub const fn nil_ref() -> Self {
        Dynamic::Ref(None)
    }

    /// Wraps `value` in one pointer layer.
    #[must_use]
    pub fn pointer_to(value: impl Into<Dynamic>) -> Self {
        Dynamic::Ref(Some(Arc::new(value.into())))
    }

    /// Wraps `value` in one boxed layer.
    #[must_use]
    pub fn boxed(value: impl Into<Dynamic>) -> Self {
        Dynamic::Boxed(Some(Box::new(value.into())))
    }

    /// An opaque host value, described by its type name.
    #[must_use]
    pub fn opaque(type_name: impl Into<Cow<'static, str>>) -> Self {
        Dynamic::Opaque(Opaque::new(type_name))
    }

    /// Builds a mapping from key/value pairs. Later duplicates of a key win.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<MapKey>,
        V: Into<Dynamic>,
    {
        Dynamic::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Whether this value is one of the two indirection layers.
    #[must_use]
    pub const fn is_indirection(&self) -> bool {
        matches!(self, Dynamic::Ref(_) | Dynamic::Boxed(_))
    }
}

/// A host value the kernel can see but not look into.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Opaque {
    type_name: Cow<'static, str>,
}

impl Opaque {
    /// Creates an opaque value described by `type_name`.
    pub fn new(type_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }

    /// The host's name for the value's type.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// A mapping key.
///
/// Keys are restricted to the hashable scalar domain, so uniqueness is
/// enforced by the map itself. Integer widths are widened to 64 bits.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MapKey {
    /// A boolean key.
    Bool(bool),
    /// A signed integer key.
    Int(i64),
    /// An unsigned integer key.
    Uint(u64),
    /// A string key.
    String(String),
}

impl From<&MapKey> for Dynamic {
    fn from(key: &MapKey) -> Self {
        match key {
            MapKey::Bool(b) => Dynamic::Bool(*b),
            MapKey::Int(i) => Dynamic::Number(Number::I64(*i)),
            MapKey::Uint(u) => Dynamic::Number(Number::U64(*u)),
            MapKey::String(s) => Dynamic::String(s.clone()),
        }
    }
}

macro_rules! impl_map_key {
    ($variant:ident as $wide:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for MapKey {
                fn from(v: $ty) -> Self {
                    MapKey::$variant(v as $wide)
                }
            }
        )*
    };
}

impl_map_key!(Int as i64: i8, i16, i32, i64, isize);
impl_map_key!(Uint as u64: u8, u16, u32, u64, usize);

impl From<bool> for MapKey {
    fn from(v: bool) -> Self {
        MapKey::Bool(v)
    }
}

impl From<String> for MapKey {
    fn from(v: String) -> Self {
        MapKey::String(v)
    }
}

impl From<&str> for MapKey {
    fn from(v: &str) -> Self {
        MapKey::String(v.into())
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Dynamic {
                fn from(v: $ty) -> Self {
                    Dynamic::Number(Number::from(v))
                }
            }
        )*
    };
}

impl_from_primitive!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl From<Number> for Dynamic {
    fn from(v: Number) -> Self {
        Dynamic::Number(v)
    }
}

impl From<bool> for Dynamic {
    fn from(v: bool) -> Self {
        Dynamic::Bool(v)
    }
}

impl From<String> for Dynamic {
    fn from(v: String) -> Self {
        Dynamic::String(v)
    }
}

impl From<&str> for Dynamic {
    fn from(v: &str) -> Self {
        Dynamic::String(v.into())
    }
}

impl From<Opaque> for Dynamic {
    fn from(v: Opaque) -> Self {
        Dynamic::Opaque(v)
    }
}

impl<T: Into<Dynamic>> From<Vec<T>> for Dynamic {
    fn from(v: Vec<T>) -> Self {
        Dynamic::Seq(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Dynamic>, const N: usize> From<[T; N]> for Dynamic {
    fn from(v: [T; N]) -> Self {
        Dynamic::Seq(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Dynamic>> From<&[T]> for Dynamic {
    fn from(v: &[T]) -> Self {
        Dynamic::Seq(v.iter().cloned().map(Into::into).collect())
    }
}

/// `None` becomes a nil boxed value; `Some` is unwrapped without adding a layer.
impl<T: Into<Dynamic>> From<Option<T>> for Dynamic {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Dynamic::nil(),
        }
    }
}

impl<T: Into<Dynamic>> From<Box<T>> for Dynamic {
    fn from(v: Box<T>) -> Self {
        Dynamic::Boxed(Some(Box::new((*v).into())))
    }
}

impl From<Arc<Dynamic>> for Dynamic {
    fn from(v: Arc<Dynamic>) -> Self {
        Dynamic::Ref(Some(v))
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for Dynamic
where
    K: Into<MapKey>,
    V: Into<Dynamic>,
    S: BuildHasher,
{
    fn from(v: HashMap<K, V, S>) -> Self {
        Dynamic::map(v)
    }
}

impl<K, V> From<BTreeMap<K, V>> for Dynamic
where
    K: Into<MapKey>,
    V: Into<Dynamic>,
{
    fn from(v: BTreeMap<K, V>) -> Self {
        Dynamic::map(v)
    }
}

impl<K, V, S> From<IndexMap<K, V, S>> for Dynamic
where
    K: Into<MapKey>,
    V: Into<Dynamic>,
{
    fn from(v: IndexMap<K, V, S>) -> Self {
        Dynamic::map(v)
    }
}

impl<T: Into<Dynamic>> FromIterator<T> for Dynamic {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Dynamic::Seq(iter.into_iter().map(Into::into).collect())
    }
}
