//! Name-based dispatch for template hosts.

use alloc::string::{String, ToString};

use indexmap::IndexMap;
use kindred::{Dynamic, Number, is_empty, is_true, resolve};

use crate::{Arity, FuncError, debug, general, number, text, trace};

/// A helper callable by name: takes the template arguments in order.
pub type Func = fn(&[Dynamic]) -> Result<Dynamic, FuncError>;

/// Helpers keyed by their template name.
///
/// ```
/// use kindred_funcs::{Dynamic, FuncMap};
///
/// let funcs = FuncMap::standard();
/// let out = funcs.call("yesno", &["on".into(), "off".into(), 0.into()]).unwrap();
/// assert_eq!(out.to_string(), "off");
/// ```
#[derive(Clone, Default)]
pub struct FuncMap {
    funcs: IndexMap<String, Func>,
}

impl FuncMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in helper, registered under its template name.
    pub fn standard() -> Self {
        let mut map = Self::new();
        map.register("is_true", call_is_true)
            .register("is_empty", call_is_empty)
            .register("default", call_default)
            .register("yesno", call_yesno)
            .register("coalesce", call_coalesce)
            .register("contains", call_contains)
            .register("contains_any", call_contains_any)
            .register("eq_any", call_eq_any)
            .register("file_size", call_file_size)
            .register("to_string", call_to_string)
            .register("join", call_join)
            .register("repeat", call_repeat)
            .register("mul", call_mul)
            .register("add", call_add)
            .register("sum", call_add)
            .register("div", call_div)
            .register("sub", call_sub)
            .register("pow", call_pow);
        map
    }

    /// Adds or replaces the helper called `name`.
    pub fn register(&mut self, name: impl Into<String>, func: Func) -> &mut Self {
        let name = name.into();
        if self.funcs.insert(name.clone(), func).is_some() {
            debug!(%name, "replaced helper");
        }
        self
    }

    /// The helper called `name`, if any.
    pub fn get(&self, name: &str) -> Option<Func> {
        self.funcs.get(name).copied()
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.funcs.keys().map(String::as_str)
    }

    /// Invokes the helper called `name` with `args`.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn call(&self, name: &str, args: &[Dynamic]) -> Result<Dynamic, FuncError> {
        let func = self.get(name).ok_or_else(|| FuncError::UnknownFunction {
            name: name.to_string(),
        })?;
        trace!(name, argc = args.len(), "calling helper");
        func(args).inspect_err(|err| {
            debug!(name, %err, "helper failed");
        })
    }
}

impl core::fmt::Debug for FuncMap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

fn exactly<'a, const N: usize>(
    func: &'static str,
    args: &'a [Dynamic],
) -> Result<&'a [Dynamic; N], FuncError> {
    args.try_into().map_err(|_| FuncError::Arity {
        func,
        expected: Arity::Exactly(N),
        got: args.len(),
    })
}

fn at_least(func: &'static str, min: usize, args: &[Dynamic]) -> Result<(), FuncError> {
    if args.len() < min {
        return Err(FuncError::Arity {
            func,
            expected: Arity::AtLeast(min),
            got: args.len(),
        });
    }
    Ok(())
}

fn call_is_true(args: &[Dynamic]) -> Result<Dynamic, FuncError> {
    let [value] = exactly::<1>("is_true", args)?;
    Ok(is_true(value).into())
}

fn call_is_empty(args: &[Dynamic]) -> Result<Dynamic, FuncError> {
    let [value] = exactly::<1>("is_empty", args)?;
    Ok(is_empty(value).into())
}

fn call_default(args: &[Dynamic]) -> Result<Dynamic, FuncError> {
    let [fallback, value] = exactly::<2>("default", args)?;
    Ok(general::default(fallback.clone(), value.clone()))
}

fn call_yesno(args: &[Dynamic]) -> Result<Dynamic, FuncError> {
    let [yes, no, value] = exactly::<3>("yesno", args)?;
    Ok(general::yesno(value, yes.clone(), no.clone()))
}

fn call_coalesce(args: &[Dynamic]) -> Result<Dynamic, FuncError> {
    Ok(general::coalesce(args.iter().cloned()))
}

fn call_contains(args: &[Dynamic]) -> Result<Dynamic, FuncError> {
    at_least("contains", 1, args)?;
    let (source, targets) = args.split_at(1);
    Ok(general::contains(&source[0], targets).into())
}

fn call_contains_any(args: &[Dynamic]) -> Result<Dynamic, FuncError> {
    at_least("contains_any", 1, args)?;
    let (source, targets) = args.split_at(1);
    Ok(general::contains_any(&source[0], targets).into())
}

fn call_eq_any(args: &[Dynamic]) -> Result<Dynamic, FuncError> {
    at_least("eq_any", 1, args)?;
    let (value, candidates) = args.split_at(1);
    Ok(general::eq_any(&value[0], candidates).into())
}

fn call_file_size(args: &[Dynamic]) -> Result<Dynamic, FuncError> {
    let [value] = exactly::<1>("file_size", args)?;
    Ok(general::file_size(value).into())
}

fn call_to_string(args: &[Dynamic]) -> Result<Dynamic, FuncError> {
    let [value] = exactly::<1>("to_string", args)?;
    Ok(text::to_string(value).into())
}

fn call_join(args: &[Dynamic]) -> Result<Dynamic, FuncError> {
    at_least("join", 1, args)?;
    let (separator, values) = args.split_at(1);
    let Dynamic::String(separator) = resolve(&separator[0]).value() else {
        return Err(FuncError::Argument {
            func: "join",
            index: 0,
            reason: "separator must be a string",
        });
    };
    Ok(text::join(separator, values).into())
}

fn call_repeat(args: &[Dynamic]) -> Result<Dynamic, FuncError> {
    let [count, value] = exactly::<2>("repeat", args)?;
    let count = repeat_count(count).ok_or(FuncError::Argument {
        func: "repeat",
        index: 0,
        reason: "count must be a non-negative integer",
    })?;
    let repeated = text::repeat(count, value).ok_or(FuncError::Argument {
        func: "repeat",
        index: 0,
        reason: "count too large",
    })?;
    Ok(repeated.into())
}

fn repeat_count(value: &Dynamic) -> Option<usize> {
    let Dynamic::Number(n) = resolve(value).value() else {
        return None;
    };
    let count = n.to_f64();
    if count.fract() != 0.0 || count < 0.0 || count >= usize::MAX as f64 {
        return None;
    }
    Some(count as usize)
}

macro_rules! call_arithmetic {
    ($($name:ident => $func:ident),* $(,)?) => {
        $(
            fn $name(args: &[Dynamic]) -> Result<Dynamic, FuncError> {
                let result = number::$func(args)?;
                Ok(Dynamic::Number(Number::F64(result)))
            }
        )*
    };
}

call_arithmetic! {
    call_mul => mul,
    call_add => add,
    call_div => div,
    call_sub => sub,
    call_pow => pow,
}
