//! Conditional, selection and containment helpers.

use alloc::format;
use alloc::string::String;

use kindred::{Dynamic, Number, equal, is_empty, is_true, resolve};

use crate::debug;

pub use kindred::{contains_all as contains, contains_any};

/// `value` if it is meaningful, otherwise `fallback`.
pub fn default(fallback: Dynamic, value: Dynamic) -> Dynamic {
    if is_empty(&value) { fallback } else { value }
}

/// `yes` if `value` is meaningful, otherwise `no`.
pub fn yesno(value: &Dynamic, yes: Dynamic, no: Dynamic) -> Dynamic {
    if is_true(value) { yes } else { no }
}

/// The first meaningful value, or a nil value when there is none.
pub fn coalesce(values: impl IntoIterator<Item = Dynamic>) -> Dynamic {
    values
        .into_iter()
        .find(is_true)
        .unwrap_or_else(Dynamic::nil)
}

/// Whether `value` equals any of `candidates`.
///
/// Candidates that cannot be compared with `value` count as not equal.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn eq_any(value: &Dynamic, candidates: &[Dynamic]) -> bool {
    let needle = resolve(value);
    candidates
        .iter()
        .any(|candidate| match equal(needle, resolve(candidate)) {
            Ok(matched) => matched,
            Err(err) => {
                debug!(%err, "eq_any: skipping candidate that cannot be compared");
                false
            }
        })
}

const UNITS: [&str; 5] = ["KB", "MB", "GB", "TB", "PB"];

/// A human-readable size for a byte count: `10 bytes`, `1.5 KB`, `2 MB`...
///
/// Units step by 1024 and stop at `PB`. One decimal place is kept and a
/// trailing `.0` is dropped. Values that are not numbers yield an empty
/// string.
pub fn file_size(value: &Dynamic) -> String {
    let Dynamic::Number(n) = resolve(value).value() else {
        return String::new();
    };
    let size = n.to_f64();

    let mut scaled = size;
    let mut unit = "bytes";
    for (step, name) in UNITS.iter().enumerate() {
        let threshold = (1u64 << (10 * (step + 1))) as f64;
        if size < threshold {
            break;
        }
        scaled = size / threshold;
        unit = name;
    }

    if !scaled.is_finite() {
        return format!("{} {unit}", Number::F64(scaled));
    }
    let text = format!("{scaled:.1}");
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{text} {unit}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_picks_fallback_for_zero_values() {
        let nok = || Dynamic::from("NOK");
        assert_eq!(default(nok(), Dynamic::from("OK")).to_string(), "OK");
        assert_eq!(default(nok(), Dynamic::from("")).to_string(), "NOK");
        assert_eq!(default(nok(), Dynamic::from(0)).to_string(), "NOK");
        assert_eq!(default(nok(), Dynamic::from(1)).to_string(), "1");
        assert_eq!(default(nok(), Dynamic::from(Vec::<i32>::new())).to_string(), "NOK");
        assert_eq!(default(nok(), Dynamic::from(vec![1, 2, 3])).to_string(), "[1 2 3]");
        assert_eq!(
            default(nok(), Dynamic::map([("x", "y")])).to_string(),
            "map[x:y]"
        );
    }

    #[test]
    fn yesno_follows_truthiness() {
        let pick = |v: Dynamic| yesno(&v, "OK".into(), "NOK".into()).to_string();
        assert_eq!(pick("ok".into()), "OK");
        assert_eq!(pick("".into()), "NOK");
        assert_eq!(pick(1.into()), "OK");
        assert_eq!(pick(0.into()), "NOK");
        assert_eq!(pick(true.into()), "OK");
        assert_eq!(pick(false.into()), "NOK");
    }

    #[test]
    fn coalesce_returns_first_meaningful() {
        let got = coalesce([Dynamic::from(""), Dynamic::from("2"), Dynamic::from("3")]);
        assert_eq!(got.to_string(), "2");
        let got = coalesce([Dynamic::nil(), Dynamic::from(true), Dynamic::nil()]);
        assert_eq!(got.to_string(), "true");
        let got = coalesce([Dynamic::nil(), Dynamic::from(0)]);
        assert!(resolve(&got).is_absent());
    }

    #[test]
    fn eq_any_compares_across_widths() {
        let candidates: [Dynamic; 4] = [1.into(), 2.9.into(), 2.0.into(), 1.2.into()];
        assert!(eq_any(&Dynamic::from(1.2), &candidates));
        assert!(!eq_any(&Dynamic::from(7.2), &candidates));
        assert!(eq_any(&Dynamic::from(2u8), &candidates));
        assert!(eq_any(&Dynamic::from("1"), &[Dynamic::from("1"), Dynamic::from("2")]));
        assert!(!eq_any(&Dynamic::from("1"), &[Dynamic::from(1)]));
        assert!(!eq_any(&Dynamic::from("1"), &[]));
    }

    #[test]
    fn file_sizes() {
        assert_eq!(file_size(&Dynamic::from(10)), "10 bytes");
        assert_eq!(file_size(&Dynamic::from(1023u16)), "1023 bytes");
        assert_eq!(file_size(&Dynamic::from(1024)), "1 KB");
        assert_eq!(file_size(&Dynamic::from(1536.0)), "1.5 KB");
        assert_eq!(file_size(&Dynamic::from(5u64 << 20)), "5 MB");
        assert_eq!(file_size(&Dynamic::from(3u64 << 30)), "3 GB");
        assert_eq!(file_size(&Dynamic::from(1u64 << 40)), "1 TB");
        assert_eq!(file_size(&Dynamic::from(2048u64 << 50)), "2048 PB");
        assert_eq!(file_size(&Dynamic::pointer_to(2048)), "2 KB");
        assert_eq!(file_size(&Dynamic::from("1024")), "");
    }

    #[test]
    fn non_finite_sizes_print_like_numbers() {
        assert_eq!(file_size(&Dynamic::from(f64::INFINITY)), "+Inf PB");
        assert_eq!(file_size(&Dynamic::from(f32::INFINITY)), "+Inf PB");
        assert_eq!(file_size(&Dynamic::from(f64::NEG_INFINITY)), "-Inf bytes");
        assert_eq!(file_size(&Dynamic::from(f64::NAN)), "NaN PB");
    }
}
