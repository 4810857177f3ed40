//! Conversion from JSON-shaped host data.

use serde_json::Value as Json;

use crate::{Dynamic, MapKey, Number};

impl From<Json> for Dynamic {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Dynamic::nil(),
            Json::Bool(b) => Dynamic::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Dynamic::Number(Number::I64(i))
                } else if let Some(u) = n.as_u64() {
                    Dynamic::Number(Number::U64(u))
                } else {
                    // without arbitrary_precision every JSON number fits one of the three
                    Dynamic::Number(Number::F64(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            Json::String(s) => Dynamic::String(s),
            Json::Array(items) => items.into_iter().collect(),
            Json::Object(entries) => Dynamic::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (MapKey::String(k), Dynamic::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&Json> for Dynamic {
    fn from(json: &Json) -> Self {
        Dynamic::from(json.clone())
    }
}
