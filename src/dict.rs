//! Configuration dictionaries and the deep merge used to lay a partial
//! configuration over a default one.

use serde_json::{Map, Value};

/// A JSON-compatible mapping from string keys to values.
pub type ConfigDict = Map<String, Value>;

/// Deep-merge `b` on top of a copy of `a` and return the result.
///
/// Keys of `b` take precedence. Where both sides hold a mapping under the same
/// key the merge recurses; any other value in `b` replaces the one in `a`.
/// Neither input is modified.
///
/// ```
/// use configurable::dict::merge_dict;
/// use serde_json::json;
/// let a = json!({"x": 1, "nested": {"p": 1, "q": 2}});
/// let b = json!({"nested": {"q": 3}, "y": true});
/// let merged = merge_dict(a.as_object().unwrap(), b.as_object().unwrap());
/// assert_eq!(serde_json::Value::Object(merged), json!({"x": 1, "nested": {"p": 1, "q": 3}, "y": true}));
/// ```
pub fn merge_dict(a: &ConfigDict, b: &ConfigDict) -> ConfigDict {
    let mut merged = a.clone();
    merge_dict_in_place(&mut merged, b);
    merged
}

/// Deep-merge `b` into `a`, modifying `a`.
pub fn merge_dict_in_place(a: &mut ConfigDict, b: &ConfigDict) {
    for (key, value) in b {
        if let (Some(Value::Object(inner)), Value::Object(other)) = (a.get_mut(key), value) {
            merge_dict_in_place(inner, other);
            continue;
        }
        a.insert(key.clone(), value.clone());
    }
}

/// True when the dictionary survives a JSON text round trip unchanged.
pub fn is_json_round_trippable(dict: &ConfigDict) -> bool {
    match serde_json::to_string(dict) {
        Ok(text) => serde_json::from_str::<ConfigDict>(&text).is_ok_and(|back| &back == dict),
        Err(_) => false,
    }
}
