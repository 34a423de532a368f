//! JSON value helpers.
//!
//! Small shape utilities used when massaging loosely structured payloads
//! before they are sent to (or after they are received from) the service.
//! All functions operate on [`serde_json::Value`] trees and mutate in place
//! where the original value is the natural home of the result.

use std::collections::HashMap;

use serde_json::{Map, Value};

/// Whether a value carries no data.
///
/// `Null`, the empty string, the empty array and the empty object are empty;
/// everything else — including `0` and `false` — is not.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Whether a value should be treated as "set" by option-style fields.
///
/// Only `Null` and `false` are falsy here; `0`, the empty string and empty
/// collections all count as truthy.
pub fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

/// Whether a value is a number strictly greater than zero.
pub fn is_positive_number(value: &Value) -> bool {
    value.as_f64().is_some_and(|number| number > 0.0)
}

/// Whether a string contains at least one decimal digit.
pub fn has_number(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// Recursively merge `source` into `target`.
///
/// Object values merge key by key; any other value — arrays included — is
/// overwritten wholesale. Merging an object into a non-object slot replaces
/// the slot with an empty object first. `target` is mutated in place.
pub fn deep_merge(target: &mut Value, source: &Value) {
    let Value::Object(source_map) = source else {
        *target = source.clone();
        return;
    };

    if !target.is_object() {
        *target = Value::Object(Map::new());
    }
    let Value::Object(target_map) = target else {
        unreachable!("target was just replaced with an object");
    };

    for (key, source_value) in source_map {
        if source_value.is_object() {
            let slot = target_map
                .entry(key.clone())
                .or_insert(Value::Object(Map::new()));
            deep_merge(slot, source_value);
        } else {
            target_map.insert(key.clone(), source_value.clone());
        }
    }
}

/// Merge each source into `target`, left to right.
///
/// Later sources win on scalar conflicts.
pub fn deep_merge_all<'a>(target: &mut Value, sources: impl IntoIterator<Item = &'a Value>) {
    for source in sources {
        deep_merge(target, source);
    }
}

/// Remove every object key whose value is empty per [`is_empty`].
///
/// A key is judged before its value is descended into, so an object that only
/// becomes empty by pruning its own children is kept. Array elements are
/// visited but never removed.
pub fn prune_empty(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, nested| !is_empty(nested));
            map.values_mut().for_each(prune_empty);
        }
        Value::Array(items) => items.iter_mut().for_each(prune_empty),
        _ => {}
    }
}

/// Remove every key matching one of `keys`, anywhere in the tree.
pub fn remove_keys(value: &mut Value, keys: &[&str]) {
    match value {
        Value::Object(map) => {
            map.retain(|key, _| !keys.contains(&key.as_str()));
            map.values_mut().for_each(|nested| remove_keys(nested, keys));
        }
        Value::Array(items) => items.iter_mut().for_each(|item| remove_keys(item, keys)),
        _ => {}
    }
}

/// Flag repeated items in `items`, keyed by the value under `key`.
///
/// On a repeat both the first occurrence and the repeat get a
/// `"duplicate": true` member. Items that are not objects, or that lack
/// `key`, are skipped. Returns whether any duplicate was found.
pub fn mark_duplicates(key: &str, items: &mut [Value]) -> bool {
    let mut first_seen_at: HashMap<String, usize> = HashMap::new();
    let mut found = false;

    for index in 0..items.len() {
        let Some(dedup_key) = items[index].get(key).map(Value::to_string) else {
            continue;
        };

        match first_seen_at.get(&dedup_key) {
            Some(&original) => {
                found = true;
                flag_duplicate(&mut items[original]);
                flag_duplicate(&mut items[index]);
            }
            None => {
                first_seen_at.insert(dedup_key, index);
            }
        }
    }

    found
}

fn flag_duplicate(item: &mut Value) {
    if let Value::Object(map) = item {
        map.insert("duplicate".to_string(), Value::Bool(true));
    }
}
