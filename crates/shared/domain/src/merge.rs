//! Recursive merge of field maps.

use serde_json::Value;

use crate::record::FieldMap;

/// Merge `patch` into `target` key by key.
///
/// When both sides hold an object under the same key the objects are merged
/// recursively. Any other value in `patch` (scalars, arrays, null) replaces
/// the target value wholesale. Keys absent from `patch` are left untouched.
pub fn deep_merge(target: &mut FieldMap, patch: FieldMap) {
    for (key, incoming) in patch {
        match incoming {
            Value::Object(incoming) => {
                if let Some(Value::Object(existing)) = target.get_mut(&key) {
                    deep_merge(existing, incoming);
                    continue;
                }
                target.insert(key, Value::Object(incoming));
            }
            other => {
                target.insert(key, other);
            }
        }
    }
}
