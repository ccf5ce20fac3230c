//! Depth limiting for serialized payloads.
//!
//! The root value sits at depth 0. An object member or array element that is
//! itself an object or array is dropped once it would sit deeper than the
//! limit. Scalars are kept at every depth.

use serde_json::Value;

/// Remove every container nested deeper than `max_depth` below the root.
pub fn prune(value: &mut Value, max_depth: usize) {
    prune_at(value, 0, max_depth);
}

fn prune_at(value: &mut Value, depth: usize, max_depth: usize) {
    let child_depth = depth + 1;
    match value {
        Value::Object(map) => {
            map.retain(|_, child| !(is_container(child) && child_depth > max_depth));
            for child in map.values_mut() {
                prune_at(child, child_depth, max_depth);
            }
        }
        Value::Array(items) => {
            items.retain(|child| !(is_container(child) && child_depth > max_depth));
            for child in items.iter_mut() {
                prune_at(child, child_depth, max_depth);
            }
        }
        _ => {}
    }
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}
