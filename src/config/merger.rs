//! Layering of YAML configuration documents.
//!
//! The user-global config is the base and an explicit `--config` file is
//! laid over it.
//!
//! # Merge Rules
//!
//! - Mappings merge key by key
//! - Sequences are replaced whole (`ml_packages` is never concatenated)
//! - A null in the overlay removes the key, restoring the built-in default
//! - Any other overlay value replaces the base value

use serde_yaml::Value;

/// Lay `overlay` over `base`.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut merged = base_map.clone();

            for (key, value) in overlay_map {
                if value.is_null() {
                    merged.remove(key);
                    continue;
                }
                let next = match base_map.get(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => value.clone(),
                };
                merged.insert(key.clone(), next);
            }

            Value::Mapping(merged)
        }
        (_, overlay) => overlay.clone(),
    }
}

/// Merge documents in order; the last one has the highest priority.
pub fn merge_configs(layers: &[Value]) -> Value {
    layers
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, layer| {
            deep_merge(&acc, layer)
        })
}
