use serde_json::Value;

/// Separator joining path segments into a flat key, e.g. `Common::save`.
pub const KEY_SEPARATOR: &str = "::";

/// One flattened leaf of a message document: the `::`-joined path from the
/// document root and the leaf's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafEntry {
    pub key: String,
    pub value: String,
}

impl LeafEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Flatten a message document into its leaf entries, depth-first, in
/// document order (object keys keep their file order via `preserve_order`).
///
/// Objects recurse with the field name as a path segment; arrays recurse
/// with the element's zero-based index as the segment. Empty objects and
/// arrays contribute no entries. String leaves keep their text; other
/// scalars (numbers, booleans, `null`) are carried as their JSON text.
pub fn flatten(document: &Value) -> Vec<LeafEntry> {
    let mut entries = Vec::new();
    flatten_into(document, String::new(), &mut entries);
    entries
}

fn flatten_into(value: &Value, prefix: String, entries: &mut Vec<LeafEntry>) {
    match value {
        Value::Object(map) => {
            for (field, child) in map {
                flatten_into(child, join_key(&prefix, field), entries);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(child, join_key(&prefix, &index.to_string()), entries);
            }
        }
        Value::String(s) => entries.push(LeafEntry {
            key: prefix,
            value: s.clone(),
        }),
        scalar => entries.push(LeafEntry {
            key: prefix,
            value: scalar.to_string(),
        }),
    }
}

fn join_key(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}{}{}", prefix, KEY_SEPARATOR, segment)
    }
}
