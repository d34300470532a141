//! Read and write traversal over JSON documents.

use serde_json::{Map, Value};

use crate::types::NodeSegment;

/// Resolve `path` against `doc`, returning the subtree it addresses.
///
/// Returns `None` as soon as any step fails: the current value is null, a
/// scalar, the wrong container kind for the segment, or the key/index is
/// absent. There are no partial results; display-oriented callers fall back
/// to an empty object.
///
/// # Example
///
/// ```
/// use json_lens_path::{get, NodeSegment};
/// use serde_json::json;
///
/// let doc = json!({"a": [10, 20]});
/// let path = vec![NodeSegment::key("a"), NodeSegment::index(1)];
/// assert_eq!(get(&doc, &path), Some(&json!(20)));
/// assert_eq!(get(&doc, &[NodeSegment::key("missing")]), None);
/// ```
pub fn get<'a>(doc: &'a Value, path: &[NodeSegment]) -> Option<&'a Value> {
    let mut current = doc;
    for segment in path {
        current = match (segment, current) {
            (NodeSegment::Key(key), Value::Object(map)) => map.get(key)?,
            (NodeSegment::Index(index), Value::Array(arr)) => arr.get(*index)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Replace the subtree addressed by `path`, returning the new document.
///
/// The empty path replaces the whole document with `new_value`. Otherwise the
/// result equals `doc` everywhere except along `path`: missing intermediate
/// containers are created (an array when the next segment is an index, an
/// object otherwise), a null or wrong-kind intermediate is replaced by a
/// fresh container of the needed kind, and an index past the end of an array
/// extends it with explicit nulls before the assignment.
///
/// Takes ownership of `doc` as its working copy; the function is total and
/// never fails.
///
/// # Example
///
/// ```
/// use json_lens_path::{set, NodeSegment};
/// use serde_json::json;
///
/// let doc = set(json!({}), &[NodeSegment::key("a"), NodeSegment::index(0)], json!("x"));
/// assert_eq!(doc, json!({"a": ["x"]}));
/// ```
pub fn set(mut doc: Value, path: &[NodeSegment], new_value: Value) -> Value {
    if path.is_empty() {
        return new_value;
    }
    let mut current = &mut doc;
    for segment in &path[..path.len() - 1] {
        current = slot(current, segment);
    }
    *slot(current, &path[path.len() - 1]) = new_value;
    doc
}

/// Step one segment into `current`, normalizing the container so the segment
/// is always addressable. A missing object key is inserted as null; the next
/// step (or the final assignment) overwrites it.
fn slot<'a>(current: &'a mut Value, segment: &NodeSegment) -> &'a mut Value {
    match segment {
        NodeSegment::Key(key) => {
            if !current.is_object() {
                *current = Value::Object(Map::new());
            }
            match current {
                Value::Object(map) => map.entry(key.clone()).or_insert(Value::Null),
                _ => unreachable!(),
            }
        }
        NodeSegment::Index(index) => {
            if !current.is_array() {
                *current = Value::Array(Vec::new());
            }
            match current {
                Value::Array(arr) => {
                    if arr.len() <= *index {
                        arr.resize(index + 1, Value::Null);
                    }
                    &mut arr[*index]
                }
                _ => unreachable!(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodePath;
    use serde_json::json;

    fn path(segments: &[NodeSegment]) -> NodePath {
        segments.to_vec()
    }

    #[test]
    fn test_get_root() {
        let doc = json!({"a": 1});
        assert_eq!(get(&doc, &[]), Some(&doc));
        assert_eq!(get(&json!(42), &[]), Some(&json!(42)));
    }

    #[test]
    fn test_get_object_key() {
        let doc = json!({"foo": "bar"});
        assert_eq!(get(&doc, &["foo".into()]), Some(&json!("bar")));
        assert_eq!(get(&doc, &["missing".into()]), None);
    }

    #[test]
    fn test_get_array_index() {
        let doc = json!([1, 2, 3]);
        assert_eq!(get(&doc, &[0.into()]), Some(&json!(1)));
        assert_eq!(get(&doc, &[2.into()]), Some(&json!(3)));
        assert_eq!(get(&doc, &[3.into()]), None);
    }

    #[test]
    fn test_get_nested() {
        let doc = json!({"a": {"b": [1, {"c": "deep"}]}});
        let p = path(&["a".into(), "b".into(), 1.into(), "c".into()]);
        assert_eq!(get(&doc, &p), Some(&json!("deep")));
    }

    #[test]
    fn test_get_wrong_kind() {
        let doc = json!({"a": 5});
        // Keying into a number, indexing into an object.
        assert_eq!(get(&doc, &["a".into(), "b".into()]), None);
        assert_eq!(get(&doc, &[0.into()]), None);
    }

    #[test]
    fn test_get_through_null() {
        let doc = json!({"a": null});
        assert_eq!(get(&doc, &["a".into()]), Some(&Value::Null));
        assert_eq!(get(&doc, &["a".into(), "b".into()]), None);
    }

    #[test]
    fn test_get_explicit_null_leaf() {
        let doc = json!({"a": null});
        // An explicit null is a value, not a miss.
        assert_eq!(get(&doc, &["a".into()]), Some(&json!(null)));
    }

    #[test]
    fn test_set_root_replaces_document() {
        let doc = json!({"a": 1});
        assert_eq!(set(doc, &[], json!([1, 2])), json!([1, 2]));
    }

    #[test]
    fn test_set_existing_key() {
        let doc = json!({"a": 1, "b": 2});
        let out = set(doc, &["a".into()], json!(99));
        assert_eq!(out, json!({"a": 99, "b": 2}));
    }

    #[test]
    fn test_set_existing_index() {
        let doc = json!([1, 2, 3]);
        let out = set(doc, &[1.into()], json!("x"));
        assert_eq!(out, json!([1, "x", 3]));
    }

    #[test]
    fn test_set_preserves_siblings() {
        let doc = json!({"a": {"b": 1, "c": 2}, "d": [3, 4]});
        let p = path(&["a".into(), "b".into()]);
        let out = set(doc, &p, json!(10));
        assert_eq!(out, json!({"a": {"b": 10, "c": 2}, "d": [3, 4]}));
    }

    #[test]
    fn test_set_creates_object_for_key_segment() {
        let out = set(json!({}), &["a".into(), "b".into()], json!(1));
        assert_eq!(out, json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_set_creates_array_for_index_segment() {
        let out = set(json!({}), &["a".into(), 0.into()], json!("x"));
        assert_eq!(out, json!({"a": ["x"]}));
    }

    #[test]
    fn test_set_gap_fills_with_null() {
        let out = set(json!([]), &[2.into()], json!("x"));
        assert_eq!(out, json!([null, null, "x"]));
    }

    #[test]
    fn test_set_nested_gap_fill() {
        let out = set(json!({"a": [1]}), &["a".into(), 3.into()], json!(4));
        assert_eq!(out, json!({"a": [1, null, null, 4]}));
    }

    #[test]
    fn test_set_replaces_scalar_intermediate() {
        let out = set(json!({"a": 5}), &["a".into(), "b".into()], json!(1));
        assert_eq!(out, json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_set_replaces_null_intermediate() {
        let out = set(json!({"a": null}), &["a".into(), 0.into()], json!(1));
        assert_eq!(out, json!({"a": [1]}));
    }

    #[test]
    fn test_write_then_read() {
        let doc = json!({"x": {"y": [0]}});
        let p = path(&["x".into(), "y".into(), 0.into()]);
        let out = set(doc, &p, json!({"z": true}));
        assert_eq!(get(&out, &p), Some(&json!({"z": true})));
    }

    #[test]
    fn test_set_preserves_key_order() {
        let doc = json!({"z": 1, "a": 2, "m": 3});
        let out = set(doc, &["a".into()], json!(20));
        let keys: Vec<&String> = out.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }
}
