//! Canonical bracket notation for node paths.

use crate::types::NodeSegment;

/// Render a path in canonical bracket notation.
///
/// The root is `$`; each segment appends one bracketed chunk with no
/// separator: indexes as bare digits (`[0]`), keys double-quoted
/// (`["key"]`).
///
/// Embedded double quotes in keys are rendered verbatim, not escaped. Such
/// a rendering is ambiguous and will not survive [`parse_node_path`]; this
/// is a documented limitation of the notation.
///
/// [`parse_node_path`]: crate::parse_node_path
///
/// # Example
///
/// ```
/// use json_lens_path::{path_to_string, NodeSegment};
///
/// assert_eq!(path_to_string(&[]), "$");
/// let path = [NodeSegment::key("a"), NodeSegment::index(0), NodeSegment::key("b")];
/// assert_eq!(path_to_string(&path), "$[\"a\"][0][\"b\"]");
/// ```
pub fn path_to_string(path: &[NodeSegment]) -> String {
    let mut out = String::from("$");
    for segment in path {
        match segment {
            NodeSegment::Key(key) => {
                out.push_str("[\"");
                out.push_str(key);
                out.push_str("\"]");
            }
            NodeSegment::Index(index) => {
                out.push('[');
                out.push_str(&index.to_string());
                out.push(']');
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root() {
        assert_eq!(path_to_string(&[]), "$");
    }

    #[test]
    fn test_single_key() {
        assert_eq!(path_to_string(&["customer".into()]), "$[\"customer\"]");
    }

    #[test]
    fn test_single_index() {
        assert_eq!(path_to_string(&[12.into()]), "$[12]");
    }

    #[test]
    fn test_mixed_segments() {
        let path = [
            NodeSegment::key("a"),
            NodeSegment::index(0),
            NodeSegment::key("b"),
        ];
        assert_eq!(path_to_string(&path), "$[\"a\"][0][\"b\"]");
    }

    #[test]
    fn test_key_that_looks_numeric() {
        // A string key of digits still renders quoted.
        assert_eq!(path_to_string(&["0".into()]), "$[\"0\"]");
    }

    #[test]
    fn test_embedded_quote_rendered_verbatim() {
        assert_eq!(path_to_string(&["a\"b".into()]), "$[\"a\"b\"]");
    }

    #[test]
    fn test_pure_function() {
        let path = [NodeSegment::key("a"), NodeSegment::index(1)];
        assert_eq!(path_to_string(&path), path_to_string(&path));
    }
}
