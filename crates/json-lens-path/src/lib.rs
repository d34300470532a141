//! Node path addressing for JSON documents.
//!
//! A node path is an ordered sequence of object-key and array-index segments
//! locating one subtree inside a JSON document. This crate resolves such
//! paths against a [`serde_json::Value`] for reading, rewrites the addressed
//! subtree while leaving the rest of the document untouched, and renders the
//! path in canonical bracket notation for display.
//!
//! # Example
//!
//! ```
//! use json_lens_path::{get, parse_node_path, path_to_string, set, NodeSegment};
//! use serde_json::json;
//!
//! let doc = json!({"customer": {"orders": [{"id": 7}]}});
//!
//! // Address a subtree.
//! let path = vec![
//!     NodeSegment::key("customer"),
//!     NodeSegment::key("orders"),
//!     NodeSegment::index(0),
//! ];
//! assert_eq!(get(&doc, &path), Some(&json!({"id": 7})));
//!
//! // Replace it, keeping everything else.
//! let doc = set(doc, &path, json!({"id": 8}));
//! assert_eq!(doc, json!({"customer": {"orders": [{"id": 8}]}}));
//!
//! // Render and re-parse the canonical notation.
//! let text = path_to_string(&path);
//! assert_eq!(text, "$[\"customer\"][\"orders\"][0]");
//! assert_eq!(parse_node_path(&text).unwrap(), path);
//! ```

mod types;
pub use types::{NodePath, NodeSegment};

mod resolve;
pub use resolve::{get, set};

mod format;
pub use format::path_to_string;

mod parse;
pub use parse::{parse_node_path, NodePathParser, PathParseError};
