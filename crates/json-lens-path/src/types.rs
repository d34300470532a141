//! Type definitions for node paths.

/// One step of a node path.
///
/// Either an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeSegment {
    /// Object-key access.
    Key(String),
    /// Array-index access.
    Index(usize),
}

/// A node path. The empty path addresses the document root.
pub type NodePath = Vec<NodeSegment>;

impl NodeSegment {
    /// Object-key segment.
    pub fn key(key: impl Into<String>) -> Self {
        NodeSegment::Key(key.into())
    }

    /// Array-index segment.
    pub fn index(index: usize) -> Self {
        NodeSegment::Index(index)
    }

    /// Whether this segment indexes into an array.
    pub fn is_index(&self) -> bool {
        matches!(self, NodeSegment::Index(_))
    }
}

impl From<&str> for NodeSegment {
    fn from(key: &str) -> Self {
        NodeSegment::Key(key.to_string())
    }
}

impl From<String> for NodeSegment {
    fn from(key: String) -> Self {
        NodeSegment::Key(key)
    }
}

impl From<usize> for NodeSegment {
    fn from(index: usize) -> Self {
        NodeSegment::Index(index)
    }
}
