//! Collaborator interfaces for the edit session.
//!
//! The session reaches its document, selection, and sync channel only
//! through these traits, injected at construction. The in-memory
//! implementations are cheap cloneable handles over shared state, so a test
//! (or a host application) can keep one handle and observe what the session
//! does through another.

use std::cell::RefCell;
use std::rc::Rc;

use json_lens_path::NodePath;
use thiserror::Error;

/// Holder of the current document as serialized JSON text.
pub trait DocumentStore {
    /// The current document text.
    fn text(&self) -> String;

    /// Replace the document text in full.
    fn set_text(&mut self, text: &str);
}

/// Source of the currently selected node path.
pub trait SelectionStore {
    /// The selected path. `None` means no selection; readers treat that as
    /// the root path.
    fn selected_path(&self) -> Option<NodePath>;
}

/// Secondary notify-on-write channel kept in lockstep with the document
/// store. Best-effort: a failure here never rolls back the primary write.
pub trait SyncChannel {
    fn notify(&mut self, text: &str) -> Result<(), SyncChannelError>;
}

/// Failure of the secondary sync channel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("sync channel rejected update: {reason}")]
pub struct SyncChannelError {
    pub reason: String,
}

impl SyncChannelError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Document store backed by an in-memory string.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    text: Rc<RefCell<String>>,
}

impl MemoryDocumentStore {
    pub fn new(text: &str) -> Self {
        Self {
            text: Rc::new(RefCell::new(text.to_string())),
        }
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_text(&mut self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }
}

/// Selection store backed by an in-memory path.
#[derive(Debug, Clone, Default)]
pub struct MemorySelectionStore {
    path: Rc<RefCell<Option<NodePath>>>,
}

impl MemorySelectionStore {
    pub fn new(path: Option<NodePath>) -> Self {
        Self {
            path: Rc::new(RefCell::new(path)),
        }
    }

    /// Change the selection. Visible through every clone of this handle.
    pub fn select(&self, path: Option<NodePath>) {
        *self.path.borrow_mut() = path;
    }
}

impl SelectionStore for MemorySelectionStore {
    fn selected_path(&self) -> Option<NodePath> {
        self.path.borrow().clone()
    }
}

/// Sync channel that records every notification it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingSyncChannel {
    notifications: Rc<RefCell<Vec<String>>>,
}

impl RecordingSyncChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything notified so far, oldest first.
    pub fn notifications(&self) -> Vec<String> {
        self.notifications.borrow().clone()
    }
}

impl SyncChannel for RecordingSyncChannel {
    fn notify(&mut self, text: &str) -> Result<(), SyncChannelError> {
        self.notifications.borrow_mut().push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_lens_path::NodeSegment;

    #[test]
    fn test_document_store_handles_share_state() {
        let store = MemoryDocumentStore::new("{}");
        let mut writer = store.clone();
        writer.set_text("[1]");
        assert_eq!(store.text(), "[1]");
    }

    #[test]
    fn test_selection_store_handles_share_state() {
        let store = MemorySelectionStore::default();
        assert_eq!(store.selected_path(), None);
        let handle = store.clone();
        handle.select(Some(vec![NodeSegment::key("a")]));
        assert_eq!(store.selected_path(), Some(vec![NodeSegment::key("a")]));
    }

    #[test]
    fn test_recording_sync_channel() {
        let channel = RecordingSyncChannel::new();
        let mut sender = channel.clone();
        sender.notify("one").unwrap();
        sender.notify("two").unwrap();
        assert_eq!(channel.notifications(), vec!["one", "two"]);
    }
}
