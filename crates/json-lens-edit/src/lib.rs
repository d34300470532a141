//! Path-addressed edit sessions over JSON documents.
//!
//! This crate orchestrates [`json_lens_path`] against a document store, a
//! selection store, and a best-effort sync channel: it derives the displayed
//! subtree for the current selection, holds the user's draft while editing,
//! and on commit writes the parsed draft back at the selected path,
//! re-serializing the whole document with 2-space indentation.
//!
//! # Example
//!
//! ```
//! use json_lens_edit::{DocumentStore, EditSession, MemoryDocumentStore, MemorySelectionStore, RecordingSyncChannel};
//! use json_lens_path::NodeSegment;
//!
//! let document = MemoryDocumentStore::new(r#"{"user": {"name": "Ada"}}"#);
//! let selection = MemorySelectionStore::new(Some(vec![
//!     NodeSegment::key("user"),
//!     NodeSegment::key("name"),
//! ]));
//! let sync = RecordingSyncChannel::new();
//!
//! let mut session = EditSession::new(document.clone(), selection, sync.clone());
//! assert_eq!(session.draft(), "\"Ada\"");
//! assert_eq!(session.path_text(), "$[\"user\"][\"name\"]");
//!
//! session.begin_edit();
//! session.set_draft("\"Grace\"");
//! let receipt = session.commit().unwrap();
//!
//! assert_eq!(document.text(), receipt.text);
//! assert_eq!(sync.notifications(), vec![receipt.text]);
//! ```

pub mod store;
pub use store::{
    DocumentStore, MemoryDocumentStore, MemorySelectionStore, RecordingSyncChannel,
    SelectionStore, SyncChannel, SyncChannelError,
};

pub mod session;
pub use session::{subtree_text, CommitError, CommitReceipt, EditSession, SessionMode};
