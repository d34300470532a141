//! Edit session over a path-addressed view of a JSON document.
//!
//! # Terminology
//!
//! - `Viewing` — the draft mirrors the serialized subtree at the selected
//!   path and follows every document/selection change.
//! - `Editing` — the draft belongs to the user and is decoupled from
//!   upstream changes until commit or cancel.
//!
//! # Overview
//!
//! An [`EditSession`] is a small state machine that cycles between the two
//! modes:
//!
//! 1. While viewing, [`EditSession::refresh`] re-derives the draft from the
//!    document store and selection store.
//! 2. [`EditSession::begin_edit`] seeds the draft and hands it to the user;
//!    [`EditSession::set_draft`] stores keystrokes verbatim.
//! 3. [`EditSession::commit`] parses the draft, writes it at the selected
//!    path, serializes the new document, and pushes the text to the document
//!    store and the sync channel. A parse failure rejects the commit and
//!    stays in `Editing` so nothing is lost.
//! 4. [`EditSession::cancel`] discards the draft and re-derives the view.
//!
//! Every transition runs to completion on the calling thread; the session
//! never holds a reference into the document between calls.

use json_lens_path::{get, path_to_string, set, NodePath, NodeSegment};
use serde_json::Value;
use thiserror::Error;

use crate::store::{DocumentStore, SelectionStore, SyncChannel, SyncChannelError};

/// Which side of the view/edit cycle the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Viewing,
    Editing,
}

/// Commit rejection. The session stays in `Editing` and the draft is kept.
#[derive(Debug, Error)]
pub enum CommitError {
    #[error("draft is not valid JSON")]
    InvalidDraft(#[source] serde_json::Error),
    #[error("document is not valid JSON")]
    InvalidDocument(#[source] serde_json::Error),
}

/// Outcome of a successful commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReceipt {
    /// The serialized document pushed to the store and the sync channel.
    pub text: String,
    /// Failure of the secondary sync notification, if any. The primary
    /// write has already succeeded and is not rolled back.
    pub sync_error: Option<SyncChannelError>,
}

/// The edit-session state machine.
pub struct EditSession<D, S, C> {
    document: D,
    selection: S,
    sync: C,
    mode: SessionMode,
    draft: String,
}

impl<D, S, C> EditSession<D, S, C>
where
    D: DocumentStore,
    S: SelectionStore,
    C: SyncChannel,
{
    /// Create a session in `Viewing` mode and derive the initial draft.
    pub fn new(document: D, selection: S, sync: C) -> Self {
        let mut session = Self {
            document,
            selection,
            sync,
            mode: SessionMode::Viewing,
            draft: String::new(),
        };
        session.refresh();
        session
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// The draft buffer: the serialized subtree while viewing, the user's
    /// pending text while editing.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Canonical bracket notation for the current selection.
    pub fn path_text(&self) -> String {
        path_to_string(&self.path())
    }

    /// Re-derive the draft from the current document and selection.
    ///
    /// Call after the document text or the selection changes. No-op while
    /// editing.
    pub fn refresh(&mut self) {
        if self.mode == SessionMode::Editing {
            return;
        }
        self.draft = self.derived_text();
    }

    /// Enter `Editing`, seeding the draft from the current derived text.
    pub fn begin_edit(&mut self) {
        self.draft = self.derived_text();
        self.mode = SessionMode::Editing;
    }

    /// Replace the draft verbatim. Not validated until commit.
    pub fn set_draft(&mut self, text: &str) {
        self.draft = text.to_string();
    }

    /// Leave `Editing`, discarding the draft and re-deriving the view.
    pub fn cancel(&mut self) {
        self.mode = SessionMode::Viewing;
        self.refresh();
    }

    /// Parse the draft, write it at the selected path, and push the new
    /// document text to the document store and the sync channel.
    ///
    /// On a parse failure of either the draft or the document, nothing is
    /// written, the draft is kept, and the session stays in `Editing`. A
    /// sync-channel failure after the primary write is reported on the
    /// receipt but does not fail the commit.
    pub fn commit(&mut self) -> Result<CommitReceipt, CommitError> {
        let new_value: Value =
            serde_json::from_str(&self.draft).map_err(CommitError::InvalidDraft)?;
        let root: Value =
            serde_json::from_str(&self.document.text()).map_err(CommitError::InvalidDocument)?;

        let path = self.path();
        let new_root = set(root, &path, new_value);
        let text = to_pretty(&new_root);

        self.document.set_text(&text);
        let sync_error = match self.sync.notify(&text) {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(error = %err, "sync channel notify failed after document write");
                Some(err)
            }
        };

        self.mode = SessionMode::Viewing;
        self.refresh();
        tracing::debug!(path = %path_to_string(&path), "committed subtree replacement");
        Ok(CommitReceipt { text, sync_error })
    }

    fn path(&self) -> NodePath {
        // No selection reads as the root path.
        self.selection.selected_path().unwrap_or_default()
    }

    fn derived_text(&self) -> String {
        subtree_text(&self.document.text(), &self.path())
    }
}

/// Pretty-print the subtree of `text` at `path`.
///
/// Falls back to `{}` when the document does not parse or the path does not
/// resolve; a broken display path is not an error state.
pub fn subtree_text(text: &str, path: &[NodeSegment]) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(root) => match get(&root, path) {
            Some(value) => to_pretty(value),
            None => String::from("{}"),
        },
        Err(_) => String::from("{}"),
    }
}

fn to_pretty(value: &Value) -> String {
    // Pretty-printing a `Value` cannot fail; 2-space indentation.
    serde_json::to_string_pretty(value).unwrap_or_else(|_| String::from("{}"))
}
