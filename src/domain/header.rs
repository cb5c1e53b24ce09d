//! Header projection: a note without its content.

use crate::domain::NoteId;
use chrono::{DateTime, Utc};

/// Read-only view of a persisted note with the content elided.
///
/// Returned by listing and search so that note bodies never leave the store
/// for browse-style queries. Having no content field at all makes the
/// projection contract structural: there is nothing to accidentally populate.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteHeader {
    id: NoteId,
    title: String,
    tags: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NoteHeader {
    pub(crate) fn from_parts(
        id: NoteId,
        title: String,
        tags: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            tags,
            created_at,
            updated_at,
        }
    }

    /// Returns the note's id.
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the comma-separated tag list.
    pub fn tags(&self) -> &str {
        &self.tags
    }

    /// Returns when the note was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the note was last saved.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
