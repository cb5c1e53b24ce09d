//! Note struct: the single entity the store persists.

use crate::domain::NoteId;
use chrono::{DateTime, Utc};

/// A titled, tagged block of text.
///
/// `content` is an opaque blob to the store: plain text or a rich-text
/// serialization, never interpreted beyond substring matching in search.
/// `tags` is a free-form comma-separated list with no uniqueness or schema
/// enforcement.
///
/// A note starts transient (`id()` returns `None`) and becomes persistent on
/// its first save, when the store assigns an id and writes it back. Later
/// saves mutate the same record in place.
///
/// # Examples
///
/// ```
/// use alem::domain::Note;
///
/// let note = Note::new("API Design", "Start with the data model.", "design,api");
/// assert!(note.id().is_none());
/// assert_eq!(note.created_at(), note.updated_at());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    id: Option<NoteId>,
    title: String,
    content: String,
    tags: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Note {
    /// Creates a transient, unsaved note.
    ///
    /// Both timestamps are set to the same instant, so a freshly created and
    /// saved note has `created_at == updated_at` at rest.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            tags: tags.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rehydrates a persisted note from its stored fields.
    pub(crate) fn from_parts(
        id: NoteId,
        title: String,
        content: String,
        tags: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            title,
            content,
            tags,
            created_at,
            updated_at,
        }
    }

    /// Returns the store-assigned id, or `None` for an unsaved note.
    pub fn id(&self) -> Option<NoteId> {
        self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the comma-separated tag list.
    pub fn tags(&self) -> &str {
        &self.tags
    }

    /// Returns when the note was created. Immutable after the first save.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the note was last saved.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Replaces the tag list.
    pub fn set_tags(&mut self, tags: impl Into<String>) {
        self.tags = tags.into();
    }

    /// Records the id assigned by the store on first insert.
    pub(crate) fn assign_id(&mut self, id: NoteId) {
        self.id = Some(id);
    }

    /// Refreshes the modification timestamp after a successful update.
    pub(crate) fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}
