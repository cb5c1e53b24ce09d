//! NoteStore trait: the seam between the persistence layer and its callers.

use crate::domain::{Note, NoteHeader, NoteId};
use crate::store::StoreResult;

/// Durable CRUD and search over the note collection.
///
/// Reads come in two modes: header-only (`list_headers`, `search_headers`)
/// and full (`get`). Header reads never load note content, which keeps
/// memory and I/O bounded however large the bodies grow; callers fetch a
/// full record only when one specific note is actually needed.
///
/// Every operation is a blocking call that completes before returning. The
/// store keeps no state between calls beyond the storage handle itself:
/// no caching of prior reads, no background work, no notifications.
/// Mutations take `&mut self`, so sharing a store across threads requires
/// external synchronization (one handle per caller, or a lock around it).
pub trait NoteStore {
    /// Returns headers for every note, most recently updated first.
    ///
    /// The full result set is returned without pagination; acceptable for
    /// the single-user, local-data target and called out here as a boundary
    /// rather than silently worked around.
    fn list_headers(&self) -> StoreResult<Vec<NoteHeader>>;

    /// Loads the complete record, including content.
    ///
    /// Returns `Ok(None)` when the id does not exist; absence is not an
    /// error.
    fn get(&self, id: NoteId) -> StoreResult<Option<Note>>;

    /// Inserts or updates a note, returning its id.
    ///
    /// For a transient note (no id): inserts a new record, assigns a fresh
    /// unique id (also written back into `note`), and persists the note's
    /// own timestamps. For a persisted note: updates `title`, `content`,
    /// and `tags`, refreshes `updated_at` to the current time, and leaves
    /// `created_at` untouched.
    ///
    /// A blank title is coerced to a placeholder before it hits the rows.
    ///
    /// Updating an id that no longer exists matches zero rows and is a
    /// silent no-op; the given id is still returned. This mirrors the
    /// delete semantics and is deliberate, not an oversight.
    fn save(&mut self, note: &mut Note) -> StoreResult<NoteId>;

    /// Removes the note if present (idempotent).
    ///
    /// Deleting a nonexistent id is a no-op, not an error.
    fn delete(&mut self, id: NoteId) -> StoreResult<()>;

    /// Returns headers of notes whose `title`, `content`, or `tags` contain
    /// `query` as a case-insensitive substring, most recently updated first.
    ///
    /// Matching runs store-side over `LIKE '%query%'`: content participates
    /// in the predicate but is never transferred back. Case folding is
    /// SQLite's (ASCII only), and `%`/`_` in the query act as LIKE
    /// wildcards, matching the substring operator's behavior.
    ///
    /// An empty query matches every row; callers wanting "no filter"
    /// semantics should special-case it and use [`list_headers`] instead.
    ///
    /// [`list_headers`]: NoteStore::list_headers
    fn search_headers(&self, query: &str) -> StoreResult<Vec<NoteHeader>>;
}
