//! SQLite-backed note store.


use std::fs;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, params};

use crate::domain::{Note, NoteHeader, NoteId};
use crate::store::seed::SeedNote;
use crate::store::{NoteStore, StoreError, StoreResult, create_schema};

/// Placeholder written when a note is saved with a blank title.
pub const UNTITLED: &str = "Untitled";

/// Columns of the header projection, in row order.
const HEADER_COLUMNS: &str = "id, title, tags, created_at, updated_at";

/// SQLite-backed note store.
///
/// Owns a single connection; every operation is a blocking call serialized
/// by the borrow rules (`&mut self` for mutations). No state survives
/// between calls other than the connection itself.
pub struct SqliteStore {
    pub(crate) conn: Connection,
}

impl SqliteStore {
    /// Opens an in-memory store with the notes schema.
    ///
    /// Useful for tests and benchmarks that don't need persistence.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        create_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Opens or creates the store at the given path.
    ///
    /// Creates parent directories if they don't exist and initializes the
    /// schema on a fresh database. A failure to create the parent directory
    /// is reported as [`StoreError::Init`], which callers may treat as
    /// recoverable by retrying at an alternate location.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Init {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let conn = Connection::open(path)?;
        create_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Returns a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Returns true when the store holds no notes.
    pub fn is_empty(&self) -> StoreResult<bool> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(id) FROM notes", [], |row| row.get(0))?;
        Ok(count == 0)
    }

    /// Inserts the given sample notes, but only when the store is empty.
    ///
    /// Returns the number of notes inserted (zero when the store already
    /// holds data).
    pub fn seed_if_empty(&mut self, seeds: &[SeedNote]) -> StoreResult<usize> {
        if !self.is_empty()? {
            return Ok(0);
        }
        for seed in seeds {
            let mut note = Note::new(&seed.title, &seed.content, &seed.tags);
            self.save(&mut note)?;
        }
        Ok(seeds.len())
    }

    fn query_headers<P: rusqlite::Params>(
        &self,
        sql: &str,
        params: P,
    ) -> StoreResult<Vec<NoteHeader>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut headers = Vec::new();
        for row in rows {
            let (id, title, tags, created_raw, updated_raw) = row?;
            headers.push(NoteHeader::from_parts(
                NoteId::from(id),
                title,
                tags,
                parse_timestamp("created_at", &created_raw)?,
                parse_timestamp("updated_at", &updated_raw)?,
            ));
        }
        Ok(headers)
    }
}

impl NoteStore for SqliteStore {
    fn list_headers(&self) -> StoreResult<Vec<NoteHeader>> {
        self.query_headers(
            &format!("SELECT {HEADER_COLUMNS} FROM notes ORDER BY updated_at DESC"),
            [],
        )
    }

    fn get(&self, id: NoteId) -> StoreResult<Option<Note>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, content, tags, created_at, updated_at FROM notes WHERE id = ?",
        )?;

        let row = stmt.query_row([id.as_i64()], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        });

        let (id_raw, title, content, tags, created_raw, updated_raw) = match row {
            Ok(row) => row,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(StoreError::Database(e)),
        };

        Ok(Some(Note::from_parts(
            NoteId::from(id_raw),
            title,
            content,
            tags,
            parse_timestamp("created_at", &created_raw)?,
            parse_timestamp("updated_at", &updated_raw)?,
        )))
    }

    fn save(&mut self, note: &mut Note) -> StoreResult<NoteId> {
        match note.id() {
            Some(id) => {
                let now = Utc::now();
                // Zero rows affected when the id no longer exists; see
                // NoteStore::save for why that is not an error.
                self.conn.execute(
                    "UPDATE notes SET title = ?1, content = ?2, tags = ?3, updated_at = ?4
                     WHERE id = ?5",
                    params![
                        effective_title(note.title()),
                        note.content(),
                        note.tags(),
                        format_timestamp(now),
                        id.as_i64(),
                    ],
                )?;
                note.touch(now);
                Ok(id)
            }
            None => {
                self.conn.execute(
                    "INSERT INTO notes (title, content, tags, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![
                        effective_title(note.title()),
                        note.content(),
                        note.tags(),
                        format_timestamp(note.created_at()),
                        format_timestamp(note.updated_at()),
                    ],
                )?;
                let id = NoteId::from(self.conn.last_insert_rowid());
                note.assign_id(id);
                Ok(id)
            }
        }
    }

    fn delete(&mut self, id: NoteId) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM notes WHERE id = ?", [id.as_i64()])?;
        Ok(())
    }

    fn search_headers(&self, query: &str) -> StoreResult<Vec<NoteHeader>> {
        let pattern = format!("%{}%", query);
        self.query_headers(
            &format!(
                "SELECT {HEADER_COLUMNS} FROM notes
                 WHERE title LIKE ?1 OR content LIKE ?1 OR tags LIKE ?1
                 ORDER BY updated_at DESC"
            ),
            [pattern],
        )
    }
}

/// Coerces a blank title to the placeholder so titles are never empty at
/// rest. Non-blank titles are stored exactly as given.
fn effective_title(raw: &str) -> &str {
    if raw.trim().is_empty() { UNTITLED } else { raw }
}

/// Encodes a timestamp for storage.
///
/// Fixed-width RFC 3339 (microseconds, Z suffix) so that the textual
/// `ORDER BY updated_at` matches chronological order.
fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(column: &str, raw: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::Corrupt(format!("invalid {column} timestamp '{raw}': {e}")))
}
