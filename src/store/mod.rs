//! Note persistence: the store trait, its SQLite implementation, schema,
//! storage location resolution, and seed data.

mod error;
mod location;
mod repository;
mod schema;
mod seed;
mod sqlite;

pub use error::{StoreError, StoreResult};
pub use location::{default_db_path, fallback_db_path};
pub use repository::NoteStore;
pub use schema::{create_schema, get_schema_version};
pub use seed::{SeedNote, default_seed};
pub use sqlite::{SqliteStore, UNTITLED};
