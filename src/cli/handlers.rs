//! Command handlers for the CLI.

mod delete;
mod list;
mod new;
mod search;
mod show_edit;

use anyhow::{Context, Result};
use std::path::Path;

use crate::store::{SeedNote, SqliteStore, default_db_path, fallback_db_path};

// Re-export public items
pub use delete::handle_delete;
pub use list::handle_list;
pub use new::handle_new;
pub use search::handle_search;
pub use show_edit::{handle_edit, handle_show};

// ===========================================
// Shared Utilities
// ===========================================

/// Opens the note store and seeds it when empty.
///
/// With no explicit path, resolves the platform default location; if that
/// directory cannot be created, falls back to the current directory with a
/// warning and continues degraded. An explicitly requested path gets no
/// fallback: failing to open it is the user's problem to resolve.
pub(crate) fn open_store(
    db_path: Option<&Path>,
    seeds: Option<&[SeedNote]>,
) -> Result<SqliteStore> {
    let mut store = match db_path {
        Some(path) => SqliteStore::open(path)
            .with_context(|| format!("failed to open note store at {}", path.display()))?,
        None => {
            let preferred = default_db_path();
            match SqliteStore::open(&preferred) {
                Ok(store) => store,
                Err(err) => {
                    let fallback = fallback_db_path();
                    eprintln!("warning: {err}; falling back to {}", fallback.display());
                    SqliteStore::open(&fallback).with_context(|| {
                        format!("failed to open fallback note store at {}", fallback.display())
                    })?
                }
            }
        }
    };

    if let Some(seeds) = seeds {
        store
            .seed_if_empty(seeds)
            .context("failed to seed sample notes")?;
    }

    Ok(store)
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
