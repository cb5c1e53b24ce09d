//! Delete command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::open_store;
use crate::cli::DeleteArgs;
use crate::store::{NoteStore, SeedNote};

pub fn handle_delete(
    args: &DeleteArgs,
    db_path: Option<&Path>,
    seeds: Option<&[SeedNote]>,
) -> Result<()> {
    let mut store = open_store(db_path, seeds)?;

    // Idempotent: a missing id deletes zero rows and still succeeds.
    store
        .delete(args.id)
        .with_context(|| format!("failed to delete note {}", args.id))?;

    println!("Deleted note {}", args.id);
    Ok(())
}
