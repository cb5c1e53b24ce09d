//! New note command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::open_store;
use crate::cli::NewArgs;
use crate::domain::Note;
use crate::store::{NoteStore, SeedNote};

pub fn handle_new(
    args: &NewArgs,
    db_path: Option<&Path>,
    seeds: Option<&[SeedNote]>,
) -> Result<()> {
    let mut store = open_store(db_path, seeds)?;

    let mut note = Note::new(
        args.title.as_str(),
        args.content.as_str(),
        args.tags.as_str(),
    );
    let id = store.save(&mut note).context("failed to save note")?;

    println!("Created note {}", id);
    Ok(())
}
