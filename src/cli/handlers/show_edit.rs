//! Show and edit command handlers.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::open_store;
use crate::cli::output::{NoteDetail, Output, OutputFormat};
use crate::cli::{EditArgs, ShowArgs};
use crate::store::{NoteStore, SeedNote};

pub fn handle_show(
    args: &ShowArgs,
    db_path: Option<&Path>,
    seeds: Option<&[SeedNote]>,
) -> Result<()> {
    let store = open_store(db_path, seeds)?;

    // The one place full content leaves the store: a single record,
    // loaded on demand.
    let note = store
        .get(args.id)
        .with_context(|| format!("failed to load note {}", args.id))?;

    let Some(note) = note else {
        bail!("note not found: {}", args.id);
    };

    match args.format {
        OutputFormat::Human => {
            println!("{}", note.title());
            if !note.tags().is_empty() {
                println!("Tags: {}", note.tags());
            }
            println!("Created: {}", note.created_at().to_rfc3339());
            println!("Updated: {}", note.updated_at().to_rfc3339());
            println!();
            println!("{}", note.content());
        }
        OutputFormat::Json => {
            let detail = NoteDetail {
                id: args.id.as_i64(),
                title: note.title().to_string(),
                tags: note.tags().to_string(),
                content: note.content().to_string(),
                created_at: note.created_at(),
                updated_at: note.updated_at(),
            };
            println!("{}", serde_json::to_string_pretty(&Output::new(detail))?);
        }
    }

    Ok(())
}

pub fn handle_edit(
    args: &EditArgs,
    db_path: Option<&Path>,
    seeds: Option<&[SeedNote]>,
) -> Result<()> {
    let mut store = open_store(db_path, seeds)?;

    // Check existence up front so the user gets feedback; the store itself
    // treats an update of a missing id as a silent no-op.
    let note = store
        .get(args.id)
        .with_context(|| format!("failed to load note {}", args.id))?;

    let Some(mut note) = note else {
        bail!("note not found: {}", args.id);
    };

    if let Some(title) = &args.title {
        note.set_title(title.as_str());
    }
    if let Some(content) = &args.content {
        note.set_content(content.as_str());
    }
    if let Some(tags) = &args.tags {
        note.set_tags(tags.as_str());
    }

    store.save(&mut note).context("failed to save note")?;

    println!("Updated note {}", args.id);
    Ok(())
}
