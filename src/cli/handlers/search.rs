//! Search command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::list::print_headers;
use super::open_store;
use crate::cli::SearchArgs;
use crate::store::{NoteStore, SeedNote};

pub fn handle_search(
    args: &SearchArgs,
    db_path: Option<&Path>,
    seeds: Option<&[SeedNote]>,
) -> Result<()> {
    let store = open_store(db_path, seeds)?;

    // A blank query means "no filter": fall through to the full listing
    // instead of handing the store a match-everything pattern.
    let headers = if args.query.trim().is_empty() {
        store.list_headers().context("failed to list notes")?
    } else {
        store
            .search_headers(&args.query)
            .with_context(|| format!("search failed for query: {}", args.query))?
    };

    print_headers(&headers, args.format)
}
