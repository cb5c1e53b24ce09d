//! List command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::{open_store, truncate_str};
use crate::cli::ListArgs;
use crate::cli::output::{HeaderListing, Output, OutputFormat};
use crate::domain::NoteHeader;
use crate::store::{NoteStore, SeedNote};

pub fn handle_list(
    args: &ListArgs,
    db_path: Option<&Path>,
    seeds: Option<&[SeedNote]>,
) -> Result<()> {
    let store = open_store(db_path, seeds)?;

    let headers = store.list_headers().context("failed to list notes")?;

    print_headers(&headers, args.format)
}

/// Prints a header listing in the requested format.
///
/// Shared by `ls` and `search`: both produce the same projection.
pub(crate) fn print_headers(headers: &[NoteHeader], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if headers.is_empty() {
                println!("No notes found.");
            } else {
                println!("{:<6}  {:<40}  {:<24}  {:<16}", "ID", "Title", "Tags", "Updated");
                println!(
                    "{:<6}  {:<40}  {:<24}  {:<16}",
                    "------",
                    "----------------------------------------",
                    "------------------------",
                    "----------------"
                );

                for header in headers {
                    println!(
                        "{:<6}  {:<40}  {:<24}  {:<16}",
                        header.id(),
                        truncate_str(header.title(), 40),
                        truncate_str(header.tags(), 24),
                        header.updated_at().format("%Y-%m-%d %H:%M")
                    );
                }

                println!();
                println!("{} note(s)", headers.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<HeaderListing> = headers
                .iter()
                .map(|h| HeaderListing {
                    id: h.id().as_i64(),
                    title: h.title().to_string(),
                    tags: h.tags().to_string(),
                    created_at: h.created_at(),
                    updated_at: h.updated_at(),
                })
                .collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
