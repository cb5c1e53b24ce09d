//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::NoteId;
use output::OutputFormat;

/// alem - tagged developer notes in SQLite with lazy content loading
#[derive(Parser, Debug)]
#[command(name = "alem", version, about, long_about = None)]
pub struct Cli {
    /// Database file (overrides config file and platform default)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Skip sample-note seeding when the database is empty
    #[arg(long, global = true)]
    pub no_seed: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List note headers, most recently updated first
    #[command(name = "ls")]
    List(ListArgs),

    /// Substring search across titles, content, and tags
    Search(SearchArgs),

    /// Create a new note
    New(NewArgs),

    /// Show a note's full record, content included
    Show(ShowArgs),

    /// Edit a note's title, content, or tags
    Edit(EditArgs),

    /// Delete a note
    #[command(name = "rm")]
    Delete(DeleteArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search query; blank means no filter and lists everything
    pub query: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note title; blank titles are stored as "Untitled"
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Note content
    #[arg(short, long, default_value = "")]
    pub content: String,

    /// Comma-separated tags
    #[arg(long, default_value = "")]
    pub tags: String,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note id
    pub id: NoteId,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note id
    pub id: NoteId,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New content
    #[arg(short, long)]
    pub content: Option<String>,

    /// New comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
}

/// Arguments for the `rm` (delete) command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Note id; deleting an id that does not exist succeeds silently
    pub id: NoteId,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
