//! alem - tagged developer notes in SQLite with lazy content loading

pub mod cli;
pub mod domain;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_delete, handle_edit, handle_list, handle_new, handle_search, handle_show},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let db_path = config.db_path(cli.db.as_ref());
    let seeds = if cli.no_seed {
        None
    } else {
        Some(config.seed_notes()?)
    };

    let db_path = db_path.as_deref();
    let seeds = seeds.as_deref();

    match &cli.command {
        Command::List(args) => handle_list(args, db_path, seeds),
        Command::Search(args) => handle_search(args, db_path, seeds),
        Command::New(args) => handle_new(args, db_path, seeds),
        Command::Show(args) => handle_show(args, db_path, seeds),
        Command::Edit(args) => handle_edit(args, db_path, seeds),
        Command::Delete(args) => handle_delete(args, db_path, seeds),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "alem", &mut std::io::stdout());
            Ok(())
        }
    }
}
