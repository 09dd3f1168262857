//! Circle CLI - migration scripts and record inspection from the terminal

mod cli;
mod commands;
mod error;

use clap::Parser;

use crate::cli::{Cli, Commands, MigrateCommands, SnapshotCommands};
use crate::commands::common::resolve_db_path;
use crate::commands::completions::run_completions;
use crate::commands::contacts::run_contacts;
use crate::commands::migrate::run_migrate_contact_refs;
use crate::commands::notes::run_notes;
use crate::commands::snapshot::{run_export, run_import, run_pull, run_push};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("circle=info".parse().expect("valid log directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db_path = resolve_db_path(cli.db_path);

    match cli.command {
        Commands::Migrate {
            command: MigrateCommands::ContactRefs { dry_run, json },
        } => run_migrate_contact_refs(dry_run, json).await?,
        Commands::Snapshot { command } => match command {
            SnapshotCommands::Push { file } => run_push(&file).await?,
            SnapshotCommands::Pull { file } => run_pull(&file).await?,
            SnapshotCommands::Import { file } => run_import(&file, &db_path).await?,
            SnapshotCommands::Export { file } => run_export(&file, &db_path).await?,
        },
        Commands::Contacts { query, json } => {
            run_contacts(query.as_deref(), json, &db_path).await?;
        }
        Commands::Notes {
            query,
            contact,
            limit,
            json,
        } => {
            run_notes(query.as_deref(), contact.as_deref(), limit, json, &db_path).await?;
        }
        Commands::Completions { shell, output } => run_completions(shell, output.as_deref())?,
    }

    Ok(())
}
