use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "circle")]
#[command(about = "Inspect and migrate Circle contacts and notes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to local database file
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one-shot data migrations against the remote store
    Migrate {
        #[command(subcommand)]
        command: MigrateCommands,
    },
    /// Move snapshots between files, the local database and the remote store
    Snapshot {
        #[command(subcommand)]
        command: SnapshotCommands,
    },
    /// List contacts in the local snapshot
    Contacts {
        /// Only show contacts whose name contains this text
        #[arg(short, long)]
        query: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List notes in the local snapshot
    Notes {
        /// Only show notes whose text contains this text
        #[arg(short, long)]
        query: Option<String>,
        /// Only show notes about this contact (ID or name)
        #[arg(short, long, value_name = "CONTACT")]
        contact: Option<String>,
        /// Number of notes to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum MigrateCommands {
    /// Rewrite legacy numeric `{{contact:N}}` references to contact IDs
    ContactRefs {
        /// Report what would change without writing anything
        #[arg(long)]
        dry_run: bool,
        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum SnapshotCommands {
    /// Insert the contacts and notes of a snapshot file into the remote store
    Push {
        /// Snapshot JSON file
        file: PathBuf,
    },
    /// Write the remote contacts and notes to a snapshot file
    Pull {
        /// Snapshot JSON file
        file: PathBuf,
    },
    /// Replace the local snapshot with a snapshot file
    Import {
        /// Snapshot JSON file
        file: PathBuf,
    },
    /// Write the local snapshot to a file
    Export {
        /// Snapshot JSON file
        file: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
