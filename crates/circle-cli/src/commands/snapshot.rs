use std::path::Path;

use circle_core::migrate::{pull_snapshot, push_snapshot};

use crate::commands::common::{
    open_database, read_snapshot_file, remote_store_from_env, write_snapshot_file,
};
use crate::error::CliError;

pub async fn run_push(file: &Path) -> Result<(), CliError> {
    let snapshot = read_snapshot_file(file)?;
    let store = remote_store_from_env()?;
    let report = push_snapshot(&snapshot, &store).await?;

    println!(
        "Pushed {} contacts and {} notes ({} failed)",
        report.contacts_written,
        report.notes_written,
        report.failed.len()
    );
    for id in &report.failed {
        println!("  failed: {id}");
    }
    Ok(())
}

pub async fn run_pull(file: &Path) -> Result<(), CliError> {
    let store = remote_store_from_env()?;
    let snapshot = pull_snapshot(&store).await?;
    write_snapshot_file(file, &snapshot)?;

    println!("{}", file.display());
    Ok(())
}

pub async fn run_import(file: &Path, db_path: &Path) -> Result<(), CliError> {
    let snapshot = read_snapshot_file(file)?;
    let db = open_database(db_path).await?;
    db.save_snapshot(&snapshot).await?;

    tracing::info!(
        "Imported {} contacts and {} notes into {}",
        snapshot.contacts.len(),
        snapshot.notes.len(),
        db_path.display()
    );
    println!(
        "Imported {} contacts and {} notes",
        snapshot.contacts.len(),
        snapshot.notes.len()
    );
    Ok(())
}

pub async fn run_export(file: &Path, db_path: &Path) -> Result<(), CliError> {
    let db = open_database(db_path).await?;
    let snapshot = db.load_snapshot().await?;
    write_snapshot_file(file, &snapshot)?;

    println!("{}", file.display());
    Ok(())
}
