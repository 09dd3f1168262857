use circle_core::migrate::{run_contact_reference_migration, MigrationOptions, MigrationReport};

use crate::commands::common::remote_store_from_env;
use crate::error::CliError;

pub async fn run_migrate_contact_refs(dry_run: bool, as_json: bool) -> Result<(), CliError> {
    let store = remote_store_from_env()?;
    let report = run_contact_reference_migration(&store, MigrationOptions { dry_run }).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in format_migration_report(&report) {
            println!("{line}");
        }
    }

    Ok(())
}

pub fn format_migration_report(report: &MigrationReport) -> Vec<String> {
    let verb = if report.dry_run {
        "would rewrite"
    } else {
        "rewritten"
    };
    let mut lines = vec![format!(
        "{} notes scanned, {} {verb}, {} unchanged, {} failed",
        report.scanned,
        report.rewritten,
        report.unchanged,
        report.failed.len()
    )];

    lines.extend(
        report
            .failed
            .iter()
            .map(|note_id| format!("  failed:     note={note_id}")),
    );
    lines.extend(report.unresolved.iter().map(|unresolved| {
        format!(
            "  unresolved: note={} contact={}",
            unresolved.note_id, unresolved.reference
        )
    }));

    lines
}
