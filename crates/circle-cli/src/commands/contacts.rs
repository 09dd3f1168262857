use std::path::Path;

use circle_core::search::filter_contacts;

use crate::commands::common::{
    contact_to_list_item, format_contact_lines, load_local_snapshot, ContactListItem,
};
use crate::error::CliError;

pub async fn run_contacts(
    query: Option<&str>,
    as_json: bool,
    db_path: &Path,
) -> Result<(), CliError> {
    let snapshot = load_local_snapshot(db_path).await?;
    let contacts = filter_contacts(&snapshot.contacts, query.unwrap_or_default());

    if as_json {
        let json_items = contacts
            .iter()
            .map(|contact| contact_to_list_item(contact, &snapshot))
            .collect::<Vec<ContactListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
        return Ok(());
    }

    if contacts.is_empty() {
        println!("No contacts found.");
        return Ok(());
    }

    for line in format_contact_lines(&contacts) {
        println!("{line}");
    }
    Ok(())
}
