//! Contact reference tokens embedded in note text
//!
//! A reference looks like `{{contact:<ref>}}`. Current data uses contact IDs
//! as `<ref>`; the first data format used small integers instead, which are
//! called legacy numeric references here.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::models::Contact;

/// Substring every reference token starts with
pub const CONTACT_TOKEN_PREFIX: &str = "{{contact:";

fn reference_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{\{contact:([^}]+)\}\}").expect("Invalid regex"))
}

pub(crate) fn legacy_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{\{contact:(\d+)\}\}").expect("Invalid regex"))
}

/// Format a reference token for the given contact reference
#[must_use]
pub fn token(reference: &str) -> String {
    format!("{CONTACT_TOKEN_PREFIX}{reference}}}}}")
}

/// All references in `text`, in order of appearance (duplicates kept)
///
/// # Examples
///
/// ```
/// use circle_core::references::find_references;
///
/// let refs = find_references("Lunch with {{contact:a1}} and {{contact:7}}");
/// assert_eq!(refs, vec!["a1", "7"]);
/// ```
#[must_use]
pub fn find_references(text: &str) -> Vec<&str> {
    reference_pattern()
        .captures_iter(text)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
        .collect()
}

/// Legacy numeric references in `text`, as the integers they encode
///
/// Digit runs too large for `usize` are skipped.
#[must_use]
pub fn legacy_references(text: &str) -> Vec<usize> {
    legacy_pattern()
        .captures_iter(text)
        .filter_map(|cap| cap[1].parse().ok())
        .collect()
}

/// Whether `text` contains at least one reference token
#[must_use]
pub fn contains_reference(text: &str) -> bool {
    reference_pattern().is_match(text)
}

/// Replace resolvable reference tokens with contact names for display.
///
/// Tokens whose reference matches no contact ID are kept verbatim.
#[must_use]
pub fn render_with_names(text: &str, contacts: &[Contact]) -> String {
    reference_pattern()
        .replace_all(text, |cap: &Captures<'_>| {
            contacts
                .iter()
                .find(|contact| contact.id.as_str() == &cap[1])
                .map_or_else(|| cap[0].to_string(), |contact| contact.name.clone())
        })
        .into_owned()
}
