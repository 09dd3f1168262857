//! Two-step delete confirmation

/// Pending delete intent for a record
///
/// Clicking delete calls [`request`](Self::request), which only opens the
/// prompt. The record is handed to the deletion callback by
/// [`confirm`](Self::confirm), exactly once; [`cancel`](Self::cancel)
/// drops the intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteConfirmation<T> {
    Closed,
    Prompting(T),
}

impl<T> Default for DeleteConfirmation<T> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<T> DeleteConfirmation<T> {
    /// Open the prompt for `record`, replacing any earlier pending intent
    pub fn request(&mut self, record: T) {
        *self = Self::Prompting(record);
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Prompting(_))
    }

    /// Record awaiting confirmation
    #[must_use]
    pub const fn pending(&self) -> Option<&T> {
        match self {
            Self::Prompting(record) => Some(record),
            Self::Closed => None,
        }
    }

    /// Close the prompt without side effects
    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }

    /// Close the prompt and pass the record to `on_delete`.
    ///
    /// Returns whether the callback ran. Does nothing when no prompt is open.
    pub fn confirm(&mut self, on_delete: impl FnOnce(T)) -> bool {
        match std::mem::replace(self, Self::Closed) {
            Self::Prompting(record) => {
                on_delete(record);
                true
            }
            Self::Closed => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_never_invokes_callback() {
        let mut calls = 0;
        let mut prompt = DeleteConfirmation::default();
        prompt.request("note-1");
        prompt.cancel();

        assert!(!prompt.confirm(|_| calls += 1));
        assert_eq!(calls, 0);
        assert!(!prompt.is_open());
    }

    #[test]
    fn confirm_invokes_once_with_original_record() {
        let mut deleted = Vec::new();
        let mut prompt = DeleteConfirmation::default();
        prompt.request(String::from("note-1"));
        assert_eq!(prompt.pending().map(String::as_str), Some("note-1"));

        assert!(prompt.confirm(|record| deleted.push(record)));
        assert!(!prompt.confirm(|record| deleted.push(record)));

        assert_eq!(deleted, vec!["note-1".to_string()]);
        assert!(!prompt.is_open());
    }

    #[test]
    fn request_replaces_pending_record() {
        let mut prompt = DeleteConfirmation::default();
        prompt.request(1);
        prompt.request(2);

        let mut seen = None;
        prompt.confirm(|record| seen = Some(record));
        assert_eq!(seen, Some(2));
    }
}
