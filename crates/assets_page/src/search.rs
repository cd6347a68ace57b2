//! Draft text behind the records search box.

use assets_host::SearchMetadata;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Text typed into the search box, which may differ from the applied search until submitted.
pub struct SearchDraft {
    value: String,
}

impl SearchDraft {
    /// Starts a draft from the applied search.
    pub fn from_applied(applied: &SearchMetadata) -> Self {
        Self {
            value: applied.search.clone(),
        }
    }

    /// Current draft text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the draft with what the user typed.
    pub fn edit(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Adopts a newly applied search when it changed and differs from the draft.
    ///
    /// Returns `true` when the draft was replaced.
    pub fn sync_applied(&mut self, previous: &SearchMetadata, next: &SearchMetadata) -> bool {
        if previous.search == next.search || self.value == next.search {
            return false;
        }
        self.value = next.search.clone();
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn applied(text: &str) -> SearchMetadata {
        SearchMetadata {
            search: text.to_string(),
        }
    }

    #[test]
    fn unrelated_deliveries_keep_typed_text() {
        let mut draft = SearchDraft::from_applied(&applied("logo"));
        draft.edit("log");

        assert!(!draft.sync_applied(&applied("logo"), &applied("logo")));
        assert_eq!(draft.value(), "log");
    }

    #[test]
    fn changed_applied_search_replaces_draft() {
        let mut draft = SearchDraft::from_applied(&applied("logo"));
        draft.edit("banner");

        assert!(draft.sync_applied(&applied("logo"), &applied("")));
        assert_eq!(draft.value(), "");
    }
}
