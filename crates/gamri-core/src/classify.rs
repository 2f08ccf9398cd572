//! First-match keyword classification.
//!
//! Classification is total and infallible: every record receives exactly one
//! label from the taxonomy, falling back to the default label.

use crate::columns::strip_whitespace;
use crate::record::CaseRecord;
use crate::taxonomy::Taxonomy;

impl Taxonomy {
    /// Concatenate the taxonomy's fields in order and remove all whitespace.
    ///
    /// Missing fields contribute nothing.
    #[must_use]
    pub fn normalized_text(&self, record: &CaseRecord) -> String {
        let joined: String = self
            .fields
            .iter()
            .map(|field| record.text(*field))
            .collect();
        strip_whitespace(&joined)
    }

    /// Label for an already-normalized text.
    ///
    /// Returns the first group, in precedence order, with any keyword
    /// contained in `text`, or the default label.
    #[must_use]
    pub fn classify_text(&self, text: &str) -> &str {
        self.groups
            .iter()
            .find(|group| group.keywords.iter().any(|k| text.contains(k.as_str())))
            .map_or(self.default_label.as_str(), |group| group.label.as_str())
    }

    /// Label for a record.
    ///
    /// A NULL key field yields the default label before any keyword test.
    #[must_use]
    pub fn classify(&self, record: &CaseRecord) -> &str {
        if self.key_field.is_some_and(|key| record.field(key).is_none()) {
            return &self.default_label;
        }
        self.classify_text(&self.normalized_text(record))
    }
}
