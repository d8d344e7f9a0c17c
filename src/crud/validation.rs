use crate::data::student::{Field, StudentDraft};
use std::collections::BTreeMap;

/// Per-field messages. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Presence-only: a field fails when it is empty after trimming. No format checks.
pub fn validate(draft: &StudentDraft) -> ValidationErrors {
    ValidationErrors(
        Field::ALL
            .into_iter()
            .filter(|field| draft.field(*field).trim().is_empty())
            .map(|field| (field, format!("{} is required", field.label())))
            .collect(),
    )
}
