use crate::data::lenient_text;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque record id handed out by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StudentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StudentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient_text(deserializer).map(Self::new)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    #[serde(deserialize_with = "lenient_text")]
    pub age: String,
}

/// The in-progress record bound to the form. `id` is only ever set in edit mode and is kept out of
/// request bodies; updates carry it in the URL instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDraft {
    #[serde(skip_serializing, default)]
    pub id: Option<StudentId>,
    pub name: String,
    pub email: String,
    pub age: String,
}

impl StudentDraft {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Age => &self.age,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Age => self.age = value,
        }
    }
}

impl From<&StudentRecord> for StudentDraft {
    fn from(record: &StudentRecord) -> Self {
        Self {
            id: Some(record.id.clone()),
            name: record.name.clone(),
            email: record.email.clone(),
            age: record.age.clone(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Age,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Age];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Age => "Age",
        }
    }

    /// The form input name, which is also the JSON key.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Age => "age",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Enter student name",
            Self::Email => "Enter email",
            Self::Age => "Enter age",
        }
    }
}
