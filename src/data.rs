use serde::{Deserialize, Deserializer};

pub mod student;

#[derive(Deserialize)]
pub struct IdForm {
    pub id: student::StudentId,
}

/// Backends disagree on whether ids and ages are JSON strings or numbers, so accept both and keep the text.
pub fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Signed(n) => n.to_string(),
        Raw::Unsigned(n) => n.to_string(),
    })
}
