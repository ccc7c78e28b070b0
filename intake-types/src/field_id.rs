use std::fmt;

/// Identifier of a single questionnaire field, e.g. `"founder_name"`.
///
/// Used as keys in `AnswerRecord`. The set of valid identifiers is fixed by
/// the `IntakeDefinition` at construction time.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldId {
    id: String,
}

impl FieldId {
    /// Create a new field identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl From<&str> for FieldId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FieldId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for FieldId {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}
