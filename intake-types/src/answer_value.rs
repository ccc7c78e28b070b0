/// A single answer value held in an `AnswerRecord`.
///
/// Text-like questions (single-line, email, multi-line, single select) store
/// `Text`; multi-select questions store `Selection`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    /// A free-text or single-choice value.
    Text(String),

    /// The chosen options of a multi-select question.
    Selection(Vec<String>),
}

impl AnswerValue {
    /// The empty value for a text-like question.
    pub fn empty_text() -> Self {
        Self::Text(String::new())
    }

    /// The empty value for a multi-select question.
    pub fn empty_selection() -> Self {
        Self::Selection(Vec::new())
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Selection(_) => None,
        }
    }

    /// Try to get this value as a selection slice.
    pub fn as_selection(&self) -> Option<&[String]> {
        match self {
            Self::Selection(choices) => Some(choices),
            Self::Text(_) => None,
        }
    }

    /// Check if the value is empty (blank text or no selections).
    ///
    /// Whitespace-only text counts as empty, matching the wizard's
    /// trimmed-non-empty validation rule.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::Selection(choices) => choices.is_empty(),
        }
    }

    /// Number of characters for text values, used for max-length checks.
    /// Selections have no length limit and report 0.
    pub fn len(&self) -> usize {
        match self {
            Self::Text(s) => s.chars().count(),
            Self::Selection(_) => 0,
        }
    }

    /// Render the value as a flat string for submission payloads.
    ///
    /// Multi-select values are joined with `", "` before sending.
    pub fn to_flat_string(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Selection(choices) => choices.join(", "),
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(choices: Vec<String>) -> Self {
        Self::Selection(choices)
    }
}
