use crate::{FieldId, Question};

/// The top-level structure containing all questions and metadata for an
/// intake questionnaire.
///
/// A definition is presentation-agnostic immutable configuration: built once
/// at startup and handed to whichever front-end walks the user through it.
#[derive(Debug, Clone)]
pub struct IntakeDefinition {
    /// Title shown above the questionnaire.
    title: String,

    /// All questions, in traversal order.
    questions: Vec<Question>,

    /// Optional message shown after successful submission.
    completion_message: Option<String>,

    /// Optional prefix for the submission subject line, combined with the
    /// value of `subject_field`, e.g. "New Application: Acme".
    subject_prefix: Option<String>,

    /// The field whose value completes the subject line.
    subject_field: Option<FieldId>,

    /// The field whose value is sent as the submission's `from_name`.
    from_field: Option<FieldId>,
}

impl IntakeDefinition {
    /// Create a new definition with the given questions.
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            questions,
            completion_message: None,
            subject_prefix: None,
            subject_field: None,
            from_field: None,
        }
    }

    /// Set the message shown after successful submission.
    pub fn with_completion_message(mut self, message: impl Into<String>) -> Self {
        self.completion_message = Some(message.into());
        self
    }

    /// Set the subject line as `prefix` followed by the named field's value.
    pub fn with_subject(mut self, prefix: impl Into<String>, field: impl Into<FieldId>) -> Self {
        self.subject_prefix = Some(prefix.into());
        self.subject_field = Some(field.into());
        self
    }

    /// Set the field whose value is sent as `from_name`.
    pub fn with_from_field(mut self, field: impl Into<FieldId>) -> Self {
        self.from_field = Some(field.into());
        self
    }

    /// Get the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the questions in traversal order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get a question by index.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Get a question by field identifier.
    pub fn question_by_id(&self, id: &FieldId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Get the completion message, if any.
    pub fn completion_message(&self) -> Option<&str> {
        self.completion_message.as_deref()
    }

    /// Get the subject prefix and field, if configured.
    pub fn subject(&self) -> Option<(&str, &FieldId)> {
        match (&self.subject_prefix, &self.subject_field) {
            (Some(prefix), Some(field)) => Some((prefix, field)),
            _ => None,
        }
    }

    /// Get the `from_name` field, if configured.
    pub fn from_field(&self) -> Option<&FieldId> {
        self.from_field.as_ref()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the definition has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
