use crate::{AnswerValue, FieldId};

/// A single question in an intake questionnaire.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// The field this question's answer is stored under.
    id: FieldId,

    /// The prompt text shown to the user.
    ask: String,

    /// Placeholder / hint text shown while the field is empty.
    placeholder: String,

    /// The kind of question (determines input widget and answer shape).
    kind: InputKind,

    /// Whether an answer is required to move past this question.
    required: bool,

    /// Optional maximum answer length in characters.
    max_length: Option<usize>,

    /// Section label used for display and progress grouping.
    section: String,

    /// Human-readable key used in the flattened submission payload,
    /// e.g. "Founder Name". Defaults to the field id.
    export_name: String,
}

impl Question {
    /// Create a new required question.
    pub fn new(id: impl Into<FieldId>, ask: impl Into<String>, kind: InputKind) -> Self {
        let id = id.into();
        let export_name = id.as_str().to_string();
        Self {
            id,
            ask: ask.into(),
            placeholder: String::new(),
            kind,
            required: true,
            max_length: None,
            section: String::new(),
            export_name,
        }
    }

    /// Set the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Mark this question as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Set the maximum answer length in characters.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Set the section label.
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    /// Set the payload key used when flattening answers for submission.
    pub fn with_export_name(mut self, export_name: impl Into<String>) -> Self {
        self.export_name = export_name.into();
        self
    }

    /// Get the field identifier.
    pub fn id(&self) -> &FieldId {
        &self.id
    }

    /// Get the prompt text.
    pub fn ask(&self) -> &str {
        &self.ask
    }

    /// Get the placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Get the input kind.
    pub fn kind(&self) -> &InputKind {
        &self.kind
    }

    /// Whether an answer is required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Get the maximum answer length, if declared.
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Get the section label.
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Get the payload key for this question.
    pub fn export_name(&self) -> &str {
        &self.export_name
    }

    /// The empty answer matching this question's shape.
    pub fn empty_answer(&self) -> AnswerValue {
        match self.kind {
            InputKind::MultiSelect { .. } => AnswerValue::empty_selection(),
            _ => AnswerValue::empty_text(),
        }
    }
}

/// The kind of question, determining input widget and answer shape.
#[derive(Debug, Clone, PartialEq)]
pub enum InputKind {
    /// Single-line text input.
    Text,

    /// Single-line input validated as `local@domain.tld`.
    Email,

    /// Multi-line text input. The activate key must not advance past these
    /// so embedded newlines can be typed.
    Multiline,

    /// Choose exactly one option.
    Select {
        /// The enumerated choice set.
        options: Vec<String>,
    },

    /// Choose any number of options. Required multi-selects need at least one.
    MultiSelect {
        /// The enumerated choice set.
        options: Vec<String>,
    },
}

impl InputKind {
    /// Build a single-select kind from string-likes.
    pub fn select<S: Into<String>>(options: impl IntoIterator<Item = S>) -> Self {
        Self::Select {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a multi-select kind from string-likes.
    pub fn multi_select<S: Into<String>>(options: impl IntoIterator<Item = S>) -> Self {
        Self::MultiSelect {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if this kind accepts free text.
    pub fn is_textual(&self) -> bool {
        matches!(self, Self::Text | Self::Email | Self::Multiline)
    }

    /// Check if this kind is multi-line (activate must not advance).
    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Multiline)
    }

    /// Get the choice set for select kinds.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::Select { options } | Self::MultiSelect { options } => Some(options),
            _ => None,
        }
    }
}
