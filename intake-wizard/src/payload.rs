use intake_types::{AnswerRecord, IntakeDefinition};

/// Placeholder sent for optional fields the user left blank, so reviewers
/// can tell "skipped" from "lost".
const NOT_PROVIDED: &str = "Not provided";

/// The flattened key-value form of a completed answer record, ready for a
/// submission sink.
///
/// Field order follows the definition. Multi-select answers are joined into
/// a single comma-separated string before sending.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitPayload {
    /// Subject line for the submission email, if the definition declares one.
    pub subject: Option<String>,

    /// Sender display name, if the definition declares a `from` field.
    pub from_name: Option<String>,

    /// Ordered `(export name, flattened value)` pairs, one per question.
    pub fields: Vec<(String, String)>,
}

impl SubmitPayload {
    /// Flatten a record against its definition.
    pub fn build(definition: &IntakeDefinition, answers: &AnswerRecord) -> Self {
        let fields = definition
            .questions()
            .iter()
            .map(|question| {
                let value = answers
                    .get(question.id())
                    .map(|v| v.to_flat_string())
                    .unwrap_or_default();
                let value = if value.trim().is_empty() && !question.is_required() {
                    NOT_PROVIDED.to_string()
                } else {
                    value
                };
                (question.export_name().to_string(), value)
            })
            .collect();

        let subject = definition.subject().map(|(prefix, field)| {
            let value = answers
                .get(field)
                .map(|v| v.to_flat_string())
                .unwrap_or_default();
            format!("{prefix}{value}")
        });

        let from_name = definition
            .from_field()
            .and_then(|field| answers.get(field))
            .map(|v| v.to_flat_string());

        Self {
            subject,
            from_name,
            fields,
        }
    }
}
