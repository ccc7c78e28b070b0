use crate::{AnswerValue, FieldId, IntakeDefinition};

/// Error type for answer record access.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("No such field: {0}")]
    UnknownField(FieldId),
}

/// The accumulated answers for all fields of a questionnaire.
///
/// An ordered mapping from field identifier to value. The key set is fixed
/// at construction from the definition; every field starts out empty and
/// iteration order equals the definition's question order.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerRecord {
    entries: Vec<(FieldId, AnswerValue)>,
}

impl AnswerRecord {
    /// Create a record with one empty entry per question, in question order.
    pub fn for_definition(definition: &IntakeDefinition) -> Self {
        let entries = definition
            .questions()
            .iter()
            .map(|q| (q.id().clone(), q.empty_answer()))
            .collect();
        Self { entries }
    }

    /// Get the value for a field.
    pub fn get(&self, id: &FieldId) -> Option<&AnswerValue> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, value)| value)
    }

    /// Replace the value for a field. Rejects unknown keys: the key set is
    /// schema-driven, not dynamic.
    pub fn set(&mut self, id: &FieldId, value: AnswerValue) -> Result<(), AnswerError> {
        match self.entries.iter_mut().find(|(entry_id, _)| entry_id == id) {
            Some((_, slot)) => {
                *slot = value;
                Ok(())
            }
            None => Err(AnswerError::UnknownField(id.clone())),
        }
    }

    /// Get an iterator over all entries in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &AnswerValue)> {
        self.entries.iter().map(|(id, value)| (id, value))
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a AnswerRecord {
    type Item = (&'a FieldId, &'a AnswerValue);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (FieldId, AnswerValue)>,
        fn(&'a (FieldId, AnswerValue)) -> (&'a FieldId, &'a AnswerValue),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().map(|(id, value)| (id, value))
    }
}
