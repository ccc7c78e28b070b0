use intake_types::{AnswerRecord, AnswerValue, FieldId, InputKind, IntakeDefinition, Question};
use tracing::{debug, error, warn};

use crate::{SubmitError, SubmitPayload, SubmitSink, is_valid_email};

/// Lifecycle phase of a wizard instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Walking through questions; exactly one is active.
    #[default]
    Editing,

    /// A submission is in flight. User input for the active step is
    /// ignored and the submit control is reported disabled.
    Submitting,

    /// The record was acknowledged. Terminal: no transition leaves this.
    Submitted,
}

/// Which way the last cursor move went. Presentation hint only - front-ends
/// use it to pick a slide-in direction; it never affects wizard logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionHint {
    #[default]
    Forward,
    Backward,
}

/// What an activate keypress (Enter on a single-line field) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Nothing happened: multi-line field, failed validation, or not editing.
    Ignored,

    /// The cursor moved to the next question.
    Advanced,

    /// The wizard is on the last question and valid; the caller should
    /// start a submission.
    SubmitReady,
}

/// A single-active-step questionnaire controller.
///
/// Holds the answer record and cursor, validates the active question, and
/// delivers the flattened record to a [`SubmitSink`] on completion. Each
/// instance owns its state exclusively; create one per intake flow and
/// discard it after [`Phase::Submitted`].
#[derive(Debug)]
pub struct WizardState {
    definition: IntakeDefinition,
    answers: AnswerRecord,
    cursor: usize,
    hint: TransitionHint,
    phase: Phase,
    submit_error: Option<String>,
}

impl WizardState {
    /// Create a wizard at the first question with all answers empty.
    pub fn new(definition: IntakeDefinition) -> Self {
        let answers = AnswerRecord::for_definition(&definition);
        Self {
            definition,
            answers,
            cursor: 0,
            hint: TransitionHint::Forward,
            phase: Phase::Editing,
            submit_error: None,
        }
    }

    /// Get the questionnaire definition.
    pub fn definition(&self) -> &IntakeDefinition {
        &self.definition
    }

    /// Get the collected answers.
    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    /// Get the active question index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the active question.
    pub fn current_question(&self) -> Option<&Question> {
        self.definition.question(self.cursor)
    }

    /// Get the active question's answer.
    pub fn current_answer(&self) -> Option<&AnswerValue> {
        let question = self.current_question()?;
        self.answers.get(question.id())
    }

    /// Check if the cursor is on the last question.
    pub fn at_last_step(&self) -> bool {
        !self.definition.is_empty() && self.cursor == self.definition.len() - 1
    }

    /// One-based progress: `(current, total)`.
    pub fn progress(&self) -> (usize, usize) {
        (self.cursor + 1, self.definition.len())
    }

    /// Get the last transition's direction hint.
    pub fn transition_hint(&self) -> TransitionHint {
        self.hint
    }

    /// Get the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The error from the last failed submission, until the user edits or
    /// retries.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Whether the submit control should be enabled: last question, valid
    /// answer, and no submission in flight or already acknowledged.
    pub fn submit_enabled(&self) -> bool {
        self.phase == Phase::Editing && self.at_last_step() && self.current_is_valid()
    }

    /// Validate the active question's answer.
    ///
    /// Optional questions always pass. Required ones need: a
    /// `local@domain.tld` shape for email kinds, at least one selection for
    /// multi-selects, and a trimmed non-empty value otherwise.
    pub fn current_is_valid(&self) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };
        if !question.is_required() {
            return true;
        }
        let Some(answer) = self.answers.get(question.id()) else {
            return false;
        };
        match question.kind() {
            InputKind::Email => answer.as_str().is_some_and(is_valid_email),
            InputKind::MultiSelect { .. } => !answer.is_empty(),
            _ => !answer.is_empty(),
        }
    }

    /// Move to the next question if the active one validates.
    ///
    /// Clamped at the last index. Returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        if self.phase != Phase::Editing || !self.current_is_valid() {
            return false;
        }
        if self.cursor + 1 >= self.definition.len() {
            return false;
        }
        self.cursor += 1;
        self.hint = TransitionHint::Forward;
        true
    }

    /// Move to the previous question. No validation on the way back.
    ///
    /// Returns whether the cursor moved (no-op at 0).
    pub fn back(&mut self) -> bool {
        if self.phase != Phase::Editing || self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.hint = TransitionHint::Backward;
        true
    }

    /// Update one field's answer.
    ///
    /// Values exceeding the question's declared max length are silently
    /// ignored (the prior value stays). Input is also ignored outside
    /// `Editing`. Editing clears a lingering submission error.
    pub fn set_answer(&mut self, id: &FieldId, value: AnswerValue) {
        if self.phase != Phase::Editing {
            return;
        }
        let Some(question) = self.definition.question_by_id(id) else {
            warn!(field = %id, "ignoring answer for unknown field");
            return;
        };
        if let Some(max) = question.max_length()
            && value.len() > max
        {
            return;
        }
        if let Err(err) = self.answers.set(id, value) {
            warn!(field = %id, %err, "ignoring unstorable answer");
            return;
        }
        self.submit_error = None;
    }

    /// Toggle one choice of a multi-select field on or off.
    pub fn toggle_choice(&mut self, id: &FieldId, choice: &str) {
        let current = match self.answers.get(id) {
            Some(AnswerValue::Selection(choices)) => choices.clone(),
            _ => return,
        };
        let updated = if current.iter().any(|c| c == choice) {
            current.into_iter().filter(|c| c != choice).collect()
        } else {
            let mut choices = current;
            choices.push(choice.to_string());
            choices
        };
        self.set_answer(id, AnswerValue::Selection(updated));
    }

    /// The keyboard "activate" contract (Enter on a single-line field).
    ///
    /// Never fires for multi-line fields, so embedded newlines stay
    /// typeable. Advances when validation passes, or reports
    /// [`Activation::SubmitReady`] on the last question; the caller then
    /// drives [`WizardState::submit`].
    pub fn activate(&mut self) -> Activation {
        if self.phase != Phase::Editing {
            return Activation::Ignored;
        }
        let Some(question) = self.current_question() else {
            return Activation::Ignored;
        };
        if question.kind().is_multiline() || !self.current_is_valid() {
            return Activation::Ignored;
        }
        if self.at_last_step() {
            Activation::SubmitReady
        } else {
            self.advance();
            Activation::Advanced
        }
    }

    /// Flatten the record for delivery.
    pub fn payload(&self) -> SubmitPayload {
        SubmitPayload::build(&self.definition, &self.answers)
    }

    /// Deliver the completed record through the sink.
    ///
    /// Rejected with [`SubmitError::NotReady`] unless the wizard is editing
    /// the last question with a valid answer. One delivery per call, no
    /// automatic retry, no timeout: a hung sink holds the wizard in
    /// `Submitting`. On failure the wizard returns to the last question
    /// with the error exposed and every answer intact.
    pub async fn submit(&mut self, sink: &dyn SubmitSink) -> Result<(), SubmitError> {
        if !self.submit_enabled() {
            return Err(SubmitError::NotReady);
        }
        self.submit_error = None;
        self.phase = Phase::Submitting;
        debug!(questions = self.definition.len(), "submitting intake record");

        let payload = self.payload();
        match sink.submit(&payload).await {
            Ok(()) => {
                self.phase = Phase::Submitted;
                debug!("intake record acknowledged");
                Ok(())
            }
            Err(err) => {
                error!(%err, "intake submission failed");
                self.phase = Phase::Editing;
                self.submit_error = Some(err.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StubSink;

    fn definition() -> IntakeDefinition {
        IntakeDefinition::new(
            "Apply",
            vec![
                Question::new("name", "What is your name?", InputKind::Text)
                    .with_export_name("Name"),
                Question::new("email", "What is your email address?", InputKind::Email)
                    .with_export_name("Email"),
                Question::new("website", "Do you have a website?", InputKind::Text)
                    .with_export_name("Website")
                    .optional(),
                Question::new("problem", "What problem are you solving?", InputKind::Text)
                    .with_export_name("Problem")
                    .with_max_length(20),
                Question::new(
                    "stage",
                    "What is your current stage?",
                    InputKind::select(["Idea", "Prototype", "MVP"]),
                )
                .with_export_name("Stage"),
            ],
        )
    }

    fn wizard() -> WizardState {
        WizardState::new(definition())
    }

    fn filled_wizard_at_last_step() -> WizardState {
        let mut w = wizard();
        w.set_answer(&"name".into(), "Asha".into());
        assert!(w.advance());
        w.set_answer(&"email".into(), "asha@agni.co".into());
        assert!(w.advance());
        assert!(w.advance()); // website is optional
        w.set_answer(&"problem".into(), "soil sensing".into());
        assert!(w.advance());
        w.set_answer(&"stage".into(), "Prototype".into());
        assert!(w.at_last_step());
        w
    }

    #[test]
    fn required_text_needs_trimmed_non_empty() {
        let mut w = wizard();
        assert!(!w.current_is_valid());
        w.set_answer(&"name".into(), "   ".into());
        assert!(!w.current_is_valid());
        w.set_answer(&"name".into(), "Asha".into());
        assert!(w.current_is_valid());
    }

    #[test]
    fn email_step_validates_shape() {
        let mut w = wizard();
        w.set_answer(&"name".into(), "Asha".into());
        w.advance();
        w.set_answer(&"email".into(), "a@b".into());
        assert!(!w.current_is_valid());
        w.set_answer(&"email".into(), "a@b.co".into());
        assert!(w.current_is_valid());
    }

    #[test]
    fn optional_question_passes_empty() {
        let mut w = wizard();
        w.set_answer(&"name".into(), "Asha".into());
        w.advance();
        w.set_answer(&"email".into(), "a@b.co".into());
        w.advance();
        assert_eq!(w.cursor(), 2);
        assert!(w.current_is_valid());
    }

    #[test]
    fn advance_is_noop_while_invalid() {
        let mut w = wizard();
        assert!(!w.advance());
        assert_eq!(w.cursor(), 0);
    }

    #[test]
    fn back_is_noop_at_zero() {
        let mut w = wizard();
        assert!(!w.back());
        assert_eq!(w.cursor(), 0);
        assert_eq!(w.transition_hint(), TransitionHint::Forward);
    }

    #[test]
    fn cursor_tracks_consecutive_advances() {
        let mut w = wizard();
        w.set_answer(&"name".into(), "Asha".into());
        w.advance();
        w.set_answer(&"email".into(), "a@b.co".into());
        w.advance();
        assert_eq!(w.cursor(), 2);
        assert_eq!(w.transition_hint(), TransitionHint::Forward);
    }

    #[test]
    fn advance_clamps_at_last_question() {
        let mut w = filled_wizard_at_last_step();
        let last = w.cursor();
        assert!(!w.advance());
        assert_eq!(w.cursor(), last);
    }

    #[test]
    fn back_skips_validation() {
        let mut w = wizard();
        w.set_answer(&"name".into(), "Asha".into());
        w.advance();
        // email is empty and invalid, but going back is always allowed
        assert!(w.back());
        assert_eq!(w.cursor(), 0);
        assert_eq!(w.transition_hint(), TransitionHint::Backward);
    }

    #[test]
    fn over_long_answer_is_ignored() {
        let mut w = wizard();
        w.set_answer(&"name".into(), "Asha".into());
        w.advance();
        w.set_answer(&"email".into(), "a@b.co".into());
        w.advance();
        w.advance();
        assert_eq!(w.current_question().unwrap().id().as_str(), "problem");

        w.set_answer(&"problem".into(), "short enough".into());
        w.set_answer(
            &"problem".into(),
            "this value is far too long for the limit".into(),
        );
        assert_eq!(
            w.current_answer().unwrap().as_str(),
            Some("short enough")
        );
    }

    #[test]
    fn activate_ignored_for_multiline() {
        let definition = IntakeDefinition::new(
            "t",
            vec![Question::new("notes", "Notes?", InputKind::Multiline)],
        );
        let mut w = WizardState::new(definition);
        w.set_answer(&"notes".into(), "line one\nline two".into());
        assert_eq!(w.activate(), Activation::Ignored);
        assert_eq!(w.cursor(), 0);
    }

    #[test]
    fn activate_advances_then_reports_submit_ready() {
        let mut w = wizard();
        assert_eq!(w.activate(), Activation::Ignored);
        w.set_answer(&"name".into(), "Asha".into());
        assert_eq!(w.activate(), Activation::Advanced);
        assert_eq!(w.cursor(), 1);

        let mut w = filled_wizard_at_last_step();
        assert_eq!(w.activate(), Activation::SubmitReady);
    }

    #[test]
    fn toggle_choice_round_trips() {
        let definition = IntakeDefinition::new(
            "t",
            vec![Question::new(
                "domains",
                "Domains?",
                InputKind::multi_select(["AgriTech", "Robotics"]),
            )],
        );
        let mut w = WizardState::new(definition);
        assert!(!w.current_is_valid());
        w.toggle_choice(&"domains".into(), "AgriTech");
        assert!(w.current_is_valid());
        w.toggle_choice(&"domains".into(), "AgriTech");
        assert!(!w.current_is_valid());
    }

    #[tokio::test]
    async fn submit_before_last_question_is_rejected() {
        let mut w = wizard();
        w.set_answer(&"name".into(), "Asha".into());
        let sink = StubSink::ok();
        let result = w.submit(&sink).await;
        assert!(matches!(result, Err(SubmitError::NotReady)));
        assert_eq!(w.phase(), Phase::Editing);
        assert!(sink.received().is_empty());
    }

    #[tokio::test]
    async fn successful_submit_is_terminal() {
        let mut w = filled_wizard_at_last_step();
        let sink = StubSink::ok();
        w.submit(&sink).await.unwrap();
        assert_eq!(w.phase(), Phase::Submitted);

        // No transition leaves Submitted.
        assert!(!w.advance());
        assert!(!w.back());
        assert_eq!(w.activate(), Activation::Ignored);
        assert!(matches!(
            w.submit(&sink).await,
            Err(SubmitError::NotReady)
        ));
        assert_eq!(sink.received().len(), 1);
    }

    #[tokio::test]
    async fn failed_submit_keeps_answers_and_exposes_error() {
        let mut w = filled_wizard_at_last_step();
        let before = w.answers().clone();
        let sink = StubSink::failing(500);

        let result = w.submit(&sink).await;
        assert!(matches!(result, Err(SubmitError::Status { status: 500 })));
        assert_eq!(w.phase(), Phase::Editing);
        assert!(w.at_last_step());
        assert!(w.submit_error().is_some());
        assert_eq!(w.answers(), &before);

        // Editing clears the error; retry is manual.
        w.set_answer(&"stage".into(), "MVP".into());
        assert!(w.submit_error().is_none());
        let ok_sink = StubSink::ok();
        w.submit(&ok_sink).await.unwrap();
        assert_eq!(w.phase(), Phase::Submitted);
    }

    #[tokio::test]
    async fn payload_reaches_sink_flattened() {
        let mut w = filled_wizard_at_last_step();
        let sink = StubSink::ok();
        w.submit(&sink).await.unwrap();

        let payloads = sink.received();
        let fields = &payloads[0].fields;
        assert_eq!(fields[0], ("Name".to_string(), "Asha".to_string()));
        assert_eq!(fields[2], ("Website".to_string(), "Not provided".to_string()));
        assert_eq!(fields[4], ("Stage".to_string(), "Prototype".to_string()));
    }

    #[test]
    fn submit_control_disabled_until_ready() {
        let mut w = wizard();
        assert!(!w.submit_enabled());
        let w2 = filled_wizard_at_last_step();
        assert!(w2.submit_enabled());
        drop(w2);
        w.set_answer(&"name".into(), "Asha".into());
        assert!(!w.submit_enabled());
    }
}
