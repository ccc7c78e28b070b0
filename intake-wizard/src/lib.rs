//! # intake-wizard
//!
//! Linear questionnaire controller: walks a user through an ordered sequence
//! of questions one at a time, validates each answer before allowing forward
//! progress, and delivers the complete record to a submission sink.
//!
//! The wizard is presentation-agnostic. Front-ends drive it with
//! [`WizardState::advance`], [`WizardState::back`],
//! [`WizardState::set_answer`] and [`WizardState::activate`], then call
//! [`WizardState::submit`] with whatever [`SubmitSink`] delivers the payload.
//!
//! ## State machine
//!
//! States: `Editing` (step i), `Submitting`, `Submitted`.
//!
//! - `Editing(i)` → `Editing(i+1)` on validated advance (clamped at last)
//! - `Editing(i)` → `Editing(i-1)` on back (no validation, no-op at 0)
//! - `Editing(last)` → `Submitting` on validated submit
//! - `Submitting` → `Submitted` on acknowledgement (terminal)
//! - `Submitting` → `Editing(last)` with a recoverable error on failure,
//!   answers intact, no automatic retry

mod state;
pub use state::{Activation, Phase, TransitionHint, WizardState};

mod validate;
pub use validate::is_valid_email;

mod payload;
pub use payload::SubmitPayload;

mod sink;
pub use sink::{SubmitError, SubmitSink};

mod stub_sink;
pub use stub_sink::StubSink;
