//! Core types for intake questionnaires.
//!
//! This crate provides the foundational types for defining intake flows:
//! - `IntakeDefinition` - The top-level questionnaire structure
//! - `Question` and `InputKind` - Individual questions and their input types
//! - `AnswerRecord` and `AnswerValue` - Collected data, keyed by `FieldId`
//!
//! Definitions are immutable configuration data: built once at startup,
//! never mutated at runtime. Traversal order is the question order.

mod field_id;
pub use field_id::FieldId;

mod answer_value;
pub use answer_value::AnswerValue;

mod answers;
pub use answers::{AnswerError, AnswerRecord};

mod question;
pub use question::{InputKind, Question};

mod definition;
pub use definition::IntakeDefinition;

mod error;
pub use error::IntakeError;
