//! # intake-tui
//!
//! Terminal front-end for [`intake_wizard`]: one question per screen with a
//! progress bar, validation hints, and a completion screen, plus widgets for
//! rendering scrolling [`marquee`] lanes.
//!
//! The front-end owns the terminal and the keyboard; the wizard owns the
//! answers and every transition rule. Submission is injected as a closure so
//! the UI stays runtime-agnostic.

mod frontend;
pub use frontend::{IntakeTui, Submitter, Theme, TuiError};

mod lane;
pub use lane::{CellExtent, lane_text, measured_lane, render_lane};
