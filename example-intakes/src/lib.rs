//! Concrete intake questionnaires and directory data.
//!
//! Immutable configuration shared by the front-end demos and tests: the
//! startup application wizard, the partner inquiry, and the ecosystem
//! partner directory rendered in the scrolling lanes.

mod startup_application;
pub use startup_application::startup_application;

mod partner_inquiry;
pub use partner_inquiry::partner_inquiry;

mod directory;
pub use directory::{ECOSYSTEM_PARTNERS, partner_lanes};
