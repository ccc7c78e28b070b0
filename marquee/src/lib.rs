//! Continuous scroll animator.
//!
//! Animates one or more horizontal content strips so they scroll
//! continuously and seamlessly, independent of user scroll position and
//! pausable on interaction. The animator is pure state: a front-end supplies
//! the content extent (via [`ContentExtent`]) and a tick source (its own
//! render loop, or a [`TickScheduler`]), and reads offsets back out to
//! position the rendered strip.
//!
//! # Example
//!
//! ```
//! use marquee::{ContentExtent, FixedExtent, Strip};
//!
//! let probe = FixedExtent::new(240.0);
//! let mut strip = Strip::measure(vec!["Razorpay", "Zoho", "Freshworks"], 1.5, &probe)
//!     .expect("extent is positive");
//!
//! strip.tick();
//! assert_eq!(strip.offset(), 1.5);
//! ```
//!
//! # Invariants
//!
//! - `|offset| < wrap_extent` after every tick (the wrap carries remainders)
//! - A paused strip never moves
//! - A strip is only constructed when the measured extent is positive

mod extent;
pub use extent::{ContentExtent, FixedExtent, Unmounted};

mod strip;
pub use strip::Strip;

mod parallax;
pub use parallax::ParallaxRows;

mod scheduler;
pub use scheduler::{ThreadScheduler, ThreadTickHandle, TickHandle, TickScheduler};
