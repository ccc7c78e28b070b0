//! Terminal rendering for scrolling marquee lanes.
//!
//! A lane's extent is measured in terminal cells: the duplicated item
//! sequence laid out with a fixed gap. Rendering takes a window of that
//! character ring starting at the lane's current offset, so ticking the
//! strip slides the visible text.

use marquee::{ContentExtent, FixedExtent, Strip};
use ratatui::{Frame, layout::Rect, style::Style, widgets::Paragraph};

/// Separator between adjacent items in a lane.
const ITEM_GAP: &str = "   ";

/// Copies of the content sequence a strip renders; the wrap boundary sits at
/// one copy's width.
const COPIES: usize = 2;

/// Measures a lane's duplicated extent in terminal cells.
///
/// Reports `None` for an empty item list, matching an unmounted container.
#[derive(Debug, Clone, Copy)]
pub struct CellExtent<'a>(pub &'a [String]);

impl ContentExtent for CellExtent<'_> {
    fn measure_content_extent(&self) -> Option<f64> {
        let copy_width: usize = self
            .0
            .iter()
            .map(|item| item.chars().count() + ITEM_GAP.chars().count())
            .sum();
        if copy_width == 0 {
            return None;
        }
        Some((copy_width * COPIES) as f64)
    }
}

/// Build a strip whose wrap boundary matches its cell layout.
///
/// Returns `None` for an empty item list; callers skip scheduling for it.
pub fn measured_lane(items: Vec<String>, speed: f64) -> Option<Strip<String>> {
    let extent = CellExtent(&items).measure_content_extent()?;
    Strip::measure(items, speed, &FixedExtent::new(extent))
}

/// The visible window of a lane at its current offset, `width` cells wide.
pub fn lane_text(strip: &Strip<String>, width: usize) -> String {
    let mut ring = String::new();
    for item in strip.repeated() {
        ring.push_str(item);
        ring.push_str(ITEM_GAP);
    }
    let chars: Vec<char> = ring.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    // Offsets run in (-wrap, wrap); rem_euclid folds them onto the ring.
    let start = strip.offset().rem_euclid(strip.wrap_extent()) as usize % chars.len();
    (0..width).map(|i| chars[(start + i) % chars.len()]).collect()
}

/// Render one lane as a single-line paragraph filling `area`.
pub fn render_lane(frame: &mut Frame, strip: &Strip<String>, style: Style, area: Rect) {
    let text = lane_text(strip, area.width as usize);
    frame.render_widget(Paragraph::new(text).style(style), area);
}
