//! Scrolling ecosystem partner lanes.
//!
//! Two lanes drift in opposite directions at ~30 ticks per second. Space
//! pauses and resumes the lanes in place; q or Esc quits.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use intake_tui::{measured_lane, render_lane};
use marquee::ParallaxRows;
use ratatui::{
    Terminal,
    layout::Rect,
    prelude::CrosstermBackend,
    style::{Color, Style},
};
use std::{io, time::Duration};

const BASE_SPEED: f64 = 0.5;
const TICK: Duration = Duration::from_millis(33);

fn main() -> Result<()> {
    let mut lanes = ParallaxRows::new();
    for (i, row) in example_intakes::partner_lanes().into_iter().enumerate() {
        let items: Vec<String> = row.into_iter().map(ToString::to_string).collect();
        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
        if let Some(lane) = measured_lane(items, BASE_SPEED * sign) {
            lanes.push(lane);
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut paused = false;
    let result = (|| -> Result<()> {
        loop {
            terminal.draw(|frame| {
                let area = frame.area();
                for (i, lane) in lanes.lanes().iter().enumerate() {
                    let y = area.y + 1 + (i as u16) * 2;
                    if y >= area.bottom() {
                        break;
                    }
                    let style = Style::default().fg(if i % 2 == 0 {
                        Color::Cyan
                    } else {
                        Color::Blue
                    });
                    render_lane(frame, lane, style, Rect::new(area.x, y, area.width, 1));
                }
            })?;

            if event::poll(TICK)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char(' ') => {
                        paused = !paused;
                        for i in 0..lanes.len() {
                            if paused {
                                lanes.pause_lane(i);
                            } else {
                                lanes.resume_lane(i);
                            }
                        }
                    }
                    _ => {}
                }
            }
            lanes.tick();
        }
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}
