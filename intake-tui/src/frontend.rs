//! Full-screen questionnaire front-end.
//!
//! Draws one question at a time with a thin progress bar, a kind-specific
//! input area, and a help bar. All wizard rules (validation, clamping, the
//! submit gate) live in [`WizardState`]; this module only translates key
//! events into wizard calls and paints the result.

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use intake_types::{AnswerValue, InputKind, IntakeError, Question};
use intake_wizard::{Activation, Phase, SubmitError, WizardState};
use ratatui::{
    Frame, Terminal,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::{self, Stdout};
use thiserror::Error;

/// Error type for the terminal front-end.
#[derive(Debug, Error)]
pub enum TuiError {
    /// User quit the questionnaire (pressed Esc).
    #[error("Intake cancelled by user")]
    Cancelled,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fold front-end failures into the shared intake error taxonomy, keeping
/// cancellation distinguishable for callers that treat it as a clean exit.
impl From<TuiError> for IntakeError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Cancelled => IntakeError::Cancelled,
            TuiError::Io(err) => IntakeError::frontend(err),
        }
    }
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            text: Color::White,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
        }
    }
}

/// Closure that drives one submission attempt, typically by blocking on
/// [`WizardState::submit`] with whatever sink and runtime the caller uses.
pub type Submitter<'a> = dyn FnMut(&mut WizardState) -> Result<(), SubmitError> + 'a;

/// Ratatui front-end walking a wizard one question per screen.
#[derive(Debug, Clone, Default)]
pub struct IntakeTui {
    theme: Theme,
}

impl IntakeTui {
    /// Create a front-end with the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Run the questionnaire until submission is acknowledged.
    ///
    /// `submit` is called when the user confirms the last question; it should
    /// block on [`WizardState::submit`]. A failed attempt leaves the wizard
    /// editing with its error on screen, so the user can retry or go back.
    /// Returns [`TuiError::Cancelled`] if the user quits with Esc.
    pub fn run(
        &self,
        wizard: &mut WizardState,
        submit: &mut Submitter<'_>,
    ) -> Result<(), TuiError> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal, wizard, submit);
        restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        wizard: &mut WizardState,
        submit: &mut Submitter<'_>,
    ) -> Result<(), TuiError> {
        let mut screen = ScreenState::for_question(wizard);

        loop {
            terminal.draw(|frame| {
                if wizard.phase() == Phase::Submitted {
                    draw_completion(frame, &self.theme, wizard);
                } else {
                    draw_ui(frame, &self.theme, wizard, &screen);
                }
            })?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if wizard.phase() == Phase::Submitted {
                match key.code {
                    KeyCode::Enter | KeyCode::Esc => return Ok(()),
                    _ => {}
                }
                continue;
            }

            let Some(kind) = wizard.current_question().map(|q| q.kind().clone()) else {
                return Ok(());
            };

            match key.code {
                KeyCode::Esc => return Err(TuiError::Cancelled),
                KeyCode::Tab => {
                    screen.hint = None;
                    if wizard.submit_enabled() {
                        self.run_submission(terminal, wizard, submit)?;
                    } else if wizard.advance() {
                        screen = ScreenState::for_question(wizard);
                    } else {
                        screen.hint = validation_hint(wizard);
                    }
                }
                KeyCode::BackTab => {
                    if wizard.back() {
                        screen = ScreenState::for_question(wizard);
                    }
                }
                KeyCode::Enter => match &kind {
                    InputKind::Multiline => {
                        screen.edit(wizard, KeyCode::Enter);
                    }
                    InputKind::Select { options } => {
                        if let Some(option) = options.get(screen.highlight).cloned() {
                            screen.store(wizard, AnswerValue::Text(option));
                        }
                        self.activate(terminal, wizard, submit, &mut screen)?;
                    }
                    _ => {
                        self.activate(terminal, wizard, submit, &mut screen)?;
                    }
                },
                KeyCode::Up if kind.options().is_some() => {
                    screen.highlight = screen.highlight.saturating_sub(1);
                    if let InputKind::Select { options } = &kind
                        && let Some(option) = options.get(screen.highlight).cloned()
                    {
                        screen.store(wizard, AnswerValue::Text(option));
                    }
                }
                KeyCode::Down if kind.options().is_some() => {
                    let count = kind.options().map_or(0, <[String]>::len);
                    if screen.highlight + 1 < count {
                        screen.highlight += 1;
                        if let InputKind::Select { options } = &kind
                            && let Some(option) = options.get(screen.highlight).cloned()
                        {
                            screen.store(wizard, AnswerValue::Text(option));
                        }
                    }
                }
                KeyCode::Char(' ') if matches!(kind, InputKind::MultiSelect { .. }) => {
                    if let InputKind::MultiSelect { options } = &kind
                        && let Some(choice) = options.get(screen.highlight)
                        && let Some(id) = wizard.current_question().map(|q| q.id().clone())
                    {
                        screen.hint = None;
                        wizard.toggle_choice(&id, choice);
                    }
                }
                KeyCode::Backspace if kind.options().is_some() => {
                    if wizard.back() {
                        screen = ScreenState::for_question(wizard);
                    }
                }
                KeyCode::Backspace if screen.input.is_empty() => {
                    if wizard.back() {
                        screen = ScreenState::for_question(wizard);
                    }
                }
                other if kind.is_textual() => {
                    screen.edit(wizard, other);
                }
                _ => {}
            }
        }
    }

    /// Enter on a single-line field: advance or kick off a submission.
    fn activate(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        wizard: &mut WizardState,
        submit: &mut Submitter<'_>,
        screen: &mut ScreenState,
    ) -> Result<(), TuiError> {
        screen.hint = None;
        match wizard.activate() {
            Activation::Advanced => {
                *screen = ScreenState::for_question(wizard);
            }
            Activation::SubmitReady => {
                self.run_submission(terminal, wizard, submit)?;
            }
            Activation::Ignored => {
                screen.hint = validation_hint(wizard);
            }
        }
        Ok(())
    }

    /// Paint a submitting frame, then block on the delivery attempt.
    ///
    /// The submit failure itself is not surfaced here: the wizard keeps it in
    /// [`WizardState::submit_error`] and the next editing frame shows it.
    fn run_submission(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        wizard: &mut WizardState,
        submit: &mut Submitter<'_>,
    ) -> Result<(), TuiError> {
        terminal.draw(|frame| draw_submitting(frame, &self.theme))?;
        let _ = submit(wizard);
        Ok(())
    }
}

/// Per-question editing state: the text buffer mirrors the wizard's stored
/// answer, the highlight tracks the active choice in option lists.
struct ScreenState {
    input: String,
    /// Cursor position in `input`, counted in characters.
    cursor: usize,
    highlight: usize,
    /// Message shown after a refused advance, cleared on the next edit.
    hint: Option<String>,
}

impl ScreenState {
    fn for_question(wizard: &WizardState) -> Self {
        let mut state = Self {
            input: String::new(),
            cursor: 0,
            highlight: 0,
            hint: None,
        };
        let Some(question) = wizard.current_question() else {
            return state;
        };
        let answer = wizard.current_answer();
        match question.kind() {
            InputKind::Select { options } => {
                let chosen = answer.and_then(AnswerValue::as_str);
                state.highlight = options
                    .iter()
                    .position(|o| Some(o.as_str()) == chosen)
                    .unwrap_or(0);
            }
            InputKind::MultiSelect { .. } => {}
            _ => {
                if let Some(text) = answer.and_then(AnswerValue::as_str) {
                    state.input = text.to_string();
                    state.cursor = state.input.chars().count();
                }
            }
        }
        state
    }

    /// Apply one text-editing key, then push the buffer into the wizard.
    fn edit(&mut self, wizard: &mut WizardState, key: KeyCode) {
        match key {
            KeyCode::Char(c) => {
                let at = byte_index(&self.input, self.cursor);
                self.input.insert(at, c);
                self.cursor += 1;
            }
            KeyCode::Enter => {
                let at = byte_index(&self.input, self.cursor);
                self.input.insert(at, '\n');
                self.cursor += 1;
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.input.remove(byte_index(&self.input, self.cursor));
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.input.chars().count() {
                    self.input.remove(byte_index(&self.input, self.cursor));
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => {
                if self.cursor < self.input.chars().count() {
                    self.cursor += 1;
                }
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.input.chars().count(),
            _ => return,
        }
        self.hint = None;
        self.store(wizard, AnswerValue::Text(self.input.clone()));
    }

    /// Push a value into the wizard, then re-read it.
    ///
    /// The wizard silently refuses over-long answers; re-reading keeps the
    /// buffer showing what is actually stored.
    fn store(&mut self, wizard: &mut WizardState, value: AnswerValue) {
        let Some(id) = wizard.current_question().map(|q| q.id().clone()) else {
            return;
        };
        wizard.set_answer(&id, value);
        let stored = wizard
            .current_answer()
            .and_then(AnswerValue::as_str)
            .unwrap_or_default();
        if stored != self.input {
            self.input = stored.to_string();
            self.cursor = self.cursor.min(self.input.chars().count());
        }
    }
}

fn byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map_or(s.len(), |(i, _)| i)
}

fn validation_hint(wizard: &WizardState) -> Option<String> {
    if wizard.current_is_valid() {
        return None;
    }
    let message = match wizard.current_question().map(Question::kind) {
        Some(InputKind::Email) => "Enter a valid email address",
        Some(InputKind::MultiSelect { .. }) => "Pick at least one option",
        _ => "This question is required",
    };
    Some(message.to_string())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<(), TuiError> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn draw_ui(frame: &mut Frame, theme: &Theme, wizard: &WizardState, screen: &ScreenState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Progress bar
            Constraint::Min(10),   // Content
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let header = Paragraph::new(wizard.definition().title().to_string())
        .style(Style::default().fg(theme.primary).bold())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(header, chunks[0]);

    draw_progress(frame, theme, wizard, chunks[1]);

    let content = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Question prompt
            Constraint::Min(5),    // Input area
            Constraint::Length(2), // Error / hint line
        ])
        .split(chunks[2]);

    let Some(question) = wizard.current_question() else {
        return;
    };

    let section_title = if question.section().is_empty() {
        " Question ".to_string()
    } else {
        format!(" {} ", question.section())
    };
    let prompt = Paragraph::new(question.ask().to_string())
        .style(Style::default().fg(theme.text))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(section_title)
                .title_style(Style::default().fg(theme.highlight)),
        );
    frame.render_widget(prompt, content[0]);

    match question.kind() {
        InputKind::Text | InputKind::Email | InputKind::Multiline => {
            draw_text_input(frame, theme, question, screen, content[1]);
        }
        InputKind::Select { options } => {
            draw_option_list(frame, theme, options, screen, None, content[1]);
        }
        InputKind::MultiSelect { options } => {
            let chosen = wizard
                .current_answer()
                .and_then(AnswerValue::as_selection)
                .unwrap_or_default();
            draw_option_list(frame, theme, options, screen, Some(chosen), content[1]);
        }
    }

    // A failed delivery outranks a local validation hint.
    if let Some(error) = wizard.submit_error() {
        let line = Paragraph::new(error.to_string())
            .style(Style::default().fg(theme.error).bold())
            .alignment(Alignment::Center);
        frame.render_widget(line, content[2]);
    } else if let Some(hint) = &screen.hint {
        let line = Paragraph::new(hint.clone())
            .style(Style::default().fg(theme.error))
            .alignment(Alignment::Center);
        frame.render_widget(line, content[2]);
    }

    let help = Paragraph::new(help_text(wizard, question))
        .style(Style::default().fg(theme.border))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(help, chunks[3]);
}

/// Thin single-line progress bar with " current / total " centered under it.
fn draw_progress(frame: &mut Frame, theme: &Theme, wizard: &WizardState, area: Rect) {
    let (current, total) = wizard.progress();
    let bar_width = area.width.saturating_sub(2);
    let bar_x = area.x + 1;

    let track = Paragraph::new("─".repeat(bar_width as usize))
        .style(Style::default().fg(theme.border));
    frame.render_widget(track, Rect::new(bar_x, area.y, bar_width, 1));

    let ratio = current as f32 / total.max(1) as f32;
    let filled_width = (ratio * bar_width as f32) as u16;
    if filled_width > 0 {
        let filled = Paragraph::new("━".repeat(filled_width as usize))
            .style(Style::default().fg(theme.primary));
        frame.render_widget(filled, Rect::new(bar_x, area.y, filled_width, 1));
    }

    let label = format!(" {} / {} ", current, total);
    let label_width = label.len() as u16;
    let label_x = bar_x + (bar_width.saturating_sub(label_width)) / 2;
    let label_widget = Paragraph::new(label).style(Style::default().fg(theme.secondary));
    frame.render_widget(label_widget, Rect::new(label_x, area.y + 1, label_width, 1));
}

fn draw_text_input(
    frame: &mut Frame,
    theme: &Theme,
    question: &Question,
    screen: &ScreenState,
    area: Rect,
) {
    let counter = question
        .max_length()
        .map(|max| format!(" {}/{} ", screen.input.chars().count(), max))
        .unwrap_or_else(|| " Input ".to_string());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(counter)
        .title_style(Style::default().fg(theme.secondary));

    let body = if screen.input.is_empty() {
        Paragraph::new(question.placeholder().to_string())
            .style(Style::default().fg(theme.border).dim())
    } else {
        Paragraph::new(screen.input.clone()).style(Style::default().fg(theme.text))
    };
    frame.render_widget(body.block(block), area);

    // Cursor placement accounts for embedded newlines in multiline buffers.
    let before: String = screen.input.chars().take(screen.cursor).collect();
    let row = before.matches('\n').count() as u16;
    let col = before
        .rsplit('\n')
        .next()
        .map_or(0, |line| line.chars().count()) as u16;
    frame.set_cursor_position((area.x + 1 + col, area.y + 1 + row));
}

fn draw_option_list(
    frame: &mut Frame,
    theme: &Theme,
    options: &[String],
    screen: &ScreenState,
    chosen: Option<&[String]>,
    area: Rect,
) {
    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let is_chosen = chosen.is_some_and(|c| c.iter().any(|v| v == option));
            let label = match chosen {
                Some(_) if is_chosen => format!("  [x] {}", option),
                Some(_) => format!("  [ ] {}", option),
                None => format!("  {}", option),
            };
            let style = if i == screen.highlight {
                Style::default().fg(theme.highlight).bold()
            } else if is_chosen {
                Style::default().fg(theme.secondary)
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(label).style(style)
        })
        .collect();

    let title = match chosen {
        Some(values) => format!(" Choose any ({} selected) ", values.len()),
        None => " Choose one ".to_string(),
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(title)
                .title_style(Style::default().fg(theme.secondary)),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(screen.highlight));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn help_text(wizard: &WizardState, question: &Question) -> &'static str {
    let last = wizard.at_last_step();
    match question.kind() {
        InputKind::Select { .. } if last => "Up/Down: Select  Enter: Submit  Backspace: Back  Esc: Quit",
        InputKind::Select { .. } => "Up/Down: Select  Enter: Next  Backspace: Back  Esc: Quit",
        InputKind::MultiSelect { .. } if last => {
            "Up/Down: Move  Space: Toggle  Enter: Submit  Backspace: Back  Esc: Quit"
        }
        InputKind::MultiSelect { .. } => {
            "Up/Down: Move  Space: Toggle  Enter: Next  Backspace: Back  Esc: Quit"
        }
        InputKind::Multiline if last => {
            "Enter: Newline  Tab: Submit  Shift+Tab: Back  Esc: Quit"
        }
        InputKind::Multiline => "Enter: Newline  Tab: Next  Shift+Tab: Back  Esc: Quit",
        _ if last => "Enter: Submit  Shift+Tab: Back  Esc: Quit",
        _ => "Enter: Next  Shift+Tab: Back  Esc: Quit",
    }
}

fn draw_submitting(frame: &mut Frame, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .title(" Submitting ")
        .title_style(Style::default().fg(theme.primary).bold());
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Min(1),
            Constraint::Percentage(45),
        ])
        .split(inner);
    let text = Paragraph::new("Sending your answers...")
        .style(Style::default().fg(theme.text))
        .alignment(Alignment::Center);
    frame.render_widget(text, centered[1]);
}

fn draw_completion(frame: &mut Frame, theme: &Theme, wizard: &WizardState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.success))
        .title(" Complete ")
        .title_style(Style::default().fg(theme.success).bold());
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let message = wizard
        .definition()
        .completion_message()
        .unwrap_or("All questions answered.");
    let text = format!("{}\n\nPress Enter to close.", message);
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(theme.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Min(4),
            Constraint::Percentage(35),
        ])
        .split(inner);
    frame.render_widget(paragraph, centered[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_types::IntakeDefinition;

    fn wizard() -> WizardState {
        WizardState::new(IntakeDefinition::new(
            "Apply",
            vec![
                Question::new("name", "Name?", InputKind::Text).with_max_length(8),
                Question::new("email", "Email?", InputKind::Email),
                Question::new(
                    "stage",
                    "Stage?",
                    InputKind::select(["Idea", "Prototype", "MVP"]),
                ),
            ],
        ))
    }

    #[test]
    fn theme_default() {
        let theme = Theme::default();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.error, Color::Red);
        assert_eq!(theme.success, Color::Green);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            TuiError::Cancelled.to_string(),
            "Intake cancelled by user"
        );
    }

    #[test]
    fn cancellation_maps_into_the_shared_taxonomy() {
        assert!(IntakeError::from(TuiError::Cancelled).is_cancelled());

        let io = TuiError::Io(std::io::Error::other("terminal gone"));
        assert!(!IntakeError::from(io).is_cancelled());
    }

    #[test]
    fn editing_keeps_buffer_and_wizard_in_sync() {
        let mut w = wizard();
        let mut screen = ScreenState::for_question(&w);
        for c in "Asha".chars() {
            screen.edit(&mut w, KeyCode::Char(c));
        }
        assert_eq!(screen.input, "Asha");
        assert_eq!(w.current_answer().unwrap().as_str(), Some("Asha"));

        screen.edit(&mut w, KeyCode::Backspace);
        assert_eq!(screen.input, "Ash");
        assert_eq!(w.current_answer().unwrap().as_str(), Some("Ash"));
    }

    #[test]
    fn over_long_edit_reverts_the_buffer() {
        let mut w = wizard();
        let mut screen = ScreenState::for_question(&w);
        for c in "12345678".chars() {
            screen.edit(&mut w, KeyCode::Char(c));
        }
        // The ninth character exceeds max_length and is refused.
        screen.edit(&mut w, KeyCode::Char('9'));
        assert_eq!(screen.input, "12345678");
        assert_eq!(screen.cursor, 8);
        assert_eq!(w.current_answer().unwrap().as_str(), Some("12345678"));
    }

    #[test]
    fn screen_restores_stored_answer_on_revisit() {
        let mut w = wizard();
        w.set_answer(&"name".into(), "Asha".into());
        w.advance();
        w.back();
        let screen = ScreenState::for_question(&w);
        assert_eq!(screen.input, "Asha");
        assert_eq!(screen.cursor, 4);
    }

    #[test]
    fn select_highlight_follows_stored_choice() {
        let mut w = wizard();
        w.set_answer(&"name".into(), "Asha".into());
        w.advance();
        w.set_answer(&"email".into(), "a@b.co".into());
        w.advance();
        w.set_answer(&"stage".into(), "Prototype".into());
        let screen = ScreenState::for_question(&w);
        assert_eq!(screen.highlight, 1);
    }

    #[test]
    fn hint_names_the_failing_rule() {
        let mut w = wizard();
        assert_eq!(
            validation_hint(&w).as_deref(),
            Some("This question is required")
        );
        w.set_answer(&"name".into(), "Asha".into());
        assert_eq!(validation_hint(&w), None);
        w.advance();
        w.set_answer(&"email".into(), "not-an-email".into());
        assert_eq!(
            validation_hint(&w).as_deref(),
            Some("Enter a valid email address")
        );
    }

    #[test]
    fn byte_index_handles_multibyte_text() {
        let s = "a\u{20b9}b";
        assert_eq!(byte_index(s, 0), 0);
        assert_eq!(byte_index(s, 1), 1);
        assert_eq!(byte_index(s, 2), 4);
        assert_eq!(byte_index(s, 3), 5);
    }
}
