//! Rendering for the calculator shell.
//!
//! The screen is a single column: the two-line display on top, the keypad
//! in the middle, and a status line that shows either the key help or the
//! last evaluation error.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Title shown on the outer frame
pub const APP_TITLE: &str = " calculadora ";

/// Key help shown while no error is pending
pub const HELP_LINE: &str = "Enter: evaluate  c: clear  s: square  r: root  q: quit";

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    let ui = CalculatorUi::new(app);
    frame.render_widget(ui, area);
}

/// The keypad rectangle for a given screen size, shared with mouse hit
/// testing in the event loop
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    layout_chunks(area).get(1).copied().unwrap_or(area)
}

fn layout_chunks(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4), // Two display lines plus borders
            Constraint::Min(11),   // Keypad
            Constraint::Length(3), // Status line
        ])
        .split(area)
        .to_vec()
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUi<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUi<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Renders the two-line display: dim total above the bold entry
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let engine = self.app.engine();
        let lines = vec![
            Line::from(engine.total_display().dark_gray()),
            Line::from(engine.current_display().white().bold()),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::bordered()
                    .title(" Display ")
                    .border_style(Style::new().cyan()),
            )
            .render(area, buf);
    }

    fn render_keypad(&self, area: Rect, buf: &mut Buffer) {
        KeypadWidget::new(self.app.keypad()).render(area, buf);
    }

    /// Renders the status line: error in red, key help otherwise
    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let error_text = self.app.error_display();
        let line = if error_text.is_empty() {
            Line::from(HELP_LINE.dark_gray())
        } else {
            Line::from(error_text.red().bold())
        };

        Paragraph::new(line)
            .block(
                Block::bordered()
                    .title(" Status ")
                    .border_style(Style::new().dark_gray()),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::bordered()
            .title(APP_TITLE)
            .border_style(Style::new().white())
            .render(area, buf);

        let chunks = layout_chunks(area);
        if chunks.len() >= 3 {
            self.render_display(chunks[0], buf);
            self.render_keypad(chunks[1], buf);
            self.render_status(chunks[2], buf);
        }
    }
}
