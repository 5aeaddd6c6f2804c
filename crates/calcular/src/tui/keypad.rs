//! Numerical keypad for the calculator shell.
//!
//! The keypad is both a widget and a hit-testing model: mouse clicks resolve
//! to buttons through the same geometry the renderer uses, and keyboard
//! input highlights the matching button.

use ratatui::{
    buffer::Buffer,
    layout::{Margin, Position, Rect},
    style::{Style, Stylize},
    text::Span,
    widgets::{Block, Widget},
};

use crate::core::Operator;

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

const fn operator_label(op: Operator) -> &'static str {
    match op {
        Operator::Add => "+",
        Operator::Subtract => "-",
        Operator::Multiply => "×",
        Operator::Divide => "÷",
    }
}

/// Actions that keypad buttons can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Append a digit (0-9) to the entry
    Digit(u8),
    /// Append a decimal point to the entry
    Decimal,
    /// Commit the entry with an operator
    Operator(Operator),
    /// Evaluate the accumulated expression
    Equals,
    /// Clear both display lines
    Clear,
    /// Square the entry
    Square,
    /// Take the square root of the entry
    Sqrt,
}

/// A single keypad button with its grid position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The symbol shown on the button
    pub label: &'static str,
    /// The action this button performs
    pub action: ButtonAction,
    /// Grid row (0 = top)
    pub row: u16,
    /// Grid column (0 = left)
    pub col: u16,
    /// Number of grid cells this button spans horizontally
    pub span: u16,
    /// Whether the button is currently pressed/highlighted
    pub pressed: bool,
}

impl KeypadButton {
    fn new(label: &'static str, action: ButtonAction, row: u16, col: u16) -> Self {
        Self {
            label,
            action,
            row,
            col,
            span: 1,
            pressed: false,
        }
    }

    fn with_span(mut self, span: u16) -> Self {
        self.span = span;
        self
    }

    /// Creates a digit button
    #[must_use]
    pub fn digit(d: u8, row: u16, col: u16) -> Self {
        let label = DIGIT_LABELS.get(usize::from(d)).copied().unwrap_or("?");
        Self::new(label, ButtonAction::Digit(d), row, col)
    }

    /// Creates an operator button labelled with the display glyph
    #[must_use]
    pub fn operator(op: Operator, row: u16, col: u16) -> Self {
        Self::new(operator_label(op), ButtonAction::Operator(op), row, col)
    }

    /// Creates the decimal point button
    #[must_use]
    pub fn decimal(row: u16, col: u16) -> Self {
        Self::new(".", ButtonAction::Decimal, row, col)
    }

    /// Creates the equals button
    #[must_use]
    pub fn equals(row: u16, col: u16) -> Self {
        Self::new("=", ButtonAction::Equals, row, col)
    }

    /// Creates the clear button
    #[must_use]
    pub fn clear(row: u16, col: u16) -> Self {
        Self::new("C", ButtonAction::Clear, row, col)
    }

    /// Creates the square button
    #[must_use]
    pub fn square(row: u16, col: u16) -> Self {
        Self::new("x²", ButtonAction::Square, row, col)
    }

    /// Creates the square root button
    #[must_use]
    pub fn sqrt(row: u16, col: u16) -> Self {
        Self::new("√x", ButtonAction::Sqrt, row, col)
    }

    /// Returns whether this button occupies the given grid cell,
    /// counting horizontal spans
    #[must_use]
    pub fn covers(&self, row: u16, col: u16) -> bool {
        self.row == row && (self.col..self.col + self.span).contains(&col)
    }
}

/// The keypad layout - a 5x4 grid with a double-width equals key
/// ```text
/// [ C ] [ x² ] [ √x ] [ ÷ ]
/// [ 7 ] [ 8  ] [ 9  ] [ × ]
/// [ 4 ] [ 5  ] [ 6  ] [ - ]
/// [ 1 ] [ 2  ] [ 3  ] [ + ]
/// [ . ] [ 0  ] [   =   ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    /// Number of grid columns
    cols: u16,
    /// Number of grid rows
    rows: u16,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: clear and the unary functions above divide
            KeypadButton::clear(0, 0),
            KeypadButton::square(0, 1),
            KeypadButton::sqrt(0, 2),
            KeypadButton::operator(Operator::Divide, 0, 3),
            // Row 1: 7 8 9 ×
            KeypadButton::digit(7, 1, 0),
            KeypadButton::digit(8, 1, 1),
            KeypadButton::digit(9, 1, 2),
            KeypadButton::operator(Operator::Multiply, 1, 3),
            // Row 2: 4 5 6 -
            KeypadButton::digit(4, 2, 0),
            KeypadButton::digit(5, 2, 1),
            KeypadButton::digit(6, 2, 2),
            KeypadButton::operator(Operator::Subtract, 2, 3),
            // Row 3: 1 2 3 +
            KeypadButton::digit(1, 3, 0),
            KeypadButton::digit(2, 3, 1),
            KeypadButton::digit(3, 3, 2),
            KeypadButton::operator(Operator::Add, 3, 3),
            // Row 4: . 0 and a double-width equals
            KeypadButton::decimal(4, 0),
            KeypadButton::digit(0, 4, 1),
            KeypadButton::equals(4, 2).with_span(2),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets the button covering a grid cell, accounting for spans
    #[must_use]
    pub fn get_button_at(&self, row: u16, col: u16) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds the button a keyboard character maps to.
    ///
    /// Digits, the decimal point and operator symbols map through the
    /// character they type; `=`, `c`, `s` and `r` map to their actions.
    #[must_use]
    pub fn find_button_for_key(&self, ch: char) -> Option<usize> {
        let action = match ch {
            '0'..='9' => ButtonAction::Digit(ch.to_digit(10)? as u8),
            '.' => ButtonAction::Decimal,
            '=' => ButtonAction::Equals,
            'c' => ButtonAction::Clear,
            's' => ButtonAction::Square,
            'r' => ButtonAction::Sqrt,
            _ => ButtonAction::Operator(Operator::from_symbol(ch)?),
        };
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Sets a button as pressed by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.pressed = true;
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.pressed = false;
        }
    }

    /// Highlights the button a keyboard character maps to
    pub fn highlight_key(&mut self, ch: char) {
        self.release_all();
        if let Some(idx) = self.find_button_for_key(ch) {
            self.press_button(idx);
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Converts a click position to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let (row, col) = self.cell_at(area, x, y)?;
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Maps a screen position to the grid cell under it, skipping the
    /// one-character border the widget draws
    fn cell_at(&self, area: Rect, x: u16, y: u16) -> Option<(u16, u16)> {
        let inner = area.inner(Margin::new(1, 1));
        if !inner.contains(Position::new(x, y)) {
            return None;
        }

        let cell_width = inner.width / self.cols;
        let cell_height = inner.height / self.rows;
        if cell_width == 0 || cell_height == 0 {
            return None;
        }

        let col = (x - inner.x) / cell_width;
        let row = (y - inner.y) / cell_height;
        (row < self.rows && col < self.cols).then_some((row, col))
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

fn button_style(btn: &KeypadButton) -> Style {
    if btn.pressed {
        return Style::new().black().on_yellow().bold();
    }
    match btn.action {
        ButtonAction::Digit(_) | ButtonAction::Decimal => Style::new().white(),
        ButtonAction::Operator(_) => Style::new().yellow(),
        ButtonAction::Equals => Style::new().green(),
        ButtonAction::Clear => Style::new().red(),
        ButtonAction::Square | ButtonAction::Sqrt => Style::new().cyan(),
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::bordered()
            .title(" Keypad ")
            .border_style(Style::new().cyan())
            .render(area, buf);

        let inner = area.inner(Margin::new(1, 1));
        let cell_width = inner.width / self.keypad.cols;
        let cell_height = inner.height / self.keypad.rows;
        if cell_width < 3 || cell_height == 0 {
            return;
        }

        for btn in self.keypad.buttons() {
            let width = cell_width * btn.span;
            let label = format!("[{}]", btn.label);
            let label_width = label.chars().count() as u16;

            let x = inner.x + btn.col * cell_width + width.saturating_sub(label_width) / 2;
            let y = inner.y + btn.row * cell_height + cell_height / 2;
            if inner.contains(Position::new(x, y)) {
                buf.set_span(x, y, &Span::styled(label, button_style(btn)), width);
            }
        }
    }
}
