//! Keyboard input handling for the calculator shell.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::Operator;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Append a digit or decimal point to the entry
    Digit(char),
    /// Commit the entry with an operator
    Operator(Operator),
    /// Evaluate the accumulated expression
    Evaluate,
    /// Clear both display lines
    Clear,
    /// Square the entry
    Square,
    /// Take the square root of the entry
    Sqrt,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    ///
    /// Printable keys route through the same table the keypad uses for
    /// highlighting, so every key binding has a visible button.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match event.code {
            KeyCode::Char(c) => Self::char_action(c),
            KeyCode::Enter => KeyAction::Evaluate,
            KeyCode::Esc => KeyAction::Clear,
            _ => KeyAction::None,
        }
    }

    fn char_action(c: char) -> KeyAction {
        match c {
            '0'..='9' | '.' => KeyAction::Digit(c),
            '+' | '-' | '*' | '/' => {
                Operator::from_symbol(c).map_or(KeyAction::None, KeyAction::Operator)
            }
            '=' => KeyAction::Evaluate,
            'c' => KeyAction::Clear,
            's' => KeyAction::Square,
            'r' => KeyAction::Sqrt,
            'q' => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}
