//! Application state for the calculator shell.
//!
//! Wraps the expression engine with the pieces only the terminal needs:
//! keypad highlight state, the last error for the status line, and the
//! quit flag.

use ratatui::layout::Rect;

use super::input::KeyAction;
use super::keypad::{ButtonAction, Keypad};
use crate::core::{EvalError, EvalResult};
use crate::engine::ExpressionEngine;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    engine: ExpressionEngine,
    keypad: Keypad,
    /// Last evaluation error, cleared by the next entry action
    error: Option<EvalError>,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: ExpressionEngine::new(),
            keypad: Keypad::new(),
            error: None,
            should_quit: false,
        }
    }

    /// Returns the expression engine
    #[must_use]
    pub fn engine(&self) -> &ExpressionEngine {
        &self.engine
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the last evaluation error, if one is pending display
    #[must_use]
    pub fn error(&self) -> Option<&EvalError> {
        self.error.as_ref()
    }

    /// Returns the error as a display string, empty when there is none
    #[must_use]
    pub fn error_display(&self) -> String {
        self.error
            .as_ref()
            .map(|e| format!("Error: {e}"))
            .unwrap_or_default()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies a keypad button action to the engine
    pub fn apply(&mut self, action: ButtonAction) {
        match action {
            ButtonAction::Digit(d) => {
                if let Some(ch) = char::from_digit(u32::from(d), 10) {
                    self.engine.push_digit(ch);
                    self.error = None;
                }
            }
            ButtonAction::Decimal => {
                self.engine.push_digit('.');
                self.error = None;
            }
            ButtonAction::Operator(op) => {
                self.engine.push_operator(op);
                self.error = None;
            }
            ButtonAction::Equals => {
                let outcome = self.engine.evaluate();
                self.record(outcome);
            }
            ButtonAction::Clear => {
                self.engine.clear();
                self.error = None;
            }
            ButtonAction::Square => {
                let outcome = self.engine.square();
                self.record(outcome);
            }
            ButtonAction::Sqrt => {
                let outcome = self.engine.sqrt();
                self.record(outcome);
            }
        }
    }

    /// Applies a keyboard action, highlighting the matching keypad button
    pub fn apply_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::Digit(ch) => {
                self.keypad.highlight_key(ch);
                self.engine.push_digit(ch);
                self.error = None;
            }
            KeyAction::Operator(op) => {
                self.keypad.highlight_key(op.symbol());
                self.apply(ButtonAction::Operator(op));
            }
            KeyAction::Evaluate => {
                self.keypad.highlight_key('=');
                self.apply(ButtonAction::Equals);
            }
            KeyAction::Clear => {
                self.keypad.highlight_key('c');
                self.apply(ButtonAction::Clear);
            }
            KeyAction::Square => {
                self.keypad.highlight_key('s');
                self.apply(ButtonAction::Square);
            }
            KeyAction::Sqrt => {
                self.keypad.highlight_key('r');
                self.apply(ButtonAction::Sqrt);
            }
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Resolves a mouse click against the keypad and applies the button hit
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) {
        if let Some(idx) = self.keypad.hit_test(keypad_area, x, y) {
            self.keypad.release_all();
            self.keypad.press_button(idx);
            let action = self.keypad.get_button(idx).map(|b| b.action);
            if let Some(action) = action {
                self.apply(action);
            }
        }
    }

    fn record(&mut self, outcome: EvalResult<()>) {
        self.error = outcome.err();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    // ===== Constructor tests =====

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert!(app.engine().is_cleared());
        assert!(app.error().is_none());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_app_default() {
        let app = CalculatorApp::default();
        assert!(app.engine().is_cleared());
    }

    // ===== Button action tests =====

    #[test]
    fn test_apply_digits() {
        let mut app = CalculatorApp::new();
        app.apply(ButtonAction::Digit(4));
        app.apply(ButtonAction::Digit(2));
        assert_eq!(app.engine().current(), "42");
    }

    #[test]
    fn test_apply_decimal() {
        let mut app = CalculatorApp::new();
        app.apply(ButtonAction::Digit(3));
        app.apply(ButtonAction::Decimal);
        app.apply(ButtonAction::Digit(5));
        assert_eq!(app.engine().current(), "3.5");
    }

    #[test]
    fn test_apply_operator_commits() {
        let mut app = CalculatorApp::new();
        app.apply(ButtonAction::Digit(5));
        app.apply(ButtonAction::Operator(Operator::Add));
        assert_eq!(app.engine().total(), "5+");
        assert_eq!(app.engine().current(), "");
    }

    #[test]
    fn test_apply_equals_success() {
        let mut app = CalculatorApp::new();
        app.apply(ButtonAction::Digit(2));
        app.apply(ButtonAction::Operator(Operator::Add));
        app.apply(ButtonAction::Digit(3));
        app.apply(ButtonAction::Equals);
        assert_eq!(app.engine().current(), "5");
        assert!(app.error().is_none());
    }

    #[test]
    fn test_apply_equals_error_recorded() {
        let mut app = CalculatorApp::new();
        app.apply(ButtonAction::Digit(5));
        app.apply(ButtonAction::Operator(Operator::Divide));
        app.apply(ButtonAction::Digit(0));
        app.apply(ButtonAction::Equals);
        assert_eq!(app.error(), Some(&EvalError::DivisionByZero));
        assert_eq!(app.error_display(), "Error: Division by zero");
        assert_eq!(app.engine().total(), "5/0");
    }

    #[test]
    fn test_apply_square() {
        let mut app = CalculatorApp::new();
        app.apply(ButtonAction::Digit(3));
        app.apply(ButtonAction::Square);
        assert_eq!(app.engine().current(), "9");
        assert!(app.error().is_none());
    }

    #[test]
    fn test_apply_sqrt() {
        let mut app = CalculatorApp::new();
        app.apply(ButtonAction::Digit(9));
        app.apply(ButtonAction::Sqrt);
        assert_eq!(app.engine().current(), "3");
    }

    #[test]
    fn test_apply_sqrt_empty_records_error() {
        let mut app = CalculatorApp::new();
        app.apply(ButtonAction::Sqrt);
        assert_eq!(app.error(), Some(&EvalError::Empty));
    }

    #[test]
    fn test_apply_clear_resets_error() {
        let mut app = CalculatorApp::new();
        app.apply(ButtonAction::Equals); // Empty expression error
        assert!(app.error().is_some());
        app.apply(ButtonAction::Clear);
        assert!(app.error().is_none());
        assert!(app.engine().is_cleared());
    }

    #[test]
    fn test_next_entry_clears_stale_error() {
        let mut app = CalculatorApp::new();
        app.apply(ButtonAction::Equals);
        assert!(app.error().is_some());
        app.apply(ButtonAction::Digit(7));
        assert!(app.error().is_none());
    }

    #[test]
    fn test_error_display_empty_when_no_error() {
        let app = CalculatorApp::new();
        assert_eq!(app.error_display(), "");
    }

    // ===== Keyboard action tests =====

    #[test]
    fn test_apply_key_digit_highlights() {
        let mut app = CalculatorApp::new();
        app.apply_key(KeyAction::Digit('7'));
        assert_eq!(app.engine().current(), "7");
        let pressed: Vec<_> = app.keypad().buttons().filter(|b| b.pressed).collect();
        assert_eq!(pressed.len(), 1);
        assert_eq!(pressed[0].label, "7");
    }

    #[test]
    fn test_apply_key_full_expression() {
        let mut app = CalculatorApp::new();
        app.apply_key(KeyAction::Digit('2'));
        app.apply_key(KeyAction::Operator(Operator::Multiply));
        app.apply_key(KeyAction::Digit('8'));
        app.apply_key(KeyAction::Evaluate);
        assert_eq!(app.engine().current(), "16");
    }

    #[test]
    fn test_apply_key_clear() {
        let mut app = CalculatorApp::new();
        app.apply_key(KeyAction::Digit('5'));
        app.apply_key(KeyAction::Clear);
        assert!(app.engine().is_cleared());
    }

    #[test]
    fn test_apply_key_square_and_sqrt() {
        let mut app = CalculatorApp::new();
        app.apply_key(KeyAction::Digit('4'));
        app.apply_key(KeyAction::Square);
        assert_eq!(app.engine().current(), "16");
        app.apply_key(KeyAction::Sqrt);
        assert_eq!(app.engine().current(), "4");
    }

    #[test]
    fn test_apply_key_quit() {
        let mut app = CalculatorApp::new();
        app.apply_key(KeyAction::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_apply_key_none_is_noop() {
        let mut app = CalculatorApp::new();
        app.apply_key(KeyAction::None);
        assert!(app.engine().is_cleared());
        assert!(!app.should_quit());
    }

    // ===== Mouse click tests =====

    #[test]
    fn test_click_digit_button() {
        let mut app = CalculatorApp::new();
        let area = Rect::new(0, 0, 22, 12);
        // Cell (1, 0) holds the 7 key: inner x 0..5, y 2..4
        app.click(area, 2, 3);
        assert_eq!(app.engine().current(), "7");
    }

    #[test]
    fn test_click_outside_keypad_is_noop() {
        let mut app = CalculatorApp::new();
        let area = Rect::new(0, 0, 22, 12);
        app.click(area, 50, 50);
        assert!(app.engine().is_cleared());
    }

    #[test]
    fn test_click_presses_button() {
        let mut app = CalculatorApp::new();
        let area = Rect::new(0, 0, 22, 12);
        app.click(area, 2, 3);
        let pressed_count = app.keypad().buttons().filter(|b| b.pressed).count();
        assert_eq!(pressed_count, 1);
    }

    #[test]
    fn test_quit_flag() {
        let mut app = CalculatorApp::new();
        assert!(!app.should_quit());
        app.quit();
        assert!(app.should_quit());
    }
}
