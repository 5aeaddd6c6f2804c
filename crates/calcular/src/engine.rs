//! Two-line expression engine: an accumulating total line plus the entry
//! being typed.
//!
//! Every calculator shell drives the same [`ExpressionEngine`]: digits grow
//! the current entry, operators commit it onto the total, and evaluation
//! folds the accumulated total back into a single result entry. Failures
//! blank the entry line but never discard the committed total, so the user
//! can keep typing where they left off.

use crate::core::{check_finite, evaluator, EvalError, EvalResult, Operator};

/// Calculator state shared by the terminal shell and the harness.
///
/// # Example
///
/// ```
/// use calcular::engine::ExpressionEngine;
/// use calcular::core::Operator;
///
/// let mut engine = ExpressionEngine::new();
/// engine.push_digit('2');
/// engine.push_operator(Operator::Add);
/// engine.push_digit('3');
/// engine.evaluate().unwrap();
/// assert_eq!(engine.current_display(), "5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionEngine {
    total: String,
    current: String,
}

impl ExpressionEngine {
    /// Widest entry the display line shows before truncation
    pub const DISPLAY_WIDTH: usize = 11;

    /// Creates an engine with both expression lines empty
    #[must_use]
    pub fn new() -> Self {
        Self {
            total: String::new(),
            current: String::new(),
        }
    }

    /// Appends a digit or decimal point to the current entry.
    ///
    /// Entry is permissive: nothing validates the literal here, so repeated
    /// decimal points accumulate and surface later as a malformed literal.
    pub fn push_digit(&mut self, value: char) {
        self.current.push(value);
    }

    /// Commits the current entry plus `op` onto the total expression.
    ///
    /// The entry line empties so the next operand starts fresh. Pressing an
    /// operator with nothing typed commits the bare symbol; the mistake is
    /// reported at evaluation time, not here.
    pub fn push_operator(&mut self, op: Operator) {
        self.current.push(op.symbol());
        self.total.push_str(&self.current);
        self.current.clear();
    }

    /// Resets both expression lines to empty
    pub fn clear(&mut self) {
        self.total.clear();
        self.current.clear();
    }

    /// Squares the current entry in place.
    ///
    /// On failure the entry line is blanked and the total left untouched.
    pub fn square(&mut self) -> EvalResult<()> {
        let result = self
            .current_value()
            .and_then(|value| check_finite(value * value));
        self.replace_current(result)
    }

    /// Replaces the current entry with its square root.
    ///
    /// Negative entries are rejected; on any failure the entry line is
    /// blanked and the total left untouched.
    pub fn sqrt(&mut self) -> EvalResult<()> {
        let result = self.current_value().and_then(|value| {
            if value < 0.0 {
                Err(EvalError::NegativeSquareRoot)
            } else {
                check_finite(value.sqrt())
            }
        });
        self.replace_current(result)
    }

    /// Evaluates the accumulated expression.
    ///
    /// The current entry is committed onto the total first, mirroring what
    /// the two display lines show at the moment of the keypress. On success
    /// the result becomes the new entry and the total clears, ready to be
    /// extended by the next operator. On failure the entry stays blank and
    /// the total keeps the full committed expression.
    pub fn evaluate(&mut self) -> EvalResult<()> {
        self.total.push_str(&self.current);
        self.current.clear();

        // An early return here leaves exactly the failure state: entry
        // blank, total intact.
        let value = evaluator::evaluate_str(&self.total)?;
        self.current = format_value(value);
        self.total.clear();
        Ok(())
    }

    /// Renders the total line with every operator shown as a spaced glyph
    #[must_use]
    pub fn total_display(&self) -> String {
        let mut out = String::with_capacity(self.total.len() * 3);
        for ch in self.total.chars() {
            match Operator::from_symbol(ch) {
                Some(op) => {
                    out.push(' ');
                    out.push(op.glyph());
                    out.push(' ');
                }
                None => out.push(ch),
            }
        }
        out
    }

    /// Renders the entry line, truncated to [`Self::DISPLAY_WIDTH`] characters
    #[must_use]
    pub fn current_display(&self) -> String {
        self.current.chars().take(Self::DISPLAY_WIDTH).collect()
    }

    /// Raw committed expression prefix
    #[must_use]
    pub fn total(&self) -> &str {
        &self.total
    }

    /// Raw in-progress entry, or the last result
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// True when both lines are empty
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.total.is_empty() && self.current.is_empty()
    }

    /// The entry line parsed as one numeric literal.
    ///
    /// Results re-enter the entry line, so a leading minus is legal here
    /// even though the keypad cannot type one.
    fn current_value(&self) -> EvalResult<f64> {
        if self.current.is_empty() {
            return Err(EvalError::Empty);
        }
        self.current
            .parse()
            .map_err(|_| EvalError::Malformed(format!("Invalid number: '{}'", self.current)))
    }

    fn replace_current(&mut self, result: EvalResult<f64>) -> EvalResult<()> {
        match result {
            Ok(value) => {
                self.current = format_value(value);
                Ok(())
            }
            Err(err) => {
                self.current.clear();
                Err(err)
            }
        }
    }
}

impl Default for ExpressionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical decimal form of a result value.
///
/// Integral values below 1e15 print with no fractional part; everything else
/// keeps up to ten fractional digits with trailing zeros trimmed.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.10}");
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
