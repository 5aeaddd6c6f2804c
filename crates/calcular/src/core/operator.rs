//! Operator model: expression symbols, display glyphs, precedence, and
//! checked application.

use crate::core::{EvalError, EvalResult};

/// Type-safe operator enum - compile-time guarantee of valid operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// All operators in keypad column order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the character stored in expression strings
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Returns the Unicode glyph rendered on displays and keypads
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Maps an expression character back to its operator
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Returns the precedence level for operator ordering (higher binds first)
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }

    /// Applies the operator to two operands with checked arithmetic
    pub fn apply(self, lhs: f64, rhs: f64) -> EvalResult<f64> {
        let value = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                lhs / rhs
            }
        };
        check_finite(value)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::str::FromStr for Operator {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_symbol(ch)
                .ok_or_else(|| EvalError::Malformed(format!("Unknown operator: '{s}'"))),
            _ => Err(EvalError::Malformed(format!("Unknown operator: '{s}'"))),
        }
    }
}

/// Rejects results that left the finite range (overflow to infinity)
pub(crate) fn check_finite(value: f64) -> EvalResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===== Operator enum tests =====

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Add.symbol(), '+');
        assert_eq!(Operator::Subtract.symbol(), '-');
        assert_eq!(Operator::Multiply.symbol(), '*');
        assert_eq!(Operator::Divide.symbol(), '/');
    }

    #[test]
    fn test_operator_glyphs() {
        assert_eq!(Operator::Add.glyph(), '+');
        assert_eq!(Operator::Subtract.glyph(), '-');
        assert_eq!(Operator::Multiply.glyph(), '×');
        assert_eq!(Operator::Divide.glyph(), '÷');
    }

    #[test]
    fn test_operator_from_symbol() {
        assert_eq!(Operator::from_symbol('+'), Some(Operator::Add));
        assert_eq!(Operator::from_symbol('-'), Some(Operator::Subtract));
        assert_eq!(Operator::from_symbol('*'), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol('/'), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol('x'), None);
        assert_eq!(Operator::from_symbol('×'), None);
    }

    #[test]
    fn test_operator_symbol_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_operator_precedence() {
        assert_eq!(Operator::Add.precedence(), 1);
        assert_eq!(Operator::Subtract.precedence(), 1);
        assert_eq!(Operator::Multiply.precedence(), 2);
        assert_eq!(Operator::Divide.precedence(), 2);
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(Operator::Multiply.to_string(), "*");
    }

    #[test]
    fn test_operator_from_str() {
        assert_eq!("+".parse::<Operator>(), Ok(Operator::Add));
        assert_eq!("/".parse::<Operator>(), Ok(Operator::Divide));
        assert!(matches!(
            "**".parse::<Operator>(),
            Err(EvalError::Malformed(_))
        ));
        assert!(matches!(
            "".parse::<Operator>(),
            Err(EvalError::Malformed(_))
        ));
    }

    // ===== Checked application tests =====

    #[test]
    fn test_apply_add() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operator::Add.apply(-2.0, -3.0), Ok(-5.0));
    }

    #[test]
    fn test_apply_subtract() {
        assert_eq!(Operator::Subtract.apply(5.0, 3.0), Ok(2.0));
        assert_eq!(Operator::Subtract.apply(3.0, 5.0), Ok(-2.0));
    }

    #[test]
    fn test_apply_multiply() {
        assert_eq!(Operator::Multiply.apply(4.0, 5.0), Ok(20.0));
        assert_eq!(Operator::Multiply.apply(-4.0, 5.0), Ok(-20.0));
        assert_eq!(Operator::Multiply.apply(4.0, 0.0), Ok(0.0));
    }

    #[test]
    fn test_apply_divide() {
        assert_eq!(Operator::Divide.apply(6.0, 2.0), Ok(3.0));
        assert_eq!(Operator::Divide.apply(7.0, 2.0), Ok(3.5));
        assert_eq!(Operator::Divide.apply(0.0, 5.0), Ok(0.0));
    }

    #[test]
    fn test_apply_divide_by_zero() {
        assert_eq!(
            Operator::Divide.apply(10.0, 0.0),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            Operator::Divide.apply(0.0, 0.0),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_apply_overflow() {
        assert_eq!(
            Operator::Multiply.apply(f64::MAX, 2.0),
            Err(EvalError::Overflow)
        );
        assert_eq!(Operator::Add.apply(f64::MAX, f64::MAX), Err(EvalError::Overflow));
    }

    #[test]
    fn test_check_finite() {
        assert_eq!(check_finite(1.5), Ok(1.5));
        assert_eq!(check_finite(f64::INFINITY), Err(EvalError::Overflow));
        assert_eq!(check_finite(f64::NEG_INFINITY), Err(EvalError::Overflow));
        assert_eq!(check_finite(f64::NAN), Err(EvalError::Overflow));
    }

    // ===== Property-based tests =====

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e10f64..1e10f64, b in -1e10f64..1e10f64) {
            let r1 = Operator::Add.apply(a, b);
            let r2 = Operator::Add.apply(b, a);
            match (r1, r2) {
                (Ok(v1), Ok(v2)) => prop_assert!((v1 - v2).abs() < 1e-10),
                (Err(_), Err(_)) => {}
                _ => prop_assert!(false, "Commutativity violated"),
            }
        }

        #[test]
        fn prop_multiply_commutative(a in -1e5f64..1e5f64, b in -1e5f64..1e5f64) {
            let r1 = Operator::Multiply.apply(a, b);
            let r2 = Operator::Multiply.apply(b, a);
            match (r1, r2) {
                (Ok(v1), Ok(v2)) => prop_assert!((v1 - v2).abs() < 1e-10),
                (Err(_), Err(_)) => {}
                _ => prop_assert!(false, "Commutativity violated"),
            }
        }

        #[test]
        fn prop_add_identity(a in -1e10f64..1e10f64) {
            prop_assert_eq!(Operator::Add.apply(a, 0.0), Ok(a));
        }

        #[test]
        fn prop_multiply_identity(a in -1e10f64..1e10f64) {
            prop_assert_eq!(Operator::Multiply.apply(a, 1.0), Ok(a));
        }

        #[test]
        fn prop_divide_by_self(a in -1e10f64..1e10f64) {
            prop_assume!(a != 0.0);
            let result = Operator::Divide.apply(a, a).unwrap();
            prop_assert!((result - 1.0).abs() < 1e-10);
        }

        #[test]
        fn prop_sub_negates_add(a in -1e8f64..1e8f64, b in -1e8f64..1e8f64) {
            let sum = Operator::Add.apply(a, b).unwrap();
            let back = Operator::Subtract.apply(sum, b).unwrap();
            prop_assert!((back - a).abs() < 1e-4);
        }
    }
}
