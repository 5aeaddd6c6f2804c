//! Lexing and parsing for the calculator's expression language.
//!
//! The language is deliberately small: decimal literals, the four binary
//! operators, and leading negation so committed results like `-4` re-parse.
//! There is no parenthesis, unary plus, or anything else a keypad cannot
//! produce; chained operators fail here rather than being reinterpreted.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::core::{EvalError, EvalResult, Operator};

/// A lexical unit of an expression string
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Binary operator symbol
    Operator(Operator),
}

/// Abstract syntax tree for a parsed expression
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(f64),
    /// Binary operation
    BinaryOp {
        /// Left operand
        left: Box<AstNode>,
        /// Operator
        op: Operator,
        /// Right operand
        right: Box<AstNode>,
    },
    /// Unary negation
    Negate(Box<AstNode>),
}

impl AstNode {
    /// Wraps a value as a literal node
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Builds a binary operation node, boxing both operands
    #[must_use]
    pub fn binary(left: AstNode, op: Operator, right: AstNode) -> Self {
        Self::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Builds a negation node around an operand
    #[must_use]
    pub fn negate(inner: AstNode) -> Self {
        Self::Negate(Box::new(inner))
    }
}

/// Streaming lexer over an expression string.
///
/// Works as an iterator of `EvalResult<Token>`, yielding tokens left to
/// right and an `EvalError::Malformed` for any character outside the
/// language.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Tokenizer<'a> {
    /// Creates a lexer over the given input
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    /// Drains the lexer into a token list, stopping at the first error
    pub fn tokenize(self) -> EvalResult<Vec<Token>> {
        self.collect()
    }

    // A literal is a digit/dot run with at most one dot; a second dot ends
    // the literal and whatever follows is left for the parser to reject.
    fn lex_number(&mut self, start: usize) -> EvalResult<Token> {
        let mut seen_dot = false;
        while let Some(&(_, c)) = self.chars.peek() {
            match c {
                '0'..='9' => {}
                '.' if !seen_dot => seen_dot = true,
                _ => break,
            }
            self.chars.next();
        }

        let end = self.chars.peek().map_or(self.input.len(), |&(i, _)| i);
        let text = &self.input[start..end];
        text.parse()
            .map(Token::Number)
            .map_err(|_| EvalError::Malformed(format!("Invalid number: '{text}'")))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = EvalResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, ch) = loop {
            let &(i, c) = self.chars.peek()?;
            if !c.is_whitespace() {
                break (i, c);
            }
            self.chars.next();
        };

        if ch.is_ascii_digit() || ch == '.' {
            return Some(self.lex_number(start));
        }

        self.chars.next();
        Some(match Operator::from_symbol(ch) {
            Some(op) => Ok(Token::Operator(op)),
            None => Err(EvalError::Malformed(format!(
                "Unexpected character: '{ch}'"
            ))),
        })
    }
}

/// Expression parser over a token list.
///
/// Uses precedence climbing: products bind tighter than sums, operators at
/// the same level group left, and a leading `-` negates its operand.
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Creates a parser from a token list
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Lexes and parses a complete expression string.
    ///
    /// The whole input must form one expression; leftover tokens after the
    /// parse are an error rather than being silently dropped.
    pub fn parse_str(input: &str) -> EvalResult<AstNode> {
        let tokens = Tokenizer::new(input.trim()).tokenize()?;
        let mut parser = Self::new(tokens);
        let ast = parser.parse()?;

        if let Some(extra) = parser.peek() {
            return Err(EvalError::Malformed(format!("Trailing input: {extra:?}")));
        }
        Ok(ast)
    }

    /// Parses the token list into an AST
    pub fn parse(&mut self) -> EvalResult<AstNode> {
        if self.tokens.is_empty() {
            return Err(EvalError::Empty);
        }
        self.parse_binary(0)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned()?;
        self.pos += 1;
        Some(token)
    }

    // Each recursion level consumes operators binding at least as tightly
    // as `min_prec`, so `1 + 2 * 3` groups the product first while
    // `8 - 3 - 2` still groups left.
    fn parse_binary(&mut self, min_prec: u8) -> EvalResult<AstNode> {
        let mut node = self.parse_operand()?;

        while let Some(&Token::Operator(op)) = self.peek() {
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }
            self.bump();
            let right = self.parse_binary(prec + 1)?;
            node = AstNode::binary(node, op, right);
        }

        Ok(node)
    }

    fn parse_operand(&mut self) -> EvalResult<AstNode> {
        match self.bump() {
            Some(Token::Number(value)) => Ok(AstNode::Number(value)),
            Some(Token::Operator(Operator::Subtract)) => {
                Ok(AstNode::negate(self.parse_operand()?))
            }
            Some(Token::Operator(op)) => Err(EvalError::Malformed(format!(
                "Expected a number, found '{op}'"
            ))),
            None => Err(EvalError::Malformed("Unexpected end of expression".into())),
        }
    }
}
