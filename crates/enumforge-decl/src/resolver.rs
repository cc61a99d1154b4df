//! Constant resolution for explicit member values.
//!
//! The builders never evaluate expressions themselves. An explicit value given
//! as text is handed to a [`ConstantResolver`] supplied by the caller.
//!
//! Two resolvers ship with the crate:
//! - [`LiteralResolver`] evaluates integer literals (decimal, `0x`, `0o`, `0b`,
//!   with `_` separators), unary `-`/`+`, parentheses, `<<`, and `|`.
//!   Arithmetic is checked; overflow is an error rather than a wrapped value.
//! - [`ResolvedOnly`] rejects every expression and accepts only values the
//!   caller resolved up front.

use smallvec::SmallVec;
use thiserror::Error;

use enumforge_common::limits::MAX_EXPR_DEPTH;

/// Why an expression could not be resolved to an integer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct ResolveError {
    pub reason: String,
}

impl ResolveError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Resolves a constant expression to an integer.
pub trait ConstantResolver {
    fn resolve(&self, expr: &str) -> Result<i128, ResolveError>;
}

impl<F> ConstantResolver for F
where
    F: Fn(&str) -> Result<i128, ResolveError>,
{
    fn resolve(&self, expr: &str) -> Result<i128, ResolveError> {
        self(expr)
    }
}

/// Accepts only pre-resolved integers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolvedOnly;

impl ConstantResolver for ResolvedOnly {
    fn resolve(&self, expr: &str) -> Result<i128, ResolveError> {
        Err(ResolveError::new(format!(
            "expression `{expr}` must be resolved before the type is built"
        )))
    }
}

/// Evaluates integer literals combined with `-`, `+`, `<<`, `|`, and parentheses.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralResolver;

impl ConstantResolver for LiteralResolver {
    fn resolve(&self, expr: &str) -> Result<i128, ResolveError> {
        let tokens = tokenize(expr)?;
        let mut parser = Parser {
            tokens,
            pos: 0,
            depth: 0,
        };
        let value = parser.parse_or()?;
        if parser.pos != parser.tokens.len() {
            return Err(ResolveError::new(format!(
                "unexpected trailing input in `{expr}`"
            )));
        }
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Int(i128),
    Minus,
    Plus,
    Shl,
    Bar,
    LParen,
    RParen,
}

fn tokenize(expr: &str) -> Result<SmallVec<[Token; 8]>, ResolveError> {
    let bytes = expr.as_bytes();
    let mut tokens = SmallVec::new();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        match b {
            b' ' | b'\t' | b'\n' | b'\r' => i += 1,
            b'-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            b'+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            b'|' => {
                tokens.push(Token::Bar);
                i += 1;
            }
            b'(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            b')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            b'<' if bytes.get(i + 1) == Some(&b'<') => {
                tokens.push(Token::Shl);
                i += 2;
            }
            b'0'..=b'9' => {
                let start = i;
                while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                    i += 1;
                }
                tokens.push(Token::Int(parse_literal(&expr[start..i])?));
            }
            _ => {
                return Err(ResolveError::new(format!(
                    "unsupported character `{}` in `{expr}`",
                    expr[i..].chars().next().unwrap_or('?')
                )));
            }
        }
    }
    if tokens.is_empty() {
        return Err(ResolveError::new("empty expression"));
    }
    Ok(tokens)
}

fn parse_literal(text: &str) -> Result<i128, ResolveError> {
    let cleaned: String = text.chars().filter(|&c| c != '_').collect();
    let lower = cleaned.to_ascii_lowercase();
    let (digits, radix) = if let Some(rest) = lower.strip_prefix("0x") {
        (rest, 16)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (rest, 8)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (rest, 2)
    } else {
        (lower.as_str(), 10)
    };
    i128::from_str_radix(digits, radix)
        .map_err(|_| ResolveError::new(format!("`{text}` is not an integer literal")))
}

struct Parser {
    tokens: SmallVec<[Token; 8]>,
    pos: usize,
    depth: u32,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn parse_or(&mut self) -> Result<i128, ResolveError> {
        let mut value = self.parse_shift()?;
        while self.peek() == Some(&Token::Bar) {
            self.pos += 1;
            value |= self.parse_shift()?;
        }
        Ok(value)
    }

    fn parse_shift(&mut self) -> Result<i128, ResolveError> {
        let mut value = self.parse_unary()?;
        while self.peek() == Some(&Token::Shl) {
            self.pos += 1;
            let amount = self.parse_unary()?;
            let amount = u32::try_from(amount)
                .ok()
                .filter(|&a| a < 127)
                .ok_or_else(|| ResolveError::new(format!("invalid shift amount {amount}")))?;
            value = value
                .checked_mul(1i128 << amount)
                .ok_or_else(|| ResolveError::new("shift overflows"))?;
        }
        Ok(value)
    }

    fn parse_unary(&mut self) -> Result<i128, ResolveError> {
        if self.depth >= MAX_EXPR_DEPTH {
            return Err(ResolveError::new("expression nests too deeply"));
        }
        self.depth += 1;
        let result = self.parse_primary();
        self.depth -= 1;
        result
    }

    fn parse_primary(&mut self) -> Result<i128, ResolveError> {
        match self.bump() {
            Some(Token::Minus) => self
                .parse_unary()?
                .checked_neg()
                .ok_or_else(|| ResolveError::new("negation overflows")),
            Some(Token::Plus) => self.parse_unary(),
            Some(Token::Int(value)) => Ok(value),
            Some(Token::LParen) => {
                let value = self.parse_or()?;
                match self.bump() {
                    Some(Token::RParen) => Ok(value),
                    _ => Err(ResolveError::new("unbalanced parentheses")),
                }
            }
            Some(token) => Err(ResolveError::new(format!("unexpected {token:?}"))),
            None => Err(ResolveError::new("unexpected end of expression")),
        }
    }
}
