//! Recursive-descent parser
//!
//! ```text
//! sum     := product (('+' | '-') product)*
//! product := unary (('*' | '/') unary | power)*
//! unary   := ('+' | '-') unary | power
//! power   := primary ('^' unary)?
//! primary := NUMBER | IDENTIFIER | '(' sum ')'
//! ```
//!
//! A `power` directly after another factor is an implicit product, so `3x`,
//! `2(x + 1)` and `(x + 1)(x - 2)` all parse. Exponentiation is right
//! associative and binds tighter than unary minus: `-x^2` is `-(x^2)`.

use crate::ast::{BinaryOp, Expr};
use crate::error::{ParseError, Result};
use crate::lexer::{tokenize, Token, TokenKind};

/// Parse `input` into an expression tree
pub fn parse_expression(input: &str) -> Result<Expr> {
    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens, cursor: 0 };
    let expr = parser.sum()?;
    match parser.peek() {
        Some(token) => Err(ParseError::unexpected(token.kind.to_string(), token.position)),
        None => Ok(expr),
    }
}

struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|token| &token.kind)
    }

    /// Offset of the next token, or of the end of input
    fn position(&self) -> usize {
        self.peek()
            .or_else(|| self.tokens.last())
            .map_or(0, |token| token.position)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    fn sum(&mut self) -> Result<Expr> {
        let mut expr = self.product()?;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Plus) => BinaryOp::Add,
                Some(TokenKind::Minus) => BinaryOp::Sub,
                _ => return Ok(expr),
            };
            self.advance();
            let position = self.position();
            let rhs = self.product()?;
            expr = Expr::binary(op, expr, rhs, position);
        }
    }

    fn product(&mut self) -> Result<Expr> {
        let mut expr = self.unary()?;
        loop {
            let (op, rhs, position) = match self.peek_kind() {
                Some(TokenKind::Star) => {
                    self.advance();
                    let position = self.position();
                    (BinaryOp::Mul, self.unary()?, position)
                }
                Some(TokenKind::Slash) => {
                    self.advance();
                    let position = self.position();
                    (BinaryOp::Div, self.unary()?, position)
                }
                Some(TokenKind::Number(_))
                | Some(TokenKind::Identifier(_))
                | Some(TokenKind::LeftParen) => {
                    let position = self.position();
                    (BinaryOp::Mul, self.power()?, position)
                }
                _ => return Ok(expr),
            };
            expr = Expr::binary(op, expr, rhs, position);
        }
    }

    fn unary(&mut self) -> Result<Expr> {
        match self.peek_kind() {
            Some(TokenKind::Plus) => {
                self.advance();
                self.unary()
            }
            Some(TokenKind::Minus) => {
                self.advance();
                Ok(Expr::Neg(Box::new(self.unary()?)))
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Expr> {
        let base = self.primary()?;
        if self.peek_kind() != Some(&TokenKind::Caret) {
            return Ok(base);
        }
        self.advance();
        let position = self.position();
        let exponent = self.unary()?;
        Ok(Expr::binary(BinaryOp::Pow, base, exponent, position))
    }

    fn primary(&mut self) -> Result<Expr> {
        let token = self.advance().ok_or(ParseError::UnexpectedEnd)?;
        match token.kind {
            TokenKind::Number(value) => Ok(Expr::Number(value)),
            TokenKind::Identifier(name) => Ok(Expr::Variable(name)),
            TokenKind::LeftParen => {
                let inner = self.sum()?;
                match self.advance() {
                    Some(Token {
                        kind: TokenKind::RightParen,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(ParseError::unexpected(other.kind.to_string(), other.position)),
                    None => Err(ParseError::UnexpectedEnd),
                }
            }
            other => Err(ParseError::unexpected(other.to_string(), token.position)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(input: &str) -> String {
        parse_expression(input).unwrap().to_string()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(shape("1 + 2*x^2"), "(1 + (2 * (x ^ 2)))");
        assert_eq!(shape("-x^2"), "-(x ^ 2)");
        assert_eq!(shape("x - 1 - 2"), "((x - 1) - 2)");
        assert_eq!(shape("x^2^3"), "(x ^ (2 ^ 3))");
    }

    #[test]
    fn test_implicit_multiplication() {
        assert_eq!(shape("3x"), "(3 * x)");
        assert_eq!(shape("2(x + 1)"), "(2 * (x + 1))");
        assert_eq!(shape("(x + 1)(x - 2)"), "((x + 1) * (x - 2))");
        assert_eq!(shape("2x^3"), "(2 * (x ^ 3))");
    }

    #[test]
    fn test_unary_signs() {
        assert_eq!(shape("+x"), "x");
        assert_eq!(shape("--x"), "--x");
        assert_eq!(shape("x^-1"), "(x ^ -1)");
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_expression(""), Err(ParseError::UnexpectedEnd));
        assert_eq!(parse_expression("x +"), Err(ParseError::UnexpectedEnd));
        assert_eq!(parse_expression("(x + 1"), Err(ParseError::UnexpectedEnd));
        assert_eq!(
            parse_expression("x + 1)"),
            Err(ParseError::unexpected(")", 5))
        );
        assert_eq!(
            parse_expression("x * * 2"),
            Err(ParseError::unexpected("*", 4))
        );
    }
}
