//! Tokenizer for polynomial expressions

use crate::error::{ParseError, Result};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;
use std::fmt;

/// Kind of a lexical token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Integer or decimal literal, held exactly
    Number(BigRational),
    /// Variable name
    Identifier(String),
    Plus,
    Minus,
    Star,
    Slash,
    /// `^` or `**`
    Caret,
    LeftParen,
    RightParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(value) => write!(f, "{value}"),
            TokenKind::Identifier(name) => write!(f, "{name}"),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::Caret => write!(f, "^"),
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
        }
    }
}

/// A token and the character offset where it starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

/// Split `input` into tokens, skipping whitespace
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let position = i;
        let kind = match c {
            c if c.is_whitespace() => {
                i += 1;
                continue;
            }
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '/' => TokenKind::Slash,
            '^' => TokenKind::Caret,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '*' if chars.get(i + 1) == Some(&'*') => {
                i += 1;
                TokenKind::Caret
            }
            '*' => TokenKind::Star,
            c if c.is_ascii_digit() || c == '.' => {
                let end = scan(&chars, i, |c| c.is_ascii_digit() || c == '.');
                let literal: String = chars[i..end].iter().collect();
                i = end;
                tokens.push(Token {
                    kind: TokenKind::Number(parse_number(&literal, position)?),
                    position,
                });
                continue;
            }
            c if c.is_alphabetic() || c == '_' => {
                let end = scan(&chars, i, |c| c.is_alphanumeric() || c == '_');
                let name: String = chars[i..end].iter().collect();
                i = end;
                tokens.push(Token {
                    kind: TokenKind::Identifier(name),
                    position,
                });
                continue;
            }
            character => {
                return Err(ParseError::UnexpectedCharacter {
                    character,
                    position,
                })
            }
        };
        tokens.push(Token { kind, position });
        i += 1;
    }

    Ok(tokens)
}

fn scan(chars: &[char], start: usize, accept: impl Fn(char) -> bool) -> usize {
    chars[start..]
        .iter()
        .position(|c| !accept(*c))
        .map_or(chars.len(), |offset| start + offset)
}

/// Convert `123`, `2.5` or `.75` into an exact rational
fn parse_number(literal: &str, position: usize) -> Result<BigRational> {
    let malformed = || ParseError::MalformedNumber {
        literal: literal.to_string(),
        position,
    };

    let (whole, fraction) = match literal.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (literal, ""),
    };
    let has_point = literal.contains('.');
    if fraction.contains('.') || (has_point && fraction.is_empty()) {
        return Err(malformed());
    }

    let digits = format!("{whole}{fraction}");
    let numerator: BigInt = digits.parse().map_err(|_| malformed())?;
    let mut denominator = BigInt::one();
    for _ in 0..fraction.len() {
        denominator *= 10;
    }
    Ok(BigRational::new(numerator, denominator))
}
