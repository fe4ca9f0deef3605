//! Tokenizer for normalized expressions.
//!
//! Input is expected to be normalized already (no whitespace, `**` for
//! powers). Whitespace is still rejected here so the lexer never silently
//! accepts text that skipped normalization.

use std::fmt;

use super::{ExpressionError, VARIABLE};

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Variable,
    Plus,
    Minus,
    Star,
    Slash,
    Power,
    LParen,
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::Variable => write!(f, "{}", VARIABLE),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::Power => write!(f, "**"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
        }
    }
}

/// A token and the character offset it starts at
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

/// Split normalized expression text into tokens.
///
/// Numbers are `DIGITS`, `DIGITS.`, `DIGITS.DIGITS` or `.DIGITS`; a second
/// decimal point inside one literal is a [`ExpressionError::MalformedNumber`].
/// `**` is always the power operator, so `x***2` lexes as `x ** * 2`
/// and is rejected by the parser.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ExpressionError> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let position = i;

        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '/' => TokenKind::Slash,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '*' => {
                if chars.get(i + 1) == Some(&'*') {
                    i += 1;
                    TokenKind::Power
                } else {
                    TokenKind::Star
                }
            }
            c if c == VARIABLE => TokenKind::Variable,
            c if c.is_ascii_digit() || c == '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                let literal: String = chars[start..i].iter().collect();
                tokens.push(Token {
                    kind: TokenKind::Number(parse_number(&literal, start)?),
                    position: start,
                });
                continue;
            }
            other => {
                return Err(ExpressionError::UnexpectedCharacter {
                    character: other,
                    position,
                })
            }
        };

        tokens.push(Token { kind, position });
        i += 1;
    }

    Ok(tokens)
}

fn parse_number(literal: &str, position: usize) -> Result<f64, ExpressionError> {
    let malformed = || ExpressionError::MalformedNumber {
        literal: literal.to_string(),
        position,
    };

    // A lone "." has no digits at all
    if literal.matches('.').count() > 1 || !literal.chars().any(|c| c.is_ascii_digit()) {
        return Err(malformed());
    }

    literal.parse::<f64>().map_err(|_| malformed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_operators_and_parens() {
        assert_eq!(
            kinds("(x+1)*2-3/4"),
            vec![
                TokenKind::LParen,
                TokenKind::Variable,
                TokenKind::Plus,
                TokenKind::Number(1.0),
                TokenKind::RParen,
                TokenKind::Star,
                TokenKind::Number(2.0),
                TokenKind::Minus,
                TokenKind::Number(3.0),
                TokenKind::Slash,
                TokenKind::Number(4.0),
            ]
        );
    }

    #[test]
    fn test_power_token() {
        assert_eq!(
            kinds("x**2"),
            vec![TokenKind::Variable, TokenKind::Power, TokenKind::Number(2.0)]
        );
        assert_eq!(
            kinds("x***2"),
            vec![TokenKind::Variable, TokenKind::Power, TokenKind::Star, TokenKind::Number(2.0)]
        );
    }

    #[test]
    fn test_number_forms() {
        assert_eq!(kinds("12"), vec![TokenKind::Number(12.0)]);
        assert_eq!(kinds("1.5"), vec![TokenKind::Number(1.5)]);
        assert_eq!(kinds(".5"), vec![TokenKind::Number(0.5)]);
        assert_eq!(kinds("2."), vec![TokenKind::Number(2.0)]);
    }

    #[test]
    fn test_malformed_numbers() {
        assert!(matches!(tokenize("1.2.3"), Err(ExpressionError::MalformedNumber { .. })));
        assert!(matches!(tokenize("x+."), Err(ExpressionError::MalformedNumber { position: 2, .. })));
    }

    #[test]
    fn test_unexpected_character() {
        assert_eq!(
            tokenize("x%2"),
            Err(ExpressionError::UnexpectedCharacter { character: '%', position: 1 })
        );
        assert!(tokenize("x + 1").is_err());
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize("x**10").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 3]);
    }
}
