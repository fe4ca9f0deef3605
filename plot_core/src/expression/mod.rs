//! # Expression Engine
//!
//! A small, explicit arithmetic language for `f(x)`:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary ('**' unary)?
//! primary := NUMBER | 'x' | '(' expr ')'
//! ```
//!
//! `**` is right-associative and binds tighter than a sign on its left, so
//! `-x**2` is `-(x**2)` while `2**-1` is `0.5`.
//!
//! Trees deeper than [`parser::MAX_DEPTH`], or brackets, signs and exponents
//! nested deeper than [`parser::MAX_NESTING`], are rejected with
//! [`ExpressionError::TooDeep`].
//!
//! ## Modules
//!
//! - [`lexer`] - Normalized text to tokens
//! - [`parser`] - Tokens to [`Expr`] tree
//!
//! ## Example
//!
//! ```rust
//! use plot_core::expression::Expr;
//!
//! let expr = Expr::parse("(x**2)+(50*x)-2**x").unwrap();
//! assert_eq!(expr.eval(1.0).unwrap(), 49.0);
//! ```

pub mod lexer;
pub mod parser;

use std::fmt;

use thiserror::Error;

/// Name of the single free variable
pub const VARIABLE: char = 'x';

/// Parse and evaluation failures.
///
/// These never reach the user directly; validation folds them all into
/// `ValidationError::InvalidEquation`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    /// A character the lexer has no token for
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    /// A numeric literal that does not parse (e.g. `1.2.3`)
    #[error("malformed number '{literal}' at position {position}")]
    MalformedNumber { literal: String, position: usize },

    /// A token that does not fit the grammar here
    #[error("unexpected token '{found}' at position {position}")]
    UnexpectedToken { found: String, position: usize },

    /// Input ended where an operand or ')' was expected
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// Nesting or operator chains beyond what the parser will build
    #[error("expression nested deeper than {limit} levels")]
    TooDeep { limit: usize },

    /// Division by exactly zero
    #[error("division by zero at x = {x}")]
    DivisionByZero { x: f64 },

    /// A power with no real result (negative base with a fractional exponent, 0 to a negative power)
    #[error("non-real result of {base} ** {exponent} at x = {x}")]
    NonRealPower { base: f64, exponent: f64, x: f64 },

    /// Overflow or another non-finite intermediate result
    #[error("non-finite result at x = {x}")]
    NonFinite { x: f64 },
}

/// Binary operators of the grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "**",
        }
    }
}

/// Parsed expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal
    Number(f64),
    /// The variable `x`
    Variable,
    /// Unary minus (unary plus is dropped by the parser)
    Negate(Box<Expr>),
    /// Binary operation
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Parse normalized expression text (no whitespace, `**` for powers).
    pub fn parse(source: &str) -> Result<Expr, ExpressionError> {
        let tokens = lexer::tokenize(source)?;
        parser::Parser::new(&tokens).parse()
    }

    /// Evaluate with the variable bound to `x`.
    ///
    /// Every intermediate result must be finite; division by zero and
    /// non-real powers are errors rather than NaN/inf.
    pub fn eval(&self, x: f64) -> Result<f64, ExpressionError> {
        let value = match self {
            Expr::Number(n) => *n,
            Expr::Variable => x,
            Expr::Negate(inner) => -inner.eval(x)?,
            Expr::Binary { op, lhs, rhs } => {
                let a = lhs.eval(x)?;
                let b = rhs.eval(x)?;
                apply(*op, a, b, x)?
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(ExpressionError::NonFinite { x })
        }
    }
}

fn apply(op: BinaryOp, a: f64, b: f64, x: f64) -> Result<f64, ExpressionError> {
    match op {
        BinaryOp::Add => Ok(a + b),
        BinaryOp::Sub => Ok(a - b),
        BinaryOp::Mul => Ok(a * b),
        BinaryOp::Div => {
            if b == 0.0 {
                Err(ExpressionError::DivisionByZero { x })
            } else {
                Ok(a / b)
            }
        }
        BinaryOp::Pow => power(a, b, x),
    }
}

fn power(base: f64, exponent: f64, x: f64) -> Result<f64, ExpressionError> {
    if base == 0.0 && exponent < 0.0 {
        return Err(ExpressionError::DivisionByZero { x });
    }
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(ExpressionError::NonRealPower { base, exponent, x });
    }
    Ok(base.powf(exponent))
}

impl fmt::Display for Expr {
    /// Fully parenthesized form, useful for debugging precedence.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Variable => write!(f, "{}", VARIABLE),
            Expr::Negate(inner) => write!(f, "(-{})", inner),
            Expr::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op.symbol(), rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(source: &str, x: f64) -> Result<f64, ExpressionError> {
        Expr::parse(source)?.eval(x)
    }

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(eval("1+2*3", 0.0).unwrap(), 7.0);
        assert_eq!(eval("(1+2)*3", 0.0).unwrap(), 9.0);
        assert_eq!(eval("10-4-3", 0.0).unwrap(), 3.0);
        assert_eq!(eval("8/4/2", 0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_variable_binding() {
        assert_eq!(eval("x", 3.5).unwrap(), 3.5);
        assert_eq!(eval("x*x+1", -2.0).unwrap(), 5.0);
    }

    #[test]
    fn test_power_is_right_associative() {
        // 2 ** (3 ** 2) = 2 ** 9
        assert_eq!(eval("2**3**2", 0.0).unwrap(), 512.0);
    }

    #[test]
    fn test_power_binds_tighter_than_leading_minus() {
        assert_eq!(eval("-x**2", 3.0).unwrap(), -9.0);
        assert_eq!(eval("(-x)**2", 3.0).unwrap(), 9.0);
    }

    #[test]
    fn test_signed_exponent() {
        assert_eq!(eval("2**-1", 0.0).unwrap(), 0.5);
        assert_eq!(eval("2**+2", 0.0).unwrap(), 4.0);
    }

    #[test]
    fn test_reference_expression() {
        // (x^2) + (50x) - 2^x at x = 1: 1 + 50 - 2
        assert_eq!(eval("(x**2)+(50*x)-2**x", 1.0).unwrap(), 49.0);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval("1/x", 0.0), Err(ExpressionError::DivisionByZero { x: 0.0 }));
        assert!(matches!(eval("0**-1", 1.0), Err(ExpressionError::DivisionByZero { .. })));
    }

    #[test]
    fn test_non_real_power() {
        assert!(matches!(eval("(-8)**0.5", 1.0), Err(ExpressionError::NonRealPower { .. })));
        // Integer exponents of negative bases are fine
        assert_eq!(eval("(-2)**3", 1.0).unwrap(), -8.0);
    }

    #[test]
    fn test_overflow_is_error() {
        assert_eq!(eval("10**400", 1.0), Err(ExpressionError::NonFinite { x: 1.0 }));
    }

    #[test]
    fn test_long_sum_evaluates() {
        let source = vec!["x"; 500].join("+");
        assert_eq!(eval(&source, 2.0).unwrap(), 1000.0);
    }

    #[test]
    fn test_display_shows_precedence() {
        let expr = Expr::parse("-x**2+1").unwrap();
        assert_eq!(expr.to_string(), "((-(x ** 2)) + 1)");
    }
}
