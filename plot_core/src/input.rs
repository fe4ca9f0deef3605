//! # Input Model
//!
//! Holds what the user typed and turns it into something the sampler can use.
//!
//! ## Validation order
//!
//! Checks run in a fixed precedence so that the UI always surfaces the same
//! single message when several problems exist at once:
//!
//! 1. Range (`min < max`)
//! 2. Missing function (blank text)
//! 3. Character allow-list (after normalization)
//! 4. Trial evaluation at `x = 1`
//!
//! ## Example
//!
//! ```rust
//! use plot_core::errors::ValidationError;
//! use plot_core::input::{normalize, validate, ExpressionInput};
//!
//! assert_eq!(normalize("(x ^ 2) + 1").as_str(), "(x**2)+1");
//!
//! let input = ExpressionInput::new("x%", -10.0, 10.0);
//! assert!(matches!(validate(&input), Err(ValidationError::InvalidCharacter { character: '%', .. })));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::expression::{Expr, VARIABLE};

/// Characters accepted in a normalized expression, in display order.
pub const ALLOWED_CHARACTERS: [char; 18] = [
    VARIABLE, '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '(', ')', '+', '-', '*', '/',
];

/// Lowest value a bound input accepts
pub const BOUND_MIN: f64 = -10_000.0;

/// Highest value a bound input accepts
pub const BOUND_MAX: f64 = 10_000.0;

/// Decimals kept by a bound input
pub const BOUND_DECIMALS: i32 = 2;

/// Value the variable is bound to for the trial evaluation
pub const TRIAL_X: f64 = 1.0;

/// Check a single character against the allow-list
pub fn is_allowed(c: char) -> bool {
    ALLOWED_CHARACTERS.contains(&c)
}

/// Allow-list joined for user-facing messages: `"x, 0, 1, ..., /"`
pub fn allowed_characters_display() -> String {
    ALLOWED_CHARACTERS
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Clamp and round a bound the way a numeric spinner does.
///
/// Out-of-range values snap to `[BOUND_MIN, BOUND_MAX]`, values are rounded
/// to [`BOUND_DECIMALS`] places, NaN becomes `0.0`.
pub fn clamp_bound(value: f64) -> f64 {
    clamp_bound_to(value, BOUND_MIN, BOUND_MAX)
}

/// [`clamp_bound`] with caller-supplied limits. Rounding happens first, so
/// the result never leaves `[lo, hi]`.
pub fn clamp_bound_to(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    let scale = 10f64.powi(BOUND_DECIMALS);
    let rounded = ((value * scale).round() / scale).clamp(lo, hi);
    // Avoid displaying "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Parse bound text typed by the user.
///
/// Unparseable text falls back to `0.0`, the spinner default.
pub fn parse_bound(text: &str) -> f64 {
    parse_bound_to(text, BOUND_MIN, BOUND_MAX)
}

/// [`parse_bound`] with caller-supplied limits.
pub fn parse_bound_to(text: &str, lo: f64, hi: f64) -> f64 {
    clamp_bound_to(text.trim().parse::<f64>().unwrap_or(0.0), lo, hi)
}

/// What the user submitted for one plot attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionInput {
    /// Function text exactly as typed (e.g. `"(x ^ 2) + 1"`)
    pub raw_text: String,

    /// Lower bound of the domain
    pub min: f64,

    /// Upper bound of the domain
    pub max: f64,
}

impl ExpressionInput {
    pub fn new(raw_text: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            raw_text: raw_text.into(),
            min,
            max,
        }
    }

    /// Validate this input. See [`validate`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(self)
    }

    /// Normalized form of the function text
    pub fn normalized(&self) -> NormalizedExpression {
        normalize(&self.raw_text)
    }
}

/// Function text after whitespace removal and `^` → `**` rewriting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedExpression(String);

impl NormalizedExpression {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// First character outside the allow-list, if any
    pub fn first_disallowed(&self) -> Option<char> {
        self.0.chars().find(|c| !is_allowed(*c))
    }

    /// Parse into an expression tree
    pub fn parse(&self) -> Result<Expr, crate::expression::ExpressionError> {
        Expr::parse(&self.0)
    }
}

impl fmt::Display for NormalizedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedExpression {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Remove all whitespace, then rewrite every `^` into `**`.
///
/// Pure and idempotent; no other transformation is applied.
pub fn normalize(raw: &str) -> NormalizedExpression {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    NormalizedExpression(compact.replace('^', "**"))
}

/// Validate one plot attempt.
///
/// Returns the first failing check in precedence order: range, missing
/// function, character allow-list, trial evaluation.
pub fn validate(input: &ExpressionInput) -> Result<(), ValidationError> {
    if input.min.is_nan() || input.max.is_nan() || input.min >= input.max {
        tracing::debug!(min = input.min, max = input.max, "rejected: invalid range");
        return Err(ValidationError::InvalidRange);
    }

    if input.raw_text.trim().is_empty() {
        tracing::debug!("rejected: missing function");
        return Err(ValidationError::MissingFunction);
    }

    let normalized = normalize(&input.raw_text);

    if let Some(c) = normalized.first_disallowed() {
        tracing::debug!(character = %c, "rejected: invalid character");
        return Err(ValidationError::invalid_character(c));
    }

    if let Err(err) = normalized.parse().and_then(|expr| expr.eval(TRIAL_X)) {
        tracing::debug!(expression = %normalized, error = %err, "rejected: trial evaluation failed");
        return Err(ValidationError::InvalidEquation);
    }

    tracing::debug!(expression = %normalized, "expression accepted");
    Ok(())
}
