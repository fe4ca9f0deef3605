//! # Evaluator / Sampler
//!
//! Discretizes `[min, max]` into evenly spaced points and evaluates the
//! expression at each of them.
//!
//! ## Failure policy
//!
//! A failure at any single point (division by zero, non-real power,
//! overflow) aborts the whole sample as [`ValidationError::InvalidEquation`].
//! The trial evaluation in `validate` only probes `x = 1`, so this is where
//! domain holes such as `1/x` at `x = 0` are caught.
//!
//! ## Example
//!
//! ```rust
//! use plot_core::input::normalize;
//! use plot_core::sampler::sample;
//!
//! let samples = sample(&normalize("5"), -10.0, 10.0, 5).unwrap();
//! assert_eq!(samples.xs(), vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
//! assert!(samples.ys().iter().all(|y| *y == 5.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::input::NormalizedExpression;

/// Number of points used when the caller has no preference
pub const DEFAULT_POINT_COUNT: usize = 50;

/// Ordered `(x, f(x))` pairs for one plot action.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SampleSet {
    points: Vec<(f64, f64)>,
}

impl SampleSet {
    pub fn from_points(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|(x, _)| *x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|(_, y)| *y).collect()
    }

    /// `(first x, last x)`, or `None` when empty
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((first.0, last.0))
    }

    /// `(min y, max y)`, or `None` when empty
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.points.iter().map(|(_, y)| *y).fold(None, |acc, y| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })
    }
}

/// `count` evenly spaced values over `[min, max]`, both ends included.
///
/// `count == 0` gives nothing and `count == 1` gives `[min]`. The last value
/// is exactly `max` rather than an accumulated `min + (n-1)*step`.
pub fn linspace(min: f64, max: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count - 1).map(|i| min + i as f64 * step).collect();
            values.push(max);
            values
        }
    }
}

/// Sample `expr` at `point_count` evenly spaced points over `[min, max]`.
///
/// The expression is parsed once per call; nothing is cached between calls.
/// Constant expressions yield the constant at every x.
pub fn sample(
    expr: &NormalizedExpression,
    min: f64,
    max: f64,
    point_count: usize,
) -> Result<SampleSet, ValidationError> {
    let parsed = expr.parse().map_err(|err| {
        tracing::debug!(expression = %expr, error = %err, "sampling aborted: parse failed");
        ValidationError::InvalidEquation
    })?;

    let points = linspace(min, max, point_count)
        .into_iter()
        .map(|x| parsed.eval(x).map(|y| (x, y)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| {
            tracing::debug!(expression = %expr, error = %err, "sampling aborted: evaluation failed");
            ValidationError::InvalidEquation
        })?;

    tracing::debug!(expression = %expr, points = points.len(), "sampled");
    Ok(SampleSet::from_points(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::normalize;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_linspace_endpoints() {
        let xs = linspace(-10.0, 10.0, 50);
        assert_eq!(xs.len(), 50);
        assert_eq!(xs[0], -10.0);
        assert_eq!(xs[49], 10.0);
    }

    #[test]
    fn test_linspace_even_spacing() {
        let xs = linspace(0.0, 1.0, 5);
        assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
        assert_eq!(linspace(2.0, 3.0, 2), vec![2.0, 3.0]);
    }

    #[test]
    fn test_sample_quadratic() {
        let samples = sample(&normalize("x^2"), -2.0, 2.0, 5).unwrap();
        assert_eq!(
            samples.points(),
            &[(-2.0, 4.0), (-1.0, 1.0), (0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]
        );
        assert_eq!(samples.y_range(), Some((0.0, 4.0)));
        assert_eq!(samples.x_range(), Some((-2.0, 2.0)));
    }

    #[test]
    fn test_constant_is_broadcast() {
        let samples = sample(&normalize("5"), -10.0, 10.0, DEFAULT_POINT_COUNT).unwrap();
        assert_eq!(samples.len(), DEFAULT_POINT_COUNT);
        assert!(samples.ys().iter().all(|y| *y == 5.0));
    }

    #[test]
    fn test_pointwise_failure_aborts() {
        // 1/x is fine at the trial point but x = 0 is on this grid
        let err = sample(&normalize("1/x"), -1.0, 1.0, 3).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEquation);
    }

    #[test]
    fn test_pointwise_failure_off_grid_is_fine() {
        // An even count over a symmetric range never lands on 0
        let samples = sample(&normalize("1/x"), -10.0, 10.0, 50).unwrap();
        assert_eq!(samples.len(), 50);
    }

    #[test]
    fn test_unparseable_expression() {
        let err = sample(&normalize("x+"), 0.0, 1.0, 10).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEquation);
    }

    #[test]
    fn test_empty_sample_set() {
        let samples = sample(&normalize("x"), 0.0, 1.0, 0).unwrap();
        assert!(samples.is_empty());
        assert_eq!(samples.y_range(), None);
        assert_eq!(samples.x_range(), None);
    }
}
