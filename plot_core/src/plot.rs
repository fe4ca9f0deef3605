//! # Plot Orchestration
//!
//! [`PlotSurface`] owns the one curve on screen. A plot action validates,
//! normalizes, samples, and only then replaces the current curve; a failed
//! attempt leaves whatever was drawn before untouched.

use crate::errors::ValidationError;
use crate::input::ExpressionInput;
use crate::sampler::{sample, SampleSet};

/// The curve currently shown, plus the expression it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// Normalized expression text
    pub expression: String,
    pub samples: SampleSet,
}

/// Single-curve plot surface.
#[derive(Debug, Clone, Default)]
pub struct PlotSurface {
    current: Option<Curve>,
}

impl PlotSurface {
    /// Create a blank surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one plot action.
    ///
    /// On success the new sample set replaces the previous curve wholesale
    /// and is returned. On failure the surface is unchanged.
    pub fn plot(&mut self, input: &ExpressionInput, point_count: usize) -> Result<&SampleSet, ValidationError> {
        input.validate()?;

        let normalized = input.normalized();
        let samples = sample(&normalized, input.min, input.max, point_count)?;

        tracing::info!(
            expression = %normalized,
            min = input.min,
            max = input.max,
            points = samples.len(),
            "curve replaced"
        );

        let curve = self.current.insert(Curve {
            expression: normalized.into_string(),
            samples,
        });
        Ok(&curve.samples)
    }

    /// Blank the surface
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Curve> {
        self.current.as_ref()
    }

    pub fn samples(&self) -> Option<&SampleSet> {
        self.current.as_ref().map(|c| &c.samples)
    }

    pub fn has_curve(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_plot_sets_curve() {
        let mut surface = PlotSurface::new();
        let input = ExpressionInput::new("x ^ 2", -1.0, 1.0);

        let samples = surface.plot(&input, 3).unwrap();
        assert_eq!(samples.ys(), vec![1.0, 0.0, 1.0]);

        let curve = surface.current().unwrap();
        assert_eq!(curve.expression, "x**2");
    }

    #[test]
    fn test_failed_plot_keeps_previous_curve() {
        let mut surface = PlotSurface::new();
        surface.plot(&ExpressionInput::new("x", 0.0, 1.0), 2).unwrap();
        let before = surface.current().cloned();

        let err = surface.plot(&ExpressionInput::new("x%", 0.0, 1.0), 2).unwrap_err();
        assert_eq!(err, ValidationError::invalid_character('%'));
        assert_eq!(surface.current().cloned(), before);
    }

    #[test]
    fn test_failed_plot_on_blank_surface_stays_blank() {
        let mut surface = PlotSurface::new();
        let err = surface.plot(&ExpressionInput::new("", -10.0, 10.0), 50).unwrap_err();
        assert_eq!(err, ValidationError::MissingFunction);
        assert!(!surface.has_curve());
    }

    #[test]
    fn test_sampling_failure_keeps_previous_curve() {
        let mut surface = PlotSurface::new();
        surface.plot(&ExpressionInput::new("5", -1.0, 1.0), 3).unwrap();

        // Passes the trial at x = 1 but divides by zero at x = 0
        let err = surface.plot(&ExpressionInput::new("1/x", -1.0, 1.0), 3).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEquation);
        assert_eq!(surface.current().unwrap().expression, "5");
    }

    #[test]
    fn test_replot_replaces_curve() {
        let mut surface = PlotSurface::new();
        surface.plot(&ExpressionInput::new("x", 0.0, 1.0), 10).unwrap();
        surface.plot(&ExpressionInput::new("2*x", 0.0, 2.0), 4).unwrap();

        let curve = surface.current().unwrap();
        assert_eq!(curve.expression, "2*x");
        assert_eq!(curve.samples.len(), 4);
    }

    #[test]
    fn test_clear() {
        let mut surface = PlotSurface::new();
        surface.plot(&ExpressionInput::new("x", 0.0, 1.0), 2).unwrap();
        surface.clear();
        assert!(surface.samples().is_none());
    }
}
