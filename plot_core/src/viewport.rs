//! # Viewport
//!
//! Data-space window of the plot and the zoom/pan/home operations behind the
//! plot toolbar. Kept free of any GUI types so both front-ends can share it.

use crate::sampler::SampleSet;

/// Fraction of each span added as margin when fitting a curve
pub const FIT_MARGIN: f64 = 0.05;

/// Zoom factor applied by one toolbar click
pub const ZOOM_STEP: f64 = 1.25;

/// Fraction of the span moved by one pan click
pub const PAN_STEP: f64 = 0.1;

/// Rough number of grid lines per axis
pub const TARGET_TICKS: usize = 8;

/// Visible data-space rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Viewport {
    /// Blank canvas: the unit square around the origin
    fn default() -> Self {
        Self {
            x_min: -1.0,
            x_max: 1.0,
            y_min: -1.0,
            y_max: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    /// Fit the view to a sample set with [`FIT_MARGIN`] on every side.
    ///
    /// A flat curve (constant function) gets a half-height of 1 around its
    /// value, or [`FIT_MARGIN`] of the value when that is larger, so it is
    /// drawn in the middle rather than on the frame. Bounds are kept finite
    /// even when the data spans most of the `f64` range.
    pub fn fit(samples: &SampleSet) -> Self {
        let (Some((x_lo, x_hi)), Some((y_lo, y_hi))) = (samples.x_range(), samples.y_range()) else {
            return Self::default();
        };

        let (x_lo, x_hi) = pad(x_lo, x_hi);
        let (y_lo, y_hi) = pad(y_lo, y_hi);
        Self::new(x_lo, x_hi, y_lo, y_hi)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    // Half spans never overflow, even when the full span would
    fn half_width(&self) -> f64 {
        self.x_max * 0.5 - self.x_min * 0.5
    }

    fn half_height(&self) -> f64 {
        self.y_max * 0.5 - self.y_min * 0.5
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x_min * 0.5 + self.x_max * 0.5, self.y_min * 0.5 + self.y_max * 0.5)
    }

    /// Finite bounds with a non-empty span on both axes
    pub fn is_usable(&self) -> bool {
        [self.x_min, self.x_max, self.y_min, self.y_max].iter().all(|v| v.is_finite())
            && self.x_min < self.x_max
            && self.y_min < self.y_max
    }

    /// `candidate` if it is usable, otherwise the current view
    fn or_keep(&self, candidate: Self) -> Self {
        if candidate.is_usable() {
            candidate
        } else {
            *self
        }
    }

    /// Scale both spans about the centre. `factor > 1` zooms in.
    ///
    /// Zooming that would collapse or overflow the view is ignored.
    pub fn zoom(&self, factor: f64) -> Self {
        if !(factor.is_finite() && factor > 0.0) {
            return *self;
        }
        let (cx, cy) = self.center();
        let half_w = self.half_width() / factor;
        let half_h = self.half_height() / factor;
        self.or_keep(Self::new(cx - half_w, cx + half_w, cy - half_h, cy + half_h))
    }

    pub fn zoom_in(&self) -> Self {
        self.zoom(ZOOM_STEP)
    }

    pub fn zoom_out(&self) -> Self {
        self.zoom(1.0 / ZOOM_STEP)
    }

    /// Shift by a fraction of the current spans (positive = right / up)
    pub fn pan(&self, dx_fraction: f64, dy_fraction: f64) -> Self {
        let dx = self.half_width() * (2.0 * dx_fraction);
        let dy = self.half_height() * (2.0 * dy_fraction);
        self.or_keep(Self::new(self.x_min + dx, self.x_max + dx, self.y_min + dy, self.y_max + dy))
    }

    /// Map a data point into a `width` x `height` pixel box (y grows downward)
    pub fn to_screen(&self, x: f64, y: f64, width: f32, height: f32) -> (f32, f32) {
        let sx = (x * 0.5 - self.x_min * 0.5) / self.half_width() * width as f64;
        let sy = (self.y_max * 0.5 - y * 0.5) / self.half_height() * height as f64;
        (sx as f32, sy as f32)
    }

    pub fn x_ticks(&self) -> Vec<f64> {
        ticks(self.x_min, self.x_max, TARGET_TICKS)
    }

    pub fn y_ticks(&self) -> Vec<f64> {
        ticks(self.y_min, self.y_max, TARGET_TICKS)
    }
}

fn pad(lo: f64, hi: f64) -> (f64, f64) {
    let half = hi * 0.5 - lo * 0.5;
    let magnitude = lo.abs().max(hi.abs()).max(1.0);
    let margin = if half <= f64::EPSILON * magnitude {
        (magnitude * FIT_MARGIN).max(1.0)
    } else {
        half * (2.0 * FIT_MARGIN)
    };
    ((lo - margin).max(f64::MIN), (hi + margin).min(f64::MAX))
}

/// Upper bound on the number of ticks [`ticks`] returns
pub const MAX_TICKS: usize = 64;

/// Step of the form 1, 2 or 5 times a power of ten, close to `span / target`
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span / target.max(1) as f64;
    if !(raw.is_finite() && raw > 0.0) {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual < 1.5 {
        1.0
    } else if residual < 3.0 {
        2.0
    } else if residual < 7.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Multiples of a nice step lying inside `[lo, hi]`, at most [`MAX_TICKS`].
///
/// Non-finite or empty ranges give no ticks.
pub fn ticks(lo: f64, hi: f64, target: usize) -> Vec<f64> {
    if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
        return Vec::new();
    }
    let span = hi - lo;
    let step = if span.is_finite() {
        nice_step(span, target)
    } else {
        nice_step(hi * 0.5 - lo * 0.5, target) * 2.0
    };
    let first = (lo / step).ceil();
    let last = (hi / step).floor();
    let count = last - first + 1.0;
    if !(count.is_finite() && count >= 1.0 && count <= MAX_TICKS as f64) {
        return Vec::new();
    }
    (0..count as usize)
        .map(|i| {
            let v = (first + i as f64) * step;
            // Snap float noise like 0.30000000000000004 and -0
            let snapped = (v / step).round() * step;
            if snapped == 0.0 { 0.0 } else { snapped }
        })
        .collect()
}
