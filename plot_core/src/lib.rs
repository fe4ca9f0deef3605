//! # plot_core - Function Plotter Engine
//!
//! `plot_core` is the computational heart of the function plotter. It turns
//! user-typed infix math text into a validated expression, samples it over a
//! numeric domain, and keeps the single curve the plot surface displays.
//!
//! ## Design Philosophy
//!
//! - **Stateless core**: normalization, validation and sampling are pure functions
//! - **Explicit grammar**: expressions are parsed by a small recursive-descent
//!   parser, never handed to a general-purpose evaluator
//! - **Rich Errors**: structured error types with fixed user-facing messages
//!
//! ## Quick Start
//!
//! ```rust
//! use plot_core::input::ExpressionInput;
//! use plot_core::plot::PlotSurface;
//!
//! let mut surface = PlotSurface::new();
//! let input = ExpressionInput::new("(x ^ 2) + (50 * x) - 2^x", -10.0, 10.0);
//!
//! let curve = surface.plot(&input, 50).unwrap();
//! assert_eq!(curve.len(), 50);
//! ```
//!
//! ## Modules
//!
//! - [`input`] - Raw input, normalization and validation
//! - [`expression`] - Tokenizer, parser and evaluator for `f(x)`
//! - [`sampler`] - Linear discretization of the domain and sampling
//! - [`plot`] - Plot surface owning the current curve
//! - [`viewport`] - Zoom/pan math and grid ticks
//! - [`settings`] - Plot settings loaded from JSON
//! - [`errors`] - Structured error types

pub mod errors;
pub mod expression;
pub mod input;
pub mod plot;
pub mod sampler;
pub mod settings;
pub mod viewport;

// Re-export commonly used types at crate root for convenience
pub use errors::{PlotterError, PlotterResult, ValidationError};
pub use input::{normalize, validate, ExpressionInput, NormalizedExpression};
pub use plot::PlotSurface;
pub use sampler::{sample, SampleSet, DEFAULT_POINT_COUNT};
pub use settings::PlotSettings;
pub use viewport::Viewport;
