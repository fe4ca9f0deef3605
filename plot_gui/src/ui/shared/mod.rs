//! Shared UI components

pub mod plot_canvas;
