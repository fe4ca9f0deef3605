//! UI module for the Function Plotter GUI
//!
//! # Panel Structure
//! - `sidebar` - Left panel: f(x), Min and Max fields, Plot button
//! - `plot_panel` - Right panel: plot canvas with its toolbar
//! - `toolbar` - Zoom, pan and home buttons above the canvas
//! - `modal` - Error dialog shown over everything on a rejected plot
//! - `status_bar` - Bottom status messages
//!
//! # Shared Components
//! - `shared/plot_canvas` - Canvas drawing for axes, grid and the curve

// Top-level panels
pub mod sidebar;
pub mod plot_panel;
pub mod toolbar;
pub mod modal;
pub mod status_bar;

// Shared components
pub mod shared;
