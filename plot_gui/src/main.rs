//! # Function Plotter GUI Application
//!
//! Desktop front-end built with Iced. The sidebar collects the function and
//! its domain, the Plot button runs one plot action through
//! [`plot_core::PlotSurface`], and the canvas shows the single current curve.
//! Rejected input opens the error modal and leaves the canvas as it was.

mod ui;

use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use iced::widget::{column, container, row, stack};
use iced::{Element, Length, Task};
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use plot_core::errors::ValidationError;
use plot_core::input::ExpressionInput;
use plot_core::viewport::PAN_STEP;
use plot_core::{PlotSettings, PlotSurface, Viewport};

/// Window title
pub const APP_TITLE: &str = "Function Plotter";

#[derive(Parser, Debug)]
#[command(name = "plot_gui")]
#[command(about = "Plot a single-variable function f(x)", long_about = None)]
struct Args {
    /// JSON file with plot settings (point count, default bounds, bound limits)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Write debug logging to the specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

/// Direction of one pan step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

impl PanDirection {
    /// Fractions of the view span to shift by
    fn fractions(self) -> (f64, f64) {
        match self {
            PanDirection::Left => (-PAN_STEP, 0.0),
            PanDirection::Right => (PAN_STEP, 0.0),
            PanDirection::Up => (0.0, PAN_STEP),
            PanDirection::Down => (0.0, -PAN_STEP),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    // Sidebar inputs
    FunctionChanged(String),
    MinChanged(String),
    MaxChanged(String),
    Plot,

    // Error modal
    DismissError,

    // Plot toolbar
    ZoomIn,
    ZoomOut,
    Pan(PanDirection),
    ResetView,
}

pub struct App {
    pub settings: PlotSettings,

    // Sidebar fields, as typed
    pub function_text: String,
    pub min_text: String,
    pub max_text: String,

    /// Owns the single curve on screen
    pub surface: PlotSurface,
    /// What the canvas currently shows
    pub viewport: Viewport,
    /// View fitted to the current curve, restored by "Home"
    pub fitted_viewport: Viewport,

    /// Error shown in the modal, if any
    pub error: Option<ValidationError>,
    pub status: String,
}

impl App {
    fn new(settings: PlotSettings) -> Self {
        Self {
            function_text: String::new(),
            min_text: ui::sidebar::format_bound(settings.default_min),
            max_text: ui::sidebar::format_bound(settings.default_max),
            surface: PlotSurface::new(),
            viewport: Viewport::default(),
            fitted_viewport: Viewport::default(),
            error: None,
            status: "Enter a function and press Plot".to_string(),
            settings,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FunctionChanged(text) => {
                self.function_text = text;
            }
            Message::MinChanged(text) => {
                if ui::sidebar::accepts_bound_edit(&text) {
                    self.min_text = text;
                }
            }
            Message::MaxChanged(text) => {
                if ui::sidebar::accepts_bound_edit(&text) {
                    self.max_text = text;
                }
            }
            Message::Plot => self.plot(),
            Message::DismissError => {
                self.error = None;
            }
            Message::ZoomIn => {
                self.viewport = self.viewport.zoom_in();
            }
            Message::ZoomOut => {
                self.viewport = self.viewport.zoom_out();
            }
            Message::Pan(direction) => {
                let (dx, dy) = direction.fractions();
                self.viewport = self.viewport.pan(dx, dy);
            }
            Message::ResetView => {
                self.viewport = self.fitted_viewport;
            }
        }
        Task::none()
    }

    /// One plot action: snap the bound fields like a spinner, then hand the
    /// input to the plot surface.
    fn plot(&mut self) {
        let min = self.settings.parse_bound(&self.min_text);
        let max = self.settings.parse_bound(&self.max_text);
        self.min_text = ui::sidebar::format_bound(min);
        self.max_text = ui::sidebar::format_bound(max);

        let input = ExpressionInput::new(self.function_text.clone(), min, max);

        match self.surface.plot(&input, self.settings.point_count) {
            Ok(samples) => {
                self.fitted_viewport = Viewport::fit(samples);
                self.viewport = self.fitted_viewport;
                self.status = format!("Plotted {} points over [{}, {}]", samples.len(), min, max);
            }
            Err(err) => {
                tracing::debug!(code = err.error_code(), "plot rejected");
                self.status = "Plot failed".to_string();
                self.error = Some(err);
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let sidebar = ui::sidebar::view_sidebar(self);
        let plot_panel = ui::plot_panel::view_plot_panel(self);

        let main_content = column![
            row![sidebar, plot_panel].spacing(10).height(Length::Fill),
            ui::status_bar::view_status_bar(&self.status, self.surface.current()),
        ]
        .padding(10);

        let base: Element<'_, Message> = container(main_content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        match &self.error {
            Some(error) => stack![base, ui::modal::view_backdrop(), ui::modal::view_error_modal(error)].into(),
            None => base,
        }
    }
}

fn init_logging(log: Option<&PathBuf>) -> anyhow::Result<()> {
    match log {
        Some(log_path) => {
            let file = std::fs::OpenOptions::new().create(true).append(true).open(log_path)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(Level::DEBUG)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        None => {
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log.as_ref())?;

    let settings = PlotSettings::load_or_default(args.settings.as_deref())?;
    tracing::info!(point_count = settings.point_count, "starting {}", APP_TITLE);

    iced::application(move || App::new(settings.clone()), App::update, App::view)
        .title(APP_TITLE)
        .window_size((1100.0, 700.0))
        .run()?;

    tracing::info!("{} exited", APP_TITLE);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(function: &str, min: &str, max: &str) -> App {
        let mut app = App::new(PlotSettings::default());
        let _ = app.update(Message::FunctionChanged(function.to_string()));
        let _ = app.update(Message::MinChanged(min.to_string()));
        let _ = app.update(Message::MaxChanged(max.to_string()));
        app
    }

    #[test]
    fn test_initial_state() {
        let app = App::new(PlotSettings::default());
        assert_eq!(app.min_text, "-10.00");
        assert_eq!(app.max_text, "10.00");
        assert!(!app.surface.has_curve());
        assert!(app.error.is_none());
    }

    #[test]
    fn test_plot_success_fits_view() {
        let mut app = app_with("x ^ 2", "-2", "2");
        let _ = app.update(Message::Plot);

        assert!(app.error.is_none());
        assert_eq!(app.surface.current().map(|c| c.expression.as_str()), Some("x**2"));
        assert_eq!(app.surface.samples().map(|s| s.len()), Some(50));
        assert_eq!(app.viewport, app.fitted_viewport);
        assert_eq!(app.min_text, "-2.00");
        assert_eq!(app.max_text, "2.00");
    }

    #[test]
    fn test_failed_plot_keeps_curve_and_view() {
        let mut app = app_with("x", "-1", "1");
        let _ = app.update(Message::Plot);
        let _ = app.update(Message::ZoomIn);

        let curve = app.surface.current().cloned();
        let viewport = app.viewport;
        let fitted = app.fitted_viewport;

        let _ = app.update(Message::FunctionChanged("x%".to_string()));
        let _ = app.update(Message::Plot);

        assert_eq!(app.error, Some(ValidationError::invalid_character('%')));
        assert_eq!(app.surface.current().cloned(), curve);
        assert_eq!(app.viewport, viewport);
        assert_eq!(app.fitted_viewport, fitted);
        assert_eq!(app.status, "Plot failed");

        let _ = app.update(Message::DismissError);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_bounds_snap_before_validation() {
        let mut app = app_with("x", "5.5", "1");
        let _ = app.update(Message::Plot);

        assert_eq!(app.error, Some(ValidationError::InvalidRange));
        assert_eq!(app.min_text, "5.50");
        assert_eq!(app.max_text, "1.00");
    }

    #[test]
    fn test_bounds_clamped_to_limits() {
        let mut app = app_with("x", "-", "99999");
        let _ = app.update(Message::Plot);

        assert!(app.error.is_none());
        assert_eq!(app.min_text, "0.00");
        assert_eq!(app.max_text, "10000.00");
    }

    #[test]
    fn test_non_numeric_bound_edit_ignored() {
        let app = app_with("x", "abc", "1e5");
        assert_eq!(app.min_text, "-10.00");
        assert_eq!(app.max_text, "10.00");
    }

    #[test]
    fn test_home_restores_fitted_view() {
        let mut app = app_with("x", "-1", "1");
        let _ = app.update(Message::Plot);
        let _ = app.update(Message::ZoomOut);
        let _ = app.update(Message::Pan(PanDirection::Left));
        assert_ne!(app.viewport, app.fitted_viewport);

        let _ = app.update(Message::ResetView);
        assert_eq!(app.viewport, app.fitted_viewport);
    }
}
