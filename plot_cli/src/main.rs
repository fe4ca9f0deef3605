//! # Function Plotter CLI
//!
//! Plots one function of `x` in the terminal. The input goes through the
//! same validation and sampling as the desktop app; a rejected plot prints
//! the same message the error dialog would show and exits non-zero.
//!
//! ```text
//! plot_cli "x^2 - 3*x" --min -5 --max 5
//! plot_cli "2^x" --json --points 100
//! ```

mod chart;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use plot_core::input::ExpressionInput;
use plot_core::sampler::SampleSet;
use plot_core::{PlotSettings, PlotSurface};

const DEFAULT_HEIGHT: u16 = 20;
const FALLBACK_WIDTH: u16 = 80;

#[derive(Parser, Debug)]
#[command(name = "plot_cli")]
#[command(about = "Plot a single-variable function f(x) in the terminal", long_about = None)]
struct Args {
    /// Function of x, e.g. "x^2 + 1". Prompted for when omitted
    function: Option<String>,

    /// Lower bound of x (defaults to the settings' default_min)
    #[arg(long, allow_hyphen_values = true)]
    min: Option<String>,

    /// Upper bound of x (defaults to the settings' default_max)
    #[arg(long, allow_hyphen_values = true)]
    max: Option<String>,

    /// Number of sample points
    #[arg(long)]
    points: Option<usize>,

    /// Print the sampled points as JSON instead of drawing a chart
    #[arg(long)]
    json: bool,

    /// Chart width in columns (defaults to the terminal width)
    #[arg(long)]
    width: Option<u16>,

    /// Chart height in rows
    #[arg(long)]
    height: Option<u16>,

    /// JSON file with plot settings
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Write debug logging to the specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

/// JSON shape of a successful plot
#[derive(Debug, Serialize)]
struct PlotOutput<'a> {
    expression: &'a str,
    min: f64,
    max: f64,
    #[serde(flatten)]
    samples: &'a SampleSet,
}

fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

/// Apply command-line overrides on top of the loaded settings.
fn resolve_settings(args: &Args) -> anyhow::Result<PlotSettings> {
    let mut settings = PlotSettings::load_or_default(args.settings.as_deref())?;
    if let Some(points) = args.points {
        settings.point_count = points;
        settings.validate()?;
    }
    Ok(settings)
}

/// Build the plot input the way the GUI does: bounds are read like spinner
/// text, so garbage becomes 0 and values are clamped and rounded.
fn build_input(function: String, args: &Args, settings: &PlotSettings) -> ExpressionInput {
    let min = match &args.min {
        Some(text) => settings.parse_bound(text),
        None => settings.default_min,
    };
    let max = match &args.max {
        Some(text) => settings.parse_bound(text),
        None => settings.default_max,
    };
    ExpressionInput::new(function, min, max)
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
                .with_writer(io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.log.as_ref())?;

    let settings = resolve_settings(&args)?;

    let function = match &args.function {
        Some(function) => function.clone(),
        None => prompt_line("f(x) = ")?,
    };
    let input = build_input(function, &args, &settings);

    let mut surface = PlotSurface::new();
    if let Err(err) = surface.plot(&input, settings.point_count) {
        eprintln!("Error ! {}", err);
        eprintln!("{}", serde_json::to_string(&err)?);
        return Ok(ExitCode::FAILURE);
    }

    let Some(curve) = surface.current() else {
        return Ok(ExitCode::FAILURE);
    };

    if args.json {
        let output = PlotOutput {
            expression: &curve.expression,
            min: input.min,
            max: input.max,
            samples: &curve.samples,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let width = args
            .width
            .unwrap_or_else(|| crossterm::terminal::size().map(|(w, _)| w).unwrap_or(FALLBACK_WIDTH));
        let height = args.height.unwrap_or(DEFAULT_HEIGHT);
        let buffer = chart::render_chart(curve, width, height);
        print!("{}", chart::buffer_to_string(&buffer));
    }

    Ok(ExitCode::SUCCESS)
}
