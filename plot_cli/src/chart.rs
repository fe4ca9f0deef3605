//! Terminal rendering of the current curve
//!
//! The chart is drawn into an off-screen ratatui [`Buffer`] and then turned
//! into plain text, so it can be printed to stdout or piped like any other
//! command output.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget};

use plot_core::plot::Curve;
use plot_core::Viewport;

/// Smallest chart that still leaves room for axes and labels
pub const MIN_WIDTH: u16 = 20;
pub const MIN_HEIGHT: u16 = 8;

/// Draw `curve` into a `width` x `height` buffer.
pub fn render_chart(curve: &Curve, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width.max(MIN_WIDTH), height.max(MIN_HEIGHT));
    let mut buffer = Buffer::empty(area);

    let view = Viewport::fit(&curve.samples);
    let points = curve.samples.points();

    let datasets = vec![Dataset::default()
        .name(format!("f(x) = {}", curve.expression))
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(points)];

    let x_axis = Axis::default()
        .title("x")
        .bounds([view.x_min, view.x_max])
        .labels(axis_labels(view.x_min, view.x_max));

    let y_axis = Axis::default()
        .title("f(x)")
        .bounds([view.y_min, view.y_max])
        .labels(axis_labels(view.y_min, view.y_max));

    Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" f(x) = {} ", curve.expression)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis)
        .render(area, &mut buffer);

    buffer
}

fn axis_labels(lo: f64, hi: f64) -> Vec<String> {
    vec![
        format!("{:.2}", lo),
        format!("{:.2}", (lo + hi) / 2.0),
        format!("{:.2}", hi),
    ]
}

/// Flatten a buffer into text, one line per row, trailing blanks trimmed.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            if let Some(cell) = buffer.cell((x, y)) {
                line.push_str(cell.symbol());
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
