//! Canvas drawing for the function plot
//!
//! Renders the plot frame, a grid on "nice" tick values, the x and y axes
//! when they are in view, axis labels `x` and `f(x)`, and the current curve
//! as a polyline clipped to the plot area.

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use plot_core::sampler::SampleSet;
use plot_core::Viewport;

use crate::Message;

// Space around the plot area for tick labels and axis titles
const MARGIN_LEFT: f32 = 56.0;
const MARGIN_RIGHT: f32 = 16.0;
const MARGIN_TOP: f32 = 24.0;
const MARGIN_BOTTOM: f32 = 36.0;

/// Data needed to draw the plot
pub struct PlotData {
    pub points: Vec<(f64, f64)>,
    pub viewport: Viewport,
}

impl PlotData {
    pub fn new(samples: Option<&SampleSet>, viewport: Viewport) -> Self {
        Self {
            points: samples.map(|s| s.points().to_vec()).unwrap_or_default(),
            viewport,
        }
    }
}

/// Canvas program for drawing the plot
pub struct PlotCanvas {
    data: PlotData,
}

impl PlotCanvas {
    pub fn new(data: PlotData) -> Self {
        Self { data }
    }

    fn draw_grid(&self, frame: &mut Frame, area: Rectangle, grid_color: Color, label_color: Color) {
        let view = &self.data.viewport;

        for x in view.x_ticks() {
            let (sx, _) = view.to_screen(x, view.y_min, area.width, area.height);
            let sx = area.x + sx;
            let line = Path::line(Point::new(sx, area.y), Point::new(sx, area.y + area.height));
            frame.stroke(&line, Stroke::default().with_color(grid_color).with_width(1.0));

            let label = Text {
                content: format_tick(x),
                position: Point::new(sx, area.y + area.height + 4.0),
                color: label_color,
                size: iced::Pixels(9.0),
                align_x: iced::alignment::Horizontal::Center.into(),
                ..Text::default()
            };
            frame.fill_text(label);
        }

        for y in view.y_ticks() {
            let (_, sy) = view.to_screen(view.x_min, y, area.width, area.height);
            let sy = area.y + sy;
            let line = Path::line(Point::new(area.x, sy), Point::new(area.x + area.width, sy));
            frame.stroke(&line, Stroke::default().with_color(grid_color).with_width(1.0));

            let label = Text {
                content: format_tick(y),
                position: Point::new(area.x - 4.0, sy - 5.0),
                color: label_color,
                size: iced::Pixels(9.0),
                align_x: iced::alignment::Horizontal::Right.into(),
                ..Text::default()
            };
            frame.fill_text(label);
        }
    }

    fn draw_axes(&self, frame: &mut Frame, area: Rectangle, axis_color: Color) {
        let view = &self.data.viewport;
        let stroke = Stroke::default().with_color(axis_color).with_width(1.5);

        // y axis at x = 0
        if view.x_min <= 0.0 && 0.0 <= view.x_max {
            let (sx, _) = view.to_screen(0.0, view.y_min, area.width, area.height);
            let sx = area.x + sx;
            frame.stroke(&Path::line(Point::new(sx, area.y), Point::new(sx, area.y + area.height)), stroke);
        }

        // x axis at y = 0
        if view.y_min <= 0.0 && 0.0 <= view.y_max {
            let (_, sy) = view.to_screen(view.x_min, 0.0, area.width, area.height);
            let sy = area.y + sy;
            frame.stroke(&Path::line(Point::new(area.x, sy), Point::new(area.x + area.width, sy)), stroke);
        }

        frame.stroke(
            &Path::rectangle(Point::new(area.x, area.y), Size::new(area.width, area.height)),
            Stroke::default().with_color(axis_color).with_width(1.0),
        );
    }

    fn draw_axis_titles(&self, frame: &mut Frame, area: Rectangle, label_color: Color) {
        let x_title = Text {
            content: "x".to_string(),
            position: Point::new(area.x + area.width / 2.0, area.y + area.height + 18.0),
            color: label_color,
            size: iced::Pixels(12.0),
            align_x: iced::alignment::Horizontal::Center.into(),
            ..Text::default()
        };
        frame.fill_text(x_title);

        let y_title = Text {
            content: "f(x)".to_string(),
            position: Point::new(area.x, area.y - 18.0),
            color: label_color,
            size: iced::Pixels(12.0),
            ..Text::default()
        };
        frame.fill_text(y_title);
    }

    fn draw_curve(&self, frame: &mut Frame, area: Rectangle, curve_color: Color) {
        let Some((&first, rest)) = self.data.points.split_first() else {
            return;
        };
        let view = self.data.viewport;

        // Inside the clip, coordinates are relative to the plot area
        frame.with_clip(area, |frame| {
            let curve = Path::new(|builder| {
                let (sx, sy) = view.to_screen(first.0, first.1, area.width, area.height);
                builder.move_to(Point::new(sx, sy));
                for &(x, y) in rest {
                    let (sx, sy) = view.to_screen(x, y, area.width, area.height);
                    builder.line_to(Point::new(sx, sy));
                }
            });
            frame.stroke(&curve, Stroke::default().with_color(curve_color).with_width(2.0));
        });
    }
}

impl canvas::Program<Message> for PlotCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let area = Rectangle {
            x: MARGIN_LEFT,
            y: MARGIN_TOP,
            width: (bounds.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            height: (bounds.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
        };

        // Colors
        let grid_color = Color::from_rgb(0.85, 0.85, 0.85);
        let axis_color = Color::from_rgb(0.4, 0.4, 0.4);
        let label_color = Color::from_rgb(0.5, 0.5, 0.5);
        let curve_color = Color::from_rgb(0.2, 0.5, 0.8);

        self.draw_grid(&mut frame, area, grid_color, label_color);
        self.draw_axes(&mut frame, area, axis_color);
        self.draw_axis_titles(&mut frame, area, label_color);
        self.draw_curve(&mut frame, area, curve_color);

        vec![frame.into_geometry()]
    }
}

/// Tick label without float noise or trailing zeros
fn format_tick(value: f64) -> String {
    let text = format!("{:.6}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" => "0".to_string(),
        _ => text.to_string(),
    }
}
