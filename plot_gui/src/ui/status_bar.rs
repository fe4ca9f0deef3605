//! Status Bar (Bottom)
//!
//! Displays:
//! - The function currently on the canvas
//! - Status messages

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use plot_core::plot::Curve;

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(status: &'a str, curve: Option<&'a Curve>) -> Element<'a, Message> {
    let curve_info = match curve {
        Some(curve) => format!("f(x) = {}", curve.expression),
        None => "No function plotted".to_string(),
    };

    row![
        text(curve_info).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
