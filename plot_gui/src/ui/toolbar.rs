//! Plot toolbar
//!
//! Navigation controls for the canvas: zoom in/out, pan in four directions
//! and "Home" to restore the view fitted to the current curve.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::{Message, PanDirection};

/// Render the toolbar. Navigation is disabled until a curve exists.
pub fn view_toolbar(has_curve: bool) -> Element<'static, Message> {
    let nav_button = |label: &'static str, message: Message| {
        button(text(label).size(11))
            .on_press_maybe(has_curve.then_some(message))
            .padding(Padding::from([4, 8]))
            .style(button::secondary)
    };

    let zoom_buttons = row![
        nav_button("Zoom +", Message::ZoomIn),
        nav_button("Zoom -", Message::ZoomOut),
    ]
    .spacing(4);

    let pan_buttons = row![
        nav_button("◀", Message::Pan(PanDirection::Left)),
        nav_button("▶", Message::Pan(PanDirection::Right)),
        nav_button("▲", Message::Pan(PanDirection::Up)),
        nav_button("▼", Message::Pan(PanDirection::Down)),
    ]
    .spacing(4);

    let home_button = button(text("Home").size(11))
        .on_press_maybe(has_curve.then_some(Message::ResetView))
        .padding(Padding::from([4, 8]))
        .style(button::primary);

    row![
        home_button,
        Space::new().width(8),
        zoom_buttons,
        Space::new().width(8),
        pan_buttons,
        Space::new().width(Length::Fill),
    ]
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}
