//! Error modal
//!
//! Blocking dialog for a rejected plot: titled "Error !" with a critical
//! marker, the user-facing message, and a single OK button.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Color, Element, Length, Padding};

use plot_core::errors::ValidationError;

use crate::Message;

/// Title of the error dialog
pub const ERROR_TITLE: &str = "Error !";

/// Render a modal backdrop (semi-transparent overlay that catches clicks)
pub fn view_backdrop() -> Element<'static, Message> {
    button(Space::new())
        .on_press(Message::DismissError)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_, _| {
            iced::widget::button::Style::default()
                .with_background(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.5))
        })
        .into()
}

/// Render the error dialog for a rejected plot
pub fn view_error_modal(error: &ValidationError) -> Element<'static, Message> {
    let critical_color = Color::from_rgb(0.8, 0.15, 0.15);

    let title = row![
        text("✖").size(20).color(critical_color),
        Space::new().width(10),
        text(ERROR_TITLE).size(18),
    ]
    .align_y(Alignment::Center);

    let description = text(error.to_string()).size(12);

    let buttons = row![
        Space::new().width(Length::Fill),
        button(text("OK").size(11))
            .on_press(Message::DismissError)
            .padding(Padding::from([6, 16]))
            .style(button::primary),
    ]
    .align_y(Alignment::Center);

    let content = column![
        title,
        Space::new().height(12),
        description,
        Space::new().height(20),
        buttons,
    ]
    .width(Length::Fixed(400.0));

    let modal_box = container(content)
        .padding(20)
        .style(container::bordered_box);

    // Center the modal in the screen
    container(modal_box)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}
