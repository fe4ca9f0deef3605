//! Sidebar (Left Panel)
//!
//! Function and domain inputs plus the Plot button. The bound fields behave
//! like numeric spinners: they only take text that could become a number,
//! and the value is snapped to two decimals when a plot is requested.

use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Length, Padding};

use plot_core::input::BOUND_DECIMALS;

use crate::{App, Message};

/// Render the sidebar
pub fn view_sidebar(app: &App) -> Element<'_, Message> {
    let inputs = column![
        text("Function").size(14),
        Space::new().height(4),
        labeled_input("f(x):", "e.g. x^2 + 3*x", &app.function_text, Message::FunctionChanged),
        Space::new().height(12),
        text("Domain").size(14),
        Space::new().height(4),
        labeled_input("Min:", "", &app.min_text, Message::MinChanged),
        labeled_input("Max:", "", &app.max_text, Message::MaxChanged),
        Space::new().height(12),
        text("Use x as the variable and ^ for powers.").size(10).color([0.5, 0.5, 0.5]),
    ]
    .spacing(6);

    let plot_button = button(
        container(text("Plot").size(20))
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center),
    )
    .on_press(Message::Plot)
    .width(Length::Fill)
    .padding(Padding::from([16, 8]))
    .style(button::primary);

    let content = column![inputs, Space::new().height(Length::Fill), plot_button].height(Length::Fill);

    container(content)
        .padding(12)
        .width(Length::FillPortion(2))
        .height(Length::Fill)
        .style(container::bordered_box)
        .into()
}

/// Helper to create a labeled text input
fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(40.0)),
        text_input(placeholder, value)
            .on_input(on_change)
            .on_submit(Message::Plot)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Show a bound the way the spinner displays it
pub fn format_bound(value: f64) -> String {
    format!("{:.*}", BOUND_DECIMALS as usize, value)
}

/// Whether `text` is an acceptable intermediate state of a bound field:
/// an optional leading sign, digits and at most one decimal point.
pub fn accepts_bound_edit(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    let mut seen_dot = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    match digits.split_once('.') {
        Some((_, decimals)) => decimals.len() <= BOUND_DECIMALS as usize,
        None => true,
    }
}
