//! Plot panel (Right)
//!
//! Toolbar above the canvas. The canvas is always present; before the first
//! successful plot it shows empty axes.

use iced::widget::{column, container, Canvas};
use iced::{Element, Length};

use crate::ui::shared::plot_canvas::{PlotCanvas, PlotData};
use crate::ui::toolbar::view_toolbar;
use crate::{App, Message};

/// Render the plot panel
pub fn view_plot_panel(app: &App) -> Element<'_, Message> {
    let data = PlotData::new(app.surface.samples(), app.viewport);

    let canvas_widget: Element<'_, Message> = Canvas::new(PlotCanvas::new(data))
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    let content = column![view_toolbar(app.surface.has_curve()), canvas_widget].spacing(4);

    container(content)
        .padding(8)
        .width(Length::FillPortion(8))
        .height(Length::Fill)
        .style(container::bordered_box)
        .into()
}
