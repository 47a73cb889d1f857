//! Landing screen with shortcuts to the three workflows.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Element, Length};

use crate::message::{Message, View};
use crate::style::{self, palette};

/// Renders the home screen.
pub fn view_home(base_url: &str) -> Element<'_, Message> {
    let p = palette::current();

    let title = text("Customers & Emails").size(28).color(p.text_primary);
    let subtitle = text("Manage customers and their email addresses")
        .size(15)
        .color(p.text_secondary);

    let actions = row![
        button(text("New Customer").size(14))
            .padding([10, 20])
            .style(style::primary_button_style)
            .on_press(Message::NavigateTo(View::CreateCustomer)),
        button(text("New Email").size(14))
            .padding([10, 20])
            .style(style::primary_button_style)
            .on_press(Message::NavigateTo(View::CreateEmail)),
        button(text("View Listing").size(14))
            .padding([10, 20])
            .style(style::ghost_button_style)
            .on_press(Message::NavigateTo(View::Listing)),
    ]
    .spacing(12);

    let backend = container(
        column![
            text("Connected backend").size(12).color(p.text_secondary),
            text(base_url).size(14).color(p.primary),
        ]
        .spacing(4)
        .align_x(iced::Alignment::Center),
    )
    .padding(16)
    .style(style::card_style);

    let content = column![
        title,
        subtitle,
        Space::new().height(16),
        actions,
        Space::new().height(24),
        backend,
    ]
    .spacing(8)
    .align_x(iced::Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
