//! Header/navigation bar.

use iced::widget::{Space, button, container, row, text};
use iced::{Element, Length};

use crate::message::{Message, View};
use crate::style::{self, palette};

/// Renders the top navigation bar.
pub fn view_header(current_view: View) -> Element<'static, Message> {
    let p = palette::current();

    let title = text("Mailbook")
        .size(20)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..iced::Font::default()
        })
        .color(p.primary);

    let nav = row![
        nav_button("Home", View::Home, current_view),
        nav_button("New Customer", View::CreateCustomer, current_view),
        nav_button("New Email", View::CreateEmail, current_view),
        nav_button("Listing", View::Listing, current_view),
    ]
    .spacing(6);

    let settings_btn = button(text("\u{2699}").size(18).color(p.text_secondary))
        .padding([6, 12])
        .style(style::ghost_button_style)
        .on_press(Message::NavigateTo(View::Settings));

    container(
        row![
            title,
            Space::new().width(24),
            nav,
            Space::new().width(Length::Fill),
            settings_btn,
        ]
        .align_y(iced::Alignment::Center)
        .padding([10, 16]),
    )
    .width(Length::Fill)
    .style(style::header_style)
    .into()
}

/// A single navigation entry; the active view gets the primary style.
fn nav_button(label: &'static str, target: View, current: View) -> Element<'static, Message> {
    let style_fn = if target == current {
        style::primary_button_style
    } else {
        style::ghost_button_style
    };

    button(text(label).size(14))
        .padding([6, 14])
        .style(style_fn)
        .on_press(Message::NavigateTo(target))
        .into()
}
