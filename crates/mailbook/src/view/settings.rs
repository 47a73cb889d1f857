//! Settings screen.

use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Element, Length};

use crate::message::{Message, SettingsMessage};
use crate::model::SettingsState;
use crate::style::palette::ThemeMode;
use crate::style::{self, palette};
use crate::view::is_error_text;

/// Renders the settings screen.
pub fn view_settings<'a>(
    state: &'a SettingsState,
    active_base_url: &'a str,
    theme_mode: ThemeMode,
) -> Element<'a, Message> {
    let p = palette::current();

    let title = text("Settings").size(22).color(p.text_primary);

    let backend_section = column![
        text("Backend").size(15).color(p.text_primary),
        text(format!("Currently connected to {active_base_url}"))
            .size(12)
            .color(p.text_secondary),
        row![
            text_input("http://localhost:8083", &state.base_url_input)
                .on_input(|s| Message::Settings(SettingsMessage::BaseUrlChanged(s)))
                .on_submit(Message::Settings(SettingsMessage::Apply))
                .padding(10)
                .style(style::input_style),
            button(text("Apply").size(14))
                .padding([10, 18])
                .style(style::primary_button_style)
                .on_press(Message::Settings(SettingsMessage::Apply)),
        ]
        .spacing(10)
        .align_y(iced::Alignment::Center),
    ]
    .spacing(8);

    let theme_label = match theme_mode {
        ThemeMode::Light => "Switch to dark theme",
        ThemeMode::Dark => "Switch to light theme",
    };
    let appearance_section = column![
        text("Appearance").size(15).color(p.text_primary),
        button(text(theme_label).size(14))
            .padding([10, 18])
            .style(style::ghost_button_style)
            .on_press(Message::Settings(SettingsMessage::ToggleTheme)),
    ]
    .spacing(8);

    let mut card = column![
        title,
        Space::new().height(8),
        backend_section,
        appearance_section,
    ]
    .spacing(20);

    if let Some(feedback) = &state.feedback {
        card = card.push(
            container(text(feedback.as_str()).size(13))
                .padding(12)
                .width(Length::Fill)
                .style(style::notification_style(is_error_text(feedback))),
        );
    }

    container(
        container(card)
            .padding(28)
            .max_width(560)
            .style(style::card_style),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .padding(24)
    .into()
}
