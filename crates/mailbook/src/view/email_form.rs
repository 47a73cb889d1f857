//! Create-email form view.

use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Element, Length};

use crate::message::{EmailFormMessage, Message};
use crate::model::EmailFormState;
use crate::style::{self, palette};
use crate::view::is_error_text;

/// Renders the create-email form.
pub fn view_email_form(state: &EmailFormState) -> Element<'_, Message> {
    let p = palette::current();

    let title = text("Add Email Address").size(22).color(p.text_primary);
    let subtitle = text("Attach a new email to an existing customer")
        .size(13)
        .color(p.text_secondary);

    let key_field = column![
        text("Customer ID").size(12).color(p.text_secondary),
        text_input("e.g. 12345678", &state.key)
            .on_input(|s| Message::EmailForm(EmailFormMessage::KeyChanged(s)))
            .on_submit(Message::EmailForm(EmailFormMessage::Submit))
            .padding(10)
            .style(style::input_style),
        text("The customer must already be registered")
            .size(11)
            .color(p.text_secondary),
    ]
    .spacing(4);

    let address_field = column![
        text("Email Address").size(12).color(p.text_secondary),
        text_input("name@example.com", &state.address)
            .on_input(|s| Message::EmailForm(EmailFormMessage::AddressChanged(s)))
            .on_submit(Message::EmailForm(EmailFormMessage::Submit))
            .padding(10)
            .style(style::input_style),
    ]
    .spacing(4);

    let save_label = if state.is_saving {
        "Saving..."
    } else {
        "Save Email"
    };
    let mut save_btn = button(text(save_label).size(14))
        .padding([10, 24])
        .style(style::primary_button_style);
    if !state.is_saving {
        save_btn = save_btn.on_press(Message::EmailForm(EmailFormMessage::Submit));
    }

    let buttons = row![
        Space::new().width(Length::Fill),
        button(text("Clear").size(14))
            .padding([10, 18])
            .style(style::ghost_button_style)
            .on_press(Message::EmailForm(EmailFormMessage::Clear)),
        save_btn,
    ]
    .spacing(10);

    let mut card = column![
        title,
        subtitle,
        Space::new().height(8),
        key_field,
        address_field,
        buttons,
    ]
    .spacing(14);

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
