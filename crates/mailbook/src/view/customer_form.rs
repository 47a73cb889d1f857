//! Create-customer form view.

use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Element, Length};

use crate::message::{CustomerFormMessage, Message};
use crate::model::CustomerFormState;
use crate::style::{self, palette};
use crate::view::is_error_text;

/// Renders the create-customer form.
pub fn view_customer_form(state: &CustomerFormState) -> Element<'_, Message> {
    let p = palette::current();

    let title = text("Register New Customer").size(22).color(p.text_primary);
    let subtitle = text("Enter the customer's details to add them to the system")
        .size(13)
        .color(p.text_secondary);

    let inputs = column![
        labeled_input(
            "Customer ID",
            "e.g. 12345678",
            &state.key,
            CustomerFormMessage::KeyChanged,
        ),
        labeled_input(
            "First Name",
            "e.g. Juan",
            &state.first_name,
            CustomerFormMessage::FirstNameChanged,
        ),
        labeled_input(
            "Last Name",
            "e.g. Pérez",
            &state.last_name,
            CustomerFormMessage::LastNameChanged,
        ),
    ]
    .spacing(12);

    let save_label = if state.is_saving {
        "Saving..."
    } else {
        "Save Customer"
    };
    let mut save_btn = button(text(save_label).size(14))
        .padding([10, 24])
        .style(style::primary_button_style);
    if !state.is_saving {
        save_btn = save_btn.on_press(Message::CustomerForm(CustomerFormMessage::Submit));
    }

    let buttons = row![
        Space::new().width(Length::Fill),
        button(text("Clear").size(14))
            .padding([10, 18])
            .style(style::ghost_button_style)
            .on_press(Message::CustomerForm(CustomerFormMessage::Clear)),
        save_btn,
    ]
    .spacing(10);

    let mut card = column![title, subtitle, Space::new().height(8), inputs, buttons].spacing(14);

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

/// A caption above a text input wired to a form message.
fn labeled_input<'a>(
    label: &'static str,
    placeholder: &'static str,
    value: &'a str,
    on_change: impl Fn(String) -> CustomerFormMessage + 'a,
) -> Element<'a, Message> {
    let p = palette::current();
    column![
        text(label).size(12).color(p.text_secondary),
        text_input(placeholder, value)
            .on_input(move |s| Message::CustomerForm(on_change(s)))
            .on_submit(Message::CustomerForm(CustomerFormMessage::Submit))
            .padding(10)
            .style(style::input_style),
    ]
    .spacing(4)
    .into()
}
