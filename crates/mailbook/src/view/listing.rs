//! Combined customer/email listing with inline expansion.

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Element, Length};

use mailbook_api::Customer;
use mailbook_core::ListingState;

use crate::message::{Message, View};
use crate::model::PendingDelete;
use crate::style::{self, palette};
use crate::view::is_error_text;

/// Renders the listing screen.
pub fn view_listing<'a>(
    state: &'a ListingState,
    pending_delete: Option<&'a PendingDelete>,
) -> Element<'a, Message> {
    let p = palette::current();

    let title = column![
        text("Listing").size(24).color(p.text_primary),
        text("All customers and their email addresses")
            .size(13)
            .color(p.text_secondary),
    ]
    .spacing(2);

    let toolbar = row![
        title,
        Space::new().width(Length::Fill),
        button(text("Refresh").size(14))
            .padding([8, 16])
            .style(style::ghost_button_style)
            .on_press(Message::Refresh),
        button(text("New Customer").size(14))
            .padding([8, 16])
            .style(style::primary_button_style)
            .on_press(Message::NavigateTo(View::CreateCustomer)),
    ]
    .spacing(10)
    .align_y(iced::Alignment::Center);

    let totals = container(
        row![
            totals_entry(state.customers.len(), "customers"),
            Space::new().width(32),
            totals_entry(state.emails.len(), "emails"),
        ]
        .align_y(iced::Alignment::Center),
    )
    .padding(16)
    .width(Length::Fill)
    .style(style::card_style);

    let mut content = column![toolbar, totals].spacing(14);

    if !state.status.is_empty() {
        content = content.push(
            container(text(state.status.as_str()).size(13))
                .padding(12)
                .width(Length::Fill)
                .style(style::notification_style(is_error_text(&state.status))),
        );
    }

    if let Some(pending) = pending_delete {
        content = content.push(view_confirm_bar(pending));
    }

    if state.customers.is_empty() {
        content = content.push(view_empty_state());
    } else {
        let mut cards = column![].spacing(10);
        for customer in &state.customers {
            cards = cards.push(view_customer_card(state, customer));
        }
        content = content.push(scrollable(cards).height(Length::Fill));
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(20)
        .into()
}

/// One figure of the totals strip.
fn totals_entry(count: usize, label: &'static str) -> Element<'static, Message> {
    let p = palette::current();
    column![
        text(count.to_string()).size(26).color(p.primary),
        text(label).size(12).color(p.text_secondary),
    ]
    .spacing(2)
    .into()
}

/// Confirmation bar for a pending email delete.
fn view_confirm_bar(pending: &PendingDelete) -> Element<'_, Message> {
    let p = palette::current();
    container(
        row![
            text(format!(
                "Delete {}? This cannot be undone.",
                pending.address
            ))
            .size(13)
            .color(p.text_primary),
            Space::new().width(Length::Fill),
            button(text("Cancel").size(13))
                .padding([6, 14])
                .style(style::ghost_button_style)
                .on_press(Message::CancelDelete),
            button(text("Delete").size(13))
                .padding([6, 14])
                .style(style::danger_button_style)
                .on_press(Message::ConfirmDelete),
        ]
        .spacing(10)
        .align_y(iced::Alignment::Center),
    )
    .padding(12)
    .width(Length::Fill)
    .style(style::notification_style(true))
    .into()
}

/// Empty state shown when no customers are registered.
fn view_empty_state() -> Element<'static, Message> {
    let p = palette::current();
    container(
        column![
            text("No customers registered")
                .size(17)
                .color(p.text_primary),
            text("Start by adding your first customer")
                .size(13)
                .color(p.text_secondary),
            Space::new().height(8),
            button(text("Add First Customer").size(14))
                .padding([10, 20])
                .style(style::primary_button_style)
                .on_press(Message::NavigateTo(View::CreateCustomer)),
        ]
        .spacing(6)
        .align_x(iced::Alignment::Center),
    )
    .padding(40)
    .width(Length::Fill)
    .style(style::card_style)
    .into()
}

/// One customer card, optionally expanded to show its email sublist.
fn view_customer_card<'a>(state: &'a ListingState, customer: &'a Customer) -> Element<'a, Message> {
    let p = palette::current();
    let expanded = state.is_expanded(&customer.key);
    let count = state.email_count(&customer.key);

    let avatar = container(text(customer.initials()).size(14).color(p.primary_dark))
        .padding([8, 10])
        .style(style::badge_style);

    let badge = container(
        text(format!(
            "{count} {}",
            if count == 1 { "email" } else { "emails" }
        ))
        .size(11),
    )
    .padding([3, 10])
    .style(style::badge_style);

    let identity = column![
        text(customer.full_name()).size(16).color(p.text_primary),
        text(format!("ID: {}", customer.key))
            .size(12)
            .color(p.text_secondary),
    ]
    .spacing(2);

    let expand_label = if expanded { "Hide emails" } else { "View emails" };
    let actions = row![
        button(text(expand_label).size(13))
            .padding([6, 14])
            .style(style::ghost_button_style)
            .on_press(Message::ToggleExpand(customer.key.clone())),
        button(text("Copy ID").size(13))
            .padding([6, 14])
            .style(style::ghost_button_style)
            .on_press(Message::CopyCustomerKey(customer.key.clone())),
    ]
    .spacing(8);

    let header = row![
        avatar,
        identity,
        badge,
        Space::new().width(Length::Fill),
        actions,
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center);

    let mut card = column![header].spacing(10);

    if expanded {
        card = card.push(view_email_sublist(state, &customer.key));
    }

    container(card)
        .padding(16)
        .width(Length::Fill)
        .style(style::card_style)
        .into()
}

/// The expanded email sublist for one customer.
fn view_email_sublist<'a>(state: &'a ListingState, key: &str) -> Element<'a, Message> {
    let p = palette::current();
    let emails: Vec<_> = state.emails_for(key).collect();

    if emails.is_empty() {
        return container(
            text("No emails for this customer")
                .size(13)
                .color(p.text_secondary),
        )
        .padding(14)
        .width(Length::Fill)
        .into();
    }

    let mut rows = column![].spacing(6);
    for email in emails {
        rows = rows.push(
            row![
                text(email.address.as_str()).size(13).color(p.text_primary),
                Space::new().width(Length::Fill),
                button(text("Copy").size(12))
                    .padding([4, 10])
                    .style(style::ghost_button_style)
                    .on_press(Message::CopyEmailAddress(email.address.clone())),
                button(text("Delete").size(12))
                    .padding([4, 10])
                    .style(style::danger_button_style)
                    .on_press(Message::RequestDeleteEmail(
                        email.id,
                        email.address.clone()
                    )),
            ]
            .spacing(8)
            .align_y(iced::Alignment::Center),
        );
    }

    container(rows).padding([6, 14]).width(Length::Fill).into()
}
