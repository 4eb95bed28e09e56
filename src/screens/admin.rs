use iced::widget::container::bordered_box;
use iced::widget::{button, column, horizontal_space, row, text, text_input, Container, Row, Scrollable, TextInput};
use iced::{Alignment, Element, Length};

use crate::app::state::AdminTab;
use crate::app::{App, Message};
use crate::screens::{bookings, contacts, notifications, reviews, schedule, teachers};

pub fn admin_screen(app: &App) -> Container<Message> {
    let header = row![
        text("Админ-панель").size(32),
        horizontal_space(),
        button("На сайт").on_press(Message::GoToLanding),
        button("Выйти").on_press(Message::Logout),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let tabs = AdminTab::ALL.iter().fold(Row::new().spacing(5), |tabs, tab| {
        let mut b = button(text(tab.title())).width(Length::Fill);
        if *tab != app.admin_tab {
            b = b.on_press(Message::SelectTab(*tab)).style(button::secondary);
        }
        tabs.push(b)
    });

    let body = match app.admin_tab {
        AdminTab::Bookings => bookings::bookings_tab(app),
        AdminTab::Teachers => teachers::teachers_tab(app),
        AdminTab::Schedule => schedule::schedule_tab(app),
        AdminTab::Contacts => contacts::contacts_tab(app),
        AdminTab::Reviews => reviews::reviews_tab(app),
        AdminTab::Notifications => notifications::notifications_tab(app),
    };

    let content = column![
        header,
        tabs,
        Scrollable::new(body).width(Length::Fill).height(Length::Fill),
    ]
    .spacing(20);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(30)
}

/// Text field bound to one draft field.
pub fn field<'a>(
    placeholder: &str,
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
) -> TextInput<'a, Message> {
    text_input(placeholder, value).on_input(on_input).padding(8)
}

/// Card with the form buttons used by every edit form.
pub fn edit_card<'a>(
    title: &'a str,
    fields: impl Into<Element<'a, Message>>,
    saving: bool,
    on_save: Message,
    on_cancel: Message,
) -> Element<'a, Message> {
    Container::new(
        column![
            text(title).size(22),
            fields.into(),
            row![
                button(if saving { "Сохранение..." } else { "Сохранить" })
                    .on_press_maybe((!saving).then_some(on_save)),
                button("Отмена").on_press(on_cancel).style(button::secondary),
            ]
            .spacing(10),
        ]
        .spacing(12),
    )
    .padding(15)
    .width(Length::Fill)
    .style(bordered_box)
    .into()
}

/// One row of a list: descriptive lines on the left, actions on the right.
pub fn list_card<'a>(
    lines: impl Into<Element<'a, Message>>,
    actions: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    Container::new(
        row![lines.into(), horizontal_space(), actions.into()]
            .spacing(10)
            .align_y(Alignment::Start),
    )
    .padding(15)
    .width(Length::Fill)
    .style(bordered_box)
    .into()
}
