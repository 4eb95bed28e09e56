use iced::widget::container::bordered_box;
use iced::widget::{button, checkbox, column, text, text_input, Column, Container};
use iced::{Element, Length};

use edu_center::models::NotificationType;
use crate::app::{App, Message};

fn channel_card(app: &App, kind: NotificationType) -> Element<'_, Message> {
    let channel = app.notifications.channel(kind);
    let (title, placeholder) = match kind {
        NotificationType::Email => ("Email-уведомления", "admin@example.ru"),
        NotificationType::Telegram => ("Telegram-уведомления", "ID чата"),
    };
    let saving = app.notifications_saving.is_some();

    let mut content = column![
        text(title).size(22),
        checkbox("Включено", channel.enabled).on_toggle(move |on| Message::NotificationToggled(kind, on)),
        text_input(placeholder, &channel.value)
            .on_input(move |v| Message::NotificationValueChanged(kind, v))
            .padding(8),
    ]
    .spacing(10);

    if channel.id.is_none() {
        content = content.push(text("Канал не настроен на сервере").size(14));
    }

    content = content.push(
        button(if saving { "Сохранение..." } else { "Сохранить" })
            .on_press_maybe((!saving).then_some(Message::SaveNotification(kind))),
    );

    Container::new(content)
        .padding(15)
        .width(Length::Fill)
        .style(bordered_box)
        .into()
}

pub fn notifications_tab(app: &App) -> Element<'_, Message> {
    Column::new()
        .spacing(15)
        .push(text("Куда отправлять уведомления о новых заявках"))
        .push(channel_card(app, NotificationType::Email))
        .push(channel_card(app, NotificationType::Telegram))
        .into()
}
