use iced::widget::container::bordered_box;
use iced::widget::{button, column, row, text, Column, Container};
use iced::{Element, Length};

use edu_center::models::{Booking, BookingStatus};
use crate::app::{App, Message};
use crate::screens::admin::list_card;

fn advance_label(status: BookingStatus) -> Option<&'static str> {
    match status {
        BookingStatus::New => Some("Взять в работу"),
        BookingStatus::InProgress => Some("Завершить"),
        _ => None,
    }
}

fn or_dash(value: &Option<String>) -> String {
    value.clone().filter(|v| !v.is_empty()).unwrap_or_else(|| "—".to_string())
}

fn details(booking: &Booking) -> Element<'_, Message> {
    Container::new(
        column![
            text(format!("Заявка №{}", booking.id.unwrap_or_default())).size(22),
            text(format!("Статус: {}", booking.status())),
            text(format!("Создана: {}", booking.created_at_display())),
            text(format!("Ученик: {}", booking.student_name)),
            text(format!("Телефон: {}", booking.student_phone)),
            text(format!("Email: {}", or_dash(&booking.student_email))),
            text(format!("Преподаватель: {}", or_dash(&booking.selected_teacher))),
            text(format!("Предмет: {}", or_dash(&booking.selected_subject))),
            text(format!("Время: {}", or_dash(&booking.selected_time))),
            button("Закрыть").on_press(Message::CloseBookingDetails).style(button::secondary),
        ]
        .spacing(8),
    )
    .padding(15)
    .width(Length::Fill)
    .style(bordered_box)
    .into()
}

pub fn bookings_tab(app: &App) -> Element<'_, Message> {
    let mut page = Column::new().spacing(15);

    if let Some(booking) = &app.viewed_booking {
        page = page.push(details(booking));
    }

    if app.store.bookings.is_empty() {
        page = page.push(text("Заявок пока нет"));
    }

    let saving = app.bookings_tab.is_saving();
    app.store.bookings.iter().fold(page, |page, booking| {
        let status = booking.status();
        let mut actions = row![button("Подробнее")
            .on_press(Message::ViewBooking(booking.clone()))
            .style(button::secondary)]
        .spacing(10);
        if let Some(label) = advance_label(status) {
            actions = actions.push(
                button(label).on_press_maybe((!saving).then(|| Message::AdvanceBooking(booking.clone()))),
            );
        }
        page.push(list_card(
            column![
                text(format!("{} ({})", booking.student_name, status)).size(20),
                text(booking.created_at_display()).size(14),
                text(format!("{}  {}", booking.student_phone, or_dash(&booking.student_email))).size(14),
                text(format!(
                    "{} / {} / {}",
                    or_dash(&booking.selected_teacher),
                    or_dash(&booking.selected_subject),
                    or_dash(&booking.selected_time)
                ))
                .size(14),
            ]
            .spacing(4),
            actions,
        ))
    })
    .into()
}
