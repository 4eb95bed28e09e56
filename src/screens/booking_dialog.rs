use iced::widget::container::{background, bordered_box};
use iced::widget::{button, column, pick_list, row, text, text_input, Container};
use iced::{Color, Element, Length};

use edu_center::booking::available_times;
use edu_center::models::SUBJECTS;
use crate::app::{App, Message};

pub fn booking_dialog(app: &App) -> Element<'_, Message> {
    let form = &app.booking;
    let teacher_names: Vec<String> = app.public.teachers.iter().map(|t| t.name.clone()).collect();
    let subjects: Vec<String> = SUBJECTS.iter().map(|s| s.to_string()).collect();
    let times = available_times(&app.slots);

    let selected = |value: &String| (!value.is_empty()).then(|| value.clone());

    let mut content = column![
        text("Записаться на занятие").size(26),
        text("Заполните форму, и мы свяжемся с вами в ближайшее время").size(14),
        text("Преподаватель"),
        pick_list(teacher_names, selected(&form.teacher), Message::BookingTeacherSelected)
            .placeholder("Выберите преподавателя")
            .width(Length::Fill),
        text("Предмет"),
        pick_list(subjects, selected(&form.subject), Message::BookingSubjectSelected)
            .placeholder("Выберите предмет")
            .width(Length::Fill),
        text("Удобное время"),
        pick_list(times, selected(&form.time), Message::BookingTimeSelected)
            .placeholder("Выберите время")
            .width(Length::Fill),
        text("Имя ученика *"),
        text_input("Введите имя", &form.student_name)
            .on_input(Message::BookingNameChanged)
            .padding(8),
        text("Телефон *"),
        text_input("+7 (___) ___-__-__", &form.student_phone)
            .on_input(Message::BookingPhoneChanged)
            .padding(8),
        text("Email"),
        text_input("example@mail.ru", &form.student_email)
            .on_input(Message::BookingEmailChanged)
            .padding(8),
    ]
    .spacing(8);

    if let Some(err) = &app.booking_error {
        content = content.push(text(err).size(16).color(Color::from_rgb(0.8, 0.1, 0.1)));
    }

    content = content.push(
        row![
            button(if form.is_submitting() { "Отправка..." } else { "Отправить заявку" })
                .on_press_maybe((!form.is_submitting()).then_some(Message::SubmitBooking))
                .padding(10),
            button("Отмена").on_press(Message::CloseBooking).padding(10),
        ]
        .spacing(10),
    );

    let dialog = Container::new(content)
        .style(bordered_box)
        .padding(20)
        .width(Length::Fixed(500.0));

    Container::new(Container::new(dialog).center(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| background(Color { r: 0.0, g: 0.0, b: 0.0, a: 0.7 }))
        .into()
}
