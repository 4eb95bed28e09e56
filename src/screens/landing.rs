use iced::widget::container::bordered_box;
use iced::widget::{button, column, horizontal_space, row, text, Column, Container, Row, Scrollable, Stack};
use iced::{Alignment, Element, Length};

use crate::app::{App, Message};
use crate::screens::booking_dialog::booking_dialog;
use crate::screens::reviews::stars;

const RESULTS: &[(&str, &str, u32)] = &[
    ("ЕГЭ Математика", "87", 94),
    ("ОГЭ Русский язык", "4.6", 96),
    ("ЕГЭ Физика", "82", 89),
    ("ОГЭ Математика", "4.4", 92),
];

fn section_title(title: &str) -> Element<'_, Message> {
    text(title).size(28).into()
}

fn hero(_app: &App) -> Element<'_, Message> {
    column![
        text("Образовательный центр").size(40),
        text("Подготовка к ЕГЭ и ОГЭ с опытными преподавателями").size(20),
        row![
            button("Записаться на занятие")
                .on_press(Message::OpenBooking(None))
                .padding(10),
            button("Админ-панель")
                .on_press(Message::GoToAdmin)
                .padding(10),
        ]
        .spacing(10),
    ]
    .spacing(15)
    .into()
}

fn teachers(app: &App) -> Element<'_, Message> {
    let cards = app.public.teachers.iter().fold(Row::new().spacing(15), |cards, teacher| {
        let card = column![
            text(&teacher.name).size(22),
            text(teacher.specialization.clone().unwrap_or_default()).size(16),
            text(teacher.experience.clone().unwrap_or_default()).size(14),
            text(teacher.description.clone().unwrap_or_default()).size(14),
            button("Записаться").on_press(Message::OpenBooking(Some(teacher.name.clone()))),
        ]
        .spacing(8)
        .width(Length::Fixed(280.0));
        cards.push(Container::new(card).padding(15).style(bordered_box))
    });

    let body: Element<Message> = if app.public.teachers.is_empty() {
        text("Список преподавателей пока пуст").into()
    } else {
        Scrollable::new(cards)
            .direction(iced::widget::scrollable::Direction::Horizontal(Default::default()))
            .into()
    };

    column![section_title("Наши преподаватели"), body].spacing(15).into()
}

fn schedule(app: &App) -> Element<'_, Message> {
    let lessons = app.public.schedule.iter().fold(Column::new().spacing(8), |col, item| {
        let teacher = item
            .teacher_id
            .and_then(|id| app.public.teacher_name(id))
            .unwrap_or_default();
        col.push(
            Container::new(
                row![
                    text(&item.time).size(18).width(Length::Fixed(140.0)),
                    column![
                        text(&item.title).size(18),
                        text(item.description.clone().unwrap_or_default()).size(14),
                    ]
                    .spacing(4),
                    horizontal_space(),
                    text(teacher).size(16),
                ]
                .spacing(15)
                .align_y(Alignment::Center),
            )
            .padding(10)
            .width(Length::Fill)
            .style(bordered_box),
        )
    });

    let slots = app.slots.iter().fold(Row::new().spacing(10), |slots, slot| {
        let label = if slot.available { "Свободно" } else { "Занято" };
        let mut cell = button(column![text(&slot.time), text(label).size(12)].align_x(Alignment::Center));
        if slot.available {
            cell = cell.on_press(Message::BookingTimeSelected(slot.time.clone()));
        }
        slots.push(cell)
    });

    column![
        section_title("Расписание занятий"),
        lessons,
        text("Свободное время для записи").size(20),
        slots,
    ]
    .spacing(15)
    .into()
}

fn results_and_testimonials(app: &App) -> Element<'_, Message> {
    let results = RESULTS.iter().fold(Row::new().spacing(15), |row, (exam, score, rate)| {
        row.push(
            Container::new(
                column![
                    text(*exam).size(18),
                    text(format!("Средний балл: {}", score)),
                    text(format!("Успешно сдали: {}%", rate)),
                ]
                .spacing(5),
            )
            .padding(15)
            .style(bordered_box),
        )
    });

    let testimonials = app
        .public
        .published_reviews()
        .fold(Column::new().spacing(10), |col, review| {
            col.push(
                Container::new(
                    column![
                        row![
                            text(&review.author_name).size(18),
                            horizontal_space(),
                            text(stars(review.rating())),
                        ],
                        text(&review.review_text),
                        text(review.date.clone().unwrap_or_default()).size(12),
                    ]
                    .spacing(6),
                )
                .padding(15)
                .width(Length::Fill)
                .style(bordered_box),
            )
        });

    column![
        section_title("Результаты наших учеников"),
        results,
        section_title("Отзывы"),
        testimonials,
    ]
    .spacing(15)
    .into()
}

fn contacts_footer(app: &App) -> Element<'_, Message> {
    let contacts = app.public.contacts.iter().fold(Column::new().spacing(6), |col, contact| {
        let label = contact
            .label
            .clone()
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| contact.contact_type.clone());
        col.push(text(format!("{}: {}", label, contact.value)))
    });

    column![section_title("Контакты"), contacts].spacing(15).into()
}

pub fn landing_screen(app: &App) -> Container<Message> {
    let page = column![
        hero(app),
        teachers(app),
        schedule(app),
        results_and_testimonials(app),
        contacts_footer(app),
    ]
    .spacing(40)
    .padding(40);

    let base_ui = Container::new(Scrollable::new(page).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut ui_stack = Stack::new().push(base_ui);
    if app.booking_open {
        ui_stack = ui_stack.push(booking_dialog(app));
    }

    Container::new(ui_stack)
        .width(Length::Fill)
        .height(Length::Fill)
}
