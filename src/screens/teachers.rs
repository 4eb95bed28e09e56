use iced::widget::{button, column, text, Column};
use iced::Element;

use crate::app::messages::{TabAction, TeacherField};
use crate::app::{App, Message};
use crate::screens::admin::{edit_card, field, list_card};

pub fn teachers_tab(app: &App) -> Element<'_, Message> {
    let mut page = Column::new()
        .spacing(15)
        .push(button("Добавить преподавателя").on_press(Message::Teachers(TabAction::New)));

    if let Some(draft) = app.teachers_tab.draft() {
        let fields = column![
            field("Имя", &draft.name, |v| Message::TeacherField(TeacherField::Name, v)),
            field("URL фото", draft.photo_url.as_deref().unwrap_or_default(), |v| {
                Message::TeacherField(TeacherField::PhotoUrl, v)
            }),
            field("Специализация", draft.specialization.as_deref().unwrap_or_default(), |v| {
                Message::TeacherField(TeacherField::Specialization, v)
            }),
            field("Опыт работы", draft.experience.as_deref().unwrap_or_default(), |v| {
                Message::TeacherField(TeacherField::Experience, v)
            }),
            field("Описание", draft.description.as_deref().unwrap_or_default(), |v| {
                Message::TeacherField(TeacherField::Description, v)
            }),
        ]
        .spacing(10);
        page = page.push(edit_card(
            if draft.id.is_some() { "Редактировать" } else { "Новый преподаватель" },
            fields,
            app.teachers_tab.is_saving(),
            Message::Teachers(TabAction::Save),
            Message::Teachers(TabAction::Cancel),
        ));
    }

    app.store.teachers.iter().fold(page, |page, teacher| {
        page.push(list_card(
            column![
                text(&teacher.name).size(20),
                text(teacher.specialization.clone().unwrap_or_default()).size(14),
                text(teacher.experience.clone().unwrap_or_default()).size(14),
            ]
            .spacing(4),
            button("Изменить").on_press(Message::Teachers(TabAction::Edit(teacher.clone()))),
        ))
    })
    .into()
}
