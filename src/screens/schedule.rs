use iced::widget::{button, column, pick_list, text, Column};
use iced::Element;

use crate::app::messages::{ScheduleField, TabAction};
use crate::app::{App, Message};
use crate::screens::admin::{edit_card, field, list_card};

pub fn schedule_tab(app: &App) -> Element<'_, Message> {
    let mut page = Column::new()
        .spacing(15)
        .push(button("Добавить занятие").on_press(Message::Schedule(TabAction::New)));

    if let Some(draft) = app.schedule_tab.draft() {
        let selected_teacher = draft
            .teacher_id
            .and_then(|id| app.store.teachers.iter().find(|t| t.id == Some(id)))
            .cloned();
        let fields = column![
            field("Время (например, 09:00 - 10:30)", &draft.time, |v| {
                Message::ScheduleField(ScheduleField::Time, v)
            }),
            field("Название", &draft.title, |v| Message::ScheduleField(ScheduleField::Title, v)),
            field("Описание", draft.description.as_deref().unwrap_or_default(), |v| {
                Message::ScheduleField(ScheduleField::Description, v)
            }),
            pick_list(
                app.store.teachers.clone(),
                selected_teacher,
                Message::ScheduleTeacherSelected
            )
            .placeholder("Преподаватель"),
        ]
        .spacing(10);
        page = page.push(edit_card(
            if draft.id.is_some() { "Редактировать" } else { "Новое занятие" },
            fields,
            app.schedule_tab.is_saving(),
            Message::Schedule(TabAction::Save),
            Message::Schedule(TabAction::Cancel),
        ));
    }

    app.store.schedule.iter().fold(page, |page, item| {
        let teacher = item
            .teacher_id
            .and_then(|id| app.store.teacher_name(id))
            .unwrap_or("—");
        page.push(list_card(
            column![
                text(format!("{} — {}", item.time, item.title)).size(20),
                text(item.description.clone().unwrap_or_default()).size(14),
                text(format!("Преподаватель: {}", teacher)).size(14),
            ]
            .spacing(4),
            button("Изменить").on_press(Message::Schedule(TabAction::Edit(item.clone()))),
        ))
    })
    .into()
}
