use iced::widget::{button, column, pick_list, row, text, Column};
use iced::Element;

use edu_center::models::CONTACT_TYPES;
use crate::app::messages::{ContactField, TabAction};
use crate::app::{App, Message};
use crate::screens::admin::{edit_card, field, list_card};

pub fn contacts_tab(app: &App) -> Element<'_, Message> {
    let mut page = Column::new()
        .spacing(15)
        .push(button("Добавить контакт").on_press(Message::Contacts(TabAction::New)));

    if let Some(draft) = app.contacts_tab.draft() {
        let types: Vec<String> = CONTACT_TYPES.iter().map(|t| t.to_string()).collect();
        let fields = column![
            // тип можно ввести вручную, список только подсказка
            row![
                field("Тип", &draft.contact_type, |v| Message::ContactField(ContactField::Type, v)),
                pick_list(types, None::<String>, |v| Message::ContactField(ContactField::Type, v))
                    .placeholder("Выбрать"),
            ]
            .spacing(10),
            field("Значение", &draft.value, |v| Message::ContactField(ContactField::Value, v)),
            field("Подпись", draft.label.as_deref().unwrap_or_default(), |v| {
                Message::ContactField(ContactField::Label, v)
            }),
            field("Иконка", draft.icon.as_deref().unwrap_or_default(), |v| {
                Message::ContactField(ContactField::Icon, v)
            }),
        ]
        .spacing(10);
        page = page.push(edit_card(
            if draft.id.is_some() { "Редактировать" } else { "Новый контакт" },
            fields,
            app.contacts_tab.is_saving(),
            Message::Contacts(TabAction::Save),
            Message::Contacts(TabAction::Cancel),
        ));
    }

    app.store.contacts.iter().fold(page, |page, contact| {
        page.push(list_card(
            column![
                text(contact.label.clone().unwrap_or_else(|| contact.contact_type.clone())).size(14),
                text(&contact.value).size(20),
            ]
            .spacing(4),
            button("Изменить").on_press(Message::Contacts(TabAction::Edit(contact.clone()))),
        ))
    })
    .into()
}
