use iced::widget::{button, checkbox, column, pick_list, row, text, Column};
use iced::{Alignment, Element};
use iced_aw::date_picker;

use edu_center::models::{MAX_RATING, MIN_RATING};
use crate::app::messages::{ReviewField, TabAction};
use crate::app::{App, Message};
use crate::screens::admin::{edit_card, field, list_card};

pub fn stars(rating: i32) -> String {
    let filled = rating.clamp(0, MAX_RATING) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(MAX_RATING as usize - filled))
}

pub fn reviews_tab(app: &App) -> Element<'_, Message> {
    let mut page = Column::new()
        .spacing(15)
        .push(button("Добавить отзыв").on_press(Message::Reviews(TabAction::New)));

    if let Some(draft) = app.reviews_tab.draft() {
        let ratings: Vec<i32> = (MIN_RATING..=MAX_RATING).collect();
        let date_button = button(text("Дата")).on_press(Message::ChooseDate);
        let fields = column![
            field("Автор", &draft.author_name, |v| Message::ReviewField(ReviewField::AuthorName, v)),
            field("URL фото", draft.author_photo.as_deref().unwrap_or_default(), |v| {
                Message::ReviewField(ReviewField::AuthorPhoto, v)
            }),
            field("Текст отзыва", &draft.review_text, |v| Message::ReviewField(ReviewField::Text, v)),
            row![
                text("Оценка"),
                pick_list(ratings, Some(draft.rating()), Message::ReviewRatingSelected),
                text(stars(draft.rating())),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
            row![
                date_picker(app.show_picker, app.date, date_button, Message::CancelDate, Message::SubmitDate),
                text(draft.date.clone().unwrap_or_default()),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
            checkbox("Опубликован", draft.is_published()).on_toggle(Message::ReviewPublishedToggled),
        ]
        .spacing(10);
        page = page.push(edit_card(
            if draft.id.is_some() { "Редактировать" } else { "Новый отзыв" },
            fields,
            app.reviews_tab.is_saving(),
            Message::Reviews(TabAction::Save),
            Message::Reviews(TabAction::Cancel),
        ));
    }

    app.store.reviews.iter().fold(page, |page, review| {
        let published = if review.is_published() { "Опубликован" } else { "Скрыт" };
        page.push(list_card(
            column![
                text(&review.author_name).size(20),
                text(format!("{}  {}", stars(review.rating()), review.date.clone().unwrap_or_default())).size(14),
                text(&review.review_text).size(14),
                text(published).size(14),
            ]
            .spacing(4),
            button("Изменить").on_press(Message::Reviews(TabAction::Edit(review.clone()))),
        ))
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_fill_up_to_rating() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(9), "★★★★★");
    }
}
