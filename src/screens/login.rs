use iced::{widget::{column, text, text_input, button, vertical_space, Container}, Length, Alignment};
use crate::app::{App, Message};

pub fn login_screen(app: &App) -> Container<Message> {
    let content = column![
        text("Вход в админ-панель").size(30),
        vertical_space(),
        text_input("Логин", &app.username)
            .on_input(Message::UsernameChanged)
            .padding(10)
            .size(18)
            .width(Length::Fixed(350.0)),
        text_input("Пароль", &app.password)
            .on_input(Message::PasswordChanged)
            .on_submit(Message::LoginPressed)
            .secure(true)
            .padding(10)
            .size(18)
            .width(Length::Fixed(350.0)),
        button(if app.logging_in { "Вход..." } else { "Войти" })
            .on_press_maybe((!app.logging_in).then_some(Message::LoginPressed))
            .padding(10),
        text(&app.error_message).size(20),
        vertical_space(),
        button("На главную")
            .on_press(Message::GoToLanding)
            .padding(10),
    ]
        .spacing(15)
        .width(Length::Fill)
        .align_x(Alignment::Center);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(40)
}
