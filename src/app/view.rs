use iced::widget::{button, container, horizontal_space, row, text, Column};
use iced::{Alignment, Color, Element, Length};

use crate::app::state::Screen;
use crate::screens::{admin_screen, landing_screen, login_screen};
use super::{App, Message};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let content = match self.current_screen {
            Screen::Landing => landing_screen(self),
            Screen::Login => login_screen(self),
            Screen::Admin => admin_screen(self),
        };

        Column::new()
            .push_maybe(self.notice.as_ref().map(|notice| {
                let color = if notice.is_error {
                    Color::from_rgb(0.8, 0.1, 0.1)
                } else {
                    Color::from_rgb(0.1, 0.55, 0.2)
                };
                container(
                    row![
                        text(&notice.text).size(16).color(color),
                        horizontal_space(),
                        button("×").on_press(Message::DismissNotice),
                    ]
                    .align_y(Alignment::Center),
                )
                .padding(10)
                .width(Length::Fill)
                .style(container::bordered_box)
            }))
            .push(content.width(Length::Fill).height(Length::Fill))
            .into()
    }
}
