use chrono::{Datelike, NaiveDate};
use iced::Task;
use iced_aw::date_picker::Date;

use edu_center::crud::{CrudTab, PendingSave};
use edu_center::models::{
    clamp_rating, Booking, Contact, Entity, NotificationSetting, Review, ScheduleItem, Teacher,
};
use edu_center::booking::BookingError;
use edu_center::store::{EntityStore, PublicContent, Stored};

use crate::app::messages::{ContactField, ReviewField, ScheduleField, TabAction, TeacherField};
use crate::app::state::{Notice, Screen};
use super::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::GoToLanding => {
                self.current_screen = Screen::Landing;
                self.load_public()
            }
            Message::GoToAdmin => {
                if self.session.is_authenticated() {
                    self.current_screen = Screen::Admin;
                    self.load_all()
                } else {
                    self.current_screen = Screen::Login;
                    Task::none()
                }
            }
            Message::Logout => {
                self.session.logout();
                self.session_generation += 1;
                self.reset_admin();
                self.current_screen = Screen::Landing;
                Task::none()
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }

            Message::PublicLoaded(snapshot) => {
                self.public.apply(snapshot);
                Task::none()
            }
            Message::OpenBooking(teacher) => {
                if let Some(name) = teacher {
                    self.booking.teacher = name;
                }
                self.booking_error = None;
                self.booking_open = true;
                Task::none()
            }
            Message::CloseBooking => {
                self.booking_open = false;
                Task::none()
            }
            Message::BookingTeacherSelected(v) => {
                self.booking.teacher = v;
                Task::none()
            }
            Message::BookingSubjectSelected(v) => {
                self.booking.subject = v;
                Task::none()
            }
            Message::BookingTimeSelected(v) => {
                self.booking.time = v;
                // выбор слота на странице сразу открывает форму
                if !self.booking_open {
                    self.booking_error = None;
                    self.booking_open = true;
                }
                Task::none()
            }
            Message::BookingNameChanged(v) => {
                self.booking.student_name = v;
                Task::none()
            }
            Message::BookingPhoneChanged(v) => {
                self.booking.student_phone = v;
                Task::none()
            }
            Message::BookingEmailChanged(v) => {
                self.booking.student_email = v;
                Task::none()
            }
            Message::SubmitBooking => match self.booking.begin_submit() {
                Ok(request) => {
                    self.booking_error = None;
                    let api = self.api.clone();
                    Task::perform(
                        async move { api.submit_booking(&request).await.map_err(|e| e.to_string()) },
                        Message::BookingSubmitted,
                    )
                }
                Err(BookingError::InFlight) => Task::none(),
                Err(e) => {
                    self.booking_error = Some(e.to_string());
                    Task::none()
                }
            },
            Message::BookingSubmitted(result) => {
                match result {
                    Ok(()) => {
                        log::info!("booking submitted");
                        self.booking.finish_submit(true);
                        self.booking_open = false;
                        self.notice = Some(Notice::info(
                            "Заявка отправлена! Мы свяжемся с вами в ближайшее время.",
                        ));
                    }
                    Err(e) => {
                        log::error!("booking submission failed: {}", e);
                        self.booking.finish_submit(false);
                        self.booking_error =
                            Some("Не удалось отправить заявку. Попробуйте ещё раз.".to_string());
                    }
                }
                Task::none()
            }

            Message::UsernameChanged(v) => {
                self.username = v;
                Task::none()
            }
            Message::PasswordChanged(v) => {
                self.password = v;
                Task::none()
            }
            Message::LoginPressed => {
                if self.logging_in {
                    return Task::none();
                }
                if self.username.trim().is_empty() || self.password.is_empty() {
                    self.error_message = "Пожалуйста, заполните все поля.".to_string();
                    return Task::none();
                }
                self.logging_in = true;
                self.error_message.clear();
                let api = self.api.clone();
                let username = self.username.trim().to_string();
                let password = self.password.clone();
                Task::perform(
                    async move { api.login(&username, &password).await.map_err(|e| e.to_string()) },
                    Message::LoggedIn,
                )
            }
            Message::LoggedIn(result) => {
                self.logging_in = false;
                match result.and_then(|token| self.session.accept(token).map_err(|e| e.to_string())) {
                    Ok(()) => {
                        log::info!("admin {} logged in", self.username);
                        self.password.clear();
                        self.error_message.clear();
                        self.current_screen = Screen::Admin;
                        self.notice = Some(Notice::info("Вы вошли в систему"));
                        self.load_all()
                    }
                    Err(e) => {
                        log::error!("login failed: {}", e);
                        self.error_message = "Неверные данные для входа".to_string();
                        Task::none()
                    }
                }
            }

            Message::SelectTab(tab) => {
                self.admin_tab = tab;
                Task::none()
            }
            Message::AllLoaded(generation, snapshot) => {
                if generation != self.session_generation {
                    log::debug!("dropping data loaded by a closed session");
                    return Task::none();
                }
                let failed = self.store.apply(snapshot);
                if failed > 0 {
                    log::warn!("{} collections failed to load", failed);
                }
                self.notifications.sync(&self.store.notifications);
                Task::none()
            }
            Message::Saved(entity, result) => {
                self.finish_save(entity, result.is_ok());
                match result {
                    Ok(id) => {
                        log::info!("saved {} (id {:?})", entity, id);
                        if !self.session.is_authenticated() {
                            return Task::none();
                        }
                        self.notice = Some(Notice::info("Данные сохранены"));
                        self.load_all()
                    }
                    Err(e) => {
                        log::error!("saving {} failed: {}", entity, e);
                        self.notice = Some(Notice::error(format!("Не удалось сохранить данные: {}", e)));
                        Task::none()
                    }
                }
            }

            Message::Teachers(action) => match tab_action(&mut self.teachers_tab, action) {
                Some(pending) => self.save(pending),
                None => Task::none(),
            },
            Message::TeacherField(field, v) => {
                if let Some(draft) = self.teachers_tab.draft_mut() {
                    match field {
                        TeacherField::Name => draft.name = v,
                        TeacherField::PhotoUrl => draft.photo_url = Some(v),
                        TeacherField::Specialization => draft.specialization = Some(v),
                        TeacherField::Experience => draft.experience = Some(v),
                        TeacherField::Description => draft.description = Some(v),
                    }
                }
                Task::none()
            }

            Message::Schedule(action) => match tab_action(&mut self.schedule_tab, action) {
                Some(pending) => self.save(pending),
                None => Task::none(),
            },
            Message::ScheduleField(field, v) => {
                if let Some(draft) = self.schedule_tab.draft_mut() {
                    match field {
                        ScheduleField::Time => draft.time = v,
                        ScheduleField::Title => draft.title = v,
                        ScheduleField::Description => draft.description = Some(v),
                    }
                }
                Task::none()
            }
            Message::ScheduleTeacherSelected(teacher) => {
                if let Some(draft) = self.schedule_tab.draft_mut() {
                    draft.teacher_id = teacher.id;
                }
                Task::none()
            }

            Message::Contacts(action) => match tab_action(&mut self.contacts_tab, action) {
                Some(pending) => self.save(pending),
                None => Task::none(),
            },
            Message::ContactField(field, v) => {
                if let Some(draft) = self.contacts_tab.draft_mut() {
                    match field {
                        ContactField::Type => draft.contact_type = v,
                        ContactField::Value => draft.value = v,
                        ContactField::Label => draft.label = Some(v),
                        ContactField::Icon => draft.icon = Some(v),
                    }
                }
                Task::none()
            }

            Message::Reviews(action) => {
                self.show_picker = false;
                match tab_action(&mut self.reviews_tab, action) {
                    Some(pending) => self.save(pending),
                    None => Task::none(),
                }
            }
            Message::ReviewField(field, v) => {
                if let Some(draft) = self.reviews_tab.draft_mut() {
                    match field {
                        ReviewField::AuthorName => draft.author_name = v,
                        ReviewField::AuthorPhoto => draft.author_photo = Some(v),
                        ReviewField::Text => draft.review_text = v,
                    }
                }
                Task::none()
            }
            Message::ReviewRatingSelected(rating) => {
                if let Some(draft) = self.reviews_tab.draft_mut() {
                    draft.rating = Some(clamp_rating(rating));
                }
                Task::none()
            }
            Message::ReviewPublishedToggled(published) => {
                if let Some(draft) = self.reviews_tab.draft_mut() {
                    draft.is_published = Some(published);
                }
                Task::none()
            }
            Message::ChooseDate => {
                if let Some(draft) = self.reviews_tab.draft() {
                    self.date = draft
                        .date
                        .as_deref()
                        .and_then(parse_date)
                        .unwrap_or_else(Date::today);
                }
                self.show_picker = true;
                Task::none()
            }
            Message::SubmitDate(date) => {
                self.date = date;
                if let Some(draft) = self.reviews_tab.draft_mut() {
                    draft.date = Some(format_date(date));
                }
                self.show_picker = false;
                Task::none()
            }
            Message::CancelDate => {
                self.show_picker = false;
                Task::none()
            }

            Message::ViewBooking(booking) => {
                self.viewed_booking = Some(booking);
                Task::none()
            }
            Message::CloseBookingDetails => {
                self.viewed_booking = None;
                Task::none()
            }
            Message::AdvanceBooking(booking) => match self.bookings_tab.advance_status(&booking) {
                Some(pending) => {
                    if self.viewed_booking.as_ref().is_some_and(|b| b.id == booking.id) {
                        self.viewed_booking = Some(pending.record.clone());
                    }
                    self.save(pending)
                }
                None => Task::none(),
            },

            Message::NotificationToggled(kind, enabled) => {
                self.notifications.edit(kind).enabled = enabled;
                Task::none()
            }
            Message::NotificationValueChanged(kind, v) => {
                self.notifications.edit(kind).value = v;
                Task::none()
            }
            Message::SaveNotification(kind) => {
                if self.notifications_saving.is_some() {
                    return Task::none();
                }
                match self.notifications.to_setting(kind) {
                    Ok(setting) => {
                        self.notifications_saving = Some(kind);
                        self.save(PendingSave {
                            record: setting,
                            is_new: false,
                        })
                    }
                    Err(e) => {
                        self.notice = Some(Notice::error(e.to_string()));
                        Task::none()
                    }
                }
            }
        }
    }

    pub fn load_all(&self) -> Task<Message> {
        let generation = self.session_generation;
        Task::perform(
            EntityStore::fetch_all(self.api.clone(), self.token()),
            move |snapshot| Message::AllLoaded(generation, snapshot),
        )
    }

    pub fn load_public(&self) -> Task<Message> {
        Task::perform(PublicContent::fetch(self.api.clone()), Message::PublicLoaded)
    }

    fn save<E: Stored>(&self, pending: PendingSave<E>) -> Task<Message> {
        let api = self.api.clone();
        let token = self.token();
        Task::perform(
            async move {
                api.save(&token, &pending.record, pending.is_new)
                    .await
                    .map_err(|e| e.to_string())
            },
            |result| Message::Saved(E::NAME, result),
        )
    }

    fn finish_save(&mut self, entity: &str, saved: bool) {
        if entity == Teacher::NAME {
            self.teachers_tab.finish_save(saved);
        } else if entity == ScheduleItem::NAME {
            self.schedule_tab.finish_save(saved);
        } else if entity == Contact::NAME {
            self.contacts_tab.finish_save(saved);
        } else if entity == Review::NAME {
            self.reviews_tab.finish_save(saved);
        } else if entity == Booking::NAME {
            self.bookings_tab.finish_save(saved);
        } else if entity == NotificationSetting::NAME {
            if let Some(kind) = self.notifications_saving.take() {
                if saved {
                    self.notifications.mark_saved(kind);
                }
            }
        }
    }

    fn reset_admin(&mut self) {
        self.store = EntityStore::default();
        self.teachers_tab = CrudTab::default();
        self.schedule_tab = CrudTab::default();
        self.contacts_tab = CrudTab::default();
        self.reviews_tab = CrudTab::default();
        self.bookings_tab = CrudTab::default();
        self.viewed_booking = None;
        self.notifications = Default::default();
        self.notifications_saving = None;
        self.show_picker = false;
        self.username.clear();
        self.password.clear();
        self.error_message.clear();
    }
}

fn tab_action<E: Stored>(tab: &mut CrudTab<E>, action: TabAction<E>) -> Option<PendingSave<E>> {
    match action {
        TabAction::New => {
            tab.start_create();
            None
        }
        TabAction::Edit(item) => {
            tab.start_edit(&item);
            None
        }
        TabAction::Save => tab.commit(),
        TabAction::Cancel => {
            tab.cancel();
            None
        }
    }
}

fn parse_date(raw: &str) -> Option<Date> {
    let date = NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()?;
    Some(Date::from_ymd(date.year(), date.month(), date.day()))
}

fn format_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year, date.month, date.day)
}
