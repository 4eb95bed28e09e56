use iced_aw::date_picker::Date;

use edu_center::models::{Booking, Contact, NotificationType, Review, ScheduleItem, Teacher};
use edu_center::store::{PublicSnapshot, Snapshot};

use crate::app::state::AdminTab;

#[derive(Debug, Clone)]
pub enum Message {
    GoToLanding,
    GoToAdmin,
    Logout,
    DismissNotice,
    // Публичная страница
    PublicLoaded(PublicSnapshot),
    OpenBooking(Option<String>),
    CloseBooking,
    BookingTeacherSelected(String),
    BookingSubjectSelected(String),
    BookingTimeSelected(String),
    BookingNameChanged(String),
    BookingPhoneChanged(String),
    BookingEmailChanged(String),
    SubmitBooking,
    BookingSubmitted(Result<(), String>),
    // Вход
    UsernameChanged(String),
    PasswordChanged(String),
    LoginPressed,
    LoggedIn(Result<String, String>),
    // Админка
    SelectTab(AdminTab),
    AllLoaded(u64, Snapshot),
    Saved(&'static str, Result<Option<i64>, String>),

    Teachers(TabAction<Teacher>),
    TeacherField(TeacherField, String),

    Schedule(TabAction<ScheduleItem>),
    ScheduleField(ScheduleField, String),
    ScheduleTeacherSelected(Teacher),

    Contacts(TabAction<Contact>),
    ContactField(ContactField, String),

    Reviews(TabAction<Review>),
    ReviewField(ReviewField, String),
    ReviewRatingSelected(i32),
    ReviewPublishedToggled(bool),
    ChooseDate,
    SubmitDate(Date),
    CancelDate,

    ViewBooking(Booking),
    CloseBookingDetails,
    AdvanceBooking(Booking),

    NotificationToggled(NotificationType, bool),
    NotificationValueChanged(NotificationType, String),
    SaveNotification(NotificationType),
}

/// Actions shared by every CRUD tab.
#[derive(Debug, Clone)]
pub enum TabAction<E> {
    New,
    Edit(E),
    Save,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeacherField {
    Name,
    PhotoUrl,
    Specialization,
    Experience,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleField {
    Time,
    Title,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Type,
    Value,
    Label,
    Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewField {
    AuthorName,
    AuthorPhoto,
    Text,
}
