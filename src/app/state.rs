use iced::{Task, Theme};
use iced_aw::date_picker::Date;

use edu_center::booking::BookingForm;
use edu_center::config::Config;
use edu_center::crud::CrudTab;
use edu_center::models::{
    default_slots, Booking, Contact, NotificationType, Review, ScheduleItem, Slot, Teacher,
};
use edu_center::notifications::NotificationsForm;
use edu_center::session::{AuthSession, MemoryStorage, SqliteStorage, TokenStorage};
use edu_center::store::{EntityStore, PublicContent};
use edu_center::ApiClient;

use super::Message;

pub struct App {
    pub theme: Theme,
    pub api: ApiClient,
    pub session: AuthSession,
    /// Bumped on logout so that loads started by the old session are dropped.
    pub session_generation: u64,
    pub current_screen: Screen,
    pub admin_tab: AdminTab,
    pub notice: Option<Notice>,
    // Вход
    pub username: String,
    pub password: String,
    pub error_message: String,
    pub logging_in: bool,
    // Публичная часть
    pub public: PublicContent,
    pub slots: Vec<Slot>,
    pub booking: BookingForm,
    pub booking_open: bool,
    pub booking_error: Option<String>,
    // Админка
    pub store: EntityStore,
    pub teachers_tab: CrudTab<Teacher>,
    pub schedule_tab: CrudTab<ScheduleItem>,
    pub contacts_tab: CrudTab<Contact>,
    pub reviews_tab: CrudTab<Review>,
    pub bookings_tab: CrudTab<Booking>,
    pub viewed_booking: Option<Booking>,
    pub notifications: NotificationsForm,
    pub notifications_saving: Option<NotificationType>,
    pub date: Date,
    pub show_picker: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Landing,
    Login,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Bookings,
    Teachers,
    Schedule,
    Contacts,
    Reviews,
    Notifications,
}

impl AdminTab {
    pub const ALL: &'static [AdminTab] = &[
        AdminTab::Bookings,
        AdminTab::Teachers,
        AdminTab::Schedule,
        AdminTab::Contacts,
        AdminTab::Reviews,
        AdminTab::Notifications,
    ];

    pub fn title(self) -> &'static str {
        match self {
            AdminTab::Bookings => "Заявки",
            AdminTab::Teachers => "Преподаватели",
            AdminTab::Schedule => "Расписание",
            AdminTab::Contacts => "Контакты",
            AdminTab::Reviews => "Отзывы",
            AdminTab::Notifications => "Уведомления",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Notice {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notice {
            text: text.into(),
            is_error: true,
        }
    }
}

impl App {
    pub fn new(config: Config, api: ApiClient) -> (Self, Task<Message>) {
        let storage: Box<dyn TokenStorage> = match SqliteStorage::open(&config.storage_path) {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::error!("cannot open {}: {}; session will not survive restart", config.storage_path, e);
                Box::new(MemoryStorage::default())
            }
        };
        let mut session = AuthSession::new(storage);
        session.restore();

        let app = App {
            theme: config.theme(),
            api,
            session,
            session_generation: 0,
            current_screen: Screen::Landing,
            admin_tab: AdminTab::default(),
            notice: None,
            username: String::new(),
            password: String::new(),
            error_message: String::new(),
            logging_in: false,
            public: PublicContent::default(),
            slots: default_slots(),
            booking: BookingForm::default(),
            booking_open: false,
            booking_error: None,
            store: EntityStore::default(),
            teachers_tab: CrudTab::default(),
            schedule_tab: CrudTab::default(),
            contacts_tab: CrudTab::default(),
            reviews_tab: CrudTab::default(),
            bookings_tab: CrudTab::default(),
            viewed_booking: None,
            notifications: NotificationsForm::default(),
            notifications_saving: None,
            date: Date::today(),
            show_picker: false,
        };

        let mut tasks = vec![app.load_public()];
        if app.session.is_authenticated() {
            tasks.push(app.load_all());
        }
        (app, Task::batch(tasks))
    }

    pub fn token(&self) -> String {
        self.session.token().unwrap_or_default().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edu_center::session::TOKEN_KEY;

    fn app_over(path: &std::path::Path) -> App {
        let config = Config {
            storage_path: path.to_string_lossy().to_string(),
            ..Config::default()
        };
        let api = ApiClient::new(&config).unwrap();
        App::new(config, api).0
    }

    #[test]
    fn stored_token_restores_admin_access() {
        let path = std::env::temp_dir().join(format!("edu_center_app_restore_{}.db", std::process::id()));
        let _ = std::fs::remove_file(&path);
        SqliteStorage::open(&path)
            .unwrap()
            .set(TOKEN_KEY, "token-42")
            .unwrap();

        let mut app = app_over(&path);
        assert_eq!(app.current_screen, Screen::Landing);
        assert_eq!(app.token(), "token-42");

        let _ = app.update(Message::GoToAdmin);
        assert_eq!(app.current_screen, Screen::Admin);

        let _ = app.update(Message::Logout);
        assert!(!app_over(&path).session.is_authenticated());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn empty_storage_starts_logged_out() {
        let path = std::env::temp_dir().join(format!("edu_center_app_empty_{}.db", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let mut app = app_over(&path);
        assert!(!app.session.is_authenticated());
        let _ = app.update(Message::GoToAdmin);
        assert_eq!(app.current_screen, Screen::Login);
        let _ = std::fs::remove_file(&path);
    }
}
