use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Record type managed through the `?entity=<name>` data endpoint.
pub trait Entity: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Value of the `entity` query parameter.
    const NAME: &'static str;

    fn id(&self) -> Option<i64>;

    /// Empty record used by the "new" action of a tab.
    fn draft() -> Self;

    /// Hook applied right before a draft is sent to the server.
    fn normalize(&mut self) {}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

impl Entity for Teacher {
    const NAME: &'static str = "teachers";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn draft() -> Self {
        Teacher {
            name: String::new(),
            specialization: Some(String::new()),
            experience: Some(String::new()),
            description: Some(String::new()),
            ..Default::default()
        }
    }
}

// Для PickList
impl fmt::Display for Teacher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.specialization.as_deref().filter(|s| !s.is_empty()) {
            Some(spec) => write!(f, "{} - {}", self.name, spec),
            None => write!(f, "{}", self.name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub time: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

impl Entity for ScheduleItem {
    const NAME: &'static str = "schedule";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn draft() -> Self {
        ScheduleItem {
            description: Some(String::new()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub contact_type: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

impl Entity for Contact {
    const NAME: &'static str = "contacts";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn draft() -> Self {
        Contact {
            contact_type: "phone".to_string(),
            label: Some(String::new()),
            ..Default::default()
        }
    }
}

pub const CONTACT_TYPES: &[&str] = &["phone", "email", "address", "telegram", "whatsapp"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub author_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    pub review_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

impl Review {
    /// Rating in `[1, 5]`; absent means 5.
    pub fn rating(&self) -> i32 {
        clamp_rating(self.rating.unwrap_or(MAX_RATING))
    }

    pub fn is_published(&self) -> bool {
        self.is_published.unwrap_or(true)
    }
}

impl Entity for Review {
    const NAME: &'static str = "reviews";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn draft() -> Self {
        Review {
            rating: Some(MAX_RATING),
            is_published: Some(true),
            date: Some(chrono::Local::now().format("%Y-%m-%d").to_string()),
            ..Default::default()
        }
    }

    fn normalize(&mut self) {
        self.rating = Some(self.rating());
    }
}

pub fn clamp_rating(rating: i32) -> i32 {
    rating.clamp(MIN_RATING, MAX_RATING)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum BookingStatus {
    #[default]
    New,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: &'static [BookingStatus] = &[
        BookingStatus::New,
        BookingStatus::InProgress,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    /// The only forward step the admin UI offers; terminal states have none.
    pub fn next(self) -> Option<BookingStatus> {
        match self {
            BookingStatus::New => Some(BookingStatus::InProgress),
            BookingStatus::InProgress => Some(BookingStatus::Completed),
            BookingStatus::Completed | BookingStatus::Cancelled => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::New => "new",
            BookingStatus::InProgress => "in_progress",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl From<String> for BookingStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "in_progress" => BookingStatus::InProgress,
            "completed" => BookingStatus::Completed,
            "cancelled" => BookingStatus::Cancelled,
            _ => BookingStatus::New,
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BookingStatus::New => "Новая",
                BookingStatus::InProgress => "В работе",
                BookingStatus::Completed => "Завершена",
                BookingStatus::Cancelled => "Отменена",
            }
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub student_name: String,
    pub student_phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_teacher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Booking {
    pub fn status(&self) -> BookingStatus {
        self.status.unwrap_or_default()
    }

    pub fn created_at_display(&self) -> String {
        self.created_at
            .as_deref()
            .map(format_timestamp)
            .unwrap_or_default()
    }
}

impl Entity for Booking {
    const NAME: &'static str = "bookings";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn draft() -> Self {
        Booking {
            status: Some(BookingStatus::New),
            ..Default::default()
        }
    }
}

/// Payload of the public booking endpoint: a booking without the server-assigned fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub student_name: String,
    pub student_phone: String,
    pub student_email: String,
    pub selected_teacher: String,
    pub selected_subject: String,
    pub selected_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Email,
    Telegram,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                NotificationType::Email => "Email",
                NotificationType::Telegram => "Telegram",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSetting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub notification_type: NotificationType,
    #[serde(default)]
    pub is_enabled: bool,
    #[serde(default)]
    pub value: Option<String>,
}

impl Entity for NotificationSetting {
    const NAME: &'static str = "notifications";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn draft() -> Self {
        NotificationSetting {
            id: None,
            notification_type: NotificationType::Email,
            is_enabled: false,
            value: Some(String::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub time: String,
    pub available: bool,
}

impl Slot {
    pub fn new(time: &str, available: bool) -> Self {
        Slot {
            time: time.to_string(),
            available,
        }
    }
}

pub fn default_slots() -> Vec<Slot> {
    vec![
        Slot::new("9:00", true),
        Slot::new("11:00", true),
        Slot::new("13:00", false),
        Slot::new("15:00", true),
        Slot::new("17:00", true),
        Slot::new("19:00", true),
    ]
}

pub const SUBJECTS: &[&str] = &[
    "Математика",
    "Русский язык",
    "Физика",
    "Обществознание",
    "Химия",
    "Биология",
];

/// Formats a server timestamp as `dd.mm.yyyy hh:mm`; unknown formats are returned as is.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d.%m.%Y %H:%M").to_string();
    }
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_walks_forward_and_stops() {
        assert_eq!(BookingStatus::New.next(), Some(BookingStatus::InProgress));
        assert_eq!(BookingStatus::InProgress.next(), Some(BookingStatus::Completed));
        assert!(BookingStatus::Completed.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
    }

    #[test]
    fn unknown_status_reads_as_new() {
        let booking: Booking = serde_json::from_value(json!({
            "id": 3,
            "student_name": "A",
            "student_phone": "1",
            "status": "archived"
        }))
        .unwrap();
        assert_eq!(booking.status(), BookingStatus::New);

        let missing: Booking = serde_json::from_value(json!({
            "student_name": "A",
            "student_phone": "1",
            "status": null
        }))
        .unwrap();
        assert_eq!(missing.status(), BookingStatus::New);
    }

    #[test]
    fn status_serializes_snake_case() {
        let booking = Booking {
            status: Some(BookingStatus::InProgress),
            ..Booking::draft()
        };
        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["status"], "in_progress");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn rating_is_clamped() {
        let mut review = Review {
            rating: Some(7),
            ..Review::draft()
        };
        assert_eq!(review.rating(), 5);
        review.normalize();
        assert_eq!(review.rating, Some(5));

        review.rating = Some(0);
        review.normalize();
        assert_eq!(review.rating, Some(1));
    }

    #[test]
    fn review_defaults() {
        let review: Review = serde_json::from_value(json!({
            "author_name": "Мария",
            "review_text": "Отлично"
        }))
        .unwrap();
        assert_eq!(review.rating(), 5);
        assert!(review.is_published());
    }

    #[test]
    fn contact_type_uses_wire_name() {
        let contact = Contact {
            contact_type: "email".into(),
            value: "info@center.ru".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&contact).unwrap();
        assert_eq!(value["type"], "email");
    }

    #[test]
    fn timestamps_are_formatted() {
        assert_eq!(format_timestamp("2024-03-05T14:07:00.123456"), "05.03.2024 14:07");
        assert_eq!(format_timestamp("2024-03-05T14:07:00+03:00"), "05.03.2024 14:07");
        assert_eq!(format_timestamp("вчера"), "вчера");
    }
}
