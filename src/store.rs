//! In-memory collections of every entity, refreshed wholesale from the server.

use crate::api::ApiClient;
use crate::models::{Booking, Contact, Entity, NotificationSetting, Review, ScheduleItem, Teacher};

/// Entity kinds that have a home in [`EntityStore`].
pub trait Stored: Entity {
    fn items(store: &EntityStore) -> &Vec<Self>;
    fn items_mut(store: &mut EntityStore) -> &mut Vec<Self>;
}

macro_rules! stored {
    ($ty:ty, $field:ident) => {
        impl Stored for $ty {
            fn items(store: &EntityStore) -> &Vec<Self> {
                &store.$field
            }
            fn items_mut(store: &mut EntityStore) -> &mut Vec<Self> {
                &mut store.$field
            }
        }
    };
}

#[derive(Debug, Default, Clone)]
pub struct EntityStore {
    pub teachers: Vec<Teacher>,
    pub schedule: Vec<ScheduleItem>,
    pub contacts: Vec<Contact>,
    pub reviews: Vec<Review>,
    pub bookings: Vec<Booking>,
    pub notifications: Vec<NotificationSetting>,
}

stored!(Teacher, teachers);
stored!(ScheduleItem, schedule);
stored!(Contact, contacts);
stored!(Review, reviews);
stored!(Booking, bookings);
stored!(NotificationSetting, notifications);

/// Result of one load-all pass. Errors are strings so the value can travel inside UI messages.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub teachers: Result<Vec<Teacher>, String>,
    pub schedule: Result<Vec<ScheduleItem>, String>,
    pub contacts: Result<Vec<Contact>, String>,
    pub reviews: Result<Vec<Review>, String>,
    pub bookings: Result<Vec<Booking>, String>,
    pub notifications: Result<Vec<NotificationSetting>, String>,
}

impl EntityStore {
    pub fn get<E: Stored>(&self) -> &[E] {
        E::items(self)
    }

    pub async fn load<E: Stored>(api: &ApiClient, token: &str) -> Result<Vec<E>, String> {
        api.list::<E>(token).await.map_err(|e| e.to_string())
    }

    /// Replaces a collection on success; on failure the previous contents stay and the error is logged.
    pub fn replace<E: Stored>(&mut self, loaded: Result<Vec<E>, String>) -> bool {
        match loaded {
            Ok(items) => {
                log::debug!("loaded {} {}", items.len(), E::NAME);
                *E::items_mut(self) = items;
                true
            }
            Err(e) => {
                log::warn!("Error loading {}: {}", E::NAME, e);
                false
            }
        }
    }

    pub async fn fetch_all(api: ApiClient, token: String) -> Snapshot {
        Snapshot {
            teachers: Self::load(&api, &token).await,
            schedule: Self::load(&api, &token).await,
            contacts: Self::load(&api, &token).await,
            reviews: Self::load(&api, &token).await,
            bookings: Self::load(&api, &token).await,
            notifications: Self::load(&api, &token).await,
        }
    }

    /// Applies a load-all pass; returns how many collections failed to load.
    pub fn apply(&mut self, snapshot: Snapshot) -> usize {
        [
            self.replace(snapshot.teachers),
            self.replace(snapshot.schedule),
            self.replace(snapshot.contacts),
            self.replace(snapshot.reviews),
            self.replace(snapshot.bookings),
            self.replace(snapshot.notifications),
        ]
        .iter()
        .filter(|ok| !**ok)
        .count()
    }

    pub fn teacher_name(&self, id: i64) -> Option<&str> {
        self.teachers
            .iter()
            .find(|t| t.id == Some(id))
            .map(|t| t.name.as_str())
    }
}

/// What the landing page shows, fetched from the public endpoint.
#[derive(Debug, Default, Clone)]
pub struct PublicContent {
    pub teachers: Vec<Teacher>,
    pub schedule: Vec<ScheduleItem>,
    pub contacts: Vec<Contact>,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone)]
pub struct PublicSnapshot {
    pub teachers: Result<Vec<Teacher>, String>,
    pub schedule: Result<Vec<ScheduleItem>, String>,
    pub contacts: Result<Vec<Contact>, String>,
    pub reviews: Result<Vec<Review>, String>,
}

impl PublicContent {
    pub async fn fetch(api: ApiClient) -> PublicSnapshot {
        PublicSnapshot {
            teachers: api.public_list().await.map_err(|e| e.to_string()),
            schedule: api.public_list().await.map_err(|e| e.to_string()),
            contacts: api.public_list().await.map_err(|e| e.to_string()),
            reviews: api.public_list().await.map_err(|e| e.to_string()),
        }
    }

    pub fn apply(&mut self, snapshot: PublicSnapshot) {
        keep_on_error(&mut self.teachers, snapshot.teachers, Teacher::NAME);
        keep_on_error(&mut self.schedule, snapshot.schedule, ScheduleItem::NAME);
        keep_on_error(&mut self.contacts, snapshot.contacts, Contact::NAME);
        keep_on_error(&mut self.reviews, snapshot.reviews, Review::NAME);
    }

    pub fn published_reviews(&self) -> impl Iterator<Item = &Review> {
        self.reviews.iter().filter(|r| r.is_published())
    }

    pub fn teacher_name(&self, id: i64) -> Option<&str> {
        self.teachers
            .iter()
            .find(|t| t.id == Some(id))
            .map(|t| t.name.as_str())
    }
}

fn keep_on_error<T>(slot: &mut Vec<T>, loaded: Result<Vec<T>, String>, name: &str) {
    match loaded {
        Ok(items) => *slot = items,
        Err(e) => log::warn!("Error loading public {}: {}", name, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher(id: i64, name: &str) -> Teacher {
        Teacher {
            id: Some(id),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn failed_load_keeps_previous_items() {
        let mut store = EntityStore::default();
        assert!(store.replace(Ok(vec![teacher(1, "Анна")])));
        assert!(!store.replace::<Teacher>(Err("Сервер вернул статус 500".into())));
        assert_eq!(store.get::<Teacher>().len(), 1);
    }

    #[test]
    fn apply_counts_failures() {
        let mut store = EntityStore::default();
        let failed = store.apply(Snapshot {
            teachers: Ok(vec![teacher(1, "Анна")]),
            schedule: Err("down".into()),
            contacts: Ok(vec![]),
            reviews: Ok(vec![]),
            bookings: Err("down".into()),
            notifications: Ok(vec![]),
        });
        assert_eq!(failed, 2);
        assert_eq!(store.teacher_name(1), Some("Анна"));
    }

    #[test]
    fn failed_public_section_keeps_what_was_shown() {
        let mut public = PublicContent::default();
        public.apply(PublicSnapshot {
            teachers: Ok(vec![teacher(1, "Анна")]),
            schedule: Ok(vec![]),
            contacts: Ok(vec![]),
            reviews: Ok(vec![]),
        });
        public.apply(PublicSnapshot {
            teachers: Err("Ошибка сети".into()),
            schedule: Ok(vec![]),
            contacts: Err("Ошибка сети".into()),
            reviews: Ok(vec![]),
        });
        assert_eq!(public.teachers.len(), 1);
        assert_eq!(public.teacher_name(1), Some("Анна"));
        assert!(public.contacts.is_empty());
    }

    #[test]
    fn only_published_reviews_are_public() {
        let content = PublicContent {
            reviews: vec![
                Review {
                    author_name: "A".into(),
                    is_published: Some(false),
                    ..Default::default()
                },
                Review {
                    author_name: "B".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let names: Vec<_> = content.published_reviews().map(|r| r.author_name.as_str()).collect();
        assert_eq!(names, ["B"]);
    }
}
