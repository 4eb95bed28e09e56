//! End-to-end admin and visitor flows against the mock backend, composed the way the app runs them.

mod common;

use serde_json::json;

use common::{client_for, start_server, temp_db, Backend, PASSWORD, TOKEN, USERNAME};
use edu_center::booking::{BookingError, BookingForm};
use edu_center::crud::CrudTab;
use edu_center::models::{Booking, BookingStatus, Review, Teacher};
use edu_center::session::{AuthSession, SqliteStorage};
use edu_center::store::EntityStore;
use edu_center::ApiClient;

fn filled_form(time: &str) -> BookingForm {
    let mut form = BookingForm::default();
    form.teacher = "Анна".to_string();
    form.subject = "Математика".to_string();
    form.time = time.to_string();
    form.student_name = "Пётр".to_string();
    form.student_phone = "+79990000000".to_string();
    form
}

/// What the app does on submit and on the server's answer.
async fn submit(form: &mut BookingForm, api: &ApiClient) -> Result<(), String> {
    let request = form.begin_submit().map_err(|e| e.to_string())?;
    let result = api.submit_booking(&request).await.map_err(|e| e.to_string());
    form.finish_submit(result.is_ok());
    result
}

async fn reload(store: &mut EntityStore, api: &ApiClient) -> usize {
    store.apply(EntityStore::fetch_all(api.clone(), TOKEN.to_string()).await)
}

#[tokio::test]
async fn login_survives_restart() {
    let (base, _) = start_server(Backend::default()).await;
    let api = client_for(&base);
    let db = temp_db("login");

    {
        let mut session = AuthSession::new(Box::new(SqliteStorage::open(&db).unwrap()));
        assert!(session.restore().is_none());
        let token = api.login(USERNAME, PASSWORD).await.unwrap();
        session.accept(token).unwrap();
        assert_eq!(session.token(), Some(TOKEN));
    }

    let mut session = AuthSession::new(Box::new(SqliteStorage::open(&db).unwrap()));
    assert_eq!(session.restore(), Some(TOKEN));
    assert!(session.is_authenticated());

    session.logout();
    let mut fresh = AuthSession::new(Box::new(SqliteStorage::open(&db).unwrap()));
    assert!(fresh.restore().is_none());
    let _ = std::fs::remove_file(&db);
}

#[tokio::test]
async fn failed_login_stores_nothing() {
    let (base, _) = start_server(Backend::default()).await;
    let api = client_for(&base);
    let db = temp_db("failed_login");

    assert!(api.login(USERNAME, "wrong").await.is_err());
    let mut fresh = AuthSession::new(Box::new(SqliteStorage::open(&db).unwrap()));
    assert!(fresh.restore().is_none());
    let _ = std::fs::remove_file(&db);
}

#[tokio::test]
async fn new_teacher_appears_after_save() {
    let (base, _) = start_server(Backend::default()).await;
    let api = client_for(&base);
    let mut store = EntityStore::default();
    let mut tab = CrudTab::<Teacher>::default();

    tab.start_create();
    let draft = tab.draft_mut().unwrap();
    draft.name = "Ivan Petrov".to_string();
    draft.specialization = Some("Math".to_string());
    let pending = tab.commit().unwrap();
    assert!(tab.commit().is_none());

    let id = api.save(TOKEN, &pending.record, pending.is_new).await.unwrap();
    tab.finish_save(true);
    assert_eq!(reload(&mut store, &api).await, 0);

    assert!(id.is_some());
    assert_eq!(store.teachers.len(), 1);
    assert_eq!(store.teachers[0].name, "Ivan Petrov");
    assert_eq!(store.teachers[0].specialization.as_deref(), Some("Math"));
    assert_eq!(store.teachers[0].id, id);
    assert!(!tab.is_saving());
    assert!(tab.draft().is_none());
}

#[tokio::test]
async fn editing_keeps_collection_size() {
    let mut backend = Backend::default();
    backend.seed("teachers", json!({ "id": 1, "name": "Анна" }));
    backend.seed("teachers", json!({ "id": 2, "name": "Олег" }));
    let (base, _) = start_server(backend).await;
    let api = client_for(&base);
    let mut store = EntityStore::default();
    reload(&mut store, &api).await;
    assert_eq!(store.teachers.len(), 2);

    let mut tab = CrudTab::<Teacher>::default();
    tab.start_edit(&store.teachers[1]);
    tab.draft_mut().unwrap().experience = Some("10 лет".to_string());
    let pending = tab.commit().unwrap();
    assert!(!pending.is_new);

    api.save(TOKEN, &pending.record, pending.is_new).await.unwrap();
    reload(&mut store, &api).await;
    assert_eq!(store.teachers.len(), 2);
    assert_eq!(store.teachers[1].experience.as_deref(), Some("10 лет"));
}

#[tokio::test]
async fn review_rating_is_clamped_before_save() {
    let (base, shared) = start_server(Backend::default()).await;
    let api = client_for(&base);
    let mut store = EntityStore::default();
    let mut tab = CrudTab::<Review>::default();

    tab.start_create();
    let draft = tab.draft_mut().unwrap();
    draft.author_name = "Мария".to_string();
    draft.review_text = "Отличные занятия".to_string();
    draft.rating = Some(9);
    let pending = tab.commit().unwrap();

    api.save(TOKEN, &pending.record, true).await.unwrap();
    reload(&mut store, &api).await;
    assert_eq!(shared.lock().unwrap().posts[0].1["rating"], 5);
    assert_eq!(store.reviews[0].rating(), 5);
}

#[tokio::test]
async fn booking_submission_clears_form() {
    let (base, shared) = start_server(Backend::default()).await;
    let api = client_for(&base);
    let mut form = filled_form("11:00");

    submit(&mut form, &api).await.unwrap();

    assert_eq!(form, BookingForm::default());
    let backend = shared.lock().unwrap();
    assert_eq!(backend.bookings.len(), 1);
    assert_eq!(backend.bookings[0]["selected_time"], "11:00");
    assert_eq!(backend.bookings[0]["student_email"], "");
}

#[tokio::test]
async fn rejected_booking_keeps_fields() {
    let backend = Backend {
        reject_bookings: true,
        ..Default::default()
    };
    let (base, _) = start_server(backend).await;
    let api = client_for(&base);
    let mut form = filled_form("15:00");
    let before = form.clone();

    assert!(submit(&mut form, &api).await.is_err());
    assert_eq!(form, before);
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn incomplete_booking_never_hits_server() {
    let (base, shared) = start_server(Backend::default()).await;
    let api = client_for(&base);
    let mut form = BookingForm::default();
    form.student_name = "Пётр".to_string();

    let err = form.begin_submit().unwrap_err();
    assert!(matches!(err, BookingError::MissingFields(ref f) if f.contains(&"телефон")));
    assert!(submit(&mut form, &api).await.is_err());
    assert!(shared.lock().unwrap().bookings.is_empty());
    assert_eq!(form.student_name, "Пётр");
}

#[tokio::test]
async fn advancing_booking_changes_only_status() {
    let original = json!({
        "id": 5,
        "student_name": "Пётр",
        "student_phone": "+79990000000",
        "student_email": "petr@example.ru",
        "selected_teacher": "Анна",
        "selected_subject": "Математика",
        "selected_time": "9:00",
        "status": "new",
        "created_at": "2024-05-01T10:30:00"
    });
    let mut backend = Backend::default();
    backend.seed("bookings", original.clone());
    let (base, shared) = start_server(backend).await;
    let api = client_for(&base);
    let mut store = EntityStore::default();
    reload(&mut store, &api).await;

    let mut tab = CrudTab::<Booking>::default();
    let booking = store.bookings[0].clone();
    let pending = tab.advance_status(&booking).unwrap();
    assert!(tab.advance_status(&booking).is_none());
    api.save(TOKEN, &pending.record, pending.is_new).await.unwrap();
    tab.finish_save(true);
    reload(&mut store, &api).await;

    let mut expected = original;
    expected["status"] = json!("in_progress");
    {
        let backend = shared.lock().unwrap();
        assert_eq!(backend.puts.len(), 1);
        assert_eq!(backend.puts[0].1, 5);
        assert_eq!(backend.puts[0].2, expected);
    }
    assert_eq!(store.bookings[0].status(), BookingStatus::InProgress);

    let completed = tab.advance_status(&store.bookings[0]).unwrap();
    assert_eq!(completed.record.status(), BookingStatus::Completed);
}
