pub mod admin;
pub mod booking_dialog;
pub mod bookings;
pub mod contacts;
pub mod landing;
pub mod login;
pub mod notifications;
pub mod reviews;
pub mod schedule;
pub mod teachers;

pub use admin::admin_screen;
pub use landing::landing_screen;
pub use login::login_screen;
