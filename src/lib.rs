pub mod api;
pub mod booking;
pub mod config;
pub mod crud;
pub mod error;
pub mod models;
pub mod notifications;
pub mod session;
pub mod store;

pub use api::ApiClient;
pub use error::ApiError;
