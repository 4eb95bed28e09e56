use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Ошибка сети: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Сервер вернул статус {0}")]
    Status(u16),

    #[error("Некорректный ответ сервера: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Токен авторизации отсутствует")]
    MissingToken,

    #[error("Сервер отклонил запрос: {0}")]
    Rejected(String),

    #[error("Ошибка локального хранилища: {0}")]
    Storage(#[from] rusqlite::Error),
}
