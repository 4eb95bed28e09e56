//! Typed access to the remote endpoints: auth, admin data, public data and booking submission.

use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::ApiError;
use crate::models::{BookingRequest, Entity};

pub const AUTH_HEADER: &str = "X-Auth-Token";

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    auth_url: String,
    data_url: String,
    public_url: String,
    booking_url: String,
}

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Deserialize)]
struct CreatedResponse {
    #[serde(default)]
    id: Option<i64>,
}

#[derive(Deserialize)]
struct BookingResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(ApiClient {
            http: builder.build()?,
            auth_url: config.auth_url.clone(),
            data_url: config.data_url.clone(),
            public_url: config.public_url.clone(),
            booking_url: config.booking_url.clone(),
        })
    }

    /// Exchanges credentials for a bearer token. A 2xx answer without a non-empty token is a failure.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let resp = self
            .http
            .post(&self.auth_url)
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;
        let body: LoginResponse = read_json(resp).await?;
        match body.token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ApiError::MissingToken),
        }
    }

    pub async fn list<E: Entity>(&self, token: &str) -> Result<Vec<E>, ApiError> {
        let resp = self
            .http
            .get(&self.data_url)
            .query(&[("entity", E::NAME)])
            .header(AUTH_HEADER, token)
            .send()
            .await?;
        records(read_json(resp).await?)
    }

    /// Read-only listing used by the landing page; no token is sent.
    pub async fn public_list<E: Entity>(&self) -> Result<Vec<E>, ApiError> {
        let resp = self
            .http
            .get(&self.public_url)
            .query(&[("entity", E::NAME)])
            .send()
            .await?;
        records(read_json(resp).await?)
    }

    /// POST for new records, PUT with `id` otherwise. Returns the id the server reports, if any.
    pub async fn save<E: Entity>(
        &self,
        token: &str,
        record: &E,
        is_new: bool,
    ) -> Result<Option<i64>, ApiError> {
        if is_new {
            return self.create(token, record).await;
        }
        let id = record
            .id()
            .ok_or_else(|| ApiError::Rejected(format!("{} без id нельзя обновить", E::NAME)))?;
        self.update(token, id, record).await?;
        Ok(Some(id))
    }

    pub async fn create<E: Entity>(&self, token: &str, record: &E) -> Result<Option<i64>, ApiError> {
        let resp = self
            .http
            .post(&self.data_url)
            .query(&[("entity", E::NAME)])
            .header(AUTH_HEADER, token)
            .json(record)
            .send()
            .await?;
        let body = success_body(resp).await?;
        // Запись уже создана: без id в ответе просто перечитываем списки
        let id = serde_json::from_slice::<CreatedResponse>(&body)
            .ok()
            .and_then(|created| created.id);
        if id.is_none() {
            log::debug!("create of {} answered without an id", E::NAME);
        }
        Ok(id)
    }

    pub async fn update<E: Entity>(&self, token: &str, id: i64, record: &E) -> Result<(), ApiError> {
        let resp = self
            .http
            .put(&self.data_url)
            .query(&[("entity", E::NAME.to_string()), ("id", id.to_string())])
            .header(AUTH_HEADER, token)
            .json(record)
            .send()
            .await?;
        success_body(resp).await?;
        Ok(())
    }

    /// Success needs both a 2xx status and `"success": true` in the body.
    pub async fn submit_booking(&self, request: &BookingRequest) -> Result<(), ApiError> {
        let resp = self.http.post(&self.booking_url).json(request).send().await?;
        let body: BookingResponse = read_json(resp).await?;
        if body.success {
            Ok(())
        } else {
            Err(ApiError::Rejected(
                body.error.unwrap_or_else(|| "заявка не принята".to_string()),
            ))
        }
    }
}

async fn success_body(resp: Response) -> Result<Vec<u8>, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    Ok(resp.bytes().await?.to_vec())
}

async fn read_json<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let bytes = success_body(resp).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

// Не массив: считаем пустым списком
fn records<E: Entity>(value: Value) -> Result<Vec<E>, ApiError> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(ApiError::from))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Teacher;
    use serde_json::json;

    #[test]
    fn non_array_body_is_empty() {
        let teachers: Vec<Teacher> = records(json!({ "error": "nope" })).unwrap();
        assert!(teachers.is_empty());
    }

    #[test]
    fn malformed_record_is_decode_error() {
        let result: Result<Vec<Teacher>, _> = records(json!([{ "id": "x" }]));
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
