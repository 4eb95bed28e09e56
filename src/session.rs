//! Admin session: a bearer token kept in memory and mirrored to durable key/value storage.

use std::collections::HashMap;
use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::ApiError;

pub const TOKEN_KEY: &str = "adminToken";

pub trait TokenStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ApiError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), ApiError>;
    fn remove(&mut self, key: &str) -> Result<(), ApiError>;
}

/// Key/value table in a local SQLite file.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        Self::with_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, ApiError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, ApiError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS storage (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
            [],
        )?;
        Ok(SqliteStorage { conn })
    }
}

impl TokenStorage for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ApiError> {
        let value = self
            .conn
            .query_row("SELECT value FROM storage WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ApiError> {
        self.conn.execute(
            "INSERT INTO storage (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), ApiError> {
        self.conn
            .execute("DELETE FROM storage WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl TokenStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ApiError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ApiError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), ApiError> {
        self.values.remove(key);
        Ok(())
    }
}

pub struct AuthSession {
    storage: Box<dyn TokenStorage>,
    token: Option<String>,
}

impl AuthSession {
    pub fn new(storage: Box<dyn TokenStorage>) -> Self {
        AuthSession {
            storage,
            token: None,
        }
    }

    /// Picks up a previously persisted token. The token is not checked against the server.
    pub fn restore(&mut self) -> Option<&str> {
        match self.storage.get(TOKEN_KEY) {
            Ok(Some(token)) if !token.is_empty() => {
                log::info!("restored admin session from storage");
                self.token = Some(token);
            }
            Ok(_) => {}
            Err(e) => log::warn!("failed to read stored token: {}", e),
        }
        self.token.as_deref()
    }

    /// Persists a token obtained from the auth endpoint and makes it current.
    pub fn accept(&mut self, token: String) -> Result<(), ApiError> {
        if token.is_empty() {
            return Err(ApiError::MissingToken);
        }
        self.storage.set(TOKEN_KEY, &token)?;
        self.token = Some(token);
        Ok(())
    }

    pub fn logout(&mut self) {
        if let Err(e) = self.storage.remove(TOKEN_KEY) {
            log::warn!("failed to clear stored token: {}", e);
        }
        self.token = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
