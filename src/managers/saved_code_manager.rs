//! Saved-code history manager for ScanKit.
//!
//! Implements `SavedCodeStore` — CRUD operations for the per-user history
//! of scanned/generated codes, backed by SQLite via `rusqlite`. The codec
//! supplies the `data`/`kind`/`title` triple (see
//! [`crate::types::payload::ParsedCode::storage_kind`]); this layer owns
//! ids, timestamps and ordering.

use rusqlite::{params, Connection};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::types::errors::StorageError;
use crate::types::saved::{SavedCode, SavedKind};

/// Trait defining saved-code history operations.
pub trait SavedCodeStore {
    fn save(
        &mut self,
        user_id: &str,
        data: &str,
        kind: SavedKind,
        title: Option<&str>,
    ) -> Result<String, StorageError>;
    fn get(&self, id: &str) -> Result<SavedCode, StorageError>;
    /// Paginated listing, newest first. Returns (codes, total_count).
    fn list(
        &self,
        user_id: Option<&str>,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<SavedCode>, i64), StorageError>;
    fn rename(&mut self, id: &str, title: &str) -> Result<(), StorageError>;
    fn delete(&mut self, id: &str) -> Result<(), StorageError>;
}

/// Saved-code manager backed by a SQLite connection.
pub struct SavedCodeManager<'a> {
    conn: &'a Connection,
}

impl<'a> SavedCodeManager<'a> {
    /// Creates a new `SavedCodeManager` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Reads a single `SavedCode` row into a struct.
    fn row_to_saved_code(row: &rusqlite::Row) -> rusqlite::Result<SavedCode> {
        let kind: String = row.get(3)?;
        Ok(SavedCode {
            id: row.get(0)?,
            user_id: row.get(1)?,
            data: row.get(2)?,
            kind: SavedKind::from_column(&kind),
            title: row.get(4)?,
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    }
}

impl<'a> SavedCodeStore for SavedCodeManager<'a> {
    /// Saves a code to the history. Returns the generated record ID.
    fn save(
        &mut self,
        user_id: &str,
        data: &str,
        kind: SavedKind,
        title: Option<&str>,
    ) -> Result<String, StorageError> {
        let id = Uuid::new_v4().to_string();
        let now = Self::now();

        self.conn
            .execute(
                "INSERT INTO saved_codes (id, user_id, data, kind, title, created_at, updated_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![id, user_id, data, kind.as_str(), title, now, now],
            )
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;

        Ok(id)
    }

    /// Fetches a single saved code by ID.
    fn get(&self, id: &str) -> Result<SavedCode, StorageError> {
        self.conn
            .query_row(
                "SELECT id, user_id, data, kind, title, created_at, updated_at \
                 FROM saved_codes WHERE id = ?1",
                params![id],
                Self::row_to_saved_code,
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => StorageError::NotFound(id.to_string()),
                other => StorageError::DatabaseError(other.to_string()),
            })
    }

    /// Lists saved codes newest first, optionally filtered by user.
    ///
    /// `page` is zero-based; the offset is `page * limit`. The rowid
    /// tiebreak keeps ordering stable for codes saved in the same second.
    fn list(
        &self,
        user_id: Option<&str>,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<SavedCode>, i64), StorageError> {
        let offset = page * limit;

        let total: i64 = match user_id {
            Some(uid) => self.conn.query_row(
                "SELECT COUNT(*) FROM saved_codes WHERE user_id = ?1",
                params![uid],
                |row| row.get(0),
            ),
            None => self
                .conn
                .query_row("SELECT COUNT(*) FROM saved_codes", [], |row| row.get(0)),
        }
        .map_err(|e| StorageError::DatabaseError(e.to_string()))?;

        let mut stmt = match user_id {
            Some(_) => self.conn.prepare(
                "SELECT id, user_id, data, kind, title, created_at, updated_at \
                 FROM saved_codes WHERE user_id = ?1 \
                 ORDER BY created_at DESC, rowid DESC LIMIT ?2 OFFSET ?3",
            ),
            None => self.conn.prepare(
                "SELECT id, user_id, data, kind, title, created_at, updated_at \
                 FROM saved_codes ORDER BY created_at DESC, rowid DESC LIMIT ?1 OFFSET ?2",
            ),
        }
        .map_err(|e| StorageError::DatabaseError(e.to_string()))?;

        let rows = match user_id {
            Some(uid) => stmt.query_map(params![uid, limit, offset], Self::row_to_saved_code),
            None => stmt.query_map(params![limit, offset], Self::row_to_saved_code),
        }
        .map_err(|e| StorageError::DatabaseError(e.to_string()))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| StorageError::DatabaseError(e.to_string()))?);
        }
        Ok((results, total))
    }

    /// Updates the title of an existing saved code.
    fn rename(&mut self, id: &str, title: &str) -> Result<(), StorageError> {
        let now = Self::now();
        let affected = self
            .conn
            .execute(
                "UPDATE saved_codes SET title = ?1, updated_at = ?2 WHERE id = ?3",
                params![title, now, id],
            )
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;

        if affected == 0 {
            return Err(StorageError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Deletes a saved code by ID.
    fn delete(&mut self, id: &str) -> Result<(), StorageError> {
        let affected = self
            .conn
            .execute("DELETE FROM saved_codes WHERE id = ?1", params![id])
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;

        if affected == 0 {
            return Err(StorageError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
