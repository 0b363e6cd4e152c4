//! StudyBuddy Session Store
//!
//! SQLite persistence for study sessions. Each record keeps the user's
//! input, the mode, and the generated response; history reads come back
//! newest-first with a small cap. Sessions are written by the client
//! after a successful generation; the generation path itself never
//! touches this store.

use chrono::{DateTime, Utc};
use rusqlite::{params, types::Type, Connection};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, Mutex};
use studybuddy_core::Mode;
use tracing::{debug, info};
use uuid::Uuid;

/// History reads are capped at the ten most recent sessions
pub const SESSION_HISTORY_LIMIT: usize = 10;

/// Titles keep the first 100 characters of the input
const TITLE_MAX_CHARS: usize = 100;

/// Store errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying SQLite failure
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// No session with the given id
    #[error("session not found: {0}")]
    NotFound(String),

    /// Connection mutex poisoned by a panicking holder
    #[error("session store connection poisoned")]
    Poisoned,
}

/// One persisted study session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySession {
    /// Opaque identifier (UUID v4)
    pub id: String,
    /// First 100 characters of the input
    pub title: String,
    /// Mode the response was generated with
    pub session_type: Mode,
    /// Full user input
    pub input_content: String,
    /// Generated response text
    pub ai_response: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields for a new session record
#[derive(Debug, Clone, Deserialize)]
pub struct NewStudySession {
    /// Mode the response was generated with
    pub session_type: Mode,
    /// Full user input
    pub input_content: String,
    /// Generated response text
    pub ai_response: String,
}

/// SQLite-backed session store
pub struct SessionStore {
    /// Database connection, serialized behind a mutex
    connection: Arc<Mutex<Connection>>,
}

impl SessionStore {
    /// Open (or create) the store at the given path
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self, StoreError> {
        let path = db_path.as_ref();
        info!("opening session store at {}", path.display());
        let connection = Connection::open(path)?;
        Self::with_connection(connection)
    }

    /// Open an in-memory store (tests)
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(connection: Connection) -> Result<Self, StoreError> {
        connection.execute_batch(
            "CREATE TABLE IF NOT EXISTS study_sessions (
                id            TEXT PRIMARY KEY NOT NULL,
                title         TEXT NOT NULL,
                session_type  TEXT NOT NULL,
                input_content TEXT NOT NULL,
                ai_response   TEXT NOT NULL,
                created_at    TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_study_sessions_created_at
                ON study_sessions (created_at DESC);",
        )?;
        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    /// Insert a new session and return the stored record
    pub fn insert(&self, new: NewStudySession) -> Result<StudySession, StoreError> {
        let session = StudySession {
            id: Uuid::new_v4().to_string(),
            title: session_title(&new.input_content),
            session_type: new.session_type,
            input_content: new.input_content,
            ai_response: new.ai_response,
            created_at: Utc::now(),
        };

        let connection = self.connection.lock().map_err(|_| StoreError::Poisoned)?;
        connection.execute(
            "INSERT INTO study_sessions
                (id, title, session_type, input_content, ai_response, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                session.id,
                session.title,
                session.session_type.as_str(),
                session.input_content,
                session.ai_response,
                session.created_at.to_rfc3339(),
            ],
        )?;

        debug!("stored session {} ({})", session.id, session.session_type);
        Ok(session)
    }

    /// List the most recent sessions, newest first, capped at
    /// [`SESSION_HISTORY_LIMIT`]
    pub fn list_recent(&self) -> Result<Vec<StudySession>, StoreError> {
        let connection = self.connection.lock().map_err(|_| StoreError::Poisoned)?;
        let mut statement = connection.prepare(
            "SELECT id, title, session_type, input_content, ai_response, created_at
             FROM study_sessions
             ORDER BY created_at DESC, rowid DESC
             LIMIT ?1",
        )?;

        let rows = statement.query_map(params![SESSION_HISTORY_LIMIT as i64], |row| {
            let mode_raw: String = row.get(2)?;
            let session_type = mode_raw.parse::<Mode>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
            })?;
            let created_raw: String = row.get(5)?;
            let created_at = DateTime::parse_from_rfc3339(&created_raw)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
                })?;

            Ok(StudySession {
                id: row.get(0)?,
                title: row.get(1)?,
                session_type,
                input_content: row.get(3)?,
                ai_response: row.get(4)?,
                created_at,
            })
        })?;

        let mut sessions = Vec::new();
        for row in rows {
            sessions.push(row?);
        }
        Ok(sessions)
    }

    /// Delete a session by id
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let connection = self.connection.lock().map_err(|_| StoreError::Poisoned)?;
        let affected = connection.execute("DELETE FROM study_sessions WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        debug!("deleted session {id}");
        Ok(())
    }
}

/// Derive a session title: the first 100 characters of the input,
/// split on a character boundary
fn session_title(input: &str) -> String {
    input.chars().take(TITLE_MAX_CHARS).collect()
}
