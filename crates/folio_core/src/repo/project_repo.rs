//! Project store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the single `fetch_published_projects` read.
//! - Map store failures into one `StoreUnavailable` error.
//!
//! # Invariants
//! - Stores never write; project rows are maintained outside this crate.
//! - Returned records come from one snapshot read.

use crate::config::ConfigError;
use crate::db::DbError;
use crate::model::project::ProjectRecord;
use log::warn;
use rusqlite::{Connection, Row};
use serde_json::{Map, Value};
use std::fmt::Display;

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Network, auth or backend failure while reading.
    #[error("project store `{backend}` unavailable: {reason}")]
    StoreUnavailable {
        backend: &'static str,
        reason: String,
    },
    #[error(transparent)]
    Db(#[from] DbError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl RepoError {
    pub fn unavailable(backend: &'static str, reason: impl Display) -> Self {
        Self::StoreUnavailable {
            backend,
            reason: reason.to_string(),
        }
    }

    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable { .. })
    }
}

/// Read-only access to published project records.
pub trait ProjectStore {
    /// Short backend name used in logs and errors.
    fn backend_name(&self) -> &'static str;

    /// Reads every record flagged published.
    ///
    /// Order is backend-defined; services apply the listing order.
    fn fetch_published_projects(&self) -> RepoResult<Vec<ProjectRecord>>;
}

impl<T: ProjectStore + ?Sized> ProjectStore for &T {
    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }

    fn fetch_published_projects(&self) -> RepoResult<Vec<ProjectRecord>> {
        (**self).fetch_published_projects()
    }
}

const SQLITE_BACKEND: &str = "sqlite";

const PUBLISHED_SELECT_SQL: &str = "SELECT id, created_at, document
FROM projects
WHERE is_published = 1
ORDER BY created_at DESC, id ASC;";

/// SQLite-backed project store over the `projects` document table.
pub struct SqliteProjectStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectStore<'conn> {
    /// Wraps a connection returned by `db::open_db` (migrations applied).
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProjectStore for SqliteProjectStore<'_> {
    fn backend_name(&self) -> &'static str {
        SQLITE_BACKEND
    }

    fn fetch_published_projects(&self) -> RepoResult<Vec<ProjectRecord>> {
        let unavailable = |err: rusqlite::Error| RepoError::unavailable(SQLITE_BACKEND, err);

        let mut stmt = self.conn.prepare(PUBLISHED_SELECT_SQL).map_err(unavailable)?;
        let mut rows = stmt.query([]).map_err(unavailable)?;
        let mut records = Vec::new();

        while let Some(row) = rows.next().map_err(unavailable)? {
            records.push(parse_project_row(row).map_err(unavailable)?);
        }

        Ok(records)
    }
}

fn parse_project_row(row: &Row<'_>) -> rusqlite::Result<ProjectRecord> {
    let id: String = row.get("id")?;
    let created_at: Option<i64> = row.get("created_at")?;
    let document: String = row.get("document")?;

    let fields = match serde_json::from_str::<Value>(&document) {
        Ok(Value::Object(fields)) => fields,
        Ok(_) | Err(_) => {
            warn!(
                "event=record_decode module=repo backend={SQLITE_BACKEND} status=degraded id={id} reason=document_not_object"
            );
            Map::new()
        }
    };

    let mut record = ProjectRecord::from_document(id, &fields);
    record.is_published = true;
    if record.created_at.is_none() {
        record.created_at = created_at;
    }
    Ok(record)
}
