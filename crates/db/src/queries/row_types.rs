// crates/db/src/queries/row_types.rs
// Internal row types mapped into the domain structs from cruxlog-core.

use crate::DbResult;
use chrono::{DateTime, NaiveDate, Utc};
use cruxlog_core::{CoachInsight, Injury, Session};
use sqlx::Row;
use std::collections::BTreeSet;
use uuid::Uuid;

#[derive(Debug)]
pub(crate) struct SessionRow {
    pub(crate) id: String,
    date: NaiveDate,
    intensity: String,
    performance: String,
    productivity: String,
    duration_minutes: Option<i64>,
    notes: Option<String>,
    max_grade: Option<String>,
    hard_attempts: Option<i64>,
    venue: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for SessionRow {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            date: row.try_get("date")?,
            intensity: row.try_get("intensity")?,
            performance: row.try_get("performance")?,
            productivity: row.try_get("productivity")?,
            duration_minutes: row.try_get("duration_minutes")?,
            notes: row.try_get("notes")?,
            max_grade: row.try_get("max_grade")?,
            hard_attempts: row.try_get("hard_attempts")?,
            venue: row.try_get("venue")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl SessionRow {
    pub(crate) fn into_session(
        self,
        types: BTreeSet<String>,
        injuries: Vec<Injury>,
    ) -> DbResult<Session> {
        Ok(Session {
            id: Uuid::parse_str(&self.id)?,
            date: self.date,
            types,
            intensity: self.intensity,
            performance: self.performance,
            productivity: self.productivity,
            duration_minutes: self.duration_minutes,
            notes: self.notes,
            max_grade: self.max_grade,
            hard_attempts: self.hard_attempts,
            venue: self.venue,
            injuries,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug)]
pub(crate) struct InjuryRow {
    id: String,
    pub(crate) session_id: String,
    location: String,
    note: Option<String>,
    severity: Option<i64>,
}

impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for InjuryRow {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            session_id: row.try_get("session_id")?,
            location: row.try_get("location")?,
            note: row.try_get("note")?,
            severity: row.try_get("severity")?,
        })
    }
}

impl InjuryRow {
    pub(crate) fn into_injury(self) -> DbResult<Injury> {
        Ok(Injury {
            id: Uuid::parse_str(&self.id)?,
            location: self.location,
            note: self.note,
            severity: self.severity,
        })
    }
}

#[derive(Debug)]
pub(crate) struct InsightRow {
    id: String,
    content: String,
    pinned: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for InsightRow {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            content: row.try_get("content")?,
            pinned: row.try_get("pinned")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl InsightRow {
    pub(crate) fn into_insight(self) -> DbResult<CoachInsight> {
        Ok(CoachInsight {
            id: Uuid::parse_str(&self.id)?,
            content: self.content,
            pinned: self.pinned,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
