// crates/db/src/queries/sessions.rs
// Session store: CRUD plus the date-range reads used by analytics.
//
// A session owns its type tags and injuries; every write touches all three
// tables inside one transaction so a store call is atomic. Vocabulary
// validation happens in cruxlog-core before any of these are called.

use crate::{Database, DbResult};
use chrono::{NaiveDate, Utc};
use cruxlog_core::{Injury, Session, SessionDraft};
use std::collections::{BTreeSet, HashMap};
use uuid::Uuid;

use super::row_types::{InjuryRow, SessionRow};

impl Database {
    /// Persist a new session, assigning its id and timestamps.
    pub async fn create_session(&self, draft: &SessionDraft) -> DbResult<Session> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let mut tx = self.pool().begin().await?;

        sqlx::query(
            r#"
            INSERT INTO sessions (
                id, date, intensity, performance, productivity,
                duration_minutes, notes, max_grade, hard_attempts, venue,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            "#,
        )
        .bind(id.to_string())
        .bind(draft.date)
        .bind(&draft.intensity)
        .bind(&draft.performance)
        .bind(&draft.productivity)
        .bind(draft.duration_minutes)
        .bind(&draft.notes)
        .bind(&draft.max_grade)
        .bind(draft.hard_attempts)
        .bind(&draft.venue)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        let injuries = insert_children(&mut tx, &id.to_string(), draft).await?;
        tx.commit().await?;

        Ok(Session {
            id,
            date: draft.date,
            types: draft.types.clone(),
            intensity: draft.intensity.clone(),
            performance: draft.performance.clone(),
            productivity: draft.productivity.clone(),
            duration_minutes: draft.duration_minutes,
            notes: draft.notes.clone(),
            max_grade: draft.max_grade.clone(),
            hard_attempts: draft.hard_attempts,
            venue: draft.venue.clone(),
            injuries,
            created_at: now,
            updated_at: now,
        })
    }

    /// Fetch a single session with its type tags and injuries.
    pub async fn get_session(&self, id: Uuid) -> DbResult<Option<Session>> {
        let row: Option<SessionRow> = sqlx::query_as(
            r#"
            SELECT id, date, intensity, performance, productivity,
                   duration_minutes, notes, max_grade, hard_attempts, venue,
                   created_at, updated_at
            FROM sessions WHERE id = ?1
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.pool())
        .await?;

        let Some(row) = row else { return Ok(None) };

        let types: Vec<(String,)> =
            sqlx::query_as("SELECT type FROM session_types WHERE session_id = ?1")
                .bind(id.to_string())
                .fetch_all(self.pool())
                .await?;
        let types: BTreeSet<String> = types.into_iter().map(|(t,)| t).collect();

        let injury_rows: Vec<InjuryRow> = sqlx::query_as(
            r#"
            SELECT id, session_id, location, note, severity
            FROM session_injuries WHERE session_id = ?1 ORDER BY rowid
            "#,
        )
        .bind(id.to_string())
        .fetch_all(self.pool())
        .await?;
        let injuries = injury_rows
            .into_iter()
            .map(InjuryRow::into_injury)
            .collect::<DbResult<Vec<_>>>()?;

        Ok(Some(row.into_session(types, injuries)?))
    }

    /// List all sessions, most recent date first.
    pub async fn list_sessions(&self) -> DbResult<Vec<Session>> {
        let rows: Vec<SessionRow> = sqlx::query_as(
            r#"
            SELECT id, date, intensity, performance, productivity,
                   duration_minutes, notes, max_grade, hard_attempts, venue,
                   created_at, updated_at
            FROM sessions ORDER BY date DESC, created_at DESC
            "#,
        )
        .fetch_all(self.pool())
        .await?;

        let type_rows: Vec<(String, String)> =
            sqlx::query_as("SELECT session_id, type FROM session_types")
                .fetch_all(self.pool())
                .await?;

        let injury_rows: Vec<InjuryRow> = sqlx::query_as(
            "SELECT id, session_id, location, note, severity FROM session_injuries ORDER BY rowid",
        )
        .fetch_all(self.pool())
        .await?;

        assemble_sessions(rows, type_rows, injury_rows)
    }

    /// List all sessions whose date falls in the inclusive `[start, end]`
    /// range. Used for trend computation.
    pub async fn list_sessions_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DbResult<Vec<Session>> {
        let rows: Vec<SessionRow> = sqlx::query_as(
            r#"
            SELECT id, date, intensity, performance, productivity,
                   duration_minutes, notes, max_grade, hard_attempts, venue,
                   created_at, updated_at
            FROM sessions
            WHERE date >= ?1 AND date <= ?2
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(self.pool())
        .await?;

        let type_rows: Vec<(String, String)> = sqlx::query_as(
            r#"
            SELECT t.session_id, t.type
            FROM session_types t
            JOIN sessions s ON s.id = t.session_id
            WHERE s.date >= ?1 AND s.date <= ?2
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(self.pool())
        .await?;

        let injury_rows: Vec<InjuryRow> = sqlx::query_as(
            r#"
            SELECT i.id, i.session_id, i.location, i.note, i.severity
            FROM session_injuries i
            JOIN sessions s ON s.id = i.session_id
            WHERE s.date >= ?1 AND s.date <= ?2
            ORDER BY i.rowid
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(self.pool())
        .await?;

        assemble_sessions(rows, type_rows, injury_rows)
    }

    /// Full-replace update of all mutable fields, including the owned type
    /// tags and injuries. Returns `None` if the id does not exist.
    /// `created_at` is preserved, `updated_at` refreshed.
    pub async fn update_session(
        &self,
        id: Uuid,
        draft: &SessionDraft,
    ) -> DbResult<Option<Session>> {
        let now = Utc::now();

        let mut tx = self.pool().begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE sessions SET
                date = ?1, intensity = ?2, performance = ?3, productivity = ?4,
                duration_minutes = ?5, notes = ?6, max_grade = ?7,
                hard_attempts = ?8, venue = ?9, updated_at = ?10
            WHERE id = ?11
            "#,
        )
        .bind(draft.date)
        .bind(&draft.intensity)
        .bind(&draft.performance)
        .bind(&draft.productivity)
        .bind(draft.duration_minutes)
        .bind(&draft.notes)
        .bind(&draft.max_grade)
        .bind(draft.hard_attempts)
        .bind(&draft.venue)
        .bind(now)
        .bind(id.to_string())
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        sqlx::query("DELETE FROM session_types WHERE session_id = ?1")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM session_injuries WHERE session_id = ?1")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await?;

        insert_children(&mut tx, &id.to_string(), draft).await?;
        tx.commit().await?;

        self.get_session(id).await
    }

    /// Delete a session and its owned rows. Returns whether it existed.
    pub async fn delete_session(&self, id: Uuid) -> DbResult<bool> {
        let mut tx = self.pool().begin().await?;

        sqlx::query("DELETE FROM session_types WHERE session_id = ?1")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM session_injuries WHERE session_id = ?1")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM sessions WHERE id = ?1")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Insert type tags and injuries for a session inside an open transaction.
async fn insert_children(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    session_id: &str,
    draft: &SessionDraft,
) -> DbResult<Vec<Injury>> {
    for t in &draft.types {
        sqlx::query("INSERT INTO session_types (session_id, type) VALUES (?1, ?2)")
            .bind(session_id)
            .bind(t)
            .execute(&mut **tx)
            .await?;
    }

    let mut injuries = Vec::with_capacity(draft.injuries.len());
    for injury in &draft.injuries {
        let injury_id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO session_injuries (id, session_id, location, note, severity)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(injury_id.to_string())
        .bind(session_id)
        .bind(&injury.location)
        .bind(&injury.note)
        .bind(injury.severity)
        .execute(&mut **tx)
        .await?;
        injuries.push(Injury {
            id: injury_id,
            location: injury.location.clone(),
            note: injury.note.clone(),
            severity: injury.severity,
        });
    }

    Ok(injuries)
}

/// Join child rows onto their parent sessions, preserving the row order of
/// the sessions query.
fn assemble_sessions(
    rows: Vec<SessionRow>,
    type_rows: Vec<(String, String)>,
    injury_rows: Vec<InjuryRow>,
) -> DbResult<Vec<Session>> {
    let mut types_by_session: HashMap<String, BTreeSet<String>> = HashMap::new();
    for (session_id, t) in type_rows {
        types_by_session.entry(session_id).or_default().insert(t);
    }

    let mut injuries_by_session: HashMap<String, Vec<Injury>> = HashMap::new();
    for row in injury_rows {
        let session_id = row.session_id.clone();
        injuries_by_session
            .entry(session_id)
            .or_default()
            .push(row.into_injury()?);
    }

    rows.into_iter()
        .map(|row| {
            let types = types_by_session.remove(&row.id).unwrap_or_default();
            let injuries = injuries_by_session.remove(&row.id).unwrap_or_default();
            row.into_session(types, injuries)
        })
        .collect()
}
