// crates/db/src/queries/insights.rs
// Insight store: CRUD over coaching notes, pinned-first ordering.

use crate::{Database, DbResult};
use chrono::Utc;
use cruxlog_core::{CoachInsight, InsightDraft};
use uuid::Uuid;

use super::row_types::InsightRow;

impl Database {
    /// Persist a new insight, assigning its id and timestamps.
    pub async fn create_insight(&self, draft: &InsightDraft) -> DbResult<CoachInsight> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO coach_insights (id, content, pinned, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(id.to_string())
        .bind(&draft.content)
        .bind(draft.pinned)
        .bind(now)
        .bind(now)
        .execute(self.pool())
        .await?;

        Ok(CoachInsight {
            id,
            content: draft.content.clone(),
            pinned: draft.pinned,
            created_at: now,
            updated_at: now,
        })
    }

    /// Fetch a single insight.
    pub async fn get_insight(&self, id: Uuid) -> DbResult<Option<CoachInsight>> {
        let row: Option<InsightRow> = sqlx::query_as(
            "SELECT id, content, pinned, created_at, updated_at FROM coach_insights WHERE id = ?1",
        )
        .bind(id.to_string())
        .fetch_optional(self.pool())
        .await?;

        row.map(InsightRow::into_insight).transpose()
    }

    /// List all insights, pinned first, then most recently updated.
    pub async fn list_insights(&self) -> DbResult<Vec<CoachInsight>> {
        let rows: Vec<InsightRow> = sqlx::query_as(
            r#"
            SELECT id, content, pinned, created_at, updated_at
            FROM coach_insights
            ORDER BY pinned DESC, updated_at DESC
            "#,
        )
        .fetch_all(self.pool())
        .await?;

        rows.into_iter().map(InsightRow::into_insight).collect()
    }

    /// Full-replace update of content and pinned flag. Returns `None` if the
    /// id does not exist. `updated_at` is refreshed.
    pub async fn update_insight(
        &self,
        id: Uuid,
        draft: &InsightDraft,
    ) -> DbResult<Option<CoachInsight>> {
        let now = Utc::now();

        let result = sqlx::query(
            "UPDATE coach_insights SET content = ?1, pinned = ?2, updated_at = ?3 WHERE id = ?4",
        )
        .bind(&draft.content)
        .bind(draft.pinned)
        .bind(now)
        .bind(id.to_string())
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_insight(id).await
    }

    /// Delete an insight. Returns whether it existed.
    pub async fn delete_insight(&self, id: Uuid) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM coach_insights WHERE id = ?1")
            .bind(id.to_string())
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
