// crates/db/src/queries/lookups.rs
// Distinct-value lookups backing the venue and injury-location pickers.

use crate::{Database, DbResult};

impl Database {
    /// Sorted distinct venue strings, nulls excluded.
    pub async fn distinct_venues(&self) -> DbResult<Vec<String>> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT DISTINCT venue FROM sessions WHERE venue IS NOT NULL ORDER BY venue",
        )
        .fetch_all(self.pool())
        .await?;
        Ok(rows.into_iter().map(|(v,)| v).collect())
    }

    /// Sorted distinct injury-location strings.
    pub async fn distinct_injury_locations(&self) -> DbResult<Vec<String>> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT DISTINCT location FROM session_injuries ORDER BY location")
                .fetch_all(self.pool())
                .await?;
        Ok(rows.into_iter().map(|(l,)| l).collect())
    }
}
