// crates/db/src/analytics.rs
//! Derived training analytics over the session store.
//!
//! This module implements:
//! - Monday-anchored week bounds
//! - The fixed analytics bundle (weekly counts, rest-day streak,
//!   pain-flag frequencies, performance/productivity trends)
//!
//! `get_analytics` takes the reference date as a parameter so every window
//! is computable for a fixed "today" in tests; the HTTP layer passes the
//! current calendar date. Each component query runs independently — there is
//! no snapshot isolation across them.

use crate::{Database, DbResult};
use chrono::{Datelike, Duration, NaiveDate};
use cruxlog_core::Session;
use serde::Serialize;
use std::collections::HashSet;
use ts_rs::TS;

/// How far back the rest-day streak walk looks. Streaks longer than this
/// are reported as the cap, a documented boundary of the metric.
const STREAK_LOOKBACK_DAYS: i64 = 365;

/// The Monday on or before the given date.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn performance_score(value: &str) -> i64 {
    match value {
        "weak" => 1,
        "normal" => 2,
        "strong" => 3,
        // Out-of-vocabulary historical data maps to the middle of the scale
        // rather than failing the request.
        _ => 2,
    }
}

fn productivity_score(value: &str) -> i64 {
    match value {
        "low" => 1,
        "normal" => 2,
        "high" => 3,
        _ => 2,
    }
}

/// Distinct-session count for one injury location within a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../../../frontend/src/api/generated/")]
#[serde(rename_all = "camelCase")]
pub struct PainFlagCount {
    pub location: String,
    #[ts(type = "number")]
    pub count: i64,
}

/// Distinct session-dates in one ISO week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../../../frontend/src/api/generated/")]
#[serde(rename_all = "camelCase")]
pub struct WeeklySessionCount {
    #[ts(type = "string")]
    pub week_start: NaiveDate,
    #[ts(type = "number")]
    pub count: i64,
}

/// Mean of a 1..=3 scale over one ISO week's sessions.
/// `average` is `None` for a week with no sessions — never 0.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../../../frontend/src/api/generated/")]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTrendPoint {
    #[ts(type = "string")]
    pub week_start: NaiveDate,
    pub average: Option<f64>,
}

/// The full analytics bundle, computed fresh per request.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../../../frontend/src/api/generated/")]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsBundle {
    #[ts(type = "number")]
    pub sessions_this_week: i64,
    #[ts(type = "number")]
    pub hard_sessions_last7_days: i64,
    #[ts(type = "number")]
    pub days_since_last_rest_day: i64,
    pub pain_flags_last30_days: Vec<PainFlagCount>,
    pub weekly_session_counts: Vec<WeeklySessionCount>,
    pub performance_trend: Vec<WeeklyTrendPoint>,
    pub productivity_trend: Vec<WeeklyTrendPoint>,
}

impl Database {
    /// Count of sessions whose date falls in the inclusive range.
    pub async fn count_sessions_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DbResult<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM sessions WHERE date >= ?1 AND date <= ?2")
                .bind(start)
                .bind(end)
                .fetch_one(self.pool())
                .await?;
        Ok(count)
    }

    /// Count of sessions with the given intensity in the inclusive range.
    pub async fn count_sessions_by_intensity_between(
        &self,
        intensity: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DbResult<i64> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sessions WHERE intensity = ?1 AND date >= ?2 AND date <= ?3",
        )
        .bind(intensity)
        .bind(start)
        .bind(end)
        .fetch_one(self.pool())
        .await?;
        Ok(count)
    }

    /// Distinct dates with at least one session, newest first.
    pub async fn distinct_session_dates_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DbResult<Vec<NaiveDate>> {
        let rows: Vec<(NaiveDate,)> = sqlx::query_as(
            "SELECT DISTINCT date FROM sessions WHERE date >= ?1 AND date <= ?2 ORDER BY date DESC",
        )
        .bind(start)
        .bind(end)
        .fetch_all(self.pool())
        .await?;
        Ok(rows.into_iter().map(|(d,)| d).collect())
    }

    /// Per injury location, the number of DISTINCT sessions in the range
    /// listing it. A session listing the same location twice counts once.
    /// Ordered by location — grouped-query order is backend-dependent
    /// otherwise.
    pub async fn pain_flag_counts_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DbResult<Vec<PainFlagCount>> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT i.location, COUNT(DISTINCT i.session_id)
            FROM session_injuries i
            JOIN sessions s ON s.id = i.session_id
            WHERE s.date >= ?1 AND s.date <= ?2
            GROUP BY i.location
            ORDER BY i.location
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(self.pool())
        .await?;
        Ok(rows
            .into_iter()
            .map(|(location, count)| PainFlagCount { location, count })
            .collect())
    }

    /// Compute the full analytics bundle for the given reference date.
    pub async fn get_analytics(&self, today: NaiveDate) -> DbResult<AnalyticsBundle> {
        let current_week_start = week_start(today);
        let current_week_end = current_week_start + Duration::days(6);

        let sessions_this_week = self
            .count_sessions_between(current_week_start, current_week_end)
            .await?;

        let hard_sessions_last7_days = self
            .count_sessions_by_intensity_between("hard", today - Duration::days(6), today)
            .await?;

        let lookback_start = today - Duration::days(STREAK_LOOKBACK_DAYS);
        let streak_dates: HashSet<NaiveDate> = self
            .distinct_session_dates_between(lookback_start, today)
            .await?
            .into_iter()
            .collect();
        let days_since_last_rest_day = rest_day_streak(today, lookback_start, &streak_dates);

        let pain_flags_last30_days = self
            .pain_flag_counts_between(today - Duration::days(29), today)
            .await?;

        // Eight-week window shared by the weekly counts and both trends.
        let window_start = current_week_start - Duration::weeks(7);
        let window_dates = self
            .distinct_session_dates_between(window_start, current_week_end)
            .await?;
        let weekly_session_counts = weekly_session_counts(today, &window_dates);

        let window_sessions = self
            .list_sessions_between(window_start, current_week_end)
            .await?;
        let performance_trend =
            weekly_trend(&window_sessions, today, |s| performance_score(&s.performance));
        let productivity_trend =
            weekly_trend(&window_sessions, today, |s| productivity_score(&s.productivity));

        Ok(AnalyticsBundle {
            sessions_this_week,
            hard_sessions_last7_days,
            days_since_last_rest_day,
            pain_flags_last30_days,
            weekly_session_counts,
            performance_trend,
            productivity_trend,
        })
    }
}

/// Length of the unbroken run of session-days ending at `today`.
///
/// Walks backward one day at a time; stops at the first day with no session,
/// or at the lookback boundary. A rest day today means 0.
fn rest_day_streak(
    today: NaiveDate,
    lookback_start: NaiveDate,
    session_dates: &HashSet<NaiveDate>,
) -> i64 {
    let mut days = 0;
    let mut check_date = today;
    while check_date > lookback_start {
        if !session_dates.contains(&check_date) {
            return days;
        }
        days += 1;
        check_date -= Duration::days(1);
    }
    days
}

/// Eight `(weekStart, count)` entries, oldest first, counting distinct
/// session-dates per week.
fn weekly_session_counts(today: NaiveDate, session_dates: &[NaiveDate]) -> Vec<WeeklySessionCount> {
    let current_week_start = week_start(today);

    (0..8)
        .rev()
        .map(|i| {
            let ws = current_week_start - Duration::weeks(i);
            let we = ws + Duration::days(6);
            let count = session_dates.iter().filter(|d| **d >= ws && **d <= we).count() as i64;
            WeeklySessionCount {
                week_start: ws,
                count,
            }
        })
        .collect()
}

/// Eight weekly averages of a per-session score, oldest first. Weeks with no
/// sessions report `None`.
fn weekly_trend(
    sessions: &[Session],
    today: NaiveDate,
    score: impl Fn(&Session) -> i64,
) -> Vec<WeeklyTrendPoint> {
    let current_week_start = week_start(today);

    (0..8)
        .rev()
        .map(|i| {
            let ws = current_week_start - Duration::weeks(i);
            let we = ws + Duration::days(6);
            let scores: Vec<i64> = sessions
                .iter()
                .filter(|s| s.date >= ws && s.date <= we)
                .map(&score)
                .collect();
            let average = if scores.is_empty() {
                None
            } else {
                Some(scores.iter().sum::<i64>() as f64 / scores.len() as f64)
            };
            WeeklyTrendPoint {
                week_start: ws,
                average,
            }
        })
        .collect()
}
