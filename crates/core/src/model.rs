// crates/core/src/model.rs
//! Value structs for sessions, injuries, and coaching insights.
//!
//! `Session`/`CoachInsight` are the persisted representations returned by the
//! API; the `*Draft` forms carry the client-supplied mutable fields for
//! create and full-replace update. Ids and timestamps are always assigned
//! server-side.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use ts_rs::TS;
use uuid::Uuid;

/// An injury (pain flag) recorded against a single session.
///
/// Owned by its parent session: replaced wholesale on update, deleted with
/// the parent. Severity follows the 1..=5 scale (tweak..severe).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../../frontend/src/api/generated/")]
#[serde(rename_all = "camelCase")]
pub struct Injury {
    #[ts(type = "string")]
    pub id: Uuid,
    pub location: String,
    pub note: Option<String>,
    #[ts(type = "number | null")]
    pub severity: Option<i64>,
}

/// One recorded climbing/training session for a single calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../../frontend/src/api/generated/")]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[ts(type = "string")]
    pub id: Uuid,
    /// Calendar day, no time component.
    #[ts(type = "string")]
    pub date: NaiveDate,
    /// Session type tags. Non-empty, each drawn from [`crate::SESSION_TYPES`].
    pub types: BTreeSet<String>,
    pub intensity: String,
    pub performance: String,
    pub productivity: String,
    #[ts(type = "number | null")]
    pub duration_minutes: Option<i64>,
    pub notes: Option<String>,
    pub max_grade: Option<String>,
    #[ts(type = "number | null")]
    pub hard_attempts: Option<i64>,
    pub venue: Option<String>,
    pub injuries: Vec<Injury>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied injury fields within a [`SessionDraft`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../../frontend/src/api/generated/")]
#[serde(rename_all = "camelCase")]
pub struct InjuryDraft {
    pub location: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    #[ts(type = "number | null")]
    pub severity: Option<i64>,
}

/// Mutable session fields as submitted on create/update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../../frontend/src/api/generated/")]
#[serde(rename_all = "camelCase")]
pub struct SessionDraft {
    #[ts(type = "string")]
    pub date: NaiveDate,
    #[serde(default)]
    pub types: BTreeSet<String>,
    pub intensity: String,
    pub performance: String,
    pub productivity: String,
    #[serde(default)]
    #[ts(type = "number | null")]
    pub duration_minutes: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub max_grade: Option<String>,
    #[serde(default)]
    #[ts(type = "number | null")]
    pub hard_attempts: Option<i64>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub injuries: Vec<InjuryDraft>,
}

/// A free-text coaching note, optionally pinned for priority display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../../frontend/src/api/generated/")]
#[serde(rename_all = "camelCase")]
pub struct CoachInsight {
    #[ts(type = "string")]
    pub id: Uuid,
    pub content: String,
    pub pinned: bool,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// Mutable insight fields as submitted on create/update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../../frontend/src/api/generated/")]
#[serde(rename_all = "camelCase")]
pub struct InsightDraft {
    pub content: String,
    #[serde(default)]
    pub pinned: bool,
}
