// crates/db/tests/fixtures.rs
// Shared draft builders for the db integration tests.
#![allow(dead_code)]

use chrono::NaiveDate;
use cruxlog_core::{InjuryDraft, InsightDraft, SessionDraft};
use std::collections::BTreeSet;

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// A minimal valid session draft on the given date.
pub fn draft_on(date: NaiveDate) -> SessionDraft {
    SessionDraft {
        date,
        types: BTreeSet::from(["boulder".to_string()]),
        intensity: "moderate".to_string(),
        performance: "normal".to_string(),
        productivity: "normal".to_string(),
        duration_minutes: None,
        notes: None,
        max_grade: None,
        hard_attempts: None,
        venue: None,
        injuries: vec![],
    }
}

pub fn hard_draft_on(date: NaiveDate) -> SessionDraft {
    SessionDraft {
        intensity: "hard".to_string(),
        ..draft_on(date)
    }
}

/// A draft with one injury per location, no notes or severity.
pub fn injured_draft_on(date: NaiveDate, locations: &[&str]) -> SessionDraft {
    SessionDraft {
        injuries: locations
            .iter()
            .map(|l| InjuryDraft {
                location: (*l).to_string(),
                note: None,
                severity: None,
            })
            .collect(),
        ..draft_on(date)
    }
}

pub fn insight(content: &str, pinned: bool) -> InsightDraft {
    InsightDraft {
        content: content.to_string(),
        pinned,
    }
}
