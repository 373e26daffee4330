// crates/core/src/validate.rs
//! Vocabulary and non-blank validation for drafts.
//!
//! Runs before persistence; the store never sees an invalid draft. All
//! violations are collected so a single response can name every bad field.

use crate::model::{InsightDraft, SessionDraft};
use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

/// Allowed session type tags.
pub const SESSION_TYPES: &[&str] = &["boulder", "routes", "board", "hangboard", "strength", "prehab"];

/// Allowed intensity values.
pub const INTENSITIES: &[&str] = &["easy", "moderate", "hard"];

/// Allowed performance values.
pub const PERFORMANCES: &[&str] = &["weak", "normal", "strong"];

/// Allowed productivity values.
pub const PRODUCTIVITIES: &[&str] = &["low", "normal", "high"];

/// A single validation violation, naming the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error, TS)]
#[ts(export, export_to = "../../../frontend/src/api/generated/")]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn vocabulary_message(label: &str, value: &str, allowed: &[&str]) -> String {
    format!("Invalid {}: {}. Valid values: {}", label, value, allowed.join(", "))
}

/// Validate a session draft, returning every violation found.
///
/// An empty result means the draft is safe to persist.
pub fn validate_session(draft: &SessionDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if draft.types.is_empty() {
        errors.push(FieldError::new("types", "At least one session type is required"));
    }
    for t in &draft.types {
        if !SESSION_TYPES.contains(&t.as_str()) {
            errors.push(FieldError::new(
                "types",
                format!(
                    "Invalid session type: {}. Valid types: {}",
                    t,
                    SESSION_TYPES.join(", ")
                ),
            ));
        }
    }

    if !INTENSITIES.contains(&draft.intensity.as_str()) {
        errors.push(FieldError::new(
            "intensity",
            vocabulary_message("intensity", &draft.intensity, INTENSITIES),
        ));
    }
    if !PERFORMANCES.contains(&draft.performance.as_str()) {
        errors.push(FieldError::new(
            "performance",
            vocabulary_message("performance", &draft.performance, PERFORMANCES),
        ));
    }
    if !PRODUCTIVITIES.contains(&draft.productivity.as_str()) {
        errors.push(FieldError::new(
            "productivity",
            vocabulary_message("productivity", &draft.productivity, PRODUCTIVITIES),
        ));
    }

    for (i, injury) in draft.injuries.iter().enumerate() {
        if injury.location.trim().is_empty() {
            errors.push(FieldError::new(
                format!("injuries[{}].location", i),
                "Injury location must not be blank",
            ));
        }
        if let Some(severity) = injury.severity {
            if !(1..=5).contains(&severity) {
                errors.push(FieldError::new(
                    format!("injuries[{}].severity", i),
                    "Severity must be between 1 and 5",
                ));
            }
        }
    }

    errors
}

/// Validate an insight draft.
pub fn validate_insight(draft: &InsightDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if draft.content.trim().is_empty() {
        errors.push(FieldError::new("content", "Content must not be blank"));
    }
    errors
}
