// crates/core/src/lib.rs
//! Domain model and validation for the cruxlog training log.
//!
//! Pure data types and validation rules — no I/O. Persistence lives in
//! `cruxlog-db`, the HTTP surface in `cruxlog-server`.

pub mod model;
pub mod validate;

pub use model::{CoachInsight, Injury, InjuryDraft, InsightDraft, Session, SessionDraft};
pub use validate::{
    validate_insight, validate_session, FieldError, INTENSITIES, PERFORMANCES, PRODUCTIVITIES,
    SESSION_TYPES,
};
