// crates/db/src/queries/mod.rs
// Store operations for the cruxlog SQLite database.

pub(crate) mod row_types;

mod insights;
mod lookups;
mod sessions;
