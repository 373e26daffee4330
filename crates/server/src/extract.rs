// crates/server/src/extract.rs
//! Request-body extraction with structured rejection bodies.
//!
//! Axum's stock `Json` rejection is a plain-text response; routing the
//! rejection through [`ApiError`] keeps malformed bodies on the same JSON
//! error contract as vocabulary validation failures.

use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::ApiError;

/// Drop-in replacement for `axum::Json` whose rejection is an [`ApiError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
