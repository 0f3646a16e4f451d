//! athena-api - Mock academic HTTP API.
//!
//! Stateless routes returning fabricated study payloads: query analysis,
//! math solutions, code review, progress estimates and paper searches.

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

pub use error::ApiError;
pub use routes::{build_router, AppState};
