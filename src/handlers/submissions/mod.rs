//! Submission recording handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Submission routes, nested under the problems prefix
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/{problem_id}/submissions", post(handler::create_submission))
        .route("/{problem_id}/submissions", get(handler::list_submissions))
}
