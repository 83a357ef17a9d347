//! Read-only inspection endpoints: a raw dump of every table and an HTML
//! page describing one user-day.

pub mod handlers;
mod render;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::debug_routes()
}
