pub mod handlers;

use crate::service::QuizService;
use axum::routing::{get, post};
use axum::Router;
use std::sync::{Arc, Mutex};

/// Shared handle to the quiz state. One mutex guards both stores so the
/// register/submit/results operations serialize.
pub type SharedService = Arc<Mutex<QuizService>>;

pub fn shared_service() -> SharedService {
    Arc::new(Mutex::new(QuizService::new()))
}

/// Build the HTTP surface over a shared service handle.
pub fn router(service: SharedService) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/register", post(handlers::register))
        .route("/submit", post(handlers::submit))
        .route("/results", post(handlers::results))
        .with_state(service)
}
