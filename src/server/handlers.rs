use super::SharedService;
use crate::error::QuizError;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

// Success bodies returned to the quiz frontend.
const REGISTERED_MSG: &str = "Email registrado com sucesso.";
const SUBMITTED_MSG: &str = "Respostas enviadas com sucesso.";

const LOCK_POISONED_MSG: &str = "Estado interno indisponível.";

// Request fields are Option so an absent field maps to the domain's
// missing-field error instead of a deserializer rejection.

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub email: Option<String>,
    // Untyped so a non-array value reaches the handler and gets the domain
    // error instead of a deserializer rejection.
    pub answers: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct ResultsRequest {
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub registrations: usize,
    pub responses: usize,
}

fn status_for(err: &QuizError) -> StatusCode {
    match err {
        QuizError::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_REQUEST,
    }
}

/// Turn the submitted `answers` value into an answer vector.
///
/// # Errors
///
/// `InvalidAnswerLength` if the value is not an array, `InvalidInput` if an
/// element is not an integer.
fn parse_answers(value: serde_json::Value) -> Result<Vec<i64>, QuizError> {
    let items = match value {
        serde_json::Value::Array(items) => items,
        _ => {
            return Err(QuizError::InvalidAnswerLength {
                expected: crate::quiz::NUM_QUESTIONS,
            })
        }
    };
    items
        .into_iter()
        .map(|item| {
            item.as_i64().ok_or_else(|| {
                QuizError::InvalidInput("respostas devem ser números inteiros".to_string())
            })
        })
        .collect()
}

pub async fn healthz(State(service): State<SharedService>) -> Response {
    let service = match service.lock() {
        Ok(service) => service,
        Err(_) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, LOCK_POISONED_MSG).into_response();
        }
    };
    let health = HealthResponse {
        status: "ok",
        registrations: service.registration_count(),
        responses: service.response_count(),
    };
    (StatusCode::OK, Json(health)).into_response()
}

pub async fn register(
    State(service): State<SharedService>,
    Json(request): Json<RegisterRequest>,
) -> Response {
    let email = request.email.unwrap_or_default();
    let mut service = match service.lock() {
        Ok(service) => service,
        Err(_) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, LOCK_POISONED_MSG).into_response();
        }
    };
    match service.register(&email) {
        Ok(()) => (StatusCode::CREATED, REGISTERED_MSG).into_response(),
        Err(err) => {
            tracing::error!(email = %email, error = %err, "registration rejected");
            (status_for(&err), err.to_string()).into_response()
        }
    }
}

pub async fn submit(
    State(service): State<SharedService>,
    Json(request): Json<SubmitRequest>,
) -> Response {
    let (email, answers_value) = match (request.email, request.answers) {
        (Some(email), Some(answers)) => (email, answers),
        _ => {
            let err = QuizError::MissingField;
            tracing::error!(error = %err, "submission rejected");
            return (status_for(&err), err.to_string()).into_response();
        }
    };
    let answers = match parse_answers(answers_value) {
        Ok(answers) => answers,
        Err(err) => {
            tracing::error!(email = %email, error = %err, "submission rejected");
            return (status_for(&err), err.to_string()).into_response();
        }
    };
    let mut service = match service.lock() {
        Ok(service) => service,
        Err(_) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, LOCK_POISONED_MSG).into_response();
        }
    };
    match service.submit(&email, answers) {
        Ok(()) => (StatusCode::CREATED, SUBMITTED_MSG).into_response(),
        Err(err) => {
            tracing::error!(email = %email, error = %err, "submission rejected");
            (status_for(&err), err.to_string()).into_response()
        }
    }
}

pub async fn results(
    State(service): State<SharedService>,
    Json(request): Json<ResultsRequest>,
) -> Response {
    let email = request.email.unwrap_or_default();
    let service = match service.lock() {
        Ok(service) => service,
        Err(_) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, LOCK_POISONED_MSG).into_response();
        }
    };
    match service.results(&email) {
        Ok(top) => (StatusCode::OK, Json(top)).into_response(),
        Err(err) => {
            tracing::error!(email = %email, error = %err, "results unavailable");
            (status_for(&err), err.to_string()).into_response()
        }
    }
}
